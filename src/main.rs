// ==========================================
// 铁路装车编组决策支持系统 - 命令行入口
// ==========================================
// 用法:
//   rake-allocation-dss [--config <settings.json>]
//                       [--demo | --json <dataset.json> | --csv-dir <dir>]
//                       [--pretty]
// 结果 JSON 输出到 stdout；运行失败时输出 {"error","message","details"} 并以码 1 退出
// 参数错误由 clap 输出用法说明
// 设置文件路径也可由环境变量 RAKE_DSS_CONFIG 指定
// ==========================================

use clap::{ArgGroup, Parser};
use rake_allocation_dss::api::{ApiError, RakePlannerApi};
use rake_allocation_dss::config::ConfigManager;
use rake_allocation_dss::engine::RuleBasedRiskClassifier;
use rake_allocation_dss::importer::{sample_dataset, CsvDatasetLoader, DatasetLoader};
use rake_allocation_dss::{logging, OptimizeRakesResponse, APP_NAME, VERSION};
use std::path::PathBuf;

/// 铁路装车编组决策支持系统：运行一次车底优化并输出结果 JSON
#[derive(Parser, Debug)]
#[command(name = "rake-allocation-dss", version, about)]
#[command(group(
    ArgGroup::new("source")
        .args(["demo", "json", "csv_dir"])
        .multiple(false)
))]
struct Cli {
    /// 设置文件（{"optimization": {...}, "cost_parameters": {...}}）
    #[arg(long, env = "RAKE_DSS_CONFIG", value_name = "SETTINGS_JSON")]
    config: Option<PathBuf>,

    /// 使用内置演示数据集（未指定数据来源时的默认行为）
    #[arg(long)]
    demo: bool,

    /// JSON 请求文件（数据集 + 可选 config）
    #[arg(long, value_name = "DATASET_JSON")]
    json: Option<PathBuf>,

    /// CSV 数据目录
    #[arg(long, value_name = "DIR")]
    csv_dir: Option<PathBuf>,

    /// 格式化输出
    #[arg(long)]
    pretty: bool,
}

/// 数据来源
#[derive(Debug, Clone, PartialEq)]
enum Source {
    Demo,
    Json(PathBuf),
    CsvDir(PathBuf),
}

impl Cli {
    fn source(&self) -> Source {
        match (&self.json, &self.csv_dir) {
            _ if self.demo => Source::Demo,
            (Some(path), _) => Source::Json(path.clone()),
            (None, Some(dir)) => Source::CsvDir(dir.clone()),
            (None, None) => Source::Demo,
        }
    }
}

fn execute(cli: &Cli) -> Result<OptimizeRakesResponse, ApiError> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::from_json_file(path)?,
        None => ConfigManager::new(),
    };
    tracing::debug!(snapshot = %manager.config_snapshot()?, "配置已加载");

    let api = RakePlannerApi::from_config(&manager, RuleBasedRiskClassifier::new());
    let now = chrono::Utc::now();

    match cli.source() {
        Source::Demo => api.optimize_at(&sample_dataset(), manager.optimization_config(), now),
        Source::Json(path) => {
            let request = DatasetLoader::from_json_file(&path)?;
            // 请求内 config 优先于设置文件
            let config = request
                .config
                .clone()
                .unwrap_or_else(|| manager.optimization_config().clone());
            api.optimize_at(&request.dataset, &config, now)
        }
        Source::CsvDir(dir) => {
            let dataset = CsvDatasetLoader::load_dir(&dir)?;
            api.optimize_at(&dataset, manager.optimization_config(), now)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    logging::init();
    tracing::info!(version = VERSION, "{}", APP_NAME);

    match execute(&cli) {
        Ok(response) => {
            println!("{}", to_json(&response, cli.pretty)?);
            Ok(())
        }
        Err(err) => {
            println!("{}", to_json(&err.to_error_body(), true)?);
            std::process::exit(1);
        }
    }
}
