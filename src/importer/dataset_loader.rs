// ==========================================
// 铁路装车编组决策支持系统 - JSON 数据集加载
// ==========================================
// 格式: 六类集合 + 可选 config（与优化请求体一致）
// {
//   "stockyards": [...], "orders": [...], "rakes": [...],
//   "product_wagon_matrix": [...], "loading_points": [...],
//   "routes_costs": [...], "config": {...}
// }
// ==========================================

use crate::config::OptimizationConfig;
use crate::domain::dataset::InputDataset;
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// 优化请求（数据集 + 可选配置）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    #[serde(flatten)]
    pub dataset: InputDataset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<OptimizationConfig>,
}

impl OptimizeRequest {
    /// 请求内配置，缺省时取默认值
    pub fn effective_config(&self) -> OptimizationConfig {
        self.config.clone().unwrap_or_default()
    }
}

// ==========================================
// DatasetLoader - JSON 加载器
// ==========================================
pub struct DatasetLoader;

impl DatasetLoader {
    /// 从 JSON 字符串解析请求
    pub fn from_json_str(raw: &str) -> ImportResult<OptimizeRequest> {
        let request: OptimizeRequest = serde_json::from_str(raw)?;
        Ok(request)
    }

    /// 从 JSON 文件解析请求
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ImportResult<OptimizeRequest> {
        let path = path.as_ref();

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "json" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let raw = std::fs::read_to_string(path)?;
        let request = Self::from_json_str(&raw)?;

        info!(
            path = %path.display(),
            orders_count = request.dataset.orders.len(),
            rakes_count = request.dataset.rakes.len(),
            has_config = request.config.is_some(),
            "JSON 数据集加载完成"
        );
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    const MINIMAL_REQUEST: &str = r#"{
        "orders": [{
            "order_id": "O1", "customer_id": "C1", "destination": "DELHI",
            "material_id": "HRC", "quantity_tonnes": 28.5, "priority": 1,
            "due_date": "2024-01-17T10:00:00Z", "penalty_rate_per_day": 500,
            "preferred_mode": "rail", "partial_allowed": false
        }],
        "rakes": [{
            "rake_id": "R1", "wagon_type": "BOXN", "num_wagons": 34,
            "per_wagon_capacity_tonnes": 28, "total_capacity_tonnes": 952,
            "available_from_time": "2024-01-14T08:00:00Z", "current_location": "BOKARO"
        }],
        "config": { "allow_multi_destination_rakes": false }
    }"#;

    #[test]
    fn test_parse_request_with_config() {
        let request = DatasetLoader::from_json_str(MINIMAL_REQUEST).unwrap();
        assert_eq!(request.dataset.orders.len(), 1);
        assert_eq!(request.dataset.rakes[0].total_capacity_tonnes, 952.0);
        assert!(request.dataset.stockyards.is_empty());

        let config = request.effective_config();
        assert!(!config.allow_multi_destination_rakes);
        assert_eq!(config.cost_vs_sla_weight, 0.6);
    }

    #[test]
    fn test_parse_request_without_config() {
        let request = DatasetLoader::from_json_str(r#"{"orders": [], "rakes": []}"#).unwrap();
        assert!(request.config.is_none());
        assert_eq!(request.effective_config(), OptimizationConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        let result = DatasetLoader::from_json_str(r#"{"orders": [{"order_id": 1}]}"#);
        assert!(matches!(result, Err(ImportError::JsonParseError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{}", MINIMAL_REQUEST).unwrap();

        let request = DatasetLoader::from_json_file(file.path()).unwrap();
        assert_eq!(request.dataset.orders[0].order_id, "O1");
    }

    #[test]
    fn test_file_not_found() {
        let result = DatasetLoader::from_json_file("no_such_dataset.json");
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_wrong_extension() {
        let file = Builder::new().suffix(".txt").tempfile().unwrap();
        let result = DatasetLoader::from_json_file(file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
