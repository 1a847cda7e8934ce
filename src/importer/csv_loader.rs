// ==========================================
// 铁路装车编组决策支持系统 - CSV 数据集加载
// ==========================================
// 目录内文件（表头即字段名）:
//   orders.csv / rakes.csv                     必需
//   stockyards.csv / product_wagon_matrix.csv
//   loading_points.csv / routes_costs.csv      可选，缺失视为空
// 时间字段使用 RFC 3339，例如 2024-01-17T10:00:00Z
// ==========================================

use crate::domain::dataset::InputDataset;
use crate::importer::error::{ImportError, ImportResult};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

pub const STOCKYARDS_FILE: &str = "stockyards.csv";
pub const ORDERS_FILE: &str = "orders.csv";
pub const RAKES_FILE: &str = "rakes.csv";
pub const PRODUCT_WAGON_MATRIX_FILE: &str = "product_wagon_matrix.csv";
pub const LOADING_POINTS_FILE: &str = "loading_points.csv";
pub const ROUTES_COSTS_FILE: &str = "routes_costs.csv";

/// 读取单个 CSV 文件为实体列表
///
/// 完全空白的行会被跳过；行号随错误一并返回。
pub fn read_csv_records<T: DeserializeOwned>(path: &Path) -> ImportResult<Vec<T>> {
    // 检查文件存在
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    // 检查扩展名
    if let Some(ext) = path.extension() {
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext.to_string_lossy().to_string()));
        }
    }

    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(file);
    let headers = reader.headers()?.clone();

    let file_name = path.display().to_string();
    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;

        // 跳过完全空白的行
        if record.iter().all(|v| v.is_empty()) {
            continue;
        }

        let row = record.position().map(|p| p.line()).unwrap_or(0);
        let item: T = record
            .deserialize(Some(&headers))
            .map_err(|e| ImportError::CsvRowError {
                file: file_name.clone(),
                row,
                message: e.to_string(),
            })?;
        records.push(item);
    }

    debug!(file = %file_name, rows = records.len(), "CSV 文件读取完成");
    Ok(records)
}

// ==========================================
// CsvDatasetLoader - CSV 目录加载器
// ==========================================
pub struct CsvDatasetLoader;

impl CsvDatasetLoader {
    /// 从目录读取完整数据集
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> ImportResult<InputDataset> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(ImportError::FileNotFound(dir.display().to_string()));
        }

        let dataset = InputDataset {
            stockyards: Self::optional(dir, STOCKYARDS_FILE)?,
            orders: read_csv_records(&dir.join(ORDERS_FILE))?,
            rakes: read_csv_records(&dir.join(RAKES_FILE))?,
            product_wagon_matrix: Self::optional(dir, PRODUCT_WAGON_MATRIX_FILE)?,
            loading_points: Self::optional(dir, LOADING_POINTS_FILE)?,
            routes_costs: Self::optional(dir, ROUTES_COSTS_FILE)?,
        };

        info!(
            dir = %dir.display(),
            stockyards = dataset.stockyards.len(),
            orders = dataset.orders.len(),
            rakes = dataset.rakes.len(),
            compatibility_rules = dataset.product_wagon_matrix.len(),
            loading_points = dataset.loading_points.len(),
            routes = dataset.routes_costs.len(),
            "CSV 数据集加载完成"
        );
        Ok(dataset)
    }

    fn optional<T: DeserializeOwned>(dir: &Path, name: &str) -> ImportResult<Vec<T>> {
        let path = dir.join(name);
        if !path.exists() {
            debug!(file = name, "可选 CSV 文件缺失，按空集合处理");
            return Ok(Vec::new());
        }
        read_csv_records(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::Order;
    use crate::domain::route::RouteCost;
    use crate::domain::types::{PreferredMode, TransportMode};
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    const ORDERS_CSV: &str = "order_id,customer_id,destination,material_id,quantity_tonnes,priority,due_date,penalty_rate_per_day,preferred_mode,partial_allowed
ORD_1,ABC,Delhi,HRC,28.5,1,2024-01-17T10:00:00Z,500,rail,false

ORD_2,XYZ,Kanpur,CRC,35,3,2024-01-18T08:00:00Z,300,either,true
";

    const RAKES_CSV: &str = "rake_id,wagon_type,num_wagons,per_wagon_capacity_tonnes,total_capacity_tonnes,available_from_time,current_location
RAKE_001,BOXN,34,28,952,2024-01-14T08:00:00Z,BOKARO
";

    #[test]
    fn test_read_orders_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, ORDERS_FILE, ORDERS_CSV);

        let orders: Vec<Order> = read_csv_records(&dir.path().join(ORDERS_FILE)).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].quantity_tonnes, 28.5);
        assert_eq!(orders[1].preferred_mode, PreferredMode::Either);
        assert!(orders[1].partial_allowed);
    }

    #[test]
    fn test_load_dir_with_optional_files_missing() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, ORDERS_FILE, ORDERS_CSV);
        write_file(&dir, RAKES_FILE, RAKES_CSV);

        let dataset = CsvDatasetLoader::load_dir(dir.path()).unwrap();
        assert_eq!(dataset.orders.len(), 2);
        assert_eq!(dataset.rakes.len(), 1);
        assert!(dataset.stockyards.is_empty());
        assert!(dataset.routes_costs.is_empty());
    }

    #[test]
    fn test_load_dir_reads_routes() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, ORDERS_FILE, ORDERS_CSV);
        write_file(&dir, RAKES_FILE, RAKES_CSV);
        write_file(
            &dir,
            ROUTES_COSTS_FILE,
            "origin,destination,mode,distance_km,transit_time_hours,cost_per_tonne,idle_freight_cost_per_hour
BOKARO,KANPUR,road,750,24,280,20
",
        );

        let dataset = CsvDatasetLoader::load_dir(dir.path()).unwrap();
        let routes: &[RouteCost] = &dataset.routes_costs;
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].mode, TransportMode::Road);
    }

    #[test]
    fn test_load_dir_requires_orders() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, RAKES_FILE, RAKES_CSV);

        let result = CsvDatasetLoader::load_dir(dir.path());
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_bad_row_reports_line() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            RAKES_FILE,
            "rake_id,wagon_type,num_wagons,per_wagon_capacity_tonnes,total_capacity_tonnes,available_from_time,current_location
RAKE_001,BOXN,many,28,952,2024-01-14T08:00:00Z,BOKARO
",
        );

        let result: ImportResult<Vec<crate::domain::rake::Rake>> =
            read_csv_records(&dir.path().join(RAKES_FILE));
        match result {
            Err(ImportError::CsvRowError { row, .. }) => assert_eq!(row, 2),
            other => panic!("unexpected result: {:?}", other.map(|v| v.len())),
        }
    }
}
