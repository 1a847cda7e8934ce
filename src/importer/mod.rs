// ==========================================
// 铁路装车编组决策支持系统 - 导入层
// ==========================================
// 职责: 外部数据导入，生成 InputDataset
// 支持: JSON（请求体格式）/ CSV 目录 / 内置演示数据
// ==========================================

// 模块声明
pub mod csv_loader;
pub mod dataset_loader;
pub mod error;
pub mod sample_dataset;

// 重导出核心类型
pub use csv_loader::{read_csv_records, CsvDatasetLoader};
pub use dataset_loader::{DatasetLoader, OptimizeRequest};
pub use error::{ImportError, ImportResult};
pub use sample_dataset::sample_dataset;
