// ==========================================
// 铁路装车编组决策支持系统 - 配置层
// ==========================================
// 职责: 优化配置 + 成本常量，支持设置文件覆写
// ==========================================

pub mod config_manager;
pub mod cost_parameters;
pub mod optimization_config;

// 重导出核心配置
pub use config_manager::{ConfigError, ConfigManager, Settings};
pub use cost_parameters::CostParameters;
pub use optimization_config::OptimizationConfig;
