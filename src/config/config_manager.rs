// ==========================================
// 铁路装车编组决策支持系统 - 配置管理器
// ==========================================
// 职责: 设置文件加载、范围校验、配置快照
// 格式: {"optimization": {...}, "cost_parameters": {...}}（两段均可省略）
// ==========================================

use crate::config::cost_parameters::CostParameters;
use crate::config::optimization_config::OptimizationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置解析失败: {0}")]
    ParseError(String),

    #[error("配置值越界: {}", .0.join("; "))]
    OutOfRange(Vec<String>),
}

/// 设置文件结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub optimization: OptimizationConfig,
    #[serde(default)]
    pub cost_parameters: CostParameters,
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    settings: Settings,
}

impl ConfigManager {
    /// 使用默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 字符串加载
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let settings: Settings =
            serde_json::from_str(raw).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Self::from_settings(settings)
    }

    /// 从设置文件加载
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let manager = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), "配置文件加载完成");
        Ok(manager)
    }

    /// 从已构造的设置创建（执行范围校验）
    pub fn from_settings(settings: Settings) -> Result<Self, ConfigError> {
        let mut problems = settings.optimization.range_violations();
        problems.extend(settings.cost_parameters.range_violations());
        if !problems.is_empty() {
            return Err(ConfigError::OutOfRange(problems));
        }
        Ok(Self { settings })
    }

    pub fn optimization_config(&self) -> &OptimizationConfig {
        &self.settings.optimization
    }

    pub fn cost_parameters(&self) -> &CostParameters {
        &self.settings.cost_parameters
    }

    /// 获取配置快照（JSON），每次运行记录到日志
    pub fn config_snapshot(&self) -> Result<String, ConfigError> {
        serde_json::to_string(&self.settings).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_gives_defaults() {
        let manager = ConfigManager::from_json_str("{}").unwrap();
        assert_eq!(manager.optimization_config(), &OptimizationConfig::default());
        assert_eq!(manager.cost_parameters(), &CostParameters::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"optimization": {{"min_utilization_percent": 60}}, "cost_parameters": {{"truck_capacity_tonnes": 30}}}}"#
        )
        .unwrap();

        let manager = ConfigManager::from_json_file(file.path()).unwrap();
        assert_eq!(manager.optimization_config().min_utilization_percent, 60.0);
        assert_eq!(manager.cost_parameters().truck_capacity_tonnes, 30.0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let result = ConfigManager::from_json_str(r#"{"optimization": {"cost_vs_sla_weight": 2.0}}"#);
        assert!(matches!(result, Err(ConfigError::OutOfRange(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigManager::from_json_file("no_such_settings.json");
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn test_snapshot_round_trips() {
        let manager = ConfigManager::new();
        let snapshot = manager.config_snapshot().unwrap();
        let restored = ConfigManager::from_json_str(&snapshot).unwrap();
        assert_eq!(restored.cost_parameters(), manager.cost_parameters());
    }
}
