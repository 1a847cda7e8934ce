// ==========================================
// 铁路装车编组决策支持系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，统一输出结构化错误对象
// 分类: (a) 输入校验失败 / (c) 计划内部故障
//       查找未命中走兜底常量，不属于错误
// ==========================================

use crate::importer::ImportError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入校验错误
    // ==========================================
    /// 输入校验失败（带全部违规明细）
    #[error("输入校验失败: {reason}")]
    ValidationFailed {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    // ==========================================
    // 计划执行错误
    // ==========================================
    /// 计划过程中出现内部故障，不输出任何部分结果
    #[error("车底计划失败: {0}")]
    PlanningFailed(String),

    // ==========================================
    // 导入与配置错误
    // ==========================================
    #[error("数据导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("配置错误: {0}")]
    Config(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<crate::config::ConfigError> for ApiError {
    fn from(err: crate::config::ConfigError) -> Self {
        ApiError::Config(err.to_string())
    }
}

impl ApiError {
    /// 对外错误类别
    pub fn error_kind(&self) -> &'static str {
        match self {
            ApiError::ValidationFailed { .. } => "Validation failed",
            ApiError::PlanningFailed(_) => "Planning failed",
            ApiError::Import(_) => "Import failed",
            ApiError::Config(_) => "Invalid configuration",
            ApiError::Other(_) => "Internal error",
        }
    }

    /// 结构化错误对象 {"error", "message", "details"}
    pub fn to_error_body(&self) -> ErrorBody {
        let details = match self {
            ApiError::ValidationFailed { violations, .. } => serde_json::to_value(violations).ok(),
            _ => None,
        };
        ErrorBody {
            error: self.error_kind().to_string(),
            message: self.to_string(),
            details,
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

/// 对外错误对象
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// ==========================================
// 校验违规详情
// ==========================================

/// 校验违规详情
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationViolation {
    /// 违规类型（EMPTY_ORDERS / DUPLICATE_ID / CAPACITY_MISMATCH ...）
    pub violation_type: String,
    /// 实体ID（订单/车底/装车点/线路，集合级违规为空串）
    pub entity_id: String,
    /// 违规原因
    pub reason: String,
    /// 额外信息（可选）
    pub details: Option<serde_json::Value>,
}
