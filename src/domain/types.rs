// ==========================================
// 铁路装车编组决策支持系统 - 领域类型定义
// ==========================================
// 职责: 运输方式 / SLA 状态 / 风险标记 / 求解状态
// 序列化格式与对外 JSON 契约保持一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 运输方式 (Transport Mode)
// ==========================================
// 用于 route_cost.mode 与分配结果 assigned_mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Rail, // 铁路
    Road, // 公路
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Rail => write!(f, "rail"),
            TransportMode::Road => write!(f, "road"),
        }
    }
}

// ==========================================
// 订单偏好运输方式 (Preferred Mode)
// ==========================================
// 仅作为输入信息保留，贪心分配不读取该字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredMode {
    Rail,
    Road,
    #[default]
    Either,
}

impl fmt::Display for PreferredMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferredMode::Rail => write!(f, "rail"),
            PreferredMode::Road => write!(f, "road"),
            PreferredMode::Either => write!(f, "either"),
        }
    }
}

// ==========================================
// SLA 状态 (SLA Status)
// ==========================================
// 顺序: OnTime < AtRisk < Late
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SlaStatus {
    #[serde(rename = "On-time")]
    OnTime, // 准时
    #[serde(rename = "At-Risk")]
    AtRisk, // 有风险
    #[serde(rename = "Late")]
    Late, // 延误
}

impl fmt::Display for SlaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlaStatus::OnTime => write!(f, "On-time"),
            SlaStatus::AtRisk => write!(f, "At-Risk"),
            SlaStatus::Late => write!(f, "Late"),
        }
    }
}

// ==========================================
// 风险标记 (Risk Flag)
// ==========================================
// 由外部风险分类器给出，顺序: Low < Med < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskFlag {
    Low,  // 低
    Med,  // 中
    High, // 高
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskFlag::Low => write!(f, "LOW"),
            RiskFlag::Med => write!(f, "MED"),
            RiskFlag::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 求解状态 (Solver Status)
// ==========================================
// 启发式求解器只会产出 OPTIMAL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolverStatus {
    Optimal,
}

impl fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverStatus::Optimal => write!(f, "OPTIMAL"),
        }
    }
}
