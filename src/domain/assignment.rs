// ==========================================
// 铁路装车编组决策支持系统 - 运输方式分配与生产建议
// ==========================================

use crate::domain::types::TransportMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// RailVsRoadAssignment - 铁路/公路分配结果
// ==========================================
// 铁路: assigned_rake_id 有值；公路: planned_truck_batches 有值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailVsRoadAssignment {
    pub order_id: String,
    pub assigned_mode: TransportMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_rake_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_truck_batches: Option<u32>,
    pub expected_ship_date: DateTime<Utc>,
    pub expected_arrival_date: DateTime<Utc>,
    pub confidence_percent: f64,
}

// ==========================================
// ProductionSuggestion - 生产建议
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionSuggestion {
    pub material_id: String,
    pub current_inventory_tonnes: f64,
    pub recommended_production_tonnage: f64,
    pub reasoning: String,
}
