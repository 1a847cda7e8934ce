// ==========================================
// 铁路装车编组决策支持系统 - KPI 汇总与优化结果
// ==========================================

use crate::domain::assignment::{ProductionSuggestion, RailVsRoadAssignment};
use crate::domain::plan::PlannedRake;
use crate::domain::types::SolverStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// KpiSummary - 驾驶舱 KPI
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_cost_optimized: f64,             // 方案总成本
    pub cost_savings_vs_baseline: f64,         // 相对全公路基准的节省（不小于 0）
    pub baseline_cost: f64,                    // 全公路基准成本
    pub average_rake_utilization_percent: f64, // 平均车底利用率
    pub number_of_rakes_planned: usize,        // 编组车底数
    pub demurrage_savings: f64,                // 滞期节省（简化口径）
    pub on_time_delivery_percent: f64,         // 准时率（仅统计上车底订单）
}

// ==========================================
// OptimizeRakesResponse - 优化结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRakesResponse {
    pub success: bool,
    pub optimization_id: String,
    pub timestamp: String,
    pub solver_status: SolverStatus,
    pub execution_time_seconds: f64,
    pub kpi_summary: KpiSummary,
    pub planned_rakes: Vec<PlannedRake>,
    pub rail_vs_road_assignment: Vec<RailVsRoadAssignment>,
    pub production_suggestions: Vec<ProductionSuggestion>,
    pub late_or_at_risk_orders: Vec<String>,
}
