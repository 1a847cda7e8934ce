use serde::{Deserialize, Serialize};

/// 成本/SLA/建议生成使用的全部常量
///
/// 存储位置：设置文件 `cost_parameters` 段；缺省字段取默认值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostParameters {
    // ===== 成本 =====
    /// 吊机小时成本
    pub crane_hourly_cost: f64,
    /// 铁路运价兜底（每吨）
    pub rail_fallback_cost_per_tonne: f64,
    /// 公路运价兜底（每吨，基准成本使用）
    pub road_fallback_cost_per_tonne: f64,
    /// 订单日罚金缺省值（订单罚金非正时使用）
    pub default_penalty_rate_per_day: f64,

    // ===== 时间 =====
    /// 铁路在途时间兜底（小时）
    pub rail_fallback_transit_hours: f64,
    /// SLA 判定假定的在途时间（小时，不使用线路实际值）
    pub sla_assumed_transit_hours: f64,
    /// SLA 风险窗口（小时）
    pub sla_at_risk_window_hours: f64,
    /// 公路在途时间兜底（小时）
    pub road_fallback_transit_hours: f64,

    // ===== 分配 =====
    /// 车底预留比例：已用车底数达到 floor(车队规模 × 比例) 后第一轮不再开新车底
    pub rake_reservation_ratio: f64,
    /// 单车（卡车）载重（吨）
    pub truck_capacity_tonnes: f64,
    /// 高优先级阈值（priority <= 阈值）
    pub high_priority_threshold: u32,

    // ===== 置信度 =====
    pub rail_confidence_percent: f64,
    pub road_confidence_percent: f64,

    // ===== 风险特征占位值 =====
    pub fallback_distance_km: f64,
    pub loading_point_congestion: f64,
    pub route_historical_delay_pct: f64,
    pub season_factor: f64,

    // ===== 解释标签阈值 =====
    pub high_utilization_percent: f64,
    pub low_utilization_percent: f64,

    // ===== KPI / 生产建议 =====
    /// 滞期节省的“提前天数”假设
    pub demurrage_days_early_assumption: f64,
    /// 生产建议缓冲吨位
    pub production_buffer_tonnes: f64,
    /// 库存覆盖比例阈值（库存 < 需求 × 比例 时给出建议）
    pub production_inventory_cover_ratio: f64,
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            crane_hourly_cost: 5000.0,
            rail_fallback_cost_per_tonne: 350.0,
            road_fallback_cost_per_tonne: 400.0,
            default_penalty_rate_per_day: 500.0,
            rail_fallback_transit_hours: 72.0,
            sla_assumed_transit_hours: 72.0,
            sla_at_risk_window_hours: 24.0,
            road_fallback_transit_hours: 24.0,
            rake_reservation_ratio: 0.8,
            truck_capacity_tonnes: 25.0,
            high_priority_threshold: 2,
            rail_confidence_percent: 95.0,
            road_confidence_percent: 75.0,
            fallback_distance_km: 1400.0,
            loading_point_congestion: 0.5,
            route_historical_delay_pct: 0.12,
            season_factor: 1.05,
            high_utilization_percent: 80.0,
            low_utilization_percent: 50.0,
            demurrage_days_early_assumption: 2.0,
            production_buffer_tonnes: 100.0,
            production_inventory_cover_ratio: 0.5,
        }
    }
}

impl CostParameters {
    /// 范围校验，返回全部越界项
    pub fn range_violations(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !(0.0..=1.0).contains(&self.rake_reservation_ratio) {
            problems.push(format!(
                "rake_reservation_ratio={} 超出范围 [0, 1]",
                self.rake_reservation_ratio
            ));
        }
        if self.truck_capacity_tonnes <= 0.0 {
            problems.push(format!(
                "truck_capacity_tonnes={} 必须大于 0",
                self.truck_capacity_tonnes
            ));
        }
        let non_negative = [
            ("crane_hourly_cost", self.crane_hourly_cost),
            ("rail_fallback_cost_per_tonne", self.rail_fallback_cost_per_tonne),
            ("road_fallback_cost_per_tonne", self.road_fallback_cost_per_tonne),
            ("rail_fallback_transit_hours", self.rail_fallback_transit_hours),
            ("sla_assumed_transit_hours", self.sla_assumed_transit_hours),
            ("sla_at_risk_window_hours", self.sla_at_risk_window_hours),
            ("road_fallback_transit_hours", self.road_fallback_transit_hours),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                problems.push(format!("{}={} 不能为负", key, value));
            }
        }
        problems
    }
}
