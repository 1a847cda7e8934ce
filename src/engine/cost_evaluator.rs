// ==========================================
// 铁路装车编组决策支持系统 - 成本与 SLA 评估引擎
// ==========================================
// 职责: 单个车底方案 → 成本明细 / 利用率 / SLA / 风险 / 解释标签
// 输入: RakeAllocationPlan + 线路成本 + 成本参数 + 风险分类器
// 输出: PlannedRake
// ==========================================
// 注意: 罚金按匹配线路的实际在途时间计算，
//       SLA 判定固定使用假定在途时间（默认 72h），两者不统一
// ==========================================

use crate::config::{CostParameters, OptimizationConfig};
use crate::domain::capacity::CapacityConstraint;
use crate::domain::plan::{CostBreakdown, OrderAllocation, PlannedRake, RakeAllocationPlan};
use crate::domain::route::{find_route, RouteCost};
use crate::domain::types::{RiskFlag, SlaStatus, TransportMode};
use crate::engine::risk::{RiskClassifier, RiskFeatures};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

// ==========================================
// 解释标签
// ==========================================
pub mod tags {
    pub const HIGH_UTILIZATION: &str = "high_utilization";
    pub const LOW_UTILIZATION_RISK: &str = "low_utilization_risk";
    pub const BELOW_MIN_UTILIZATION: &str = "below_min_utilization";
    pub const LOW_DELAY_RISK: &str = "low_delay_risk";
    pub const HIGH_DELAY_RISK: &str = "high_delay_risk";
    pub const INCLUDES_HIGH_PRIORITY: &str = "includes_high_priority";
    pub const MULTI_DESTINATION: &str = "multi_destination";
    pub const SLA_WEIGHTED: &str = "sla_weighted";
    pub const COST_OPTIMIZED: &str = "cost_optimized";
}

/// 两个时间点相差的小时数（a - b）
pub fn hours_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    (a - b).num_milliseconds() as f64 / 3_600_000.0
}

/// 时间点加上小数小时
pub fn add_hours(t: DateTime<Utc>, hours: f64) -> DateTime<Utc> {
    t + Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}

// ==========================================
// CostSlaEvaluator - 成本与 SLA 评估
// ==========================================
pub struct CostSlaEvaluator<'a> {
    params: &'a CostParameters,
    config: &'a OptimizationConfig,
    routes: &'a [RouteCost],
}

impl<'a> CostSlaEvaluator<'a> {
    pub fn new(
        params: &'a CostParameters,
        config: &'a OptimizationConfig,
        routes: &'a [RouteCost],
    ) -> Self {
        Self {
            params,
            config,
            routes,
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评估单个方案，生成对外的 PlannedRake
    pub fn evaluate<R: RiskClassifier + ?Sized>(
        &self,
        plan: &RakeAllocationPlan,
        planned_rake_id: &str,
        classifier: &R,
    ) -> PlannedRake {
        let cost_breakdown = self.cost_breakdown(plan);
        let sla_status = self.sla_status(plan);
        let features = self.risk_features(plan);
        let assessment = classifier.classify(&features);
        let utilization = plan.utilization_percent();
        let estimated_arrival = self.estimated_arrival(plan);

        debug!(
            planned_rake_id,
            rake_id = %plan.rake.rake_id,
            total_cost = cost_breakdown.total_cost,
            utilization,
            sla_status = %sla_status,
            risk_flag = %assessment.risk_flag,
            "车底方案评估完成"
        );

        let orders_allocated = plan
            .assigned_orders
            .iter()
            .map(|a| OrderAllocation {
                order_id: a.order.order_id.clone(),
                customer_id: a.order.customer_id.clone(),
                quantity_allocated_tonnes: a.quantity_tonnes,
                assigned_wagons: a.wagons.clone(),
                estimated_arrival,
            })
            .collect();

        PlannedRake {
            planned_rake_id: planned_rake_id.to_string(),
            rake_id: plan.rake.rake_id.clone(),
            wagon_type: plan.rake.wagon_type.clone(),
            num_wagons: plan.rake.num_wagons,
            loading_point_id: plan.loading_point.loading_point_id.clone(),
            departure_time: plan.departure_time,
            primary_destination: plan.destination_primary.clone(),
            secondary_destinations: plan.destination_secondary.clone(),
            total_tonnage_assigned: plan.total_tonnage,
            utilization_percent: utilization,
            orders_allocated,
            cost_breakdown,
            sla_status,
            risk_flag: assessment.risk_flag,
            cost_multiplier: assessment.cost_multiplier,
            explanation_tags: self.explanation_tags(plan, utilization, assessment.risk_flag),
        }
    }

    /// 匹配铁路线路: 车底当前位置 → 主目的地
    ///
    /// 成本、在途时间与风险特征共用此匹配，只取 rail 行；
    /// 同起终点的公路行不参与，风险特征在无铁路行时走兜底距离与在途时间。
    pub fn matched_rail_route(&self, plan: &RakeAllocationPlan) -> Option<&'a RouteCost> {
        find_route(
            self.routes,
            &plan.rake.current_location,
            &plan.destination_primary,
            TransportMode::Rail,
        )
    }

    /// 装车成本 = 吨位 / 装车速率 × 吊机小时成本（未取整）
    pub fn loading_cost(&self, plan: &RakeAllocationPlan) -> f64 {
        plan.loading_point.loading_hours(plan.total_tonnage) * self.params.crane_hourly_cost
    }

    /// 运输成本 = 吨位 × 铁路运价（未命中用兜底运价）
    pub fn transport_cost(&self, plan: &RakeAllocationPlan) -> f64 {
        match self.matched_rail_route(plan) {
            Some(route) => plan.total_tonnage * route.cost_per_tonne,
            None => {
                warn!(
                    rake_id = %plan.rake.rake_id,
                    origin = %plan.rake.current_location,
                    destination = %plan.destination_primary,
                    fallback_rate = self.params.rail_fallback_cost_per_tonne,
                    "未找到铁路线路，运输成本使用兜底运价"
                );
                plan.total_tonnage * self.params.rail_fallback_cost_per_tonne
            }
        }
    }

    /// 在途小时数（匹配线路或兜底值；线路在途为 0 时同样走兜底）
    pub fn transit_hours(&self, plan: &RakeAllocationPlan) -> f64 {
        self.matched_rail_route(plan)
            .and_then(RouteCost::usable_transit_hours)
            .unwrap_or(self.params.rail_fallback_transit_hours)
    }

    /// 预计到达 = 发车时间 + 在途小时数
    pub fn estimated_arrival(&self, plan: &RakeAllocationPlan) -> DateTime<Utc> {
        add_hours(plan.departure_time, self.transit_hours(plan))
    }

    /// 延误罚金 = Σ 日罚金 × 延误小时 / 24（未取整）
    pub fn penalty_cost(&self, plan: &RakeAllocationPlan) -> f64 {
        let arrival = self.estimated_arrival(plan);
        plan.assigned_orders
            .iter()
            .map(|a| {
                let delay_hours = hours_between(arrival, a.order.due_date).max(0.0);
                a.order
                    .effective_penalty_rate(self.params.default_penalty_rate_per_day)
                    * (delay_hours / 24.0)
            })
            .sum()
    }

    /// 成本明细（各项取整，总成本为未取整各项之和再取整）
    pub fn cost_breakdown(&self, plan: &RakeAllocationPlan) -> CostBreakdown {
        let loading_cost = self.loading_cost(plan);
        let transport_cost = self.transport_cost(plan);
        let penalty_cost = self.penalty_cost(plan);

        CostBreakdown {
            loading_cost: loading_cost.round(),
            transport_cost: transport_cost.round(),
            penalty_cost: penalty_cost.round(),
            idle_freight_cost: 0.0,
            total_cost: (loading_cost + transport_cost + penalty_cost).round(),
        }
    }

    /// SLA 判定
    ///
    /// 提前量 = 最晚交期 - (发车 + 假定在途时间)
    /// - 提前量 > 窗口 → On-time
    /// - -窗口 <= 提前量 <= 窗口 → At-Risk
    /// - 其他 → Late
    pub fn sla_status(&self, plan: &RakeAllocationPlan) -> SlaStatus {
        let Some(latest_due) = plan.latest_due_date() else {
            return SlaStatus::Late;
        };
        let arrival = add_hours(plan.departure_time, self.params.sla_assumed_transit_hours);
        classify_sla(hours_between(latest_due, arrival), self.params.sla_at_risk_window_hours)
    }

    /// 风险特征（使用与成本相同的铁路线路匹配）
    pub fn risk_features(&self, plan: &RakeAllocationPlan) -> RiskFeatures {
        let route = self.matched_rail_route(plan);
        let time_until_due_date_hours = plan
            .assigned_orders
            .iter()
            .map(|a| hours_between(a.order.due_date, plan.departure_time))
            .fold(f64::NEG_INFINITY, f64::max);

        RiskFeatures {
            distance_km: route
                .map(|r| r.distance_km)
                .unwrap_or(self.params.fallback_distance_km),
            transit_time_hours: self.transit_hours(plan),
            priority: plan.average_priority(),
            material_weight: plan.total_tonnage,
            loading_point_congestion: self.params.loading_point_congestion,
            route_historical_delays_pct: self.params.route_historical_delay_pct,
            time_until_due_date_hours,
            mode: 1.0,
            season_factor: self.params.season_factor,
        }
    }

    /// 解释标签（确定性规则）
    pub fn explanation_tags(
        &self,
        plan: &RakeAllocationPlan,
        utilization: f64,
        risk_flag: RiskFlag,
    ) -> Vec<String> {
        let mut result: Vec<&str> = Vec::new();

        if utilization > self.params.high_utilization_percent {
            result.push(tags::HIGH_UTILIZATION);
        }
        if utilization < self.params.low_utilization_percent {
            result.push(tags::LOW_UTILIZATION_RISK);
        }
        if utilization < self.config.min_utilization_percent {
            result.push(tags::BELOW_MIN_UTILIZATION);
        }
        match risk_flag {
            RiskFlag::Low => result.push(tags::LOW_DELAY_RISK),
            RiskFlag::High => result.push(tags::HIGH_DELAY_RISK),
            RiskFlag::Med => {}
        }
        if plan
            .assigned_orders
            .iter()
            .any(|a| a.order.is_high_priority(self.params.high_priority_threshold))
        {
            result.push(tags::INCLUDES_HIGH_PRIORITY);
        }
        if !plan.destination_secondary.is_empty() {
            result.push(tags::MULTI_DESTINATION);
        }
        if self.config.cost_vs_sla_weight < 0.5 {
            result.push(tags::SLA_WEIGHTED);
        }
        result.push(tags::COST_OPTIMIZED);

        result.into_iter().map(String::from).collect()
    }
}

/// 按提前小时数与风险窗口划分 SLA 状态
pub fn classify_sla(hours_early: f64, window_hours: f64) -> SlaStatus {
    if hours_early > window_hours {
        SlaStatus::OnTime
    } else if hours_early >= -window_hours {
        SlaStatus::AtRisk
    } else {
        SlaStatus::Late
    }
}
