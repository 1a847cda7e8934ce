// ==========================================
// 铁路装车编组决策支持系统 - KPI 汇总
// ==========================================
// 职责: 车底方案 → KPI 汇总 / 延误风险订单列表
// 准时率口径: 仅统计上车底订单，公路兜底订单不计入
// 滞期节省: 简化口径，每个上车底订单按"提前 2 天 × 日罚金"计
// ==========================================

use crate::config::CostParameters;
use crate::domain::kpi::KpiSummary;
use crate::domain::order::Order;
use crate::domain::plan::PlannedRake;
use crate::domain::types::SlaStatus;
use std::collections::HashMap;

// ==========================================
// KpiAggregator - KPI 汇总器
// ==========================================
pub struct KpiAggregator<'a> {
    params: &'a CostParameters,
}

impl<'a> KpiAggregator<'a> {
    pub fn new(params: &'a CostParameters) -> Self {
        Self { params }
    }

    /// 汇总 KPI
    ///
    /// # 参数
    /// - `planned_rakes`: 已评估的车底方案
    /// - `orders`: 全部输入订单（查日罚金）
    /// - `baseline_cost`: 全公路基准成本
    pub fn summarize(
        &self,
        planned_rakes: &[PlannedRake],
        orders: &[Order],
        baseline_cost: f64,
    ) -> KpiSummary {
        let total_cost: f64 = planned_rakes.iter().map(|r| r.cost_breakdown.total_cost).sum();

        let average_utilization = if planned_rakes.is_empty() {
            0.0
        } else {
            planned_rakes.iter().map(|r| r.utilization_percent).sum::<f64>()
                / planned_rakes.len() as f64
        };

        KpiSummary {
            total_cost_optimized: total_cost,
            cost_savings_vs_baseline: (baseline_cost - total_cost).max(0.0),
            baseline_cost,
            average_rake_utilization_percent: average_utilization,
            number_of_rakes_planned: planned_rakes.len(),
            demurrage_savings: self.demurrage_savings(planned_rakes, orders),
            on_time_delivery_percent: on_time_percent(planned_rakes),
        }
    }

    /// 滞期节省 = Σ 提前天数假设 × 日罚金
    pub fn demurrage_savings(&self, planned_rakes: &[PlannedRake], orders: &[Order]) -> f64 {
        let rates: HashMap<&str, f64> = orders
            .iter()
            .map(|o| {
                (
                    o.order_id.as_str(),
                    o.effective_penalty_rate(self.params.default_penalty_rate_per_day),
                )
            })
            .collect();

        planned_rakes
            .iter()
            .flat_map(|r| r.orders_allocated.iter())
            .map(|a| {
                let rate = rates
                    .get(a.order_id.as_str())
                    .copied()
                    .unwrap_or(self.params.default_penalty_rate_per_day);
                self.params.demurrage_days_early_assumption * rate
            })
            .sum()
    }
}

/// 准时率 = 准时方案内订单数 / 上车底订单数 × 100（无上车底订单时为 100）
pub fn on_time_percent(planned_rakes: &[PlannedRake]) -> f64 {
    let allocated: usize = planned_rakes.iter().map(|r| r.orders_allocated.len()).sum();
    if allocated == 0 {
        return 100.0;
    }
    let on_time: usize = planned_rakes
        .iter()
        .filter(|r| r.sla_status == SlaStatus::OnTime)
        .map(|r| r.orders_allocated.len())
        .sum();
    on_time as f64 / allocated as f64 * 100.0
}

/// 非准时方案内的订单号（按方案顺序）
pub fn late_or_at_risk_orders(planned_rakes: &[PlannedRake]) -> Vec<String> {
    planned_rakes
        .iter()
        .filter(|r| r.sla_status != SlaStatus::OnTime)
        .flat_map(|r| r.orders_allocated.iter().map(|a| a.order_id.clone()))
        .collect()
}
