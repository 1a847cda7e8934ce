// ==========================================
// 铁路装车编组决策支持系统 - 全公路基准成本
// ==========================================
// 职责: 所有订单全部走公路的成本，作为节省额的参照
// 规则: 按目的地匹配第一条公路线路；未命中使用公路兜底运价
// ==========================================

use crate::config::CostParameters;
use crate::domain::order::Order;
use crate::domain::route::{find_route_to, RouteCost};
use crate::domain::types::TransportMode;
use tracing::debug;

// ==========================================
// BaselineCostEstimator - 基准成本估算
// ==========================================
pub struct BaselineCostEstimator<'a> {
    params: &'a CostParameters,
}

impl<'a> BaselineCostEstimator<'a> {
    pub fn new(params: &'a CostParameters) -> Self {
        Self { params }
    }

    /// 计算全公路基准成本 Σ quantity × rate
    pub fn estimate(&self, orders: &[Order], routes: &[RouteCost]) -> f64 {
        let mut total_cost = 0.0;
        for order in orders {
            let rate = match find_route_to(routes, &order.destination, TransportMode::Road) {
                Some(route) => route.cost_per_tonne,
                None => {
                    debug!(
                        order_id = %order.order_id,
                        destination = %order.destination,
                        fallback_rate = self.params.road_fallback_cost_per_tonne,
                        "基准成本: 未找到公路线路，使用兜底运价"
                    );
                    self.params.road_fallback_cost_per_tonne
                }
            };
            total_cost += order.quantity_tonnes * rate;
        }
        total_cost
    }
}
