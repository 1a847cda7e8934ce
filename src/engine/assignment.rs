// ==========================================
// 铁路装车编组决策支持系统 - 铁路/公路分配生成器
// ==========================================
// 职责: 为每个输入订单生成一条运输方式分配记录
// 铁路: 已上车底订单，引用 planned_rake_id
// 公路: 未上车底订单，按 25 吨/车次拆分卡车批次
// ==========================================

use crate::config::CostParameters;
use crate::domain::assignment::RailVsRoadAssignment;
use crate::domain::order::Order;
use crate::domain::plan::PlannedRake;
use crate::domain::route::{find_route_to, RouteCost};
use crate::domain::types::TransportMode;
use crate::engine::cost_evaluator::add_hours;
use chrono::{DateTime, Utc};
use tracing::debug;

// ==========================================
// ModeAssigner - 运输方式分配生成器
// ==========================================
pub struct ModeAssigner<'a> {
    params: &'a CostParameters,
    routes: &'a [RouteCost],
}

impl<'a> ModeAssigner<'a> {
    pub fn new(params: &'a CostParameters, routes: &'a [RouteCost]) -> Self {
        Self { params, routes }
    }

    /// 生成全部分配记录（先铁路后公路）
    ///
    /// # 参数
    /// - `planned_rakes`: 已编组车底（按方案顺序）
    /// - `unassigned`: 未上车底订单
    /// - `now`: 公路发运时间
    pub fn assign(
        &self,
        planned_rakes: &[PlannedRake],
        unassigned: &[Order],
        now: DateTime<Utc>,
    ) -> Vec<RailVsRoadAssignment> {
        let mut assignments = self.rail_assignments(planned_rakes);
        assignments.extend(unassigned.iter().map(|o| self.road_assignment(o, now)));

        debug!(
            total = assignments.len(),
            road_count = unassigned.len(),
            "运输方式分配生成完成"
        );
        assignments
    }

    /// 铁路分配: 每个已上车底订单一条
    pub fn rail_assignments(&self, planned_rakes: &[PlannedRake]) -> Vec<RailVsRoadAssignment> {
        planned_rakes
            .iter()
            .flat_map(|rake| {
                rake.orders_allocated.iter().map(move |alloc| RailVsRoadAssignment {
                    order_id: alloc.order_id.clone(),
                    assigned_mode: TransportMode::Rail,
                    assigned_rake_id: Some(rake.planned_rake_id.clone()),
                    planned_truck_batches: None,
                    expected_ship_date: rake.departure_time,
                    expected_arrival_date: alloc.estimated_arrival,
                    confidence_percent: self.params.rail_confidence_percent,
                })
            })
            .collect()
    }

    /// 公路兜底分配
    pub fn road_assignment(&self, order: &Order, now: DateTime<Utc>) -> RailVsRoadAssignment {
        let transit_hours = find_route_to(self.routes, &order.destination, TransportMode::Road)
            .and_then(RouteCost::usable_transit_hours)
            .unwrap_or(self.params.road_fallback_transit_hours);

        RailVsRoadAssignment {
            order_id: order.order_id.clone(),
            assigned_mode: TransportMode::Road,
            assigned_rake_id: None,
            planned_truck_batches: Some(self.truck_batches(order.quantity_tonnes)),
            expected_ship_date: now,
            expected_arrival_date: add_hours(now, transit_hours),
            confidence_percent: self.params.road_confidence_percent,
        }
    }

    /// 卡车批次 = ceil(吨位 / 单车载重)
    pub fn truck_batches(&self, quantity_tonnes: f64) -> u32 {
        if self.params.truck_capacity_tonnes <= 0.0 {
            return 1;
        }
        (quantity_tonnes / self.params.truck_capacity_tonnes).ceil().max(0.0) as u32
    }
}
