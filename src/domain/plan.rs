// ==========================================
// 铁路装车编组决策支持系统 - 车底分配方案领域模型
// ==========================================
// RakeAllocationPlan: 分配过程中可变的工作对象
// PlannedRake / OrderAllocation / CostBreakdown: 只读输出
// ==========================================

use crate::domain::capacity::CapacityConstraint;
use crate::domain::inventory::LoadingPoint;
use crate::domain::order::Order;
use crate::domain::rake::Rake;
use crate::domain::types::{RiskFlag, SlaStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// AssignedOrder - 方案内单个订单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignedOrder {
    pub order: Order,
    pub quantity_tonnes: f64,
    pub wagons: Vec<u32>, // 车辆序号 1..=n
}

// ==========================================
// RakeAllocationPlan - 车底分配方案
// ==========================================
// 红线: total_tonnage <= rake.total_capacity_tonnes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RakeAllocationPlan {
    pub rake: Rake,
    pub loading_point: LoadingPoint,
    pub assigned_orders: Vec<AssignedOrder>,
    pub total_tonnage: f64,
    pub departure_time: DateTime<Utc>,
    pub destination_primary: String,
    pub destination_secondary: Vec<String>,
}

impl RakeAllocationPlan {
    /// 以首个订单的目的地开一个空方案，发车时间取车底可用时间
    pub fn open(rake: Rake, loading_point: LoadingPoint, destination_primary: &str) -> Self {
        let departure_time = rake.available_from_time;
        Self {
            rake,
            loading_point,
            assigned_orders: Vec::new(),
            total_tonnage: 0.0,
            departure_time,
            destination_primary: destination_primary.to_string(),
            destination_secondary: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assigned_orders.is_empty()
    }

    /// 追加订单（调用方已完成容量与兼容校验）
    ///
    /// # 参数
    /// - `record_secondary`: 是否记录次要目的地（多目的地车底开关）
    pub fn push_order(&mut self, order: &Order, record_secondary: bool) {
        let wagons = allocate_wagons(&self.rake, order.quantity_tonnes);
        self.assigned_orders.push(AssignedOrder {
            order: order.clone(),
            quantity_tonnes: order.quantity_tonnes,
            wagons,
        });
        self.total_tonnage += order.quantity_tonnes;

        if record_secondary
            && order.destination != self.destination_primary
            && !self.destination_secondary.contains(&order.destination)
        {
            self.destination_secondary.push(order.destination.clone());
        }
    }

    /// 方案内订单的最晚交期
    pub fn latest_due_date(&self) -> Option<DateTime<Utc>> {
        self.assigned_orders.iter().map(|a| a.order.due_date).max()
    }

    /// 方案内订单平均优先级
    pub fn average_priority(&self) -> f64 {
        if self.assigned_orders.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.assigned_orders.iter().map(|a| a.order.priority).sum();
        sum as f64 / self.assigned_orders.len() as f64
    }
}

impl CapacityConstraint for RakeAllocationPlan {
    fn can_add_tonnage(&self, tonnage: f64) -> bool {
        self.total_tonnage + tonnage <= self.rake.total_capacity_tonnes
    }

    fn remaining_capacity_t(&self) -> f64 {
        (self.rake.total_capacity_tonnes - self.total_tonnage).max(0.0)
    }

    fn utilization_percent(&self) -> f64 {
        if self.rake.total_capacity_tonnes <= 0.0 {
            return 0.0;
        }
        self.total_tonnage / self.rake.total_capacity_tonnes * 100.0
    }
}

/// 车辆编号分配
///
/// 需要车辆数 = ceil(吨位 / 单车载重)，不超过车底车辆数；编号固定为 1..=n。
/// 同一车底内不同订单的车辆编号不做去重。
pub fn allocate_wagons(rake: &Rake, quantity_tonnes: f64) -> Vec<u32> {
    (1..=rake.wagons_needed(quantity_tonnes)).collect()
}

// ==========================================
// 输出对象
// ==========================================

/// 成本明细（均已取整）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub loading_cost: f64,
    pub transport_cost: f64,
    pub penalty_cost: f64,
    pub idle_freight_cost: f64, // 未建模，恒为 0
    pub total_cost: f64,
}

/// 订单分配明细
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAllocation {
    pub order_id: String,
    pub customer_id: String,
    pub quantity_allocated_tonnes: f64,
    pub assigned_wagons: Vec<u32>,
    pub estimated_arrival: DateTime<Utc>,
}

/// 已编组车底
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRake {
    pub planned_rake_id: String,
    pub rake_id: String,
    pub wagon_type: String,
    pub num_wagons: u32,
    pub loading_point_id: String,
    pub departure_time: DateTime<Utc>,
    pub primary_destination: String,
    pub secondary_destinations: Vec<String>,
    pub total_tonnage_assigned: f64,
    pub utilization_percent: f64,
    pub orders_allocated: Vec<OrderAllocation>,
    pub cost_breakdown: CostBreakdown,
    pub sla_status: SlaStatus,
    pub risk_flag: RiskFlag,
    pub cost_multiplier: f64,
    pub explanation_tags: Vec<String>,
}
