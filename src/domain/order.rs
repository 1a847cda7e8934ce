// ==========================================
// 铁路装车编组决策支持系统 - 订单领域模型
// ==========================================
// 红线: 订单只被消费一次（上车底 或 转公路）
// ==========================================

use crate::domain::types::PreferredMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Order - 发运订单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,             // 订单ID
    pub customer_id: String,          // 客户ID
    pub destination: String,          // 目的地
    pub material_id: String,          // 物料ID
    pub quantity_tonnes: f64,         // 数量 (吨)
    pub priority: u32,                // 优先级 (1 最高)
    pub due_date: DateTime<Utc>,      // 交期
    #[serde(default)]
    pub penalty_rate_per_day: f64,    // 延误罚金 (每天)
    #[serde(default)]
    pub preferred_mode: PreferredMode, // 偏好运输方式
    #[serde(default)]
    pub partial_allowed: bool,        // 是否允许拆分
}

impl Order {
    /// 是否高优先级订单
    pub fn is_high_priority(&self, threshold: u32) -> bool {
        self.priority <= threshold
    }

    /// 有效日罚金费率（未填或非正时使用默认费率）
    pub fn effective_penalty_rate(&self, default_rate: f64) -> f64 {
        if self.penalty_rate_per_day > 0.0 {
            self.penalty_rate_per_day
        } else {
            default_rate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_order(priority: u32, penalty: f64) -> Order {
        Order {
            order_id: "ORD_001".to_string(),
            customer_id: "CUST".to_string(),
            destination: "DELHI".to_string(),
            material_id: "HRC".to_string(),
            quantity_tonnes: 28.5,
            priority,
            due_date: Utc.with_ymd_and_hms(2024, 1, 17, 10, 0, 0).unwrap(),
            penalty_rate_per_day: penalty,
            preferred_mode: PreferredMode::Rail,
            partial_allowed: false,
        }
    }

    #[test]
    fn test_high_priority_threshold() {
        assert!(create_test_order(1, 500.0).is_high_priority(2));
        assert!(create_test_order(2, 500.0).is_high_priority(2));
        assert!(!create_test_order(3, 500.0).is_high_priority(2));
    }

    #[test]
    fn test_effective_penalty_rate_falls_back() {
        assert_eq!(create_test_order(1, 600.0).effective_penalty_rate(500.0), 600.0);
        assert_eq!(create_test_order(1, 0.0).effective_penalty_rate(500.0), 500.0);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "order_id": "ORD_X",
            "customer_id": "C",
            "destination": "PUNE",
            "material_id": "HRC",
            "quantity_tonnes": 15.5,
            "priority": 2,
            "due_date": "2024-01-19T12:00:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.preferred_mode, PreferredMode::Either);
        assert!(!order.partial_allowed);
        assert_eq!(order.penalty_rate_per_day, 0.0);
    }
}
