// ==========================================
// 铁路装车编组决策支持系统 - 输入校验器
// ==========================================
// 职责: 算法运行前的输入校验，收集全部违规，不在首个违规处停止
// 红线: 校验失败的输入不会被部分处理
// ==========================================

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::config::OptimizationConfig;
use crate::domain::dataset::InputDataset;
use std::collections::HashSet;
use tracing::error;

// ==========================================
// 违规类型
// ==========================================
pub mod violation_type {
    pub const EMPTY_ORDERS: &str = "EMPTY_ORDERS";
    pub const EMPTY_RAKES: &str = "EMPTY_RAKES";
    pub const DUPLICATE_ID: &str = "DUPLICATE_ID";
    pub const INVALID_QUANTITY: &str = "INVALID_QUANTITY";
    pub const INVALID_PRIORITY: &str = "INVALID_PRIORITY";
    pub const MISSING_FIELD: &str = "MISSING_FIELD";
    pub const INVALID_RAKE: &str = "INVALID_RAKE";
    pub const CAPACITY_MISMATCH: &str = "CAPACITY_MISMATCH";
    pub const INVALID_LOADING_RATE: &str = "INVALID_LOADING_RATE";
    pub const INVALID_ROUTE: &str = "INVALID_ROUTE";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
}

fn violation(
    kind: &str,
    entity_id: &str,
    reason: String,
    details: Option<serde_json::Value>,
) -> ValidationViolation {
    ValidationViolation {
        violation_type: kind.to_string(),
        entity_id: entity_id.to_string(),
        reason,
        details,
    }
}

// ==========================================
// InputValidator - 输入校验器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InputValidator;

impl InputValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验输入，违规时返回 ValidationFailed
    pub fn ensure_valid(&self, dataset: &InputDataset, config: &OptimizationConfig) -> ApiResult<()> {
        let violations = self.validate(dataset, config);
        if violations.is_empty() {
            return Ok(());
        }

        error!(
            violations_count = violations.len(),
            first = %violations[0].violation_type,
            "输入校验失败"
        );
        Err(ApiError::ValidationFailed {
            reason: format!("{}项输入违规", violations.len()),
            violations,
        })
    }

    /// 收集全部违规
    pub fn validate(&self, dataset: &InputDataset, config: &OptimizationConfig) -> Vec<ValidationViolation> {
        let mut violations = Vec::new();
        self.check_orders(dataset, &mut violations);
        self.check_rakes(dataset, &mut violations);
        self.check_loading_points(dataset, &mut violations);
        self.check_routes(dataset, &mut violations);

        for problem in config.range_violations() {
            violations.push(violation(violation_type::INVALID_CONFIG, "config", problem, None));
        }
        violations
    }

    fn check_orders(&self, dataset: &InputDataset, violations: &mut Vec<ValidationViolation>) {
        if dataset.orders.is_empty() {
            violations.push(violation(
                violation_type::EMPTY_ORDERS,
                "",
                "订单列表为空".to_string(),
                None,
            ));
            return;
        }

        let mut seen = HashSet::new();
        for order in &dataset.orders {
            let id = order.order_id.as_str();

            if id.trim().is_empty() {
                violations.push(violation(
                    violation_type::MISSING_FIELD,
                    id,
                    "订单缺少 order_id".to_string(),
                    Some(serde_json::json!({ "field": "order_id" })),
                ));
            } else if !seen.insert(id) {
                violations.push(violation(
                    violation_type::DUPLICATE_ID,
                    id,
                    format!("订单号重复: {}", id),
                    None,
                ));
            }

            for (field, value) in [
                ("material_id", &order.material_id),
                ("destination", &order.destination),
            ] {
                if value.trim().is_empty() {
                    violations.push(violation(
                        violation_type::MISSING_FIELD,
                        id,
                        format!("订单缺少 {}", field),
                        Some(serde_json::json!({ "field": field })),
                    ));
                }
            }

            if !order.quantity_tonnes.is_finite() || order.quantity_tonnes <= 0.0 {
                violations.push(violation(
                    violation_type::INVALID_QUANTITY,
                    id,
                    format!("订单吨位必须为正数，实际 {}", order.quantity_tonnes),
                    Some(serde_json::json!({ "quantity_tonnes": order.quantity_tonnes })),
                ));
            }

            if order.priority < 1 {
                violations.push(violation(
                    violation_type::INVALID_PRIORITY,
                    id,
                    format!("优先级必须 >= 1，实际 {}", order.priority),
                    None,
                ));
            }
        }
    }

    fn check_rakes(&self, dataset: &InputDataset, violations: &mut Vec<ValidationViolation>) {
        if dataset.rakes.is_empty() {
            violations.push(violation(
                violation_type::EMPTY_RAKES,
                "",
                "车底列表为空".to_string(),
                None,
            ));
            return;
        }

        let mut seen = HashSet::new();
        for rake in &dataset.rakes {
            let id = rake.rake_id.as_str();

            if !seen.insert(id) {
                violations.push(violation(
                    violation_type::DUPLICATE_ID,
                    id,
                    format!("车底号重复: {}", id),
                    None,
                ));
            }

            if rake.num_wagons == 0 || !(rake.per_wagon_capacity_tonnes > 0.0) {
                violations.push(violation(
                    violation_type::INVALID_RAKE,
                    id,
                    "车辆数与单车载重必须为正".to_string(),
                    Some(serde_json::json!({
                        "num_wagons": rake.num_wagons,
                        "per_wagon_capacity_tonnes": rake.per_wagon_capacity_tonnes,
                    })),
                ));
                continue;
            }

            if !rake.capacity_consistent() {
                violations.push(violation(
                    violation_type::CAPACITY_MISMATCH,
                    id,
                    format!(
                        "总载重 {} 与 {} × {} 不一致",
                        rake.total_capacity_tonnes, rake.num_wagons, rake.per_wagon_capacity_tonnes
                    ),
                    Some(serde_json::json!({
                        "expected": rake.num_wagons as f64 * rake.per_wagon_capacity_tonnes,
                        "actual": rake.total_capacity_tonnes,
                    })),
                ));
            }
        }
    }

    fn check_loading_points(&self, dataset: &InputDataset, violations: &mut Vec<ValidationViolation>) {
        for lp in &dataset.loading_points {
            if !(lp.loading_rate_tonnes_per_hour > 0.0) {
                violations.push(violation(
                    violation_type::INVALID_LOADING_RATE,
                    &lp.loading_point_id,
                    format!("装车速率必须为正，实际 {}", lp.loading_rate_tonnes_per_hour),
                    None,
                ));
            }
        }
    }

    fn check_routes(&self, dataset: &InputDataset, violations: &mut Vec<ValidationViolation>) {
        for route in &dataset.routes_costs {
            if route.cost_per_tonne < 0.0
                || route.transit_time_hours < 0.0
                || !route.cost_per_tonne.is_finite()
                || !route.transit_time_hours.is_finite()
            {
                let entity = format!("{}->{}:{}", route.origin, route.destination, route.mode);
                violations.push(violation(
                    violation_type::INVALID_ROUTE,
                    &entity,
                    "线路运价与在途时间不能为负".to_string(),
                    Some(serde_json::json!({
                        "cost_per_tonne": route.cost_per_tonne,
                        "transit_time_hours": route.transit_time_hours,
                    })),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::sample_dataset;

    fn kinds(violations: &[ValidationViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.violation_type.as_str()).collect()
    }

    #[test]
    fn test_sample_dataset_is_valid() {
        let validator = InputValidator::new();
        assert!(validator
            .ensure_valid(&sample_dataset(), &OptimizationConfig::default())
            .is_ok());
    }

    #[test]
    fn test_empty_collections() {
        let validator = InputValidator::new();
        let violations = validator.validate(&InputDataset::default(), &OptimizationConfig::default());
        assert_eq!(kinds(&violations), vec!["EMPTY_ORDERS", "EMPTY_RAKES"]);
    }

    #[test]
    fn test_collects_all_order_violations() {
        let mut dataset = sample_dataset();
        dataset.orders[1].order_id = dataset.orders[0].order_id.clone();
        dataset.orders[2].quantity_tonnes = -5.0;
        dataset.orders[3].priority = 0;
        dataset.orders[3].material_id = " ".to_string();

        let violations = InputValidator::new().validate(&dataset, &OptimizationConfig::default());
        assert_eq!(
            kinds(&violations),
            vec!["DUPLICATE_ID", "INVALID_QUANTITY", "MISSING_FIELD", "INVALID_PRIORITY"]
        );
        assert_eq!(violations[1].entity_id, "ORD_2024_003");
    }

    #[test]
    fn test_rake_capacity_mismatch() {
        let mut dataset = sample_dataset();
        dataset.rakes[0].total_capacity_tonnes = 950.0;
        dataset.rakes[1].num_wagons = 0;

        let violations = InputValidator::new().validate(&dataset, &OptimizationConfig::default());
        assert_eq!(kinds(&violations), vec!["CAPACITY_MISMATCH", "INVALID_RAKE"]);
    }

    #[test]
    fn test_loading_rate_route_and_config() {
        let mut dataset = sample_dataset();
        dataset.loading_points[0].loading_rate_tonnes_per_hour = 0.0;
        dataset.routes_costs[0].cost_per_tonne = -1.0;
        let config = OptimizationConfig {
            cost_vs_sla_weight: 1.5,
            ..OptimizationConfig::default()
        };

        let violations = InputValidator::new().validate(&dataset, &config);
        assert_eq!(
            kinds(&violations),
            vec!["INVALID_LOADING_RATE", "INVALID_ROUTE", "INVALID_CONFIG"]
        );
        assert_eq!(violations[1].entity_id, "BOKARO->DELHI:rail");
    }

    #[test]
    fn test_ensure_valid_error_shape() {
        let err = InputValidator::new()
            .ensure_valid(&InputDataset::default(), &OptimizationConfig::default())
            .unwrap_err();
        match err {
            ApiError::ValidationFailed { violations, reason } => {
                assert_eq!(violations.len(), 2);
                assert!(reason.contains('2'));
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
