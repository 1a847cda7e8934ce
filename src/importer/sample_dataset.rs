// ==========================================
// 铁路装车编组决策支持系统 - 内置演示数据集
// ==========================================
// 场景: 博卡罗 / 杜尔加布尔两厂，3 堆场 / 4 订单 / 2 车底
// 用途: 演示运行、命令行 --demo、端到端测试
// ==========================================

use crate::domain::dataset::InputDataset;
use crate::domain::inventory::{LoadingPoint, Stockyard};
use crate::domain::order::Order;
use crate::domain::rake::{ProductWagonCompatibility, Rake};
use crate::domain::route::RouteCost;
use crate::domain::types::{PreferredMode, TransportMode};
use chrono::{DateTime, TimeZone, Utc};

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

fn stockyard(id: &str, location: &str, material: &str, tonnage: f64, safety: f64, lp: &str) -> Stockyard {
    Stockyard {
        stockyard_id: id.to_string(),
        location: location.to_string(),
        material_id: material.to_string(),
        available_tonnage: tonnage,
        safety_stock: safety,
        loading_point_id: lp.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    customer: &str,
    destination: &str,
    material: &str,
    quantity: f64,
    priority: u32,
    due_date: DateTime<Utc>,
    penalty: f64,
    mode: PreferredMode,
    partial: bool,
) -> Order {
    Order {
        order_id: id.to_string(),
        customer_id: customer.to_string(),
        destination: destination.to_string(),
        material_id: material.to_string(),
        quantity_tonnes: quantity,
        priority,
        due_date,
        penalty_rate_per_day: penalty,
        preferred_mode: mode,
        partial_allowed: partial,
    }
}

fn boxn_rake(id: &str, available: DateTime<Utc>, location: &str) -> Rake {
    Rake {
        rake_id: id.to_string(),
        wagon_type: "BOXN".to_string(),
        num_wagons: 34,
        per_wagon_capacity_tonnes: 28.0,
        total_capacity_tonnes: 952.0,
        available_from_time: available,
        current_location: location.to_string(),
    }
}

fn rule(material: &str, wagon: &str, max_load: f64, allowed: bool) -> ProductWagonCompatibility {
    ProductWagonCompatibility {
        material_id: material.to_string(),
        wagon_type: wagon.to_string(),
        max_load_per_wagon_tonnes: max_load,
        allowed,
    }
}

fn route(origin: &str, destination: &str, mode: TransportMode, km: f64, hours: f64, cost: f64, idle: f64) -> RouteCost {
    RouteCost {
        origin: origin.to_string(),
        destination: destination.to_string(),
        mode,
        distance_km: km,
        transit_time_hours: hours,
        cost_per_tonne: cost,
        idle_freight_cost_per_hour: idle,
    }
}

/// 内置演示数据集
///
/// 订单目的地为首字母大写写法，线路表为全大写，精确匹配下会走兜底运价。
pub fn sample_dataset() -> InputDataset {
    use PreferredMode::{Either, Rail, Road};
    use TransportMode as M;

    InputDataset {
        stockyards: vec![
            stockyard("BOKARO_SY_1", "Bokaro, Jharkhand", "HRC", 450.5, 50.0, "BOKARO_LP_1"),
            stockyard("BOKARO_SY_2", "Bokaro, Jharkhand", "CRC", 320.0, 40.0, "BOKARO_LP_1"),
            stockyard("DURGAPUR_SY_1", "Durgapur, West Bengal", "HRC", 280.5, 35.0, "DURGAPUR_LP_1"),
        ],
        orders: vec![
            order("ORD_2024_001", "ABC_PIPES", "Delhi", "HRC", 28.5, 1, at(2024, 1, 17, 10), 500.0, Rail, false),
            order("ORD_2024_002", "XYZ_AUTO", "Ghaziabad", "HRC", 45.0, 1, at(2024, 1, 17, 14), 600.0, Rail, false),
            order("ORD_2024_003", "MNO_MILLS", "Kanpur", "CRC", 35.0, 3, at(2024, 1, 18, 8), 300.0, Either, true),
            order("ORD_2024_004", "PQR_TRADE", "Pune", "HRC", 15.5, 2, at(2024, 1, 19, 12), 400.0, Road, false),
        ],
        rakes: vec![
            boxn_rake("RAKE_001", at(2024, 1, 14, 8), "BOKARO"),
            boxn_rake("RAKE_002", at(2024, 1, 14, 16), "DURGAPUR"),
        ],
        product_wagon_matrix: vec![
            rule("HRC", "BOXN", 26.0, true),
            rule("HRC", "OPEN", 28.0, true),
            rule("CRC", "BOXN", 24.0, true),
            rule("CRC", "TANK", 25.0, false),
        ],
        loading_points: vec![
            LoadingPoint {
                loading_point_id: "BOKARO_LP_1".to_string(),
                stockyard_id: "BOKARO_SY_1".to_string(),
                max_rakes_per_day: 3,
                loading_rate_tonnes_per_hour: 120.0,
                operating_hours_start: 6,
                operating_hours_end: 22,
                siding_capacity_rakes: 5,
            },
            LoadingPoint {
                loading_point_id: "DURGAPUR_LP_1".to_string(),
                stockyard_id: "DURGAPUR_SY_1".to_string(),
                max_rakes_per_day: 2,
                loading_rate_tonnes_per_hour: 100.0,
                operating_hours_start: 8,
                operating_hours_end: 20,
                siding_capacity_rakes: 4,
            },
        ],
        routes_costs: vec![
            route("BOKARO", "DELHI", M::Rail, 1400.0, 72.0, 350.0, 25.0),
            route("BOKARO", "GHAZIABAD", M::Rail, 1350.0, 68.0, 345.0, 25.0),
            route("BOKARO", "KANPUR", M::Rail, 900.0, 45.0, 280.0, 20.0),
            route("BOKARO", "KANPUR", M::Road, 750.0, 24.0, 280.0, 20.0),
            route("DURGAPUR", "KANPUR", M::Rail, 400.0, 20.0, 180.0, 15.0),
            route("BOKARO", "PUNE", M::Road, 1200.0, 36.0, 400.0, 25.0),
            route("BOKARO", "DELHI", M::Road, 1380.0, 42.0, 380.0, 28.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_shape() {
        let dataset = sample_dataset();
        assert_eq!(dataset.stockyards.len(), 3);
        assert_eq!(dataset.orders.len(), 4);
        assert_eq!(dataset.rakes.len(), 2);
        assert_eq!(dataset.product_wagon_matrix.len(), 4);
        assert_eq!(dataset.loading_points.len(), 2);
        assert_eq!(dataset.routes_costs.len(), 7);
    }

    #[test]
    fn test_sample_rakes_are_consistent() {
        for rake in sample_dataset().rakes {
            assert!(rake.capacity_consistent());
        }
    }

    #[test]
    fn test_sample_dates() {
        let dataset = sample_dataset();
        assert_eq!(dataset.orders[0].due_date.to_rfc3339(), "2024-01-17T10:00:00+00:00");
    }
}
