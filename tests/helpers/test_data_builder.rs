// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rake_allocation_dss::domain::{
    InputDataset, LoadingPoint, Order, PreferredMode, ProductWagonCompatibility, Rake, RouteCost,
    Stockyard, TransportMode,
};

/// 测试基准时间（车底默认可用时间）
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 14, 8, 0, 0).unwrap()
}

// ==========================================
// Order 构建器
// ==========================================

pub struct OrderBuilder {
    order_id: String,
    customer_id: String,
    destination: String,
    material_id: String,
    quantity_tonnes: f64,
    priority: u32,
    due_date: DateTime<Utc>,
    penalty_rate_per_day: f64,
    preferred_mode: PreferredMode,
}

impl OrderBuilder {
    pub fn new(order_id: &str) -> Self {
        Self {
            order_id: order_id.to_string(),
            customer_id: "CUST".to_string(),
            destination: "DELHI".to_string(),
            material_id: "HRC".to_string(),
            quantity_tonnes: 10.0,
            priority: 3,
            due_date: base_time() + Duration::hours(200),
            penalty_rate_per_day: 500.0,
            preferred_mode: PreferredMode::Either,
        }
    }

    pub fn destination(mut self, destination: &str) -> Self {
        self.destination = destination.to_string();
        self
    }

    pub fn material(mut self, material: &str) -> Self {
        self.material_id = material.to_string();
        self
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity_tonnes = quantity;
        self
    }

    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// 交期 = 基准时间 + hours
    pub fn due_in_hours(mut self, hours: i64) -> Self {
        self.due_date = base_time() + Duration::hours(hours);
        self
    }

    pub fn penalty(mut self, rate: f64) -> Self {
        self.penalty_rate_per_day = rate;
        self
    }

    pub fn build(self) -> Order {
        Order {
            order_id: self.order_id,
            customer_id: self.customer_id,
            destination: self.destination,
            material_id: self.material_id,
            quantity_tonnes: self.quantity_tonnes,
            priority: self.priority,
            due_date: self.due_date,
            penalty_rate_per_day: self.penalty_rate_per_day,
            preferred_mode: self.preferred_mode,
            partial_allowed: false,
        }
    }
}

// ==========================================
// Rake 构建器
// ==========================================

pub struct RakeBuilder {
    rake_id: String,
    wagon_type: String,
    num_wagons: u32,
    per_wagon_capacity_tonnes: f64,
    available_from_time: DateTime<Utc>,
    current_location: String,
}

impl RakeBuilder {
    pub fn new(rake_id: &str) -> Self {
        Self {
            rake_id: rake_id.to_string(),
            wagon_type: "BOXN".to_string(),
            num_wagons: 10,
            per_wagon_capacity_tonnes: 10.0,
            available_from_time: base_time(),
            current_location: "BOKARO".to_string(),
        }
    }

    pub fn wagon_type(mut self, wagon_type: &str) -> Self {
        self.wagon_type = wagon_type.to_string();
        self
    }

    /// 车辆数 × 单车载重
    pub fn wagons(mut self, num_wagons: u32, per_wagon: f64) -> Self {
        self.num_wagons = num_wagons;
        self.per_wagon_capacity_tonnes = per_wagon;
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.current_location = location.to_string();
        self
    }

    pub fn build(self) -> Rake {
        Rake {
            total_capacity_tonnes: self.num_wagons as f64 * self.per_wagon_capacity_tonnes,
            rake_id: self.rake_id,
            wagon_type: self.wagon_type,
            num_wagons: self.num_wagons,
            per_wagon_capacity_tonnes: self.per_wagon_capacity_tonnes,
            available_from_time: self.available_from_time,
            current_location: self.current_location,
        }
    }
}

// ==========================================
// InputDataset 构建器
// ==========================================

/// 默认带一个 HRC 堆场/装车点与 HRC-BOXN、CRC-BOXN 兼容规则
pub struct DatasetBuilder {
    dataset: InputDataset,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self {
            dataset: InputDataset::default(),
        }
    }

    /// 标准库存与兼容规则
    pub fn with_standard_facilities(mut self) -> Self {
        self = self
            .stockyard("SY_HRC", "HRC", 5000.0, "LP_1")
            .stockyard("SY_CRC", "CRC", 5000.0, "LP_1")
            .loading_point("LP_1", "SY_HRC", 120.0)
            .compatibility("HRC", "BOXN", true)
            .compatibility("CRC", "BOXN", true);
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.dataset.orders.push(order);
        self
    }

    pub fn rake(mut self, rake: Rake) -> Self {
        self.dataset.rakes.push(rake);
        self
    }

    pub fn stockyard(mut self, id: &str, material: &str, tonnage: f64, lp: &str) -> Self {
        self.dataset.stockyards.push(Stockyard {
            stockyard_id: id.to_string(),
            location: "BOKARO".to_string(),
            material_id: material.to_string(),
            available_tonnage: tonnage,
            safety_stock: 0.0,
            loading_point_id: lp.to_string(),
        });
        self
    }

    pub fn loading_point(mut self, id: &str, stockyard_id: &str, rate: f64) -> Self {
        self.dataset.loading_points.push(LoadingPoint {
            loading_point_id: id.to_string(),
            stockyard_id: stockyard_id.to_string(),
            max_rakes_per_day: 3,
            loading_rate_tonnes_per_hour: rate,
            operating_hours_start: 6,
            operating_hours_end: 22,
            siding_capacity_rakes: 5,
        });
        self
    }

    pub fn compatibility(mut self, material: &str, wagon_type: &str, allowed: bool) -> Self {
        self.dataset.product_wagon_matrix.push(ProductWagonCompatibility {
            material_id: material.to_string(),
            wagon_type: wagon_type.to_string(),
            max_load_per_wagon_tonnes: 25.0,
            allowed,
        });
        self
    }

    pub fn route(mut self, origin: &str, destination: &str, mode: TransportMode, transit: f64, cost: f64) -> Self {
        self.dataset.routes_costs.push(RouteCost {
            origin: origin.to_string(),
            destination: destination.to_string(),
            mode,
            distance_km: 1000.0,
            transit_time_hours: transit,
            cost_per_tonne: cost,
            idle_freight_cost_per_hour: 20.0,
        });
        self
    }

    pub fn build(self) -> InputDataset {
        self.dataset
    }
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 伪随机数据集（固定种子，可复现）
// ==========================================

/// 生成混合物料/车型/目的地的数据集
///
/// 物料 HRC/CRC/WIRE（WIRE 无兼容规则），车型 BOXN/OPEN。
pub fn random_dataset(seed: u64, orders: usize, rakes: usize) -> InputDataset {
    let mut rng = SmallRng::seed_from_u64(seed);
    let materials = ["HRC", "CRC", "WIRE"];
    let destinations = ["DELHI", "KANPUR", "PUNE"];
    let wagon_types = ["BOXN", "OPEN"];

    let mut builder = DatasetBuilder::new()
        .stockyard("SY_HRC", "HRC", 2000.0, "LP_1")
        .stockyard("SY_CRC", "CRC", 800.0, "LP_2")
        .loading_point("LP_1", "SY_HRC", 120.0)
        .loading_point("LP_2", "SY_CRC", 90.0)
        .compatibility("HRC", "BOXN", true)
        .compatibility("HRC", "OPEN", true)
        .compatibility("CRC", "BOXN", true)
        .compatibility("CRC", "OPEN", false)
        .route("BOKARO", "DELHI", TransportMode::Rail, 72.0, 350.0)
        .route("BOKARO", "KANPUR", TransportMode::Rail, 45.0, 280.0)
        .route("BOKARO", "PUNE", TransportMode::Road, 36.0, 400.0);

    for i in 0..orders {
        builder = builder.order(
            OrderBuilder::new(&format!("ORD_{:03}", i))
                .material(materials[rng.random_range(0..materials.len())])
                .destination(destinations[rng.random_range(0..destinations.len())])
                .quantity(5.0 + rng.random_range(0..400u32) as f64 / 2.0)
                .priority(rng.random_range(1..=5))
                .due_in_hours(rng.random_range(24..224))
                .penalty(100.0 * rng.random_range(1..=6u32) as f64)
                .build(),
        );
    }
    for i in 0..rakes {
        builder = builder.rake(
            RakeBuilder::new(&format!("RAKE_{:03}", i))
                .wagon_type(wagon_types[rng.random_range(0..wagon_types.len())])
                .wagons(rng.random_range(5..35), rng.random_range(20..29u32) as f64)
                .build(),
        );
    }
    builder.build()
}
