// ==========================================
// 铁路装车编组决策支持系统 - 车底与车型兼容领域模型
// ==========================================
// 红线: total_capacity_tonnes = num_wagons × per_wagon_capacity_tonnes
// 红线: 物料只能装入兼容矩阵标记 allowed 的车型
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 容量一致性校验容差（吨）
pub const CAPACITY_TOLERANCE_T: f64 = 1e-6;

// ==========================================
// Rake - 车底
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rake {
    pub rake_id: String,                    // 车底ID
    pub wagon_type: String,                 // 车型 (BOXN 等)
    pub num_wagons: u32,                    // 车辆数
    pub per_wagon_capacity_tonnes: f64,     // 单车载重 (吨)
    pub total_capacity_tonnes: f64,         // 总载重 (吨)
    pub available_from_time: DateTime<Utc>, // 可用时间
    pub current_location: String,           // 当前位置
}

impl Rake {
    /// 容量不变量是否成立
    pub fn capacity_consistent(&self) -> bool {
        let expected = self.num_wagons as f64 * self.per_wagon_capacity_tonnes;
        (expected - self.total_capacity_tonnes).abs() <= CAPACITY_TOLERANCE_T
    }

    /// 装载指定吨位所需车辆数（向上取整，不超过车底车辆数）
    pub fn wagons_needed(&self, quantity_tonnes: f64) -> u32 {
        if self.per_wagon_capacity_tonnes <= 0.0 {
            return 0;
        }
        let needed = (quantity_tonnes / self.per_wagon_capacity_tonnes).ceil();
        if needed <= 0.0 {
            0
        } else {
            (needed as u32).min(self.num_wagons)
        }
    }
}

// ==========================================
// ProductWagonCompatibility - 物料-车型兼容矩阵
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWagonCompatibility {
    pub material_id: String,             // 物料ID
    pub wagon_type: String,              // 车型
    pub max_load_per_wagon_tonnes: f64,  // 单车最大装载
    pub allowed: bool,                   // 是否允许
}
