// ==========================================
// 铁路装车编组决策支持系统 - 库存与装车点领域模型
// ==========================================
// 职责: 堆场 (Stockyard) 与装车点 (LoadingPoint)
// 红线: 堆场吨位只在单次分配的工作副本中扣减，不回写输入
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Stockyard - 堆场
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stockyard {
    pub stockyard_id: String,      // 堆场ID
    pub location: String,          // 位置
    pub material_id: String,       // 物料ID
    pub available_tonnage: f64,    // 可用吨位
    #[serde(default)]
    pub safety_stock: f64,         // 安全库存吨位
    pub loading_point_id: String,  // 所属装车点
}

// ==========================================
// LoadingPoint - 装车点
// ==========================================
// 本引擎只用 loading_rate 计算装车成本
// max_rakes_per_day / siding_capacity 不作为硬约束
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingPoint {
    pub loading_point_id: String,          // 装车点ID
    pub stockyard_id: String,              // 所属堆场
    pub max_rakes_per_day: u32,            // 每日最大车底数
    pub loading_rate_tonnes_per_hour: f64, // 装车速率 (吨/小时)
    pub operating_hours_start: u32,        // 作业开始 (时)
    pub operating_hours_end: u32,          // 作业结束 (时)
    pub siding_capacity_rakes: u32,        // 专用线容量 (车底数)
}

impl LoadingPoint {
    /// 每日作业小时数（跨零点时按环绕计算）
    pub fn operating_hours_per_day(&self) -> u32 {
        if self.operating_hours_end >= self.operating_hours_start {
            self.operating_hours_end - self.operating_hours_start
        } else {
            24 - self.operating_hours_start + self.operating_hours_end
        }
    }

    /// 装载指定吨位所需小时数
    pub fn loading_hours(&self, tonnage: f64) -> f64 {
        tonnage / self.loading_rate_tonnes_per_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_loading_point(start: u32, end: u32) -> LoadingPoint {
        LoadingPoint {
            loading_point_id: "LP_1".to_string(),
            stockyard_id: "SY_1".to_string(),
            max_rakes_per_day: 3,
            loading_rate_tonnes_per_hour: 120.0,
            operating_hours_start: start,
            operating_hours_end: end,
            siding_capacity_rakes: 5,
        }
    }

    #[test]
    fn test_operating_hours() {
        assert_eq!(create_test_loading_point(6, 22).operating_hours_per_day(), 16);
        assert_eq!(create_test_loading_point(22, 6).operating_hours_per_day(), 8);
    }

    #[test]
    fn test_loading_hours() {
        let lp = create_test_loading_point(6, 22);
        assert_eq!(lp.loading_hours(240.0), 2.0);
    }
}
