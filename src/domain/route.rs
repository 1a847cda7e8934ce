// ==========================================
// 铁路装车编组决策支持系统 - 线路成本领域模型
// ==========================================
// 同一目的地可有多条记录（按 origin + mode 区分）
// 查询规则: 精确匹配 origin + destination + mode，未命中走兜底常量
// ==========================================

use crate::domain::types::TransportMode;
use serde::{Deserialize, Serialize};

// ==========================================
// RouteCost - 线路成本
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCost {
    pub origin: String,                  // 起点
    pub destination: String,             // 终点
    pub mode: TransportMode,             // 运输方式
    pub distance_km: f64,                // 距离 (km)
    pub transit_time_hours: f64,         // 在途时间 (小时)
    pub cost_per_tonne: f64,             // 运价 (每吨)
    #[serde(default)]
    pub idle_freight_cost_per_hour: f64, // 空置运费 (每小时)
}

impl RouteCost {
    /// 有效在途小时数；0 或非正值视为未填，由调用方走兜底值
    pub fn usable_transit_hours(&self) -> Option<f64> {
        (self.transit_time_hours > 0.0).then_some(self.transit_time_hours)
    }
}

/// 精确匹配 origin + destination + mode（按输入顺序取第一条）
pub fn find_route<'a>(
    routes: &'a [RouteCost],
    origin: &str,
    destination: &str,
    mode: TransportMode,
) -> Option<&'a RouteCost> {
    routes
        .iter()
        .find(|r| r.origin == origin && r.destination == destination && r.mode == mode)
}

/// 按 destination + mode 匹配，忽略起点（公路兜底/基准成本使用）
pub fn find_route_to<'a>(
    routes: &'a [RouteCost],
    destination: &str,
    mode: TransportMode,
) -> Option<&'a RouteCost> {
    routes
        .iter()
        .find(|r| r.destination == destination && r.mode == mode)
}
