// ==========================================
// 铁路装车编组决策支持系统 - 输入数据集
// ==========================================
// 一次优化的不可变输入快照（六类集合）
// ==========================================

use crate::domain::inventory::{LoadingPoint, Stockyard};
use crate::domain::order::Order;
use crate::domain::rake::{ProductWagonCompatibility, Rake};
use crate::domain::route::RouteCost;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputDataset {
    #[serde(default)]
    pub stockyards: Vec<Stockyard>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub rakes: Vec<Rake>,
    #[serde(default)]
    pub product_wagon_matrix: Vec<ProductWagonCompatibility>,
    #[serde(default)]
    pub loading_points: Vec<LoadingPoint>,
    #[serde(default)]
    pub routes_costs: Vec<RouteCost>,
}
