// ==========================================
// 铁路装车编组决策支持系统 - 生产建议生成器
// ==========================================
// 职责: 按物料汇总需求与库存，库存覆盖不足时给出增产建议
// 规则: 库存 < 需求 × 覆盖比例(0.5) → 建议产量 = 需求 - 库存 + 缓冲量(100)
// 说明: 库存取输入堆场快照，不扣减本次已上车底的吨位
// ==========================================

use crate::config::CostParameters;
use crate::domain::assignment::ProductionSuggestion;
use crate::domain::inventory::Stockyard;
use crate::domain::order::Order;
use tracing::debug;

/// 单个物料的需求汇总
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDemand {
    pub material_id: String,
    pub demand_tonnes: f64,
    pub high_priority_orders: usize,
}

// ==========================================
// ProductionAdvisor - 生产建议生成器
// ==========================================
pub struct ProductionAdvisor<'a> {
    params: &'a CostParameters,
}

impl<'a> ProductionAdvisor<'a> {
    pub fn new(params: &'a CostParameters) -> Self {
        Self { params }
    }

    /// 按物料首次出现顺序汇总需求
    pub fn aggregate_demand(&self, orders: &[Order]) -> Vec<MaterialDemand> {
        let mut demands: Vec<MaterialDemand> = Vec::new();
        for order in orders {
            let high = order.is_high_priority(self.params.high_priority_threshold) as usize;
            match demands.iter_mut().find(|d| d.material_id == order.material_id) {
                Some(d) => {
                    d.demand_tonnes += order.quantity_tonnes;
                    d.high_priority_orders += high;
                }
                None => demands.push(MaterialDemand {
                    material_id: order.material_id.clone(),
                    demand_tonnes: order.quantity_tonnes,
                    high_priority_orders: high,
                }),
            }
        }
        demands
    }

    /// 生成生产建议
    pub fn suggest(&self, orders: &[Order], stockyards: &[Stockyard]) -> Vec<ProductionSuggestion> {
        let suggestions: Vec<ProductionSuggestion> = self
            .aggregate_demand(orders)
            .into_iter()
            .filter_map(|demand| {
                let inventory: f64 = stockyards
                    .iter()
                    .filter(|s| s.material_id == demand.material_id)
                    .map(|s| s.available_tonnage)
                    .sum();

                if inventory >= demand.demand_tonnes * self.params.production_inventory_cover_ratio {
                    return None;
                }

                let cover_pct = if demand.demand_tonnes > 0.0 {
                    inventory / demand.demand_tonnes * 100.0
                } else {
                    0.0
                };
                Some(ProductionSuggestion {
                    recommended_production_tonnage: demand.demand_tonnes - inventory
                        + self.params.production_buffer_tonnes,
                    reasoning: format!(
                        "High demand ({}t) + {} high-priority orders. Current inventory covers only {:.1}% of demand.",
                        demand.demand_tonnes, demand.high_priority_orders, cover_pct
                    ),
                    material_id: demand.material_id,
                    current_inventory_tonnes: inventory,
                })
            })
            .collect();

        debug!(suggestions_count = suggestions.len(), "生产建议生成完成");
        suggestions
    }
}
