// ==========================================
// 铁路装车编组决策支持系统 - 物料-车型兼容索引
// ==========================================
// 职责: material_id → 兼容规则列表
// 红线: 无规则视为不兼容（fail closed）
// ==========================================

use crate::domain::order::Order;
use crate::domain::rake::{ProductWagonCompatibility, Rake};
use std::collections::HashMap;

// ==========================================
// CompatibilityIndex - 兼容索引
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct CompatibilityIndex {
    by_material: HashMap<String, Vec<ProductWagonCompatibility>>,
}

impl CompatibilityIndex {
    /// 由兼容矩阵构建索引（同一物料的规则保持输入顺序）
    pub fn build(rules: &[ProductWagonCompatibility]) -> Self {
        let mut by_material: HashMap<String, Vec<ProductWagonCompatibility>> = HashMap::new();
        for rule in rules {
            by_material
                .entry(rule.material_id.clone())
                .or_default()
                .push(rule.clone());
        }
        Self { by_material }
    }

    /// 某物料的全部规则
    pub fn rules_for(&self, material_id: &str) -> &[ProductWagonCompatibility] {
        self.by_material
            .get(material_id)
            .map(|rules| rules.as_slice())
            .unwrap_or(&[])
    }

    /// 物料是否可装入指定车型
    ///
    /// 该物料下任一车型匹配的规则标记为允许即兼容；没有规则时返回 false。
    pub fn allows(&self, material_id: &str, wagon_type: &str) -> bool {
        self.rules_for(material_id)
            .iter()
            .any(|rule| rule.wagon_type == wagon_type && rule.allowed)
    }

    /// 订单与车底是否兼容
    pub fn is_compatible(&self, order: &Order, rake: &Rake) -> bool {
        self.allows(&order.material_id, &rake.wagon_type)
    }

    pub fn material_count(&self) -> usize {
        self.by_material.len()
    }
}
