use serde::{Deserialize, Serialize};

/// 优化配置（随请求传入）
///
/// 三项均为建议性参数：贪心排序始终按优先级进行，
/// 权重与利用率阈值只体现在解释标签中，不作为硬约束。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationConfig {
    /// 成本-SLA 权重（0~1，越大越偏成本）
    #[serde(default = "default_cost_vs_sla_weight")]
    pub cost_vs_sla_weight: f64,

    /// 是否允许多目的地车底（记录次要目的地）
    #[serde(default = "default_allow_multi_destination_rakes")]
    pub allow_multi_destination_rakes: bool,

    /// 最低利用率阈值（百分比）
    #[serde(default = "default_min_utilization_percent")]
    pub min_utilization_percent: f64,
}

fn default_cost_vs_sla_weight() -> f64 {
    0.6
}

fn default_allow_multi_destination_rakes() -> bool {
    true
}

fn default_min_utilization_percent() -> f64 {
    75.0
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            cost_vs_sla_weight: default_cost_vs_sla_weight(),
            allow_multi_destination_rakes: default_allow_multi_destination_rakes(),
            min_utilization_percent: default_min_utilization_percent(),
        }
    }
}

impl OptimizationConfig {
    /// 范围校验，返回全部越界项
    pub fn range_violations(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !(0.0..=1.0).contains(&self.cost_vs_sla_weight) {
            problems.push(format!(
                "cost_vs_sla_weight={} 超出范围 [0, 1]",
                self.cost_vs_sla_weight
            ));
        }
        if !(0.0..=100.0).contains(&self.min_utilization_percent) {
            problems.push(format!(
                "min_utilization_percent={} 超出范围 [0, 100]",
                self.min_utilization_percent
            ));
        }
        problems
    }
}
