// ==========================================
// 铁路装车编组决策支持系统 - 引擎层
// ==========================================
// 职责: 实现分配与成本规则，纯同步计算，不做 I/O
// 红线: 所有跳过/兜底必须输出 reason 或日志
// ==========================================

pub mod aggregator;
pub mod allocator;
pub mod assignment;
pub mod baseline;
pub mod compatibility;
pub mod cost_evaluator;
pub mod orchestrator;
pub mod production;
pub mod risk;

// 重导出核心引擎
pub use aggregator::{late_or_at_risk_orders, on_time_percent, KpiAggregator};
pub use allocator::{best_fit_rake, sort_by_priority, AllocationOutcome, GreedyAllocator};
pub use assignment::ModeAssigner;
pub use baseline::BaselineCostEstimator;
pub use compatibility::CompatibilityIndex;
pub use cost_evaluator::{classify_sla, CostSlaEvaluator};
pub use orchestrator::{optimization_id, RakeOptimizer};
pub use production::{MaterialDemand, ProductionAdvisor};
pub use risk::{RiskAssessment, RiskClassifier, RiskFeatures, RuleBasedRiskClassifier};
