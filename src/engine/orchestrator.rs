// ==========================================
// 铁路装车编组决策支持系统 - 引擎编排器
// ==========================================
// 用途: 协调各引擎的执行顺序，产出一次完整的优化结果
// 流程: 兼容索引 → 基准成本 → 贪心分配 → 成本/SLA/风险评估
//       → 运输方式分配 → 生产建议 → KPI 汇总
// ==========================================
// 红线: 每次运行只使用自己的工作副本，可并发调用
// ==========================================

use crate::config::{CostParameters, OptimizationConfig};
use crate::domain::dataset::InputDataset;
use crate::domain::kpi::OptimizeRakesResponse;
use crate::domain::order::Order;
use crate::domain::plan::PlannedRake;
use crate::domain::types::SolverStatus;
use crate::engine::aggregator::{late_or_at_risk_orders, KpiAggregator};
use crate::engine::allocator::GreedyAllocator;
use crate::engine::assignment::ModeAssigner;
use crate::engine::baseline::BaselineCostEstimator;
use crate::engine::compatibility::CompatibilityIndex;
use crate::engine::cost_evaluator::CostSlaEvaluator;
use crate::engine::production::ProductionAdvisor;
use crate::engine::risk::RiskClassifier;
use chrono::{DateTime, SecondsFormat, Utc};
use std::time::Instant;
use tracing::{debug, info, info_span};
use uuid::Uuid;

/// 优化编号: "OPT_" + UTC 时间 yyyyMMddHHmmss
pub fn optimization_id(now: DateTime<Utc>) -> String {
    format!("OPT_{}", now.format("%Y%m%d%H%M%S"))
}

// ==========================================
// RakeOptimizer - 引擎编排器
// ==========================================
pub struct RakeOptimizer<R>
where
    R: RiskClassifier,
{
    params: CostParameters,
    classifier: R,
}

impl<R> RakeOptimizer<R>
where
    R: RiskClassifier,
{
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - params: 成本参数
    /// - classifier: 风险分类器
    pub fn new(params: CostParameters, classifier: R) -> Self {
        Self { params, classifier }
    }

    pub fn cost_parameters(&self) -> &CostParameters {
        &self.params
    }

    pub fn classifier(&self) -> &R {
        &self.classifier
    }

    /// 执行一次完整优化
    ///
    /// 输入须已通过校验；查找未命中走兜底常量，不会报错。
    ///
    /// # 参数
    /// - dataset: 输入快照（只读）
    /// - config: 优化配置
    /// - now: 当前时间（优化编号、时间戳、公路发运时间）
    pub fn run(
        &self,
        dataset: &InputDataset,
        config: &OptimizationConfig,
        now: DateTime<Utc>,
    ) -> OptimizeRakesResponse {
        let run_id = Uuid::new_v4();
        let span = info_span!("optimize_rakes", run_id = %run_id);
        let _guard = span.enter();
        let started = Instant::now();

        info!(
            orders_count = dataset.orders.len(),
            rakes_count = dataset.rakes.len(),
            stockyards_count = dataset.stockyards.len(),
            routes_count = dataset.routes_costs.len(),
            "开始执行车底优化"
        );
        debug!(
            config_snapshot = %serde_json::json!({
                "optimization": config,
                "cost_parameters": &self.params,
            }),
            "本次运行配置快照"
        );

        // ==========================================
        // 步骤1: 兼容索引 + 全公路基准成本
        // ==========================================
        let index = CompatibilityIndex::build(&dataset.product_wagon_matrix);
        let baseline_cost =
            BaselineCostEstimator::new(&self.params).estimate(&dataset.orders, &dataset.routes_costs);

        // ==========================================
        // 步骤2: 两轮贪心分配
        // ==========================================
        let outcome = GreedyAllocator::new(self.params.rake_reservation_ratio).allocate(
            &dataset.orders,
            &dataset.rakes,
            &dataset.stockyards,
            &dataset.loading_points,
            &index,
            config.allow_multi_destination_rakes,
        );

        // ==========================================
        // 步骤3: 逐方案评估成本/SLA/风险
        // ==========================================
        let evaluator = CostSlaEvaluator::new(&self.params, config, &dataset.routes_costs);
        let planned_rakes: Vec<PlannedRake> = outcome
            .plans
            .iter()
            .enumerate()
            .map(|(i, plan)| {
                evaluator.evaluate(plan, &format!("PLANNED_RAKE_{}", i + 1), &self.classifier)
            })
            .collect();

        // ==========================================
        // 步骤4: 运输方式分配 + 生产建议
        // ==========================================
        let unassigned: Vec<Order> = outcome.unassigned.iter().map(|(o, _)| o.clone()).collect();
        let rail_vs_road_assignment = ModeAssigner::new(&self.params, &dataset.routes_costs)
            .assign(&planned_rakes, &unassigned, now);
        let production_suggestions = ProductionAdvisor::new(&self.params)
            .suggest(&dataset.orders, &dataset.stockyards);

        // ==========================================
        // 步骤5: KPI 汇总
        // ==========================================
        let kpi_summary =
            KpiAggregator::new(&self.params).summarize(&planned_rakes, &dataset.orders, baseline_cost);
        let late_or_at_risk = late_or_at_risk_orders(&planned_rakes);

        let execution_time_seconds = started.elapsed().as_secs_f64();
        info!(
            planned_rakes = planned_rakes.len(),
            road_orders = unassigned.len(),
            total_cost = kpi_summary.total_cost_optimized,
            baseline_cost,
            late_or_at_risk = late_or_at_risk.len(),
            execution_time_seconds,
            "车底优化完成"
        );

        OptimizeRakesResponse {
            success: true,
            optimization_id: optimization_id(now),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            solver_status: SolverStatus::Optimal,
            execution_time_seconds,
            kpi_summary,
            planned_rakes,
            rail_vs_road_assignment,
            production_suggestions,
            late_or_at_risk_orders: late_or_at_risk,
        }
    }
}
