// ==========================================
// 铁路装车编组决策支持系统 - 车底计划 API
// ==========================================
// 职责: 校验 → 运行引擎 → 返回完整结果或结构化错误
// 红线: 运行是全有或全无，内部故障不输出部分方案
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::InputValidator;
use crate::config::{ConfigManager, CostParameters, OptimizationConfig};
use crate::domain::dataset::InputDataset;
use crate::domain::kpi::OptimizeRakesResponse;
use crate::engine::orchestrator::RakeOptimizer;
use crate::engine::risk::{RiskClassifier, RuleBasedRiskClassifier};
use crate::importer::{sample_dataset, DatasetLoader};
use chrono::{DateTime, Utc};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info};

/// 从 panic 载荷中取出可读信息
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "未知内部错误".to_string()
    }
}

// ==========================================
// RakePlannerApi - 车底计划 API
// ==========================================

/// 车底计划API
///
/// 职责：
/// 1. 输入校验（收集全部违规）
/// 2. 调用引擎编排器
/// 3. 捕获内部故障并转换为 PlanningFailed
pub struct RakePlannerApi<R>
where
    R: RiskClassifier,
{
    optimizer: RakeOptimizer<R>,
    validator: InputValidator,
}

impl RakePlannerApi<RuleBasedRiskClassifier> {
    /// 使用默认成本参数与内置规则分类器
    pub fn with_defaults() -> Self {
        Self::new(CostParameters::default(), RuleBasedRiskClassifier::new())
    }
}

impl<R> RakePlannerApi<R>
where
    R: RiskClassifier,
{
    /// 创建新的RakePlannerApi实例
    pub fn new(params: CostParameters, classifier: R) -> Self {
        Self {
            optimizer: RakeOptimizer::new(params, classifier),
            validator: InputValidator::new(),
        }
    }

    /// 从配置管理器创建（使用其中的成本参数）
    pub fn from_config(manager: &ConfigManager, classifier: R) -> Self {
        Self::new(manager.cost_parameters().clone(), classifier)
    }

    pub fn cost_parameters(&self) -> &CostParameters {
        self.optimizer.cost_parameters()
    }

    /// 执行优化（当前时间取系统时钟）
    pub fn optimize(
        &self,
        dataset: &InputDataset,
        config: &OptimizationConfig,
    ) -> ApiResult<OptimizeRakesResponse> {
        self.optimize_at(dataset, config, Utc::now())
    }

    /// 执行优化（指定当前时间）
    ///
    /// # 返回
    /// - Ok(OptimizeRakesResponse): 完整结果
    /// - Err(ApiError::ValidationFailed): 输入违规
    /// - Err(ApiError::PlanningFailed): 内部故障
    pub fn optimize_at(
        &self,
        dataset: &InputDataset,
        config: &OptimizationConfig,
        now: DateTime<Utc>,
    ) -> ApiResult<OptimizeRakesResponse> {
        self.validator.ensure_valid(dataset, config)?;

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.optimizer.run(dataset, config, now)
        }));

        match result {
            Ok(response) => {
                info!(
                    optimization_id = %response.optimization_id,
                    planned_rakes = response.planned_rakes.len(),
                    "优化请求完成"
                );
                Ok(response)
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!(message = %message, "车底计划内部故障");
                Err(ApiError::PlanningFailed(message))
            }
        }
    }

    /// 使用内置演示数据集与默认配置运行
    pub fn optimize_demo(&self, now: DateTime<Utc>) -> ApiResult<OptimizeRakesResponse> {
        self.optimize_at(&sample_dataset(), &OptimizationConfig::default(), now)
    }

    /// 解析 JSON 请求体（数据集 + 可选 config）并运行
    pub fn optimize_json(&self, body: &str, now: DateTime<Utc>) -> ApiResult<OptimizeRakesResponse> {
        let request = DatasetLoader::from_json_str(body)?;
        let config = request.effective_config();
        self.optimize_at(&request.dataset, &config, now)
    }
}
