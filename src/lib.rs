// ==========================================
// 铁路装车编组决策支持系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统，输出可解释的车底分配建议
// 核心: 两轮贪心车底分配 + 成本/SLA/风险评估
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 优化配置与成本参数
pub mod config;

// 引擎层 - 分配与成本规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// API 层 - 对外调用入口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{PreferredMode, RiskFlag, SlaStatus, SolverStatus, TransportMode};

// 领域实体
pub use domain::{
    InputDataset, KpiSummary, LoadingPoint, OptimizeRakesResponse, Order, PlannedRake,
    ProductWagonCompatibility, ProductionSuggestion, RailVsRoadAssignment, Rake,
    RakeAllocationPlan, RouteCost, Stockyard,
};

// 配置
pub use config::{ConfigManager, CostParameters, OptimizationConfig};

// 引擎
pub use engine::{
    CompatibilityIndex, CostSlaEvaluator, GreedyAllocator, RakeOptimizer, RiskAssessment,
    RiskClassifier, RiskFeatures, RuleBasedRiskClassifier,
};

// API
pub use api::{ApiError, ApiResult, RakePlannerApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "铁路装车编组决策支持系统";
