// ==========================================
// 铁路装车编组决策支持系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、容量约束接口
// 红线: 不含 I/O 逻辑,不含引擎逻辑
// ==========================================

pub mod assignment;
pub mod capacity;
pub mod dataset;
pub mod inventory;
pub mod kpi;
pub mod order;
pub mod plan;
pub mod rake;
pub mod route;
pub mod types;

// 重导出核心类型
pub use assignment::{ProductionSuggestion, RailVsRoadAssignment};
pub use capacity::CapacityConstraint;
pub use dataset::InputDataset;
pub use inventory::{LoadingPoint, Stockyard};
pub use kpi::{KpiSummary, OptimizeRakesResponse};
pub use order::Order;
pub use plan::{
    allocate_wagons, AssignedOrder, CostBreakdown, OrderAllocation, PlannedRake,
    RakeAllocationPlan,
};
pub use rake::{ProductWagonCompatibility, Rake};
pub use route::{find_route, find_route_to, RouteCost};
pub use types::{PreferredMode, RiskFlag, SlaStatus, SolverStatus, TransportMode};
