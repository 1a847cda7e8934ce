// ==========================================
// 铁路装车编组决策支持系统 - API 层
// ==========================================
// 职责: 对外库调用入口，供命令行与集成方调用
// ==========================================

pub mod error;
pub mod rake_planner_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult, ErrorBody, ValidationViolation};
pub use rake_planner_api::RakePlannerApi;
pub use validator::InputValidator;
