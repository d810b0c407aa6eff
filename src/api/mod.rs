// ==========================================
// 工厂生产看板 - API 层
// ==========================================
// 职责: 对外查询入口，组装数据源、配置与引擎
// 红线: API 层不含计算规则，只做参数校验与编排
// ==========================================

pub mod dashboard_api;
pub mod dto;
pub mod error;

// 重导出核心类型
pub use dashboard_api::DashboardApi;
pub use dto::{DashboardRequest, DashboardSnapshot, RefreshOutcome};
pub use error::{ApiError, ApiResult};
