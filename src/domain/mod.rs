// ==========================================
// 工厂生产看板 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、目录查询接口
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod catalog;
pub mod downtime;
pub mod order;
pub mod production_log;
pub mod types;
pub mod window;

// 重导出核心类型
pub use catalog::{CatalogHit, CatalogLookup, ProductCatalog, ProductCatalogEntry};
pub use downtime::{DowntimeEvent, MINUTES_PER_DAY};
pub use order::{ProductionOrder, ProductionOrderLine};
pub use production_log::ProductionLogEntry;
pub use types::{ReasonGroup, WeightModel, RUNNING_REASON_PREFIX};
pub use window::{AnalysisWindow, ShiftConfig, DATE_FORMAT};
