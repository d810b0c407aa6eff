// ==========================================
// 工厂生产看板 - 引擎层
// ==========================================
// 职责: 计划/实绩与可用率的纯计算
// 红线: 引擎无 I/O、无共享可变状态；每次全量重算
// 红线: 数据质量缺口一律降级为 0，不报错
// ==========================================

pub mod availability;
pub mod calendar;
pub mod capacity_load;
pub mod numeric;
pub mod weight_resolver;

// 重导出核心引擎
pub use availability::{
    compute_availability, AvailabilityEngine, AvailabilityReport, ParetoEntry, UNSPECIFIED_REASON,
};
pub use capacity_load::{
    compute_capacity_and_load, CapacityLoadEngine, CapacityLoadReport, DailyLoadPoint,
};
pub use weight_resolver::{
    resolve_executed_weight, resolve_executed_weight_detailed, WeightResolution, WeightSource,
};
