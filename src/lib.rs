// ==========================================
// 工厂生产看板 - 核心库
// ==========================================
// 技术栈: Rust + SQLite（配置） + tracing
// 系统定位: 计划/实绩负荷与可用率(OEE)的纯计算核心
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 计算规则
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 看板接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ReasonGroup, WeightModel};

// 领域实体
pub use domain::{
    AnalysisWindow, CatalogLookup, DowntimeEvent, ProductCatalog, ProductCatalogEntry,
    ProductionLogEntry, ProductionOrder, ProductionOrderLine, ShiftConfig,
};

// 引擎
pub use engine::{
    compute_availability, compute_capacity_and_load, resolve_executed_weight,
    AvailabilityEngine, AvailabilityReport, CapacityLoadEngine, CapacityLoadReport,
    DailyLoadPoint, ParetoEntry,
};

// 配置
pub use config::{ConfigManager, DashboardConfigReader};

// API
pub use api::{ApiError, ApiResult, DashboardApi, DashboardRequest, DashboardSnapshot, RefreshOutcome};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
