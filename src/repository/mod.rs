// ==========================================
// 工厂生产看板 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供数据读取接口,屏蔽存储细节
// ==========================================

pub mod error;
pub mod memory_store;
pub mod store;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use memory_store::{
    DatedRecord, InMemoryDowntimeStore, InMemoryLogStore, InMemoryOrderStore, InMemoryStore,
};
pub use store::{DowntimeStore, ProductionLogStore, ProductionOrderStore};
