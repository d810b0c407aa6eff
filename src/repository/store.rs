// ==========================================
// 工厂生产看板 - 数据源 Trait
// ==========================================
// 职责: 定义订单/报工/停机事件的读取接口（不包含实现）
// 红线: Repository 不含业务规则，只负责按窗口取数
// ==========================================

use crate::domain::downtime::DowntimeEvent;
use crate::domain::order::ProductionOrder;
use crate::domain::production_log::ProductionLogEntry;
use crate::domain::window::AnalysisWindow;
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// ProductionOrderStore Trait
// ==========================================
// 实现者: InMemoryOrderStore / 外部文档库适配器
#[async_trait]
pub trait ProductionOrderStore: Send + Sync {
    /// 查询窗口内的生产订单
    ///
    /// 实现可以返回窗口外的记录，引擎会再次按日期过滤。
    async fn list_orders(&self, window: &AnalysisWindow) -> RepositoryResult<Vec<ProductionOrder>>;
}

// ==========================================
// ProductionLogStore Trait
// ==========================================
#[async_trait]
pub trait ProductionLogStore: Send + Sync {
    /// 查询窗口内的报工记录
    async fn list_log_entries(
        &self,
        window: &AnalysisWindow,
    ) -> RepositoryResult<Vec<ProductionLogEntry>>;
}

// ==========================================
// DowntimeStore Trait
// ==========================================
#[async_trait]
pub trait DowntimeStore: Send + Sync {
    /// 查询窗口内的停机/运转事件
    async fn list_downtime_events(
        &self,
        window: &AnalysisWindow,
    ) -> RepositoryResult<Vec<DowntimeEvent>>;
}
