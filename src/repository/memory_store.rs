// ==========================================
// 工厂生产看板 - 内存数据源
// ==========================================
// 职责: 以内存列表实现三类数据源（测试与嵌入式宿主使用）
// 说明: 真实持久化/同步由宿主应用负责
// ==========================================

use crate::domain::downtime::DowntimeEvent;
use crate::domain::order::ProductionOrder;
use crate::domain::production_log::ProductionLogEntry;
use crate::domain::window::AnalysisWindow;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::store::{DowntimeStore, ProductionLogStore, ProductionOrderStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

/// 带日期的记录
pub trait DatedRecord {
    fn record_date(&self) -> NaiveDate;
}

impl DatedRecord for ProductionOrder {
    fn record_date(&self) -> NaiveDate {
        self.date
    }
}

impl DatedRecord for ProductionLogEntry {
    fn record_date(&self) -> NaiveDate {
        self.date
    }
}

impl DatedRecord for DowntimeEvent {
    fn record_date(&self) -> NaiveDate {
        self.date
    }
}

// ==========================================
// InMemoryStore - 内存数据源
// ==========================================
#[derive(Debug)]
pub struct InMemoryStore<T> {
    records: Mutex<Vec<T>>,
}

pub type InMemoryOrderStore = InMemoryStore<ProductionOrder>;
pub type InMemoryLogStore = InMemoryStore<ProductionLogEntry>;
pub type InMemoryDowntimeStore = InMemoryStore<DowntimeEvent>;

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

impl<T: DatedRecord + Clone> InMemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// 追加一条记录
    pub fn insert(&self, record: T) -> RepositoryResult<()> {
        self.lock()?.push(record);
        Ok(())
    }

    /// 整体替换（宿主同步后调用）
    pub fn replace_all(&self, records: Vec<T>) -> RepositoryResult<()> {
        *self.lock()? = records;
        Ok(())
    }

    pub fn len(&self) -> RepositoryResult<usize> {
        Ok(self.lock()?.len())
    }

    /// 窗口内记录的快照（保持插入顺序）
    pub fn list_in_window(&self, window: &AnalysisWindow) -> RepositoryResult<Vec<T>> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .filter(|r| window.contains(r.record_date()))
            .cloned()
            .collect())
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Vec<T>>> {
        self.records
            .lock()
            .map_err(|e| RepositoryError::LockError(format!("锁获取失败: {}", e)))
    }
}

#[async_trait]
impl ProductionOrderStore for InMemoryOrderStore {
    async fn list_orders(&self, window: &AnalysisWindow) -> RepositoryResult<Vec<ProductionOrder>> {
        self.list_in_window(window)
    }
}

#[async_trait]
impl ProductionLogStore for InMemoryLogStore {
    async fn list_log_entries(
        &self,
        window: &AnalysisWindow,
    ) -> RepositoryResult<Vec<ProductionLogEntry>> {
        self.list_in_window(window)
    }
}

#[async_trait]
impl DowntimeStore for InMemoryDowntimeStore {
    async fn list_downtime_events(
        &self,
        window: &AnalysisWindow,
    ) -> RepositoryResult<Vec<DowntimeEvent>> {
        self.list_in_window(window)
    }
}
