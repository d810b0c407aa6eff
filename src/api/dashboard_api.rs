// ==========================================
// 工厂生产看板 - 看板 API
// ==========================================
// 职责: 取数 → 读配置 → 调用两个引擎 → 组装看板快照
// 红线: 取数/配置失败在引擎运行前暴露；引擎本身不报错
// 并发: 多次刷新可重叠，后发请求的结果为准（last-write-wins）
// ==========================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::instrument;
use uuid::Uuid;

use crate::api::dto::{DashboardRequest, DashboardSnapshot, RefreshOutcome};
use crate::api::error::{ApiError, ApiResult};
use crate::config::DashboardConfigReader;
use crate::domain::catalog::CatalogLookup;
use crate::domain::downtime::DowntimeEvent;
use crate::domain::production_log::ProductionLogEntry;
use crate::domain::window::AnalysisWindow;
use crate::engine::availability::{AvailabilityEngine, AvailabilityReport};
use crate::engine::calendar::{parse_date, today};
use crate::engine::capacity_load::{CapacityLoadEngine, CapacityLoadReport};
use crate::repository::store::{DowntimeStore, ProductionLogStore, ProductionOrderStore};

/// 解析后的刷新参数
#[derive(Debug, Clone, PartialEq)]
struct RefreshParams {
    window: AnalysisWindow,
    today: NaiveDate,
    machine_id: Option<String>,
}

// ==========================================
// DashboardApi - 看板 API
// ==========================================

/// 看板API
///
/// 职责：
/// 1. 并发读取订单、报工、停机事件与配置
/// 2. 按机台过滤后调用负荷引擎和可用率引擎
/// 3. 通过刷新代次丢弃过期结果
pub struct DashboardApi {
    order_store: Arc<dyn ProductionOrderStore>,
    log_store: Arc<dyn ProductionLogStore>,
    downtime_store: Arc<dyn DowntimeStore>,
    catalog: Arc<dyn CatalogLookup + Send + Sync>,
    config_reader: Arc<dyn DashboardConfigReader>,
    capacity_engine: CapacityLoadEngine,
    availability_engine: AvailabilityEngine,
    generation: AtomicU64,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    pub fn new(
        order_store: Arc<dyn ProductionOrderStore>,
        log_store: Arc<dyn ProductionLogStore>,
        downtime_store: Arc<dyn DowntimeStore>,
        catalog: Arc<dyn CatalogLookup + Send + Sync>,
        config_reader: Arc<dyn DashboardConfigReader>,
    ) -> Self {
        Self {
            order_store,
            log_store,
            downtime_store,
            catalog,
            config_reader,
            capacity_engine: CapacityLoadEngine::new(),
            availability_engine: AvailabilityEngine::new(),
            generation: AtomicU64::new(0),
        }
    }

    /// 最近一次发起的刷新代次
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    // ==========================================
    // 刷新接口
    // ==========================================

    /// 全量刷新看板
    ///
    /// # 返回
    /// - Ok(RefreshOutcome::Completed): 最新快照
    /// - Ok(RefreshOutcome::Superseded): 期间已有更新的刷新发起，本次结果作废
    /// - Err(ApiError): 入参非法或取数/配置失败
    #[instrument(skip_all, fields(start = %request.start_date, end = %request.end_date))]
    pub async fn refresh(&self, request: &DashboardRequest) -> ApiResult<RefreshOutcome> {
        let params = parse_request(request)?;

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let refresh_id = Uuid::new_v4().to_string();
        tracing::info!(
            refresh_id = %refresh_id,
            generation,
            window = %params.window,
            "开始刷新看板"
        );

        let (orders, log_entries, events, config) = futures::try_join!(
            async {
                self.order_store
                    .list_orders(&params.window)
                    .await
                    .map_err(ApiError::from)
            },
            async {
                self.log_store
                    .list_log_entries(&params.window)
                    .await
                    .map_err(ApiError::from)
            },
            async {
                self.downtime_store
                    .list_downtime_events(&params.window)
                    .await
                    .map_err(ApiError::from)
            },
            async {
                self.config_reader
                    .load_shift_config()
                    .await
                    .map_err(ApiError::from)
            },
        )?;

        let log_entries = filter_log_entries(log_entries, params.machine_id.as_deref());
        let events = filter_events(events, params.machine_id.as_deref());

        let capacity = self.capacity_engine.compute(
            &orders,
            &log_entries,
            &params.window,
            &config,
            params.today,
            &*self.catalog,
        );
        let availability = self
            .availability_engine
            .compute(&events, &params.window, &config);
        let machine_availability =
            self.availability_engine
                .compute_by_machine(&events, &params.window, &config);

        let latest_generation = self.latest_generation();
        if latest_generation != generation {
            tracing::info!(
                refresh_id = %refresh_id,
                generation,
                latest_generation,
                "已有更新的刷新，丢弃本次结果"
            );
            return Ok(RefreshOutcome::Superseded {
                refresh_id,
                generation,
                latest_generation,
            });
        }

        tracing::info!(
            refresh_id = %refresh_id,
            generation,
            total_planned = capacity.total_planned,
            total_executed = capacity.total_executed,
            availability_pct = availability.availability_pct,
            "看板刷新完成"
        );

        Ok(RefreshOutcome::Completed(Box::new(DashboardSnapshot {
            refresh_id,
            generation,
            window: params.window,
            machine_id: params.machine_id,
            shift_config: config,
            capacity,
            availability,
            machine_availability,
        })))
    }

    // ==========================================
    // 单项查询接口
    // ==========================================

    /// 仅计算计划/实绩负荷
    pub async fn get_capacity_and_load(
        &self,
        request: &DashboardRequest,
    ) -> ApiResult<CapacityLoadReport> {
        let params = parse_request(request)?;

        let (orders, log_entries, config) = futures::try_join!(
            async {
                self.order_store
                    .list_orders(&params.window)
                    .await
                    .map_err(ApiError::from)
            },
            async {
                self.log_store
                    .list_log_entries(&params.window)
                    .await
                    .map_err(ApiError::from)
            },
            async {
                self.config_reader
                    .load_shift_config()
                    .await
                    .map_err(ApiError::from)
            },
        )?;

        let log_entries = filter_log_entries(log_entries, params.machine_id.as_deref());

        Ok(self.capacity_engine.compute(
            &orders,
            &log_entries,
            &params.window,
            &config,
            params.today,
            &*self.catalog,
        ))
    }

    /// 仅计算可用率 / OEE
    pub async fn get_availability(&self, request: &DashboardRequest) -> ApiResult<AvailabilityReport> {
        let params = parse_request(request)?;

        let (events, config) = futures::try_join!(
            async {
                self.downtime_store
                    .list_downtime_events(&params.window)
                    .await
                    .map_err(ApiError::from)
            },
            async {
                self.config_reader
                    .load_shift_config()
                    .await
                    .map_err(ApiError::from)
            },
        )?;

        let events = filter_events(events, params.machine_id.as_deref());

        Ok(self
            .availability_engine
            .compute(&events, &params.window, &config))
    }
}

// ==========================================
// 入参解析
// ==========================================

fn parse_date_field(field: &str, value: &str) -> ApiResult<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput(format!("{}不能为空", field)));
    }

    parse_date(trimmed).map_err(|_| ApiError::DateFormatError {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn parse_request(request: &DashboardRequest) -> ApiResult<RefreshParams> {
    let start = parse_date_field("start_date", &request.start_date)?;
    let end = parse_date_field("end_date", &request.end_date)?;

    let today = match request.today.as_deref() {
        Some(value) => parse_date_field("today", value)?,
        None => today(),
    };

    // 空白机台视为不过滤
    let machine_id = request
        .machine_id
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string);

    Ok(RefreshParams {
        window: AnalysisWindow::new(start, end),
        today,
        machine_id,
    })
}

// ==========================================
// 机台过滤（订单不区分机台）
// ==========================================

fn filter_log_entries(
    entries: Vec<ProductionLogEntry>,
    machine_id: Option<&str>,
) -> Vec<ProductionLogEntry> {
    match machine_id {
        Some(machine) => entries
            .into_iter()
            .filter(|e| e.machine_id.trim() == machine)
            .collect(),
        None => entries,
    }
}

fn filter_events(events: Vec<DowntimeEvent>, machine_id: Option<&str>) -> Vec<DowntimeEvent> {
    match machine_id {
        Some(machine) => events
            .into_iter()
            .filter(|e| e.machine_id.trim() == machine)
            .collect(),
        None => events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_swaps_reversed_window() {
        let request = DashboardRequest::new("2025-03-07", "2025-03-03").with_today("2025-03-10");
        let params = parse_request(&request).unwrap();

        assert_eq!(params.window.start, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        assert_eq!(params.window.end, NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        assert_eq!(params.today, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn test_parse_request_rejects_bad_dates() {
        let empty = DashboardRequest::new("", "2025-03-03");
        assert!(matches!(parse_request(&empty), Err(ApiError::InvalidInput(_))));

        let malformed = DashboardRequest::new("2025/03/03", "2025-03-03");
        assert!(matches!(
            parse_request(&malformed),
            Err(ApiError::DateFormatError { .. })
        ));
    }

    #[test]
    fn test_blank_machine_means_no_filter() {
        let request = DashboardRequest::new("2025-03-03", "2025-03-03").with_machine("  ");
        assert_eq!(parse_request(&request).unwrap().machine_id, None);
    }
}
