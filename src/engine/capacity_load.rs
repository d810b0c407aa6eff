// ==========================================
// 工厂生产看板 - 计划/实绩产能负荷引擎
// ==========================================
// 职责: 按日汇总计划重量与实绩重量，计算达成、盈亏与月度推算
// 输入: 生产订单 + 报工记录 + 分析窗口 + 班次配置 + 今天 + 产品目录
// 输出: CapacityLoadReport
// 红线: 纯函数，无 I/O；任意输入都返回完整结果
// ==========================================

use crate::domain::catalog::CatalogLookup;
use crate::domain::order::ProductionOrder;
use crate::domain::production_log::ProductionLogEntry;
use crate::domain::window::{AnalysisWindow, ShiftConfig};
use crate::engine::calendar::{
    count_business_days, count_business_days_raw, enumerate_days, is_weekend, month_bounds,
};
use crate::engine::numeric::{non_negative, pct};
use crate::engine::weight_resolver::{resolve_executed_weight_detailed, WeightSource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// 输出结构
// ==========================================

/// 单日计划/实绩
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLoadPoint {
    pub date: NaiveDate,
    pub planned_weight: f64,
    pub executed_weight: f64,
    pub is_weekend: bool,
}

impl DailyLoadPoint {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            planned_weight: 0.0,
            executed_weight: 0.0,
            is_weekend: is_weekend(date),
        }
    }

    /// 计划与实绩均为 0
    pub fn is_blank(&self) -> bool {
        self.planned_weight == 0.0 && self.executed_weight == 0.0
    }

    /// 图表序列是否保留
    ///
    /// 只剔除"周末且无任何数据"的日子；工作日即使为 0 也保留。
    pub fn is_chartable(&self) -> bool {
        !(self.is_weekend && self.is_blank())
    }
}

/// 产能负荷报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityLoadReport {
    pub window: AnalysisWindow,

    // ===== 序列 =====
    pub daily_series: Vec<DailyLoadPoint>, // 图表序列（已过滤）
    pub buckets: Vec<DailyLoadPoint>,      // 窗口内全部日期（未过滤）

    // ===== 窗口合计 =====
    pub total_planned: f64,
    pub total_executed: f64,
    pub adherence_pct: f64,                // 实绩/计划 (%)

    // ===== 产能对比 =====
    pub business_days: i64,
    pub window_target: f64,
    pub surplus: f64,                      // 正数 = 超前

    // ===== 月度推算 =====
    pub average_daily_rate: f64,
    pub month_business_days: i64,
    pub projected_month_total: f64,
    pub month_target: f64,

    // ===== 所需节奏 =====
    pub remaining_business_days: i64,
    pub required_pace: f64,

    // ===== 数据质量 =====
    pub unresolved_entries: usize,         // 目录缺失且无自带重量的报工条数
}

// ==========================================
// CapacityLoadEngine - 产能负荷引擎
// ==========================================
pub struct CapacityLoadEngine {
    // 无状态引擎，不需要注入依赖
}

impl CapacityLoadEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算窗口内的计划/实绩负荷
    ///
    /// 规则：
    /// 1) 窗口内每天一个桶，初始为 0
    /// 2) 订单按日期累加明细重量到 planned_weight
    /// 3) 报工按日期累加解析重量到 executed_weight
    /// 4) 合计基于全部桶（含周末）
    /// 5) 工作日数最小为 1；月度推算基于窗口起始日所在月
    #[instrument(skip_all, fields(
        window = %window,
        orders_count = orders.len(),
        log_entries_count = log_entries.len(),
        today = %today
    ))]
    pub fn compute(
        &self,
        orders: &[ProductionOrder],
        log_entries: &[ProductionLogEntry],
        window: &AnalysisWindow,
        config: &ShiftConfig,
        today: NaiveDate,
        catalog: &dyn CatalogLookup,
    ) -> CapacityLoadReport {
        let window = AnalysisWindow::new(window.start, window.end);

        // 1. 建桶
        let mut buckets: Vec<DailyLoadPoint> = enumerate_days(window.start, window.end)
            .iter()
            .map(DailyLoadPoint::empty)
            .collect();

        // 2. 计划重量
        for order in orders.iter().filter(|o| window.contains(o.date)) {
            if let Some(bucket) = bucket_mut(&mut buckets, &window, order.date) {
                bucket.planned_weight += order.total_weight();
            }
        }

        // 3. 实绩重量
        let mut unresolved_entries = 0usize;
        for entry in log_entries.iter().filter(|e| window.contains(e.date)) {
            let resolution = resolve_executed_weight_detailed(entry, catalog);
            if resolution.source == WeightSource::Unresolved {
                unresolved_entries += 1;
                tracing::debug!(
                    product_code = %entry.product_code,
                    date = %entry.date,
                    "产品目录中未找到该代码，实绩重量按 0 计"
                );
            }
            if let Some(bucket) = bucket_mut(&mut buckets, &window, entry.date) {
                bucket.executed_weight += resolution.weight;
            }
        }

        // 4. 图表序列（buckets 已按日期升序）
        let daily_series: Vec<DailyLoadPoint> = buckets
            .iter()
            .filter(|b| b.is_chartable())
            .cloned()
            .collect();

        // 5. 窗口合计（不过滤）
        let total_planned: f64 = buckets.iter().map(|b| b.planned_weight).sum();
        let total_executed: f64 = buckets.iter().map(|b| b.executed_weight).sum();
        let adherence_pct = pct(total_executed, total_planned);

        // 6-8. 产能对比
        let daily_capacity = non_negative(config.daily_capacity);
        let business_days = count_business_days(window.start, window.end);
        let window_target = daily_capacity * business_days as f64;
        let surplus = total_executed - window_target;

        // 9. 月度推算
        let (month_start, month_end) = month_bounds(window.start);
        let month_business_days = count_business_days(month_start, month_end);
        let average_daily_rate = total_executed / business_days as f64;
        let projected_month_total = average_daily_rate * month_business_days as f64;
        let month_target = daily_capacity * month_business_days as f64;

        // 10. 所需节奏（剩余工作日不设下限，0 时回退到窗口日均目标）
        // 此处必须用 count_business_days_raw：带下限的计数永远 >= 1，回退分支将不可达
        let remaining_business_days = count_business_days_raw(today, month_end);
        let required_pace = if remaining_business_days > 0 {
            (month_target - total_executed).max(0.0) / remaining_business_days as f64
        } else {
            window_target / business_days as f64
        };

        tracing::debug!(
            total_planned,
            total_executed,
            business_days,
            surplus,
            unresolved_entries,
            "产能负荷计算完成"
        );

        CapacityLoadReport {
            window,
            daily_series,
            buckets,
            total_planned,
            total_executed,
            adherence_pct,
            business_days,
            window_target,
            surplus,
            average_daily_rate,
            month_business_days,
            projected_month_total,
            month_target,
            remaining_business_days,
            required_pace,
            unresolved_entries,
        }
    }
}

impl Default for CapacityLoadEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 按日期定位桶
fn bucket_mut<'a>(
    buckets: &'a mut [DailyLoadPoint],
    window: &AnalysisWindow,
    date: NaiveDate,
) -> Option<&'a mut DailyLoadPoint> {
    let offset = (date - window.start).num_days();
    if offset < 0 {
        return None;
    }
    buckets.get_mut(offset as usize)
}

/// 计算产能负荷（函数式入口）
pub fn compute_capacity_and_load(
    orders: &[ProductionOrder],
    log_entries: &[ProductionLogEntry],
    window: &AnalysisWindow,
    config: &ShiftConfig,
    today: NaiveDate,
    catalog: &dyn CatalogLookup,
) -> CapacityLoadReport {
    CapacityLoadEngine::new().compute(orders, log_entries, window, config, today, catalog)
}
