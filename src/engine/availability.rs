// ==========================================
// 工厂生产看板 - 设备可用率 / OEE 引擎
// ==========================================
// 职责: 停机/运转事件 → 班次时间、停机时间、可用率、OEE、停机 Pareto
// 输入: 停机事件 + 分析窗口 + 班次配置
// 输出: AvailabilityReport
// 口径: 运转时间 = max(0, 班次时间 - 停机时间)
//       TU 事件时长单独保留（logged_running_minutes），不参与可用率
// 红线: 时长 <= 0 的事件既不计入停机，也不计入 Pareto
// 红线: 窗口内无有效事件 → 可用率 0（未报工不视为满产）
// ==========================================

use crate::domain::downtime::DowntimeEvent;
use crate::domain::window::{AnalysisWindow, ShiftConfig};
use crate::engine::calendar::days_between_inclusive;
use crate::engine::numeric::{non_negative, pct};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::instrument;

/// 原因描述与代码都缺失时的 Pareto 标签
pub const UNSPECIFIED_REASON: &str = "unspecified";

// ==========================================
// 输出结构
// ==========================================

/// Pareto 条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoEntry {
    pub reason: String,      // 原因（描述 → 代码 → unspecified）
    pub minutes: i64,        // 累计停机分钟
    pub occurrences: usize,  // 事件次数
    pub share_pct: f64,      // 占总停机 (%)
    pub cumulative_pct: f64, // 累计占比 (%)
}

/// 可用率报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    pub window: AnalysisWindow,

    // ===== 指标 =====
    pub availability_pct: f64,
    pub performance_pct: f64,
    pub quality_pct: f64,
    pub oee_pct: f64,

    // ===== 时间（分钟）=====
    pub shift_minutes: i64,
    pub downtime_minutes: i64,
    pub running_minutes: i64,
    pub logged_running_minutes: i64,   // TU 事件合计（供后续性能率使用）

    // ===== 事件统计 =====
    pub stoppage_event_count: usize,
    pub running_event_count: usize,
    pub reported: bool,                // 窗口内是否存在有效事件

    // ===== Pareto =====
    pub pareto_top: Vec<ParetoEntry>,
    pub downtime_by_group: Vec<ParetoEntry>,
}

// ==========================================
// AvailabilityEngine - 可用率引擎
// ==========================================
pub struct AvailabilityEngine {
    // 无状态引擎，不需要注入依赖
}

impl AvailabilityEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算窗口内的可用率与 OEE
    #[instrument(skip_all, fields(window = %window, events_count = events.len()))]
    pub fn compute(
        &self,
        events: &[DowntimeEvent],
        window: &AnalysisWindow,
        config: &ShiftConfig,
    ) -> AvailabilityReport {
        let window = AnalysisWindow::new(window.start, window.end);

        // 1-2. 班次时间
        let days = days_between_inclusive(window.start, window.end);
        let shift_minutes = (days as f64 * non_negative(config.shift_hours) * 60.0).round() as i64;

        // 3. 窗口过滤 + 剔除非正时长
        let mut valid: Vec<(&DowntimeEvent, i64)> = Vec::new();
        for event in events.iter().filter(|e| window.contains(e.date)) {
            let minutes = event.effective_duration_minutes();
            if minutes <= 0 {
                tracing::debug!(
                    machine_id = %event.machine_id,
                    reason_code = %event.reason_code,
                    date = %event.date,
                    minutes,
                    "事件时长非正，已剔除"
                );
                continue;
            }
            valid.push((event, minutes));
        }

        // 4. 运转 / 停机拆分
        let (running, stoppages): (Vec<_>, Vec<_>) =
            valid.iter().partition(|(event, _)| event.group().is_running());

        // 5-6. 停机与运转时间
        let downtime_minutes: i64 = stoppages.iter().map(|(_, m)| *m).sum();
        let logged_running_minutes: i64 = running.iter().map(|(_, m)| *m).sum();
        let running_minutes = (shift_minutes - downtime_minutes).max(0);

        // 7-9. 指标
        let reported = !valid.is_empty();
        let availability_pct = if reported {
            pct(running_minutes as f64, shift_minutes as f64)
        } else {
            0.0
        };
        let performance_pct = non_negative(config.performance_pct);
        let quality_pct = non_negative(config.quality_pct);
        let oee_pct = availability_pct * performance_pct * quality_pct / 10_000.0;

        // 10. Pareto
        let mut pareto_top = build_pareto(
            stoppages.iter().map(|(event, m)| (pareto_reason(event), *m)),
            downtime_minutes,
        );
        pareto_top.truncate(config.pareto_top_n);

        let downtime_by_group = build_pareto(
            stoppages.iter().map(|(event, m)| (group_label(event), *m)),
            downtime_minutes,
        );

        if reported && downtime_minutes > shift_minutes {
            tracing::warn!(
                downtime_minutes,
                shift_minutes,
                "停机时间超过班次时间，运转时间按 0 计"
            );
        }

        AvailabilityReport {
            window,
            availability_pct,
            performance_pct,
            quality_pct,
            oee_pct,
            shift_minutes,
            downtime_minutes,
            running_minutes,
            logged_running_minutes,
            stoppage_event_count: stoppages.len(),
            running_event_count: running.len(),
            reported,
            pareto_top,
            downtime_by_group,
        }
    }

    /// 按机台分别计算（每台机按完整班次时间）
    ///
    /// 只返回窗口内出现过事件的机台。
    pub fn compute_by_machine(
        &self,
        events: &[DowntimeEvent],
        window: &AnalysisWindow,
        config: &ShiftConfig,
    ) -> BTreeMap<String, AvailabilityReport> {
        let window = AnalysisWindow::new(window.start, window.end);

        let mut by_machine: BTreeMap<String, Vec<DowntimeEvent>> = BTreeMap::new();
        for event in events.iter().filter(|e| window.contains(e.date)) {
            by_machine
                .entry(event.machine_id.trim().to_string())
                .or_default()
                .push(event.clone());
        }

        by_machine
            .into_iter()
            .map(|(machine_id, machine_events)| {
                let report = self.compute(&machine_events, &window, config);
                (machine_id, report)
            })
            .collect()
    }
}

impl Default for AvailabilityEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// Pareto 工具
// ==========================================

type LabelProbe = fn(&DowntimeEvent) -> Option<&str>;

/// 原因标签探测链: 描述 → 代码
const REASON_PROBES: [LabelProbe; 2] = [description_probe, code_probe];

fn description_probe(event: &DowntimeEvent) -> Option<&str> {
    non_blank(&event.reason_description)
}

fn code_probe(event: &DowntimeEvent) -> Option<&str> {
    non_blank(&event.reason_code)
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Pareto 原因标签
pub fn pareto_reason(event: &DowntimeEvent) -> String {
    REASON_PROBES
        .iter()
        .find_map(|probe| probe(event))
        .unwrap_or(UNSPECIFIED_REASON)
        .to_string()
}

fn group_label(event: &DowntimeEvent) -> String {
    non_blank(&event.reason_group)
        .unwrap_or(UNSPECIFIED_REASON)
        .to_string()
}

/// 按标签汇总并降序排列
///
/// 排序稳定：分钟数相同时按首次出现顺序。
fn build_pareto<I>(items: I, total_minutes: i64) -> Vec<ParetoEntry>
where
    I: IntoIterator<Item = (String, i64)>,
{
    let mut entries: Vec<ParetoEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (reason, minutes) in items {
        let existing = index.get(&reason).copied();
        match existing {
            Some(i) => {
                if let Some(entry) = entries.get_mut(i) {
                    entry.minutes += minutes;
                    entry.occurrences += 1;
                }
            }
            None => {
                index.insert(reason.clone(), entries.len());
                entries.push(ParetoEntry {
                    reason,
                    minutes,
                    occurrences: 1,
                    share_pct: 0.0,
                    cumulative_pct: 0.0,
                });
            }
        }
    }

    entries.sort_by(|a, b| b.minutes.cmp(&a.minutes));

    let mut cumulative = 0i64;
    for entry in entries.iter_mut() {
        cumulative += entry.minutes;
        entry.share_pct = pct(entry.minutes as f64, total_minutes as f64);
        entry.cumulative_pct = pct(cumulative as f64, total_minutes as f64);
    }

    entries
}

/// 计算可用率（函数式入口）
pub fn compute_availability(
    events: &[DowntimeEvent],
    window: &AnalysisWindow,
    config: &ShiftConfig,
) -> AvailabilityReport {
    AvailabilityEngine::new().compute(events, window, config)
}
