// ==========================================
// 工厂生产看板 - 停机/运转事件领域模型
// ==========================================
// 红线: reason_code 以 "TU" 开头 = 运转时间
// 红线: 时长 <= 0 的事件不参与任何汇总
// ==========================================

use crate::domain::types::ReasonGroup;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// 单日分钟数（事件不跨日）
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// 停机/运转事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DowntimeEvent {
    pub date: NaiveDate,                 // 事件日期
    pub start_time: NaiveTime,           // 开始时间
    pub end_time: NaiveTime,             // 结束时间（同日）
    #[serde(default)]
    pub duration_minutes: Option<i64>,   // 存储时长（分钟），缺省则由起止时间推导
    pub reason_code: String,             // 原因代码
    #[serde(default)]
    pub reason_description: String,      // 原因描述
    #[serde(default)]
    pub reason_group: String,            // 原因分组标签（展示用）
    pub machine_id: String,              // 机台
}

impl DowntimeEvent {
    /// 有效时长（分钟）
    ///
    /// 优先使用存储时长；缺省时按 end_time - start_time 推导。
    /// 结果限定在 [0, MINUTES_PER_DAY]，为 0 的事件由调用方剔除。
    pub fn effective_duration_minutes(&self) -> i64 {
        let minutes = match self.duration_minutes {
            Some(minutes) => minutes,
            None => self
                .end_time
                .signed_duration_since(self.start_time)
                .num_minutes(),
        };
        minutes.clamp(0, MINUTES_PER_DAY)
    }

    /// 是否为有效事件（时长 > 0）
    pub fn has_positive_duration(&self) -> bool {
        self.effective_duration_minutes() > 0
    }

    /// 语义分组（运转/停机）
    pub fn group(&self) -> ReasonGroup {
        ReasonGroup::from_reason_code(&self.reason_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(start: (u32, u32), end: (u32, u32), stored: Option<i64>) -> DowntimeEvent {
        DowntimeEvent {
            date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            duration_minutes: stored,
            reason_code: "MC01".to_string(),
            reason_description: "Troca de ferramenta".to_string(),
            reason_group: "Setup".to_string(),
            machine_id: "PERF-01".to_string(),
        }
    }

    #[test]
    fn test_duration_derived_from_times() {
        assert_eq!(event((8, 0), (9, 30), None).effective_duration_minutes(), 90);
    }

    #[test]
    fn test_stored_duration_wins() {
        assert_eq!(event((8, 0), (9, 30), Some(45)).effective_duration_minutes(), 45);
    }

    #[test]
    fn test_inverted_times_are_not_positive() {
        let e = event((10, 0), (9, 0), None);
        assert_eq!(e.effective_duration_minutes(), 0);
        assert!(!e.has_positive_duration());
        assert!(!event((9, 0), (9, 0), None).has_positive_duration());
    }

    #[test]
    fn test_stored_duration_capped_at_one_day() {
        let e = event((8, 0), (9, 0), Some(i64::MAX / 2 + 1));
        assert_eq!(e.effective_duration_minutes(), MINUTES_PER_DAY);
        assert_eq!(event((8, 0), (9, 0), Some(-30)).effective_duration_minutes(), 0);
    }

    #[test]
    fn test_group_from_reason_code() {
        let mut e = event((8, 0), (9, 0), None);
        assert_eq!(e.group(), ReasonGroup::Stoppage);
        e.reason_code = "TU00".to_string();
        assert_eq!(e.group(), ReasonGroup::Running);
    }
}
