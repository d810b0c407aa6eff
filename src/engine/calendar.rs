// ==========================================
// 工厂生产看板 - 日历工具
// ==========================================
// 职责: 闭区间日期枚举、工作日判定、月边界
// 红线: 只处理日历日期，无时分秒、无时区
// ==========================================

use chrono::{Datelike, NaiveDate, Weekday};

// ==========================================
// DateRange - 闭区间日期序列
// ==========================================
// 惰性、有限、可重复遍历（每次 iter() 重新开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn iter(&self) -> DayIter {
        DayIter {
            next: Some(self.start),
            end: self.end,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// 序列长度（天）
    pub fn len(&self) -> usize {
        days_between_inclusive(self.start, self.end) as usize
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DayIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = DayIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 日期迭代器
#[derive(Debug, Clone)]
pub struct DayIter {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DayIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = current.succ_opt();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(current) => days_between_inclusive(current, self.end) as usize,
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

// ==========================================
// 日期工具函数
// ==========================================

/// 枚举 [start, end] 内每一天（end < start 时为空）
pub fn enumerate_days(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange::new(start, end)
}

/// 是否周末（周六/周日）
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// 闭区间内的工作日（周一至周五）数量，不设下限
pub fn count_business_days_raw(start: NaiveDate, end: NaiveDate) -> i64 {
    enumerate_days(start, end)
        .iter()
        .filter(|date| !is_weekend(*date))
        .count() as i64
}

/// 闭区间内的工作日数量，最小为 1
///
/// 下游会用它做除数；单个周日这样的窗口也按 1 计。
pub fn count_business_days(start: NaiveDate, end: NaiveDate) -> i64 {
    count_business_days_raw(start, end).max(1)
}

/// 闭区间天数（end < start 时为 0）
pub fn days_between_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    if end < start {
        0
    } else {
        (end - start).num_days() + 1
    }
}

/// 所在月份的首日与末日
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);

    let next_month_first = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    let last = next_month_first
        .and_then(|d| d.pred_opt())
        .unwrap_or(date);

    (first, last)
}

/// 本地"今天"
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// 解析 YYYY-MM-DD
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), crate::domain::DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_enumerate_days_inclusive() {
        let days: Vec<NaiveDate> = enumerate_days(d(2025, 2, 27), d(2025, 3, 2)).into_iter().collect();
        assert_eq!(
            days,
            vec![d(2025, 2, 27), d(2025, 2, 28), d(2025, 3, 1), d(2025, 3, 2)]
        );
    }

    #[test]
    fn test_enumerate_days_empty_when_inverted() {
        let range = enumerate_days(d(2025, 3, 2), d(2025, 3, 1));
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.iter().count(), 0);
    }

    #[test]
    fn test_enumerate_days_restartable() {
        let range = enumerate_days(d(2025, 3, 3), d(2025, 3, 9));
        assert_eq!(range.iter().count(), 7);
        assert_eq!(range.iter().count(), 7);
        assert_eq!(range.iter().size_hint(), (7, Some(7)));
    }

    #[test]
    fn test_is_weekend() {
        assert!(!is_weekend(d(2025, 3, 3))); // 周一
        assert!(!is_weekend(d(2025, 3, 7))); // 周五
        assert!(is_weekend(d(2025, 3, 8))); // 周六
        assert!(is_weekend(d(2025, 3, 9))); // 周日
    }

    #[test]
    fn test_count_business_days() {
        assert_eq!(count_business_days(d(2025, 3, 3), d(2025, 3, 9)), 5);
        assert_eq!(count_business_days(d(2025, 3, 3), d(2025, 3, 3)), 1);
        // 单个周日：下限 1
        assert_eq!(count_business_days_raw(d(2025, 3, 9), d(2025, 3, 9)), 0);
        assert_eq!(count_business_days(d(2025, 3, 9), d(2025, 3, 9)), 1);
        // 倒置区间
        assert_eq!(count_business_days(d(2025, 3, 9), d(2025, 3, 3)), 1);
    }

    #[test]
    fn test_days_between_inclusive() {
        assert_eq!(days_between_inclusive(d(2025, 3, 3), d(2025, 3, 3)), 1);
        assert_eq!(days_between_inclusive(d(2025, 3, 1), d(2025, 3, 31)), 31);
        assert_eq!(days_between_inclusive(d(2025, 3, 2), d(2025, 3, 1)), 0);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(d(2025, 3, 17)), (d(2025, 3, 1), d(2025, 3, 31)));
        assert_eq!(month_bounds(d(2024, 2, 10)), (d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(month_bounds(d(2025, 12, 31)), (d(2025, 12, 1), d(2025, 12, 31)));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-03-03").unwrap(), d(2025, 3, 3));
        assert!(parse_date("2025-13-01").is_err());
    }
}
