// ==========================================
// 工厂生产看板 - 分析窗口与班次配置
// ==========================================
// 红线: 窗口为闭区间 [start, end]；start > end 时先交换
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 日期格式 (YYYY-MM-DD)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ==========================================
// AnalysisWindow - 分析窗口
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AnalysisWindow {
    /// 创建窗口（倒置时自动交换）
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start > end {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    /// 单日窗口
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// 从 YYYY-MM-DD 字符串创建
    pub fn parse(start: &str, end: &str) -> Result<Self, chrono::ParseError> {
        let start = NaiveDate::parse_from_str(start.trim(), DATE_FORMAT)?;
        let end = NaiveDate::parse_from_str(end.trim(), DATE_FORMAT)?;
        Ok(Self::new(start, end))
    }

    /// 日期是否落在窗口内
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 窗口天数（闭区间）
    pub fn days(&self) -> i64 {
        crate::engine::calendar::days_between_inclusive(self.start, self.end)
    }
}

impl std::fmt::Display for AnalysisWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}]",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

// ==========================================
// ShiftConfig - 班次与产能配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftConfig {
    pub daily_capacity: f64,   // 日产能目标（重量/天）
    pub shift_hours: f64,      // 每日班次时长（小时）

    // ===== OEE 固定输入（尚无实测信号）=====
    #[serde(default = "default_pct")]
    pub performance_pct: f64,  // 性能率 (%)
    #[serde(default = "default_pct")]
    pub quality_pct: f64,      // 质量率 (%)

    // ===== 展示 =====
    #[serde(default = "default_pareto_top_n")]
    pub pareto_top_n: usize,   // 停机 Pareto 保留条数
}

pub const DEFAULT_SHIFT_HOURS: f64 = 8.0;
pub const DEFAULT_PARETO_TOP_N: usize = 5;

fn default_pct() -> f64 {
    100.0
}

fn default_pareto_top_n() -> usize {
    DEFAULT_PARETO_TOP_N
}

impl ShiftConfig {
    pub fn new(daily_capacity: f64, shift_hours: f64) -> Self {
        Self {
            daily_capacity,
            shift_hours,
            performance_pct: default_pct(),
            quality_pct: default_pct(),
            pareto_top_n: DEFAULT_PARETO_TOP_N,
        }
    }
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_SHIFT_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_inverted_window_is_swapped() {
        let w = AnalysisWindow::new(d(2025, 3, 10), d(2025, 3, 1));
        assert_eq!(w.start, d(2025, 3, 1));
        assert_eq!(w.end, d(2025, 3, 10));
        assert_eq!(w.days(), 10);
    }

    #[test]
    fn test_parse_window() {
        let w = AnalysisWindow::parse("2025-03-03", " 2025-03-07 ").unwrap();
        assert_eq!(w.to_string(), "[2025-03-03, 2025-03-07]");
        assert!(w.contains(d(2025, 3, 5)));
        assert!(!w.contains(d(2025, 3, 8)));
        assert!(AnalysisWindow::parse("03/03/2025", "2025-03-07").is_err());
    }

    #[test]
    fn test_shift_config_serde_defaults() {
        let cfg: ShiftConfig =
            serde_json::from_str(r#"{"daily_capacity": 1000.0, "shift_hours": 8.0}"#).unwrap();
        assert_eq!(cfg.performance_pct, 100.0);
        assert_eq!(cfg.quality_pct, 100.0);
        assert_eq!(cfg.pareto_top_n, 5);
    }
}
