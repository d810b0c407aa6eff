// ==========================================
// 工厂生产看板 - 领域类型定义
// ==========================================
// 红线: 原因代码以 "TU" 开头 = 运转时间，不是停机
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 运转时间原因代码前缀
pub const RUNNING_REASON_PREFIX: &str = "TU";

// ==========================================
// 原因分组 (Reason Group)
// ==========================================
// 历史事件流中区分"设备生产中"与"设备停机"的唯一信号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonGroup {
    Running,  // 运转
    Stoppage, // 停机
}

impl ReasonGroup {
    /// 按原因代码分类
    ///
    /// 前后空白忽略，大小写不敏感（表格导入常出现 "tu01"）。
    pub fn from_reason_code(code: &str) -> Self {
        let trimmed = code.trim();
        let is_running = trimmed
            .get(..RUNNING_REASON_PREFIX.len())
            .map(|prefix| prefix.eq_ignore_ascii_case(RUNNING_REASON_PREFIX))
            .unwrap_or(false);

        if is_running {
            ReasonGroup::Running
        } else {
            ReasonGroup::Stoppage
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, ReasonGroup::Running)
    }
}

impl fmt::Display for ReasonGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasonGroup::Running => write!(f, "RUNNING"),
            ReasonGroup::Stoppage => write!(f, "STOPPAGE"),
        }
    }
}

// ==========================================
// 重量模型 (Weight Model)
// ==========================================
// 由产品目录决定：固定单重 或 按米重（定尺长度）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightModel {
    /// 固定单件重量
    PerUnit { weight_per_unit: f64 },
    /// 按长度计重（定尺产品）
    PerMeter {
        weight_per_meter: f64,
        nominal_length: Option<f64>,
    },
}

impl fmt::Display for WeightModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightModel::PerUnit { weight_per_unit } => {
                write!(f, "PER_UNIT({})", weight_per_unit)
            }
            WeightModel::PerMeter {
                weight_per_meter, ..
            } => write!(f, "PER_METER({})", weight_per_meter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_group_from_code() {
        assert_eq!(ReasonGroup::from_reason_code("TU01"), ReasonGroup::Running);
        assert_eq!(ReasonGroup::from_reason_code("  tu-normal"), ReasonGroup::Running);
        assert_eq!(ReasonGroup::from_reason_code("PM02"), ReasonGroup::Stoppage);
        assert_eq!(ReasonGroup::from_reason_code("T"), ReasonGroup::Stoppage);
        assert_eq!(ReasonGroup::from_reason_code(""), ReasonGroup::Stoppage);
        // 多字节字符不会导致切片 panic
        assert_eq!(ReasonGroup::from_reason_code("é停机"), ReasonGroup::Stoppage);
    }

    #[test]
    fn test_reason_group_display() {
        assert_eq!(ReasonGroup::Running.to_string(), "RUNNING");
        assert_eq!(ReasonGroup::Stoppage.to_string(), "STOPPAGE");
    }
}
