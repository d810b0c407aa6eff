// ==========================================
// 工厂生产看板 - DashboardApi DTO 定义
// ==========================================
// 职责: 定义看板刷新的请求和响应结构
// ==========================================

use crate::domain::window::{AnalysisWindow, ShiftConfig};
use crate::engine::availability::AvailabilityReport;
use crate::engine::capacity_load::CapacityLoadReport;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 看板刷新请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardRequest {
    /// 窗口起始（必填，ISO DATE: YYYY-MM-DD）
    pub start_date: String,

    /// 窗口结束（必填，ISO DATE: YYYY-MM-DD）
    pub end_date: String,

    /// 参考"今天"（可选，默认本地日期）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<String>,

    /// 机台过滤（可选）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,
}

impl DashboardRequest {
    pub fn new(start_date: &str, end_date: &str) -> Self {
        Self {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            today: None,
            machine_id: None,
        }
    }

    pub fn with_today(mut self, today: &str) -> Self {
        self.today = Some(today.to_string());
        self
    }

    pub fn with_machine(mut self, machine_id: &str) -> Self {
        self.machine_id = Some(machine_id.to_string());
        self
    }
}

/// 看板快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// 刷新 ID
    pub refresh_id: String,

    /// 刷新代次（单调递增）
    pub generation: u64,

    pub window: AnalysisWindow,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,

    /// 本次使用的班次配置
    pub shift_config: ShiftConfig,

    /// 计划/实绩负荷
    pub capacity: CapacityLoadReport,

    /// 可用率 / OEE
    pub availability: AvailabilityReport,

    /// 分机台可用率
    pub machine_availability: BTreeMap<String, AvailabilityReport>,
}

/// 刷新结果
///
/// 后发请求先完成时，先发请求的结果作废（last-write-wins）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefreshOutcome {
    Completed(Box<DashboardSnapshot>),
    Superseded {
        refresh_id: String,
        generation: u64,
        latest_generation: u64,
    },
}

impl RefreshOutcome {
    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match self {
            RefreshOutcome::Completed(snapshot) => Some(snapshot),
            RefreshOutcome::Superseded { .. } => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, RefreshOutcome::Superseded { .. })
    }
}
