// ==========================================
// 工厂生产看板 - 生产报工（实绩）领域模型
// ==========================================
// 职责: 操作员报工记录 (apontamento)
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 生产报工记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionLogEntry {
    pub date: NaiveDate,         // 报工日期
    pub product_code: String,    // 产品代码
    pub machine_id: String,      // 机台
    pub quantity: i64,           // 件数
    #[serde(default)]
    pub length: Option<f64>,     // 长度（米，定尺产品必填）
    #[serde(default)]
    pub weight: Option<f64>,     // 预计算重量（优先）
}

impl ProductionLogEntry {
    pub fn new(date: NaiveDate, product_code: &str, machine_id: &str, quantity: i64) -> Self {
        Self {
            date,
            product_code: product_code.to_string(),
            machine_id: machine_id.to_string(),
            quantity,
            length: None,
            weight: None,
        }
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}
