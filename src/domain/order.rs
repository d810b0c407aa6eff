// ==========================================
// 工厂生产看板 - 生产订单（计划）领域模型
// ==========================================
// 职责: 计划侧输入（romaneio 及其明细行）
// 红线: 引擎只读，不修改
// ==========================================

use crate::engine::numeric::non_negative;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ProductionOrderLine - 订单明细行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionOrderLine {
    pub product_code: String,        // 产品代码
    pub quantity: i64,               // 件数
    #[serde(default)]
    pub unit_length: Option<f64>,    // 定尺长度（米）
    pub weight: f64,                 // 计算重量
}

impl ProductionOrderLine {
    pub fn new(product_code: &str, quantity: i64, weight: f64) -> Self {
        Self {
            product_code: product_code.to_string(),
            quantity,
            unit_length: None,
            weight,
        }
    }

    /// 明细行重量（NaN/负数按 0 处理）
    pub fn effective_weight(&self) -> f64 {
        non_negative(self.weight)
    }
}

// ==========================================
// ProductionOrder - 生产订单 (romaneio)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionOrder {
    pub order_id: String,                // 订单ID
    pub date: NaiveDate,                 // 排产日期
    #[serde(default)]
    pub lines: Vec<ProductionOrderLine>, // 明细行（有序）
}

impl ProductionOrder {
    pub fn new(order_id: &str, date: NaiveDate, lines: Vec<ProductionOrderLine>) -> Self {
        Self {
            order_id: order_id.to_string(),
            date,
            lines,
        }
    }

    /// 订单计划总重量
    pub fn total_weight(&self) -> f64 {
        self.lines
            .iter()
            .map(ProductionOrderLine::effective_weight)
            .sum()
    }
}
