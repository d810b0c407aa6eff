// ==========================================
// 工厂生产看板 - 实绩重量解析
// ==========================================
// 职责: 报工记录 → 实绩重量
// 探测顺序（先命中者为准）:
//   1) 报工自带重量 (> 0)
//   2) 产品目录: 定尺 = 件数 × 有效长度 × 米重；非定尺 = 件数 × 单重
//   3) 都未命中 → 0（目录缺失属数据质量缺口，不报错）
// 红线: 结果恒为有限非负数
// ==========================================

use crate::domain::catalog::CatalogLookup;
use crate::domain::production_log::ProductionLogEntry;
use crate::domain::types::WeightModel;
use crate::engine::numeric::{non_negative, non_negative_count, positive_opt};
use serde::{Deserialize, Serialize};

/// 重量来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightSource {
    Explicit,   // 报工自带
    Catalog,    // 产品目录计算
    Unresolved, // 未解析（按 0 计）
}

/// 重量解析结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightResolution {
    pub weight: f64,
    pub source: WeightSource,
}

type WeightProbe = fn(&ProductionLogEntry, &dyn CatalogLookup) -> Option<f64>;

/// 探测链（顺序即优先级）
const WEIGHT_PROBES: [(WeightSource, WeightProbe); 2] = [
    (WeightSource::Explicit, explicit_weight_probe),
    (WeightSource::Catalog, catalog_weight_probe),
];

/// 报工自带重量
fn explicit_weight_probe(entry: &ProductionLogEntry, _catalog: &dyn CatalogLookup) -> Option<f64> {
    positive_opt(entry.weight)
}

/// 按产品目录计算
fn catalog_weight_probe(entry: &ProductionLogEntry, catalog: &dyn CatalogLookup) -> Option<f64> {
    let product = catalog.find_product(&entry.product_code).entry()?;
    let quantity = non_negative_count(entry.quantity);

    let weight = match product.weight_model() {
        WeightModel::PerMeter {
            weight_per_meter,
            nominal_length,
        } => quantity * effective_length(entry.length, nominal_length) * non_negative(weight_per_meter),
        WeightModel::PerUnit { weight_per_unit } => quantity * non_negative(weight_per_unit),
    };

    Some(non_negative(weight))
}

/// 有效长度: 报工长度 → 目录标称长度 → 0
pub fn effective_length(entry_length: Option<f64>, nominal_length: Option<f64>) -> f64 {
    entry_length
        .or(nominal_length)
        .map(non_negative)
        .unwrap_or(0.0)
}

/// 解析报工记录的实绩重量（含来源）
pub fn resolve_executed_weight_detailed(
    entry: &ProductionLogEntry,
    catalog: &dyn CatalogLookup,
) -> WeightResolution {
    WEIGHT_PROBES
        .iter()
        .find_map(|(source, probe)| {
            probe(entry, catalog).map(|weight| WeightResolution {
                weight,
                source: *source,
            })
        })
        .unwrap_or(WeightResolution {
            weight: 0.0,
            source: WeightSource::Unresolved,
        })
}

/// 解析报工记录的实绩重量
pub fn resolve_executed_weight(entry: &ProductionLogEntry, catalog: &dyn CatalogLookup) -> f64 {
    resolve_executed_weight_detailed(entry, catalog).weight
}
