// ==========================================
// 工厂生产看板 - 产品目录领域模型
// ==========================================
// 职责: 产品代码 → 重量模型；原因代码 → 原因分组
// 红线: 查不到返回 NotFound，属正常分支，不是异常
// ==========================================

use crate::domain::types::WeightModel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// ProductCatalogEntry - 产品目录条目（外部静态数据）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalogEntry {
    pub code: String,                  // 产品代码
    pub name: String,                  // 产品名称
    #[serde(default)]
    pub is_custom_length: bool,        // 是否定尺（按长度计重）
    #[serde(default)]
    pub weight_per_unit: Option<f64>,  // 单件重量 (非定尺)
    #[serde(default)]
    pub weight_per_meter: Option<f64>, // 米重 (定尺)
    #[serde(default)]
    pub nominal_length: Option<f64>,   // 标称长度 (定尺，米)
}

impl ProductCatalogEntry {
    /// 固定单重产品
    pub fn per_unit(code: &str, name: &str, weight_per_unit: f64) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            is_custom_length: false,
            weight_per_unit: Some(weight_per_unit),
            weight_per_meter: None,
            nominal_length: None,
        }
    }

    /// 定尺产品
    pub fn per_meter(
        code: &str,
        name: &str,
        weight_per_meter: f64,
        nominal_length: Option<f64>,
    ) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            is_custom_length: true,
            weight_per_unit: None,
            weight_per_meter: Some(weight_per_meter),
            nominal_length,
        }
    }

    /// 条目对应的重量模型
    ///
    /// 缺失的系数按 0 处理（数据质量缺口，不报错）。
    pub fn weight_model(&self) -> WeightModel {
        if self.is_custom_length {
            WeightModel::PerMeter {
                weight_per_meter: self.weight_per_meter.unwrap_or(0.0),
                nominal_length: self.nominal_length,
            }
        } else {
            WeightModel::PerUnit {
                weight_per_unit: self.weight_per_unit.unwrap_or(0.0),
            }
        }
    }
}

// ==========================================
// CatalogHit - 目录查询结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogHit<'a> {
    Found(&'a ProductCatalogEntry),
    NotFound,
}

impl<'a> CatalogHit<'a> {
    pub fn entry(self) -> Option<&'a ProductCatalogEntry> {
        match self {
            CatalogHit::Found(entry) => Some(entry),
            CatalogHit::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, CatalogHit::Found(_))
    }
}

// ==========================================
// Trait: CatalogLookup
// ==========================================
// 用途: 引擎读取产品目录的接口
// 实现者: ProductCatalog（内存目录）
// 说明: 原因代码分组只认 "TU" 前缀，见 ReasonGroup::from_reason_code
pub trait CatalogLookup {
    /// 按产品代码查询目录条目
    fn find_product(&self, code: &str) -> CatalogHit<'_>;
}

// ==========================================
// ProductCatalog - 内存产品目录
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    entries: HashMap<String, ProductCatalogEntry>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由目录条目构建（重复代码以后出现者为准）
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ProductCatalogEntry>,
    {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry);
        }
        catalog
    }

    pub fn insert(&mut self, entry: ProductCatalogEntry) {
        self.entries.insert(entry.code.trim().to_string(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogLookup for ProductCatalog {
    fn find_product(&self, code: &str) -> CatalogHit<'_> {
        match self.entries.get(code.trim()) {
            Some(entry) => CatalogHit::Found(entry),
            None => CatalogHit::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_product_trims_code() {
        let catalog = ProductCatalog::from_entries(vec![ProductCatalogEntry::per_unit(
            "P-100", "Perfil 100", 12.5,
        )]);

        assert!(catalog.find_product("P-100").is_found());
        assert!(catalog.find_product(" P-100 ").is_found());
        assert_eq!(catalog.find_product("P-200"), CatalogHit::NotFound);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_weight_model_missing_coefficients_default_to_zero() {
        let mut entry = ProductCatalogEntry::per_meter("T-1", "Telha", 2.0, None);
        entry.weight_per_meter = None;

        assert_eq!(
            entry.weight_model(),
            WeightModel::PerMeter {
                weight_per_meter: 0.0,
                nominal_length: None
            }
        );
    }
}
