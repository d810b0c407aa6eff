// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、测试数据生成等功能
// ==========================================
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use production_dashboard::db::{init_config_schema, open_sqlite_connection};
use production_dashboard::domain::{
    DowntimeEvent, ProductCatalog, ProductCatalogEntry, ProductionLogEntry, ProductionOrder,
    ProductionOrderLine,
};
use std::error::Error;
use tempfile::NamedTempFile;

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = open_sqlite_connection(&db_path)?;
    init_config_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// 日期简写
pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// 时间简写
pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// 单行订单
pub fn order(order_id: &str, date: NaiveDate, weight: f64) -> ProductionOrder {
    ProductionOrder::new(
        order_id,
        date,
        vec![ProductionOrderLine::new("P-100", 1, weight)],
    )
}

/// 自带重量的报工记录
pub fn weighed_entry(date: NaiveDate, machine_id: &str, weight: f64) -> ProductionLogEntry {
    ProductionLogEntry::new(date, "P-100", machine_id, 1).with_weight(weight)
}

/// 停机/运转事件（使用存储时长）
pub fn event(
    date: NaiveDate,
    machine_id: &str,
    reason_code: &str,
    description: &str,
    minutes: i64,
) -> DowntimeEvent {
    DowntimeEvent {
        date,
        start_time: t(8, 0),
        end_time: t(8, 0),
        duration_minutes: Some(minutes),
        reason_code: reason_code.to_string(),
        reason_description: description.to_string(),
        reason_group: if reason_code.starts_with("TU") {
            "运转".to_string()
        } else {
            "停机".to_string()
        },
        machine_id: machine_id.to_string(),
    }
}

/// 测试用产品目录
///
/// - BAR-6M: 定尺 2.0 kg/m，标称 6 m
/// - BOX-10: 单重 10
pub fn test_catalog() -> ProductCatalog {
    ProductCatalog::from_entries(vec![
        ProductCatalogEntry::per_meter("BAR-6M", "定尺棒材", 2.0, Some(6.0)),
        ProductCatalogEntry::per_unit("BOX-10", "标准箱", 10.0),
    ])
}
