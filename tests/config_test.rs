// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证 config_kv 读取、默认值回退、快照恢复与持久化
// ==========================================

mod test_helpers;

use production_dashboard::config::{config_keys, ConfigManager, DashboardConfigReader};
use production_dashboard::domain::ShiftConfig;

#[tokio::test]
async fn test_config_manager_reads_configured_values() {
    let (_temp_file, db_path) = test_helpers::create_test_db().unwrap();
    let manager = ConfigManager::new(&db_path).unwrap();

    manager.set_config_value(config_keys::DAILY_CAPACITY, "1200").unwrap();
    manager.set_config_value(config_keys::SHIFT_HOURS, "16").unwrap();
    manager.set_config_value(config_keys::PERFORMANCE_PCT, "92.5").unwrap();
    manager.set_config_value(config_keys::PARETO_TOP_N, "3").unwrap();

    let config = manager.load_shift_config().await.unwrap();
    assert_eq!(config.daily_capacity, 1200.0);
    assert_eq!(config.shift_hours, 16.0);
    assert_eq!(config.performance_pct, 92.5);
    assert_eq!(config.quality_pct, 100.0);
    assert_eq!(config.pareto_top_n, 3);
}

#[tokio::test]
async fn test_config_manager_defaults_on_empty_db() {
    let (_temp_file, db_path) = test_helpers::create_test_db().unwrap();
    let manager = ConfigManager::new(&db_path).unwrap();

    let config = manager.load_shift_config().await.unwrap();
    assert_eq!(config, ShiftConfig::default());
}

#[tokio::test]
async fn test_config_persists_across_reopen() {
    let (_temp_file, db_path) = test_helpers::create_test_db().unwrap();

    {
        let manager = ConfigManager::new(&db_path).unwrap();
        manager.set_config_value(config_keys::DAILY_CAPACITY, "850").unwrap();
        // 覆写
        manager.set_config_value(config_keys::DAILY_CAPACITY, "900").unwrap();
    }

    let reopened = ConfigManager::new(&db_path).unwrap();
    assert_eq!(reopened.get_daily_capacity().await.unwrap(), 900.0);
}

#[tokio::test]
async fn test_negative_capacity_falls_back_to_default() {
    let (_temp_file, db_path) = test_helpers::create_test_db().unwrap();
    let manager = ConfigManager::new(&db_path).unwrap();
    manager.set_config_value(config_keys::DAILY_CAPACITY, "-100").unwrap();

    assert_eq!(manager.get_daily_capacity().await.unwrap(), 0.0);
}

#[test]
fn test_snapshot_round_trip_between_databases() {
    let (_source_file, source_path) = test_helpers::create_test_db().unwrap();
    let (_target_file, target_path) = test_helpers::create_test_db().unwrap();

    let source = ConfigManager::new(&source_path).unwrap();
    source.set_config_value(config_keys::SHIFT_HOURS, "12").unwrap();
    let snapshot = source.get_config_snapshot().unwrap();

    let target = ConfigManager::new(&target_path).unwrap();
    target.set_config_value(config_keys::SHIFT_HOURS, "8").unwrap();
    assert_eq!(target.restore_config_from_snapshot(&snapshot).unwrap(), 1);
    assert_eq!(
        target.get_global_config_value(config_keys::SHIFT_HOURS).unwrap(),
        Some("12".to_string())
    );
}

#[test]
fn test_malformed_snapshot_is_rejected() {
    let (_temp_file, db_path) = test_helpers::create_test_db().unwrap();
    let manager = ConfigManager::new(&db_path).unwrap();

    assert!(manager.restore_config_from_snapshot("not json").is_err());
}

#[tokio::test]
async fn test_static_shift_config_reader() {
    let mut static_config = ShiftConfig::new(500.0, 10.0);
    static_config.quality_pct = 98.0;

    let loaded = static_config.load_shift_config().await.unwrap();
    assert_eq!(loaded, static_config);
}
