// ==========================================
// 工厂生产看板 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: config_kv 表 (key-value + scope)
// 红线: 配置缺失或格式错误 → 使用默认值并告警，不阻断看板
// ==========================================

use crate::config::dashboard_config_trait::DashboardConfigReader;
use crate::config::error::ConfigError;
use crate::db::{get_default_db_path, init_config_schema, open_sqlite_connection};
use crate::domain::window::{DEFAULT_PARETO_TOP_N, DEFAULT_SHIFT_HOURS};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例（自动建表）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, ConfigError> {
        let conn = open_sqlite_connection(db_path)?;
        init_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 使用默认路径创建（见 db::get_default_db_path）
    pub fn open_default() -> Result<Self, ConfigError> {
        let db_path = get_default_db_path();
        tracing::info!(db_path = %db_path, "打开配置库");
        Self::new(&db_path)
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：会对传入连接执行建表（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, ConfigError> {
        {
            let guard = conn
                .lock()
                .map_err(|e| ConfigError::LockError(e.to_string()))?;
            crate::db::configure_sqlite_connection(&guard)?;
            init_config_schema(&guard)?;
        }

        Ok(Self { conn })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, ConfigError> {
        self.conn
            .lock()
            .map_err(|e| ConfigError::LockError(format!("锁获取失败: {}", e)))
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let conn = self.lock()?;

        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    /// 写入配置值（UPSERT）
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        tracing::info!(config_key = key, value = value, "配置已更新");
        Ok(())
    }

    /// 获取所有配置的快照（JSON格式，按键排序）
    pub fn get_config_snapshot(&self) -> Result<String, ConfigError> {
        let conn = self.lock()?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut config_map: BTreeMap<String, String> = BTreeMap::new();
        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(serde_json::to_string(&json!(config_map))?)
    }

    /// 从配置快照恢复配置（覆盖同名键）
    ///
    /// # 返回
    /// - Ok(usize): 恢复的配置项数量
    pub fn restore_config_from_snapshot(&self, snapshot_json: &str) -> Result<usize, ConfigError> {
        let config_map: BTreeMap<String, String> = serde_json::from_str(snapshot_json)?;

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let mut count = 0;
        for (key, value) in config_map.iter() {
            count += tx.execute(
                "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
                 ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
                params![key, value],
            )?;
        }

        tx.commit()?;
        Ok(count)
    }

    /// 读取非负浮点配置；缺失/格式错误/负数 → 默认值
    fn get_non_negative_f64(&self, key: &str, default: f64) -> Result<f64, ConfigError> {
        let raw = match self.get_global_config_value(key)? {
            Some(v) => v,
            None => return Ok(default),
        };

        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
            _ => {
                tracing::warn!(
                    config_key = key,
                    raw_value = %raw,
                    default,
                    "配置值格式错误，使用默认值"
                );
                Ok(default)
            }
        }
    }
}

// ==========================================
// DashboardConfigReader Trait 实现
// ==========================================
#[async_trait]
impl DashboardConfigReader for ConfigManager {
    async fn get_daily_capacity(&self) -> Result<f64, ConfigError> {
        self.get_non_negative_f64(config_keys::DAILY_CAPACITY, 0.0)
    }

    async fn get_shift_hours(&self) -> Result<f64, ConfigError> {
        let hours = self.get_non_negative_f64(config_keys::SHIFT_HOURS, DEFAULT_SHIFT_HOURS)?;
        if hours > 24.0 {
            tracing::warn!(shift_hours = hours, "班次时长超过 24 小时，按 24 小时计");
            return Ok(24.0);
        }
        Ok(hours)
    }

    async fn get_pareto_top_n(&self) -> Result<usize, ConfigError> {
        let value = self.get_global_config_value(config_keys::PARETO_TOP_N)?;
        Ok(value
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_PARETO_TOP_N))
    }

    async fn get_performance_pct(&self) -> Result<f64, ConfigError> {
        self.get_non_negative_f64(config_keys::PERFORMANCE_PCT, 100.0)
    }

    async fn get_quality_pct(&self) -> Result<f64, ConfigError> {
        self.get_non_negative_f64(config_keys::QUALITY_PCT, 100.0)
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 产能
    pub const DAILY_CAPACITY: &str = "daily_capacity";

    // 班次
    pub const SHIFT_HOURS: &str = "shift_hours";

    // OEE 固定输入
    pub const PERFORMANCE_PCT: &str = "performance_pct";
    pub const QUALITY_PCT: &str = "quality_pct";

    // 展示
    pub const PARETO_TOP_N: &str = "pareto_top_n";
}
