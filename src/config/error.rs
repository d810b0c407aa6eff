// ==========================================
// 工厂生产看板 - 配置层错误类型
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置库访问失败: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("配置库锁获取失败: {0}")]
    LockError(String),

    #[error("配置快照格式错误: {0}")]
    Snapshot(#[from] serde_json::Error),
}
