// ==========================================
// 工厂生产看板 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 存储访问错误 =====
    #[error("数据源不可用: {0}")]
    StoreUnavailable(String),

    #[error("存储锁获取失败: {0}")]
    LockError(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
