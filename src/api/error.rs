// ==========================================
// 工厂生产看板 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换下层错误为用户友好的错误消息
// 说明: 引擎本身没有失败路径；这里只有取数、配置与入参错误
// ==========================================

use crate::config::ConfigError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 入参错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("日期格式错误 (字段 {field}): 期望 YYYY-MM-DD，实际 {value}")]
    DateFormatError { field: String, value: String },

    // ==========================================
    // 依赖错误（引擎运行前暴露）
    // ==========================================
    #[error("数据源读取失败: {0}")]
    StoreError(String),

    #[error("配置读取失败: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Other(e) => ApiError::Other(e),
            other => ApiError::StoreError(other.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// API层 Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
