// ==========================================
// 工厂生产看板 - 配置层
// ==========================================
// 职责: 日产能、班次时长、OEE 固定输入等配置读取
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod dashboard_config_trait;
pub mod error;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use dashboard_config_trait::DashboardConfigReader;
pub use error::ConfigError;
