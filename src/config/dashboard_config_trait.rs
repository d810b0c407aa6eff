// ==========================================
// 工厂生产看板 - 看板配置读取 Trait
// ==========================================
// 职责: 定义引擎所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::error::ConfigError;
use crate::domain::window::ShiftConfig;
use async_trait::async_trait;

// ==========================================
// DashboardConfigReader Trait
// ==========================================
// 实现者: ConfigManager（config_kv 表）、ShiftConfig（静态配置）
#[async_trait]
pub trait DashboardConfigReader: Send + Sync {
    /// 日产能目标（重量/天）
    ///
    /// # 默认值
    /// - 0（未配置时盈亏即为实绩本身）
    async fn get_daily_capacity(&self) -> Result<f64, ConfigError>;

    /// 每日班次时长（小时）
    ///
    /// # 默认值
    /// - 8
    async fn get_shift_hours(&self) -> Result<f64, ConfigError>;

    /// 停机 Pareto 保留条数
    ///
    /// # 默认值
    /// - 5
    async fn get_pareto_top_n(&self) -> Result<usize, ConfigError>;

    /// 性能率 (%)，目前为固定输入
    async fn get_performance_pct(&self) -> Result<f64, ConfigError>;

    /// 质量率 (%)，目前为固定输入
    async fn get_quality_pct(&self) -> Result<f64, ConfigError>;

    /// 组装班次配置
    async fn load_shift_config(&self) -> Result<ShiftConfig, ConfigError> {
        Ok(ShiftConfig {
            daily_capacity: self.get_daily_capacity().await?,
            shift_hours: self.get_shift_hours().await?,
            performance_pct: self.get_performance_pct().await?,
            quality_pct: self.get_quality_pct().await?,
            pareto_top_n: self.get_pareto_top_n().await?,
        })
    }
}

// ==========================================
// 静态配置实现
// ==========================================
#[async_trait]
impl DashboardConfigReader for ShiftConfig {
    async fn get_daily_capacity(&self) -> Result<f64, ConfigError> {
        Ok(self.daily_capacity)
    }

    async fn get_shift_hours(&self) -> Result<f64, ConfigError> {
        Ok(self.shift_hours)
    }

    async fn get_pareto_top_n(&self) -> Result<usize, ConfigError> {
        Ok(self.pareto_top_n)
    }

    async fn get_performance_pct(&self) -> Result<f64, ConfigError> {
        Ok(self.performance_pct)
    }

    async fn get_quality_pct(&self) -> Result<f64, ConfigError> {
        Ok(self.quality_pct)
    }

    async fn load_shift_config(&self) -> Result<ShiftConfig, ConfigError> {
        Ok(self.clone())
    }
}
