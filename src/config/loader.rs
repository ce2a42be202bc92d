//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `SPEECHLOG_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `SPEECHLOG_SERVER__PORT=8080`
/// - `SPEECHLOG_DATABASE__BACKEND=sled`
/// - `SPEECHLOG_DATABASE__SQLITE__PATH=/data/speechlog.db`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3001)?
        .set_default("server.cors_origins", Vec::<String>::new())?
        .set_default("database.sqlite.path", "data/speechlog.db")?
        .set_default("database.sqlite.max_connections", 5)?
        .set_default("database.sled.path", "data/speechlog.sled")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: SPEECHLOG_
    // 层级分隔符: __ (双下划线)
    // 例如: SPEECHLOG_DATABASE__BACKEND=sqlite
    builder = builder.add_source(
        Environment::with_prefix("SPEECHLOG")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    // 未识别的 backend 取值在这一步失败（启动即终止）
    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 后端选择是部署期决策，缺失时直接拒绝启动
    let backend = config.database.backend.ok_or_else(|| {
        ConfigError::ValidationError(
            "No database backend configured (set database.backend to \"sqlite\" or \"sled\")"
                .to_string(),
        )
    })?;

    // 验证选中后端的路径
    match backend {
        super::BackendKind::Sqlite if config.database.sqlite.path.is_empty() => {
            return Err(ConfigError::ValidationError(
                "SQLite database path cannot be empty".to_string(),
            ));
        }
        super::BackendKind::Sled if config.database.sled.path.is_empty() => {
            return Err(ConfigError::ValidationError(
                "Sled database path cannot be empty".to_string(),
            ));
        }
        _ => {}
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    if config.server.cors_origins.is_empty() {
        tracing::info!("CORS Origins: any");
    } else {
        tracing::info!("CORS Origins: {:?}", config.server.cors_origins);
    }
    if let Some(backend) = config.database.backend {
        tracing::info!("Database Backend: {}", backend.as_str());
        match backend {
            super::BackendKind::Sqlite => {
                tracing::info!("SQLite Path: {}", config.database.sqlite.path);
                tracing::info!(
                    "SQLite Max Connections: {}",
                    config.database.sqlite.max_connections
                );
            }
            super::BackendKind::Sled => {
                tracing::info!("Sled Path: {}", config.database.sled.path);
            }
        }
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendKind;

    #[test]
    fn test_validation_error_for_missing_backend() {
        let config = AppConfig::default();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validation_passes_with_backend() {
        let mut config = AppConfig::default();
        config.database.backend = Some(BackendKind::Sqlite);
        assert!(validate_config(&config).is_ok());

        config.database.backend = Some(BackendKind::Sled);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.database.backend = Some(BackendKind::Sqlite);
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_sqlite_path() {
        let mut config = AppConfig::default();
        config.database.backend = Some(BackendKind::Sqlite);
        config.database.sqlite.path = String::new();
        assert!(validate_config(&config).is_err());
        // 未选中的后端路径为空不影响启动
        config.database.backend = Some(BackendKind::Sled);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_empty_sled_path() {
        let mut config = AppConfig::default();
        config.database.backend = Some(BackendKind::Sled);
        config.database.sled.path = String::new();
        assert!(validate_config(&config).is_err());
    }
}
