//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 允许跨域请求的来源列表；为空时允许任意来源
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 存储后端类型
///
/// 部署时二选一，进程运行期间固定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Sqlite,
    Sled,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Sqlite => "sqlite",
            BackendKind::Sled => "sled",
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DatabaseConfig {
    /// 后端选择；未设置时启动失败
    #[serde(default)]
    pub backend: Option<BackendKind>,

    /// SQLite 后端配置
    #[serde(default)]
    pub sqlite: SqliteConfig,

    /// Sled 后端配置
    #[serde(default)]
    pub sled: SledConfig,
}

/// SQLite 后端配置
#[derive(Debug, Clone, Deserialize)]
pub struct SqliteConfig {
    /// 数据库文件路径
    #[serde(default = "default_sqlite_path")]
    pub path: String,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_sqlite_path() -> String {
    "data/speechlog.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            path: default_sqlite_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl SqliteConfig {
    /// 获取数据库 URL
    pub fn database_url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.path)
    }
}

/// Sled 后端配置
#[derive(Debug, Clone, Deserialize)]
pub struct SledConfig {
    /// 数据库目录路径
    #[serde(default = "default_sled_path")]
    pub path: String,
}

fn default_sled_path() -> String {
    "data/speechlog.sled".to_string()
}

impl Default for SledConfig {
    fn default() -> Self {
        Self {
            path: default_sled_path(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
