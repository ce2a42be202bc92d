//! Speechlog - 朗读记录持久化服务
//!
//! 架构设计: Hexagonal Architecture + CQRS
//!
//! 领域层 (domain/):
//! - Speech Context: 朗读记录校验与默认值
//!
//! 应用层 (application/):
//! - Ports: 存储端口定义（SpeechStorePort）
//! - Commands: SaveSpeech / DeleteSpeech 及处理器
//! - Queries: GetHistory / GetStatistics 及处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）
//! - Persistence: SQLite 与 Sled 双后端，启动时二选一
//! - Memory: 测试用内存存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
