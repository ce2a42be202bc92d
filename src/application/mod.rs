//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 存储端口定义（SpeechStorePort）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{DeleteSpeechHandler, SaveSpeechHandler},
    DeleteSpeech, SaveSpeech,
};

pub use error::ApplicationError;

pub use ports::{SpeechRecord, SpeechStorePort, StoreError};

pub use queries::{
    handlers::{GetHistoryHandler, GetStatisticsHandler, SpeechStatistics},
    GetHistory, GetStatistics, DEFAULT_HISTORY_LIMIT,
};
