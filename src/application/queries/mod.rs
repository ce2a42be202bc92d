//! Queries - CQRS 查询

pub mod handlers;
mod speech_queries;

pub use speech_queries::{GetHistory, GetStatistics, DEFAULT_HISTORY_LIMIT};
