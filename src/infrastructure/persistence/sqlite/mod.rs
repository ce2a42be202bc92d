//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod speech_store;

pub use database::*;
pub use speech_store::*;
