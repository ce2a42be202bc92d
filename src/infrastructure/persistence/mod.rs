//! Persistence Layer - 数据持久化
//!
//! SQLite 与 Sled 两个可互换的存储后端实现

pub mod sled;
pub mod sqlite;

pub use self::sled::SledSpeechStore;
pub use self::sqlite::SqliteSpeechStore;
