//! Ports - 出站端口
//!
//! 具体实现在 infrastructure 层（SQLite / Sled / 内存）

mod speech_store;

pub use speech_store::{SpeechRecord, SpeechStorePort, StoreError};
