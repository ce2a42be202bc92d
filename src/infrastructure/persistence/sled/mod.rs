//! Sled Persistence - 嵌入式文档型存储实现

mod speech_store;

pub use speech_store::{SledSpeechStore, SledStoreConfig};
