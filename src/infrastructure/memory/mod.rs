//! In-Memory Implementations - 测试用内存实现

mod speech_store;

pub use speech_store::InMemorySpeechStore;
