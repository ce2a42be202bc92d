//! Domain Layer - 领域层
//!
//! Speech Context: 朗读记录的校验与默认值规则

pub mod speech;

pub use speech::{NewSpeech, SpeechDefaults, SpeechValidationError};
