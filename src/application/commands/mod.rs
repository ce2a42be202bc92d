//! Commands - CQRS 命令

pub mod handlers;
mod speech_commands;

pub use speech_commands::{DeleteSpeech, SaveSpeech};
