//! Command Handlers

mod speech_handlers;

pub use speech_handlers::{DeleteSpeechHandler, SaveSpeechHandler};
