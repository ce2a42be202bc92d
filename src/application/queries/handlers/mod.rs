//! Query Handlers

mod speech_handlers;

pub use speech_handlers::{GetHistoryHandler, GetStatisticsHandler, SpeechStatistics};
