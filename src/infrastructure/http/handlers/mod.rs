//! HTTP Handlers

mod health;
mod speech;

pub use health::*;
pub use speech::*;
