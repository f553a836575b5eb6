//! Structured logging setup for applications driving the minibatch engine.
//!
//! The crate itself only emits `tracing` events and spans (per service call
//! and per minibatch); installing a subscriber is left to the application.

mod logging;

pub use logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
