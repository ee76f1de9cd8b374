//! # Diagnostics
//!
//! Logging setup for binaries embedding the client. The library itself only
//! emits `tracing` events; nothing is printed unless a subscriber is installed.

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init;
