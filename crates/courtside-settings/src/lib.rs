//! Courtside Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;

pub use config::{ApiSettings, Config, DesignerSettings, LoggingSettings};
