//! # Container Module
//!
//! Runtime configuration shared by the wiring and the binary.

pub mod config;

pub use config::{load_config, load_config_from, ConfigError, NodeConfig, ServicesConfig};
