//! # User Directory Node Runtime
//!
//! Library half of the node binary, exposed so the integration suite can
//! wire the same node the binary runs.
//!
//! - `container/` - configuration and environment loading
//! - `adapters/` - HTTP clients implementing the directory's outbound ports
//! - `wiring/` - subsystem construction and the serve loop

pub mod adapters;
pub mod container;
pub mod wiring;

pub use container::{load_config, load_config_from, ConfigError, NodeConfig, ServicesConfig};
pub use wiring::{DirectoryService, NodeError, UserDirectoryNode};
