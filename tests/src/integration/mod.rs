//! # Integration Tests
//!
//! Cross-crate flows. Each file holds a `#[cfg(test)]` module.

pub mod node_wiring;
pub mod wallet_flow;
