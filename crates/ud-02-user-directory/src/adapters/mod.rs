//! # Adapters
//!
//! Outbound port implementations that live with the subsystem.

pub mod memory;
