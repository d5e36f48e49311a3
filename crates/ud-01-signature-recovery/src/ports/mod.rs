//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that the user directory calls
//!
//! Recovery is pure, so there are no outbound ports.

pub mod inbound;
