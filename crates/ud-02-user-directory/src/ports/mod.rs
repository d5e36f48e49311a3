//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that the HTTP gateway calls
//! - **Outbound (Driven)**: Identity store, search indexer, password service

pub mod inbound;
pub mod outbound;
