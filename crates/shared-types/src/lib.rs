//! # Shared Types Crate
//!
//! This crate contains the identity record, its public projection and the
//! errors raised by identity stores.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: The `User` entity is defined once here.
//! - **One Entity, Two Credentials**: A user authenticates either with a
//!   password or with a wallet. The record carries both optional credentials
//!   instead of being split into subtypes.
//! - **Projection Boundary**: Anything leaving the directory is a `UserDto`,
//!   which never carries credential material.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
