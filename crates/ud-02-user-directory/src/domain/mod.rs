//! # Domain Layer
//!
//! Request and outcome types, record defaults and errors. No I/O.

pub mod defaults;
pub mod entities;
pub mod errors;
