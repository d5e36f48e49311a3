//! Domain types for the API Gateway.

pub mod config;
pub mod error;
pub mod types;
pub mod validation;

pub use config::{ConfigError, GatewayConfig};
pub use error::{ApiError, ErrorBody, GatewayError};
pub use types::{HealthResponse, WalletLoginResponse};
