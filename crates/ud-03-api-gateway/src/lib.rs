//! UD-03 API Gateway - HTTP interface for the user directory.
//!
//! # Routes
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | POST | `/api/users/register` | 201 + user |
//! | POST | `/api/users/login` | 200 + user |
//! | POST | `/api/users/friends` | 204 |
//! | POST | `/api/users/wallet/login` | 200 + `{needsRegistration, user}` |
//! | POST | `/api/users/wallet/register` | 201 + user |
//! | GET | `/health` | 200 |
//!
//! Failures carry `{"code", "message"}`: 400 invalid input, 401 signature
//! rejected, 403 bad credentials, 404 unknown user, 409 conflict, 502
//! downstream service failure.
//!
//! # Usage
//!
//! ```ignore
//! use ud_03_api_gateway::{ApiGatewayService, GatewayConfig};
//!
//! let service = ApiGatewayService::new(GatewayConfig::default(), directory)?;
//! service.run(shutdown_signal()).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod handlers;
pub mod service;

pub use domain::{
    ApiError, ConfigError, ErrorBody, GatewayConfig, GatewayError, HealthResponse,
    WalletLoginResponse,
};
pub use service::ApiGatewayService;
