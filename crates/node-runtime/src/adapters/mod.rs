//! # Adapter Implementations
//!
//! HTTP implementations of the directory's outbound ports:
//!
//! ```text
//!  UserDirectoryService
//!        │ PasswordGateway          │ SearchGateway
//!        ▼                          ▼
//!  HttpPasswordGateway        HttpSearchGateway
//!        │ POST /password           │ POST /index/users
//!        ▼                          ▼
//!  encryption service         search service
//! ```

pub mod encryption;
pub mod search;

pub use encryption::HttpPasswordGateway;
pub use search::HttpSearchGateway;

use std::time::Duration;
use ud_02_user_directory::GatewayError;

pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, GatewayError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GatewayError::Unavailable(format!("cannot build HTTP client: {e}")))
}

/// Connection failures and timeouts mean the service is unavailable; anything
/// else reqwest reports happened after a response arrived.
pub(crate) fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_connect() || e.is_timeout() || e.is_request() {
        GatewayError::Unavailable(e.to_string())
    } else {
        GatewayError::InvalidResponse(e.to_string())
    }
}

pub(crate) fn check_status(response: &reqwest::Response) -> Result<(), GatewayError> {
    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::InvalidResponse(format!(
            "{} answered {}",
            response.url(),
            status
        )));
    }
    Ok(())
}
