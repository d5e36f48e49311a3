use super::{build_client, check_status, map_transport_error};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use ud_02_user_directory::{GatewayError, PasswordGateway};

#[derive(Serialize)]
struct HashRequest<'a> {
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HashResponse {
    hashed_password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationRequest<'a> {
    password: &'a str,
    hashed_password: &'a str,
}

/// `PasswordGateway` backed by the encryption service.
///
/// - `POST {base}/password` with `{password}` answers `{hashedPassword}`
/// - `POST {base}/password/validation` with `{password, hashedPassword}`
///   answers a JSON boolean
#[derive(Clone)]
pub struct HttpPasswordGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPasswordGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl PasswordGateway for HttpPasswordGateway {
    async fn hash_password(&self, password: &str) -> Result<String, GatewayError> {
        let response = self
            .client
            .post(format!("{}/password", self.base_url))
            .json(&HashRequest { password })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Password service unreachable");
                map_transport_error(e)
            })?;
        check_status(&response)?;

        let body: HashResponse = response.json().await.map_err(map_transport_error)?;
        debug!("Password hashed");
        Ok(body.hashed_password)
    }

    async fn validate_password(
        &self,
        password: &str,
        hashed: &str,
    ) -> Result<bool, GatewayError> {
        let response = self
            .client
            .post(format!("{}/password/validation", self.base_url))
            .json(&ValidationRequest {
                password,
                hashed_password: hashed,
            })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Password service unreachable");
                map_transport_error(e)
            })?;
        check_status(&response)?;

        response.json::<bool>().await.map_err(map_transport_error)
    }
}
