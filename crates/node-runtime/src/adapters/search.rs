use super::{build_client, check_status, map_transport_error};
use async_trait::async_trait;
use shared_types::IndexUserRequest;
use std::time::Duration;
use tracing::debug;
use ud_02_user_directory::{GatewayError, SearchGateway};

/// `SearchGateway` backed by the search service: `POST {base}/index/users`
/// with `{id, username}`. Any 2xx counts as indexed.
#[derive(Clone)]
pub struct HttpSearchGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSearchGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl SearchGateway for HttpSearchGateway {
    async fn index_user(&self, request: IndexUserRequest) -> Result<(), GatewayError> {
        let response = self
            .client
            .post(format!("{}/index/users", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;
        check_status(&response)?;

        debug!(user_id = %request.id, "User indexed");
        Ok(())
    }
}
