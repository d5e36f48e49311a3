//! API Gateway service - main entry point.
//!
//! Builds the HTTP router over a `UserDirectoryApi` and serves it until the
//! shutdown future resolves.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::handlers::{self, AppState};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use ud_02_user_directory::UserDirectoryApi;

/// API Gateway service state
pub struct ApiGatewayService {
    config: GatewayConfig,
    directory: Arc<dyn UserDirectoryApi>,
}

impl ApiGatewayService {
    /// Create a new API Gateway service
    pub fn new(
        config: GatewayConfig,
        directory: Arc<dyn UserDirectoryApi>,
    ) -> Result<Self, GatewayError> {
        config.validate()?;
        Ok(Self { config, directory })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the HTTP router
    pub fn router(&self) -> Router {
        let state = AppState {
            directory: Arc::clone(&self.directory),
        };

        let middleware = ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(self.config.request_timeout()))
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes));

        Router::new()
            .route("/health", get(handlers::health_check))
            .route("/api/users/register", post(handlers::register_user))
            .route("/api/users/login", post(handlers::login))
            .route("/api/users/friends", post(handlers::set_friends))
            .route("/api/users/wallet/login", post(handlers::wallet_login))
            .route("/api/users/wallet/register", post(handlers::wallet_register))
            .layer(middleware)
            .with_state(state)
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.http_addr()).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(addr = %listener.local_addr()?, "Starting HTTP server");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("API Gateway stopped");
        Ok(())
    }
}
