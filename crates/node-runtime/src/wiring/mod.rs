//! # Subsystem Wiring Module
//!
//! Connects the subsystems in dependency order:
//!
//! ```text
//! UD-01 SignatureRecoveryService ─┐
//! HttpPasswordGateway ────────────┤
//! HttpSearchGateway ──────────────┼──→ UD-02 UserDirectoryService ──→ UD-03 ApiGatewayService
//! InMemoryUserRepository ─────────┘
//! ```

use crate::adapters::{HttpPasswordGateway, HttpSearchGateway};
use crate::container::{ConfigError, NodeConfig};
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use ud_01_signature_recovery::SignatureRecoveryService;
use ud_02_user_directory::{
    GatewayError as UpstreamError, InMemoryUserRepository, UserDirectoryApi, UserDirectoryService,
};
use ud_03_api_gateway::{ApiGatewayService, GatewayError};

/// The fully wired directory service.
pub type DirectoryService = UserDirectoryService<
    InMemoryUserRepository,
    HttpSearchGateway,
    HttpPasswordGateway,
    SignatureRecoveryService,
>;

/// Runtime errors.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("client setup failed: {0}")]
    Client(#[from] UpstreamError),

    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// The user directory node: every subsystem wired and ready to serve.
pub struct UserDirectoryNode {
    config: NodeConfig,
    repository: Arc<InMemoryUserRepository>,
    directory: Arc<DirectoryService>,
}

impl UserDirectoryNode {
    /// Validate `config` and wire the subsystems.
    pub fn new(config: NodeConfig) -> Result<Self, NodeError> {
        config.validate()?;

        let timeout = config.services.client_timeout();
        let passwords = Arc::new(HttpPasswordGateway::new(
            config.services.encryption_url.clone(),
            timeout,
        )?);
        let search = Arc::new(HttpSearchGateway::new(
            config.services.search_url.clone(),
            timeout,
        )?);
        let repository = Arc::new(InMemoryUserRepository::new());

        let directory = Arc::new(UserDirectoryService::new(
            Arc::clone(&repository),
            search,
            passwords,
            SignatureRecoveryService::new(),
        ));

        info!(
            encryption = %config.services.encryption_url,
            search = %config.services.search_url,
            "Subsystems wired"
        );

        Ok(Self {
            config,
            repository,
            directory,
        })
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// The directory behind the HTTP layer.
    pub fn directory(&self) -> Arc<dyn UserDirectoryApi> {
        Arc::clone(&self.directory) as Arc<dyn UserDirectoryApi>
    }

    pub fn repository(&self) -> Arc<InMemoryUserRepository> {
        Arc::clone(&self.repository)
    }

    /// Build the gateway over this node's directory.
    pub fn gateway(&self) -> Result<ApiGatewayService, NodeError> {
        Ok(ApiGatewayService::new(
            self.config.api_gateway.clone(),
            self.directory(),
        )?)
    }

    /// Serve HTTP until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<(), NodeError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let gateway = self.gateway()?;
        info!(addr = %self.config.api_gateway.http_addr(), "User directory listening");
        gateway.run(shutdown).await?;
        info!(users = self.repository.len(), "User directory stopped");
        Ok(())
    }
}
