//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build and run the server until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting genai-gateway {}", crate::VERSION);

    let server = ServerBuilder::new().with_config(config.clone()).build()?;
    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("API Endpoints:");
    info!("   GET  /health");
    info!("   POST /api/code");
    info!("   POST /api/conversation");
    info!("   POST /api/image");
    info!("   POST /api/music");
    info!("   POST /api/video");
    info!("   GET  /api/limit");

    server.start().await
}
