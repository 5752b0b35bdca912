//! Nova client library: HTTP transport for the chat and resume-analysis
//! backend. Used by the controllers and the `nova` CLI.

pub use {
    error::{Error, Result},
    http::HttpTransport,
    transport::{Extracted, Reply, SessionStart, Transport, Upload},
};

pub mod error;
pub mod http;
pub mod transport;

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client configuration for reaching the backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

/// Entry point for building a transport.
///
/// Holds configuration. Call [`NovaClient::transport`] to get an
/// [`HttpTransport`].
pub struct NovaClient {
    config: ClientConfig,
}

impl NovaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Access the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Set the backend base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Build the HTTP transport.
    pub fn transport(&self) -> Result<HttpTransport> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nova/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpTransport::new(client, &self.config.base_url))
    }
}
