//! Tests for nova-client configuration and builder.

use nova_client::{ClientConfig, DEFAULT_BASE_URL, NovaClient};

#[test]
fn client_config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "http://localhost:8000");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn client_builder() {
    let client = NovaClient::new(ClientConfig::default()).base_url("http://example.com:9000");
    assert_eq!(client.config().base_url, "http://example.com:9000");
}

#[test]
fn transport_trims_trailing_slash() {
    let transport = NovaClient::new(ClientConfig::default())
        .base_url("http://example.com/")
        .transport()
        .unwrap();
    assert_eq!(transport.base_url(), "http://example.com");
}
