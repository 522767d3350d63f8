//! Centralized HTTP client factory.
//!
//! Every client built here carries the same User-Agent, a request timeout,
//! a read timeout and tcp_nodelay. The upstream API is public and rate
//! limited per client, so a single pooled client should be shared.

use reqwest::Client;
use std::time::Duration;

/// User-Agent string for all HTTP requests
pub const USER_AGENT: &str = concat!("pokedex-cli/", env!("CARGO_PKG_VERSION"));

/// Default timeout for standard API requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection pool idle timeout so DNS is re-resolved periodically.
pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(60);

/// Creates an HTTP client with default configuration (30s timeout).
pub fn create_default_client() -> Result<Client, String> {
    create_client_with_timeout(DEFAULT_TIMEOUT)
}

/// Creates an HTTP client with a custom timeout.
///
/// The read timeout is capped at 60s so a truncated body cannot hang a
/// request for the full timeout.
pub fn create_client_with_timeout(timeout: Duration) -> Result<Client, String> {
    let read_timeout = timeout.min(Duration::from_secs(60));

    create_client_builder()
        .timeout(timeout)
        .read_timeout(read_timeout)
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {e}"))
}

/// Creates an HTTP client builder with standard configuration.
///
/// Use this when the client needs further customisation before building.
pub fn create_client_builder() -> reqwest::ClientBuilder {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(DEFAULT_TIMEOUT)
        .read_timeout(DEFAULT_TIMEOUT)
        .tcp_nodelay(true)
        .pool_idle_timeout(POOL_IDLE_TIMEOUT)
        .pool_max_idle_per_host(4)
}
