use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 120;

/// `timeout` bounds the whole call, body included; expiry surfaces as a
/// transport error.
pub fn build_backend_client_with_timeout(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10).min(timeout))
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
        .unwrap_or_else(|_| Client::new())
}
