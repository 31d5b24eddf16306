use std::time::Duration;

use reqwest::ClientBuilder;

/// Build a `reqwest::ClientBuilder` configured for the current runtime.
///
/// Certificate verification is enabled by default.  To opt out (for example,
/// when pointing at a staging endpoint with self-signed certificates), set
/// the environment variable `BROADCASTER_ACCEPT_INVALID_CERTS` to a truthy
/// value (`1`, `true`, `yes`).  Disabling certificate verification is
/// strongly discouraged for production use.
pub fn builder(timeout: Duration) -> ClientBuilder {
    let mut builder = reqwest::Client::builder().timeout(timeout);
    let allow_invalid = std::env::var("BROADCASTER_ACCEPT_INVALID_CERTS")
        .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);
    if allow_invalid {
        builder = builder.danger_accept_invalid_certs(true);
    }
    builder
}
