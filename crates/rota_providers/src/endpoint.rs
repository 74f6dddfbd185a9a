use std::time::Duration;

use reqwest::Url;

use crate::error::ProviderError;

/// Joins `path` onto `base_url`, making sure the base ends with exactly one
/// slash so the join appends instead of replacing the last segment.
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> Result<Url, ProviderError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));

    Url::parse(&normalised)
        .and_then(|base| base.join(path))
        .map_err(|err| ProviderError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: err.to_string(),
        })
}

pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .user_agent(concat!("rota/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}
