use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider is not configured")]
    Disabled,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Ranking has {actual} entries for {expected} destinations")]
    RankingMismatch { expected: usize, actual: usize },
}

impl ProviderError {
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        ProviderError::Api { status, message }
    }
}
