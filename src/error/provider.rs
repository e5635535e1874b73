use reqwest::StatusCode;
use thiserror::Error as ThisError;

/// Failure of a single upstream AI call.
///
/// These never reach clients: the AI service logs them and answers with the
/// canned response instead.
#[derive(Debug, ThisError)]
pub enum ProviderError {
    #[error("No API key configured for {0}")]
    NotConfigured(&'static str),

    /// Transport-level failure (DNS, connect, timeouts, etc).
    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Non-success status; `body` is a bounded preview for diagnostics.
    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },

    #[error("Upstream payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Upstream returned no usable content")]
    EmptyCompletion,
}

impl ProviderError {
    /// Short label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::Reqwest(e) if e.is_timeout() => "timeout",
            ProviderError::Reqwest(_) => "transport",
            ProviderError::Url(_) => "url",
            ProviderError::UpstreamStatus { .. } => "upstream_status",
            ProviderError::Decode(_) => "decode",
            ProviderError::EmptyCompletion => "empty_completion",
        }
    }
}
