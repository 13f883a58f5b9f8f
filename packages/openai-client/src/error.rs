//! Error types for OpenAI client.

use thiserror::Error;

/// Result type for OpenAI client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// OpenAI client errors.
///
/// Rate limiting (429) and quota exhaustion (402) get their own variants
/// because callers handle them differently from generic API failure: they
/// are surfaced to the end user as-is and must never trigger a fallback
/// computation or an automatic retry.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Rate limited (HTTP 429). Surface to the caller; do not retry.
    #[error("Rate limited by OpenAI")]
    RateLimited,

    /// Quota or payment exhausted (HTTP 402). Surface as a billing message.
    #[error("OpenAI quota exhausted")]
    QuotaExhausted,

    /// API error (any other non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl OpenAIError {
    /// Map a non-success HTTP status to the matching error variant.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            429 => OpenAIError::RateLimited,
            402 => OpenAIError::QuotaExhausted,
            _ => OpenAIError::Api { status, message },
        }
    }

    /// Whether this error is one the caller must surface verbatim
    /// (rate limit / quota) rather than recover from.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OpenAIError::RateLimited | OpenAIError::QuotaExhausted)
    }
}
