//! Text completion port
//!
//! Defines the single capability the consensus engine consumes from its
//! environment: one prompt in, one completed text out. Retry, caching, and
//! timeout policy belong to the provider layer, not here.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a completion request
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway to the text-completion capability
///
/// Implementations (adapters) live in the infrastructure layer. A raised
/// error here fails the whole consensus round it belongs to; batch
/// processing converts that into a per-item failure.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Complete a prompt under the given system prompt.
    async fn complete(&self, system_prompt: &str, prompt: &str)
    -> Result<String, CompletionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CompletionError::RequestFailed("rate limited".into()).to_string(),
            "Request failed: rate limited"
        );
        assert_eq!(CompletionError::Timeout.to_string(), "Timeout");
    }
}
