//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These represent structural misuse of the consensus machinery, not
/// malformed model output. Malformed output is never an error — every
/// parsing function in this crate resolves it via documented fallbacks.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No generator profiles configured")]
    NoGenerators,

    #[error("Judge requires at least one suggestion")]
    NoSuggestions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::NoGenerators.to_string(),
            "No generator profiles configured"
        );
        assert_eq!(
            DomainError::NoSuggestions.to_string(),
            "Judge requires at least one suggestion"
        );
    }
}
