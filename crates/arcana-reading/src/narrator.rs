//! Adapter seam for the text-generation service.

use thiserror::Error;

/// Errors a generation backend can report. The interpretation stages treat
/// every variant the same way: fall back to deterministic text.
#[derive(Debug, Error)]
pub enum NarratorError {
    /// No credential is configured for the backend.
    #[error("no generation credential configured")]
    MissingCredential,

    /// The backend could not be reached or answered with an error.
    #[error("generation transport failure: {0}")]
    Transport(String),

    /// The backend refused the request due to rate limiting.
    #[error("generation rate limited")]
    RateLimited,

    /// The backend answered with empty text.
    #[error("generation returned an empty response")]
    EmptyResponse,
}

/// A text-generation backend. One prompt in, one completion out;
/// implementations decide transport, model, and credentials.
pub trait Narrator: Send + Sync {
    /// Generate a completion for the prompt.
    fn generate(&self, prompt: &str) -> Result<String, NarratorError>;
}

/// A narrator with no backend at all. Every call fails with
/// [`NarratorError::MissingCredential`], which routes every interpretation
/// through the deterministic fallback. Used by the CLI and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineNarrator;

impl Narrator for OfflineNarrator {
    fn generate(&self, _prompt: &str) -> Result<String, NarratorError> {
        Err(NarratorError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_narrator_always_fails() {
        let err = OfflineNarrator.generate("anything").unwrap_err();
        assert!(matches!(err, NarratorError::MissingCredential));
    }
}
