//! Error types for deck operations.

use thiserror::Error;

/// Alias for `Result<T, DeckError>`.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Error)]
pub enum DeckError {
    /// More cards were requested than the permitted subset contains.
    #[error("cannot draw {requested} cards, only {available} available")]
    DrawOutOfRange {
        /// Number of cards requested.
        requested: usize,
        /// Cards remaining after exclusions.
        available: usize,
    },
}
