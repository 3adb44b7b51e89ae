//! Error types for the reading pipeline.

use thiserror::Error;

use arcana_deck::DeckError;

/// Alias for `Result<T, ReadingError>`.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that abort a pipeline run.
///
/// Generation and persistence failures are recovered inside their stages
/// and never reach this type.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// A transition named a stage the pipeline does not know.
    #[error("unknown stage: {0}")]
    UnknownStage(String),

    /// A stage read a context field its predecessors never produced.
    #[error("context field not yet produced: {0}")]
    MissingField(&'static str),

    /// A drawn card's name is not in the catalogue.
    #[error("card not in catalogue: {0}")]
    UnknownCard(String),

    /// The draw could not be satisfied.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
