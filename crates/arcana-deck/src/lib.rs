//! Card catalogue, layout reference, and draw engine for Arcana.
//!
//! Provides the static reference data a reading is built from (cards with
//! orientation-specific meaning bundles, positional layouts) and the
//! randomized non-repeating draw with orientation assignment.

pub mod card;
pub mod catalogue;
pub mod draw;
pub mod error;
pub mod layout;
pub mod meaning;

pub use card::{Card, MeaningBundle, QuestionCategory, Suit};
pub use catalogue::Catalogue;
pub use draw::{DrawnCard, Orientation, draw, draw_one};
pub use error::{DeckError, DeckResult};
pub use layout::{
    DEFAULT_LAYOUT_ID, Difficulty, LayoutConfig, Position, all_layouts, layout_by_id,
    layouts_by_difficulty,
};
pub use meaning::CardMeaning;
