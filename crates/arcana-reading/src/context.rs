//! The shared context a reading pipeline runs over.

use chrono::{DateTime, Utc};

use arcana_deck::{CardMeaning, DrawnCard, LayoutConfig, QuestionCategory};
use arcana_store::{CombinedInterpretation, IndividualInterpretation};

/// Mutable state threaded through one reading, created fresh per run.
///
/// The caller fills the input fields; each produced field documents the
/// stage that writes it. Stages communicate only through this struct.
#[derive(Debug, Default)]
pub struct ReadingContext {
    /// The question being asked. Caller input.
    pub question: String,
    /// Layout id the caller explicitly requested, if any. Caller input.
    pub requested_layout: Option<String>,
    /// Card names that must not be drawn. Caller input.
    pub excluded_cards: Vec<String>,

    /// Detected question category. Written by the classify stage.
    pub category: Option<QuestionCategory>,
    /// Human-readable note on the classification. Written by the classify
    /// stage.
    pub analysis: Option<String>,
    /// Layout id to resolve, either requested or recommended. Written by
    /// the classify stage when the caller did not request one.
    pub layout_id: Option<String>,
    /// Resolved layout configuration. Written by the setup stage.
    pub layout: Option<LayoutConfig>,
    /// The cards as drawn. Written by the draw stage.
    pub drawn_cards: Vec<DrawnCard>,
    /// Drawn cards joined with meanings and position metadata. Written by
    /// the meaning stage.
    pub card_meanings: Vec<CardMeaning>,
    /// Per-card narratives. Written by the interpret stage.
    pub individual_interpretations: Vec<IndividualInterpretation>,
    /// Whole-layout narrative and summary. Written by the synthesize stage.
    pub combined: Option<CombinedInterpretation>,
    /// Whether the record reached the store. Written by the persist stage.
    pub persisted: bool,
    /// Id of the persisted record. Written by the persist stage.
    pub record_id: Option<String>,
    /// Creation timestamp of the persisted record. Written by the persist
    /// stage.
    pub created_at: Option<DateTime<Utc>>,
}

impl ReadingContext {
    /// A fresh context for a question, with an optional explicit layout.
    pub fn new(question: impl Into<String>, requested_layout: Option<String>) -> ReadingContext {
        ReadingContext {
            question: question.into(),
            requested_layout,
            ..ReadingContext::default()
        }
    }
}
