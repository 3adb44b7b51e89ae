//! The durable snapshot of a completed reading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use arcana_deck::{CardMeaning, DrawnCard, LayoutConfig, QuestionCategory};

/// Version tag written into every persisted record.
pub const RECORD_VERSION: &str = "1.0";

/// The generated narrative for one drawn card in its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualInterpretation {
    /// Catalogue name of the card.
    pub card_name: String,
    /// 1-based position within the layout.
    pub position: u32,
    /// Name of the layout position.
    pub position_name: String,
    /// Whether the card landed reversed.
    pub reversed: bool,
    /// Generated (or fallback) narrative text.
    pub text: String,
}

/// The whole-layout narrative plus its short summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedInterpretation {
    /// Full narrative covering all drawn cards together.
    pub narrative: String,
    /// Short summary derived from the narrative.
    pub summary: String,
}

/// A completed reading as persisted: created once at persistence time,
/// immutable afterwards. The [`crate::RecordStore`] is its sole owner
/// after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// Unique identifier, assigned by the store on append when absent.
    pub id: Option<String>,
    /// Creation timestamp, assigned by the store on append when absent.
    pub created_at: Option<DateTime<Utc>>,
    /// Record format version.
    pub version: String,
    /// The question that was asked.
    pub question: String,
    /// Detected question category.
    pub category: QuestionCategory,
    /// Id of the layout used.
    pub layout_id: String,
    /// Snapshot of the layout configuration at reading time.
    pub layout: LayoutConfig,
    /// The cards as drawn.
    pub drawn_cards: Vec<DrawnCard>,
    /// Per-card meaning joins.
    pub card_meanings: Vec<CardMeaning>,
    /// Per-card generated narratives.
    pub individual_interpretations: Vec<IndividualInterpretation>,
    /// Whole-layout narrative and summary.
    pub combined: CombinedInterpretation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_deck::layout_by_id;

    fn sample() -> ReadingRecord {
        ReadingRecord {
            id: None,
            created_at: None,
            version: RECORD_VERSION.to_string(),
            question: "How is my luck today?".to_string(),
            category: QuestionCategory::General,
            layout_id: "single".to_string(),
            layout: layout_by_id("single").unwrap().clone(),
            drawn_cards: vec![DrawnCard {
                name: "The Sun".to_string(),
                reversed: false,
                position: 1,
            }],
            card_meanings: vec![],
            individual_interpretations: vec![IndividualInterpretation {
                card_name: "The Sun".to_string(),
                position: 1,
                position_name: "Guidance".to_string(),
                reversed: false,
                text: "A bright day ahead.".to_string(),
            }],
            combined: CombinedInterpretation {
                narrative: "The Sun promises warmth and success.".to_string(),
                summary: "A very positive sign.".to_string(),
            },
        }
    }

    #[test]
    fn record_serde_roundtrip() {
        let record = sample();
        let json = serde_json::to_string_pretty(&record).unwrap();
        let back: ReadingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.question, record.question);
        assert_eq!(back.category, record.category);
        assert_eq!(back.drawn_cards, record.drawn_cards);
        assert_eq!(back.combined, record.combined);
        assert!(back.id.is_none());
    }
}
