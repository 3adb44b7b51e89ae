//! Card and meaning types.

use serde::{Deserialize, Serialize};

/// Broad topic a question falls into, used to pick the topic-specific
/// meaning from a card's bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    /// Relationships and romance.
    Love,
    /// Work, study, and ambition.
    Career,
    /// Body and mind.
    Health,
    /// A choice between options.
    Decision,
    /// Everything else.
    General,
}

impl QuestionCategory {
    /// Parse a category from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "love" => Some(Self::Love),
            "career" | "work" => Some(Self::Career),
            "health" => Some(Self::Health),
            "decision" => Some(Self::Decision),
            "general" => Some(Self::General),
            _ => None,
        }
    }
}

impl std::fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Love => write!(f, "love"),
            Self::Career => write!(f, "career"),
            Self::Health => write!(f, "health"),
            Self::Decision => write!(f, "decision"),
            Self::General => write!(f, "general"),
        }
    }
}

/// The suit a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    /// The 22 trump cards.
    MajorArcana,
    /// Fire suit: will, creativity, action.
    Wands,
    /// Water suit: emotion and relationships.
    Cups,
    /// Air suit: intellect and conflict.
    Swords,
    /// Earth suit: material matters.
    Pentacles,
}

impl Suit {
    /// Parse a suit from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '-'], "_").trim() {
            "major_arcana" | "major" => Some(Self::MajorArcana),
            "wands" => Some(Self::Wands),
            "cups" => Some(Self::Cups),
            "swords" => Some(Self::Swords),
            "pentacles" | "coins" => Some(Self::Pentacles),
            _ => None,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MajorArcana => write!(f, "major arcana"),
            Self::Wands => write!(f, "wands"),
            Self::Cups => write!(f, "cups"),
            Self::Swords => write!(f, "swords"),
            Self::Pentacles => write!(f, "pentacles"),
        }
    }
}

/// One orientation's worth of meanings for a card: a general meaning plus
/// topic-specific readings for the categories that have them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeaningBundle {
    /// General meaning, applicable to any question.
    pub meaning: String,
    /// Meaning when the question concerns love.
    pub love: String,
    /// Meaning when the question concerns career.
    pub career: String,
    /// Meaning when the question concerns health.
    pub health: String,
}

impl MeaningBundle {
    /// The topic-specific meaning for a category, if the bundle carries one.
    ///
    /// Decision and General questions have no dedicated meaning and fall
    /// back to [`MeaningBundle::meaning`] at the call site.
    pub fn for_category(&self, category: QuestionCategory) -> Option<&str> {
        match category {
            QuestionCategory::Love => Some(&self.love),
            QuestionCategory::Career => Some(&self.career),
            QuestionCategory::Health => Some(&self.health),
            QuestionCategory::Decision | QuestionCategory::General => None,
        }
    }
}

/// An immutable reference card. Sourced entirely from the static
/// catalogue; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Card name, unique within the catalogue.
    pub name: String,
    /// Ordinal number within the suit.
    pub number: u32,
    /// Suit the card belongs to.
    pub suit: Suit,
    /// Keyword tags.
    pub keywords: Vec<String>,
    /// Meanings when the card lands upright.
    pub upright: MeaningBundle,
    /// Meanings when the card lands reversed.
    pub reversed: MeaningBundle,
}

impl Card {
    /// The meaning bundle for an orientation.
    pub fn bundle(&self, reversed: bool) -> &MeaningBundle {
        if reversed { &self.reversed } else { &self.upright }
    }
}
