//! Joining drawn cards with catalogue meanings and layout positions.

use serde::{Deserialize, Serialize};

use crate::card::{Card, QuestionCategory};
use crate::draw::DrawnCard;
use crate::layout::LayoutConfig;

/// A drawn card joined with its orientation-selected meaning bundle and its
/// position's metadata. Produced once per reading per card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardMeaning {
    /// Catalogue name of the card.
    pub card_name: String,
    /// 1-based position within the layout.
    pub position: u32,
    /// Whether the card landed reversed.
    pub reversed: bool,
    /// Keyword tags carried over from the card.
    pub keywords: Vec<String>,
    /// General meaning for the card's orientation.
    pub general_meaning: String,
    /// Topic-specific meaning for the question category, when the bundle
    /// carries one.
    pub category_meaning: Option<String>,
    /// Name of the layout position the card sits in.
    pub position_name: String,
    /// Description of what that position speaks to.
    pub position_description: String,
}

impl CardMeaning {
    /// Join a drawn card with its card entry and layout position.
    ///
    /// A position beyond the layout's metadata gets a plain
    /// "Position N" name rather than failing; the draw engine and layout
    /// cardinality normally keep the two in step.
    pub fn resolve(
        card: &Card,
        drawn: &DrawnCard,
        layout: &LayoutConfig,
        category: QuestionCategory,
    ) -> CardMeaning {
        let bundle = card.bundle(drawn.reversed);
        let (position_name, position_description) = match layout.position(drawn.position) {
            Some(p) => (p.name.clone(), p.description.clone()),
            None => (format!("Position {}", drawn.position), String::new()),
        };

        CardMeaning {
            card_name: card.name.clone(),
            position: drawn.position,
            reversed: drawn.reversed,
            keywords: card.keywords.clone(),
            general_meaning: bundle.meaning.clone(),
            category_meaning: bundle
                .for_category(category)
                .map(std::string::ToString::to_string),
            position_name,
            position_description,
        }
    }

    /// Orientation label, "upright" or "reversed".
    pub fn orientation_label(&self) -> &'static str {
        if self.reversed { "reversed" } else { "upright" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::layout::layout_by_id;

    fn drawn(name: &str, reversed: bool, position: u32) -> DrawnCard {
        DrawnCard {
            name: name.to_string(),
            reversed,
            position,
        }
    }

    #[test]
    fn resolve_upright_with_category() {
        let cat = Catalogue::standard();
        let card = cat.card_by_name("The Lovers").unwrap();
        let layout = layout_by_id("three_card").unwrap();

        let m = CardMeaning::resolve(
            card,
            &drawn("The Lovers", false, 2),
            layout,
            QuestionCategory::Love,
        );
        assert_eq!(m.card_name, "The Lovers");
        assert_eq!(m.position_name, "Present");
        assert_eq!(m.general_meaning, card.upright.meaning);
        assert_eq!(m.category_meaning.as_deref(), Some(card.upright.love.as_str()));
        assert_eq!(m.orientation_label(), "upright");
    }

    #[test]
    fn resolve_reversed_uses_reversed_bundle() {
        let cat = Catalogue::standard();
        let card = cat.card_by_name("The Sun").unwrap();
        let layout = layout_by_id("single").unwrap();

        let m = CardMeaning::resolve(
            card,
            &drawn("The Sun", true, 1),
            layout,
            QuestionCategory::Career,
        );
        assert!(m.reversed);
        assert_eq!(m.general_meaning, card.reversed.meaning);
        assert_eq!(
            m.category_meaning.as_deref(),
            Some(card.reversed.career.as_str())
        );
    }

    #[test]
    fn general_category_has_no_specific_meaning() {
        let cat = Catalogue::standard();
        let card = cat.card_by_name("Justice").unwrap();
        let layout = layout_by_id("single").unwrap();

        let m = CardMeaning::resolve(
            card,
            &drawn("Justice", false, 1),
            layout,
            QuestionCategory::General,
        );
        assert!(m.category_meaning.is_none());
    }

    #[test]
    fn out_of_layout_position_gets_numbered_name() {
        let cat = Catalogue::standard();
        let card = cat.card_by_name("The Fool").unwrap();
        let layout = layout_by_id("single").unwrap();

        let m = CardMeaning::resolve(
            card,
            &drawn("The Fool", false, 4),
            layout,
            QuestionCategory::General,
        );
        assert_eq!(m.position_name, "Position 4");
        assert!(m.position_description.is_empty());
    }
}
