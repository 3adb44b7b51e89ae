//! Layout reference data.
//!
//! A layout is a named, fixed-cardinality arrangement of positions, each
//! with its own symbolic meaning, that a reading's drawn cards are placed
//! into. Looked up by id; never mutated.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Id of the layout used when none is requested or an unknown id is given.
pub const DEFAULT_LAYOUT_ID: &str = "single";

/// Experience tier a layout is suited for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Quick layouts anyone can read.
    Beginner,
    /// Layouts that reward some practice.
    Intermediate,
    /// Large layouts for experienced readers.
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// Metadata for one position within a layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    /// Short position name, e.g. "Past".
    pub name: String,
    /// What a card in this position speaks to.
    pub description: String,
    /// The significance of the position within the layout.
    pub significance: String,
}

/// Configuration of a layout: cardinality, ordered position metadata, and
/// presentation hints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Stable layout id used for lookup and persistence.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the layout is for.
    pub description: String,
    /// Number of cards the layout requires.
    pub card_count: usize,
    /// Position metadata, ordered; index 0 is position 1.
    pub positions: Vec<Position>,
    /// Usage hint shown to the caller.
    pub usage: String,
    /// Experience tier.
    pub difficulty: Difficulty,
}

impl LayoutConfig {
    /// Metadata for a 1-based position, if the layout has one there.
    pub fn position(&self, position: u32) -> Option<&Position> {
        (position as usize)
            .checked_sub(1)
            .and_then(|i| self.positions.get(i))
    }
}

fn position(name: &str, description: &str, significance: &str) -> Position {
    Position {
        name: name.to_string(),
        description: description.to_string(),
        significance: significance.to_string(),
    }
}

fn layout(
    id: &str,
    name: &str,
    description: &str,
    positions: Vec<Position>,
    usage: &str,
    difficulty: Difficulty,
) -> LayoutConfig {
    LayoutConfig {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        card_count: positions.len(),
        positions,
        usage: usage.to_string(),
        difficulty,
    }
}

static LAYOUTS: LazyLock<Vec<LayoutConfig>> = LazyLock::new(|| {
    vec![
        layout(
            "single",
            "Single Card",
            "The simplest reading, suited to daily guidance and yes/no questions",
            vec![position(
                "Guidance",
                "Today's guidance, or a direct answer to your question",
                "Overall advice and direction",
            )],
            "Quick guidance, daily decisions, simple questions",
            Difficulty::Beginner,
        ),
        layout(
            "three_card",
            "Three Card",
            "The classic past-present-future line, good for seeing how a situation unfolds",
            vec![
                position(
                    "Past",
                    "Past factors or roots that shaped the current situation",
                    "History, underlying causes, influences already at work",
                ),
                position(
                    "Present",
                    "The current situation, its challenges and opportunities",
                    "The state of things now, the reality to be faced",
                ),
                position(
                    "Future",
                    "The likely outcome or direction of travel",
                    "Potential results and trends to watch",
                ),
            ],
            "Understanding how things are developing, medium-term planning",
            Difficulty::Beginner,
        ),
        layout(
            "love",
            "Love Spread",
            "A five-card layout dedicated to matters of the heart",
            vec![
                position(
                    "Your Feelings",
                    "Your true feelings and inner state within the relationship",
                    "Inner emotions, honest desires",
                ),
                position(
                    "Their Feelings",
                    "How the other person feels about you and the relationship",
                    "Their inner world and point of view",
                ),
                position(
                    "The Relationship",
                    "The current state and dynamic between you",
                    "Quality of the bond, how you relate",
                ),
                position(
                    "Obstacles",
                    "What stands in the way or needs to be overcome",
                    "Problems to address, room to grow",
                ),
                position(
                    "Outlook",
                    "The relationship's potential and where it may lead",
                    "Direction of travel, long-term prospects",
                ),
            ],
            "Relationship questions, understanding a partnership, romantic decisions",
            Difficulty::Intermediate,
        ),
        layout(
            "career",
            "Career Spread",
            "A six-card layout for work and professional questions",
            vec![
                position(
                    "Current Situation",
                    "Where your work or career stands now",
                    "Assessment of the present",
                ),
                position(
                    "Your Strengths",
                    "The advantages and abilities you bring",
                    "Personal assets, resources to draw on",
                ),
                position(
                    "Challenges",
                    "Obstacles facing your professional growth",
                    "Difficulties and blockers",
                ),
                position(
                    "Opportunities",
                    "Openings and favourable conditions around you",
                    "External chances worth seizing",
                ),
                position(
                    "Advice",
                    "The action your career development calls for",
                    "Concrete recommendations, direction to act in",
                ),
                position(
                    "Outlook",
                    "Where your career is heading and its likely result",
                    "Long-term prospects and direction",
                ),
            ],
            "Career planning, work decisions, professional development",
            Difficulty::Intermediate,
        ),
        layout(
            "decision",
            "Decision Spread",
            "A seven-card layout for choosing between two options",
            vec![
                position(
                    "Current Situation",
                    "Where you stand as you face the decision",
                    "Context of the choice",
                ),
                position(
                    "Option A: For",
                    "What the first choice may bring you",
                    "Upside of option A",
                ),
                position(
                    "Option A: Against",
                    "What the first choice may cost you",
                    "Downside of option A",
                ),
                position(
                    "Option B: For",
                    "What the second choice may bring you",
                    "Upside of option B",
                ),
                position(
                    "Option B: Against",
                    "What the second choice may cost you",
                    "Downside of option B",
                ),
                position(
                    "Likely Outcome",
                    "The longer-term consequences of your decision",
                    "Long-range effects",
                ),
                position(
                    "Best Action",
                    "The wisest course of action to take",
                    "Guidance for acting",
                ),
            ],
            "Either/or decisions, weighing important choices",
            Difficulty::Intermediate,
        ),
        layout(
            "celtic_cross",
            "Celtic Cross",
            "The most complete classic layout, for detailed, in-depth analysis",
            vec![
                position(
                    "Current Situation",
                    "The situation and environment you find yourself in",
                    "Heart of the matter, present reality",
                ),
                position(
                    "Challenge",
                    "The challenge crossing your path",
                    "The main difficulty to face",
                ),
                position(
                    "Distant Past",
                    "Deep roots or distant past shaping the situation",
                    "Fundamental causes, deep background",
                ),
                position(
                    "Recent Past",
                    "Recent events still influencing the present",
                    "Recent influences",
                ),
                position(
                    "Possible Future",
                    "What may come if the current course holds",
                    "Potential outcome, possibilities",
                ),
                position(
                    "Near Future",
                    "Influences arriving in the short term",
                    "Short-term trend, what comes next",
                ),
                position(
                    "Your Approach",
                    "How you are handling the question",
                    "Personal stance and method",
                ),
                position(
                    "Outside Influences",
                    "The effect of your surroundings and other people",
                    "External factors, others' views",
                ),
                position(
                    "Hopes and Fears",
                    "Your deepest hopes and fears about the matter",
                    "Inner expectations and worries",
                ),
                position(
                    "Outcome",
                    "The final result of the situation as a whole",
                    "Final outcome, overall conclusion",
                ),
            ],
            "Complex situations, major life decisions, thorough analysis",
            Difficulty::Advanced,
        ),
    ]
});

/// Look up a layout by id. Returns `None` for unknown ids; callers fall
/// back to the [`DEFAULT_LAYOUT_ID`] layout.
pub fn layout_by_id(id: &str) -> Option<&'static LayoutConfig> {
    LAYOUTS.iter().find(|l| l.id == id)
}

/// All known layouts, smallest first.
pub fn all_layouts() -> &'static [LayoutConfig] {
    &LAYOUTS
}

/// Layouts suited to a difficulty tier.
pub fn layouts_by_difficulty(difficulty: Difficulty) -> Vec<&'static LayoutConfig> {
    LAYOUTS.iter().filter(|l| l.difficulty == difficulty).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_layouts() {
        assert_eq!(all_layouts().len(), 6);
    }

    #[test]
    fn card_counts_match_positions() {
        for l in all_layouts() {
            assert_eq!(l.card_count, l.positions.len(), "{}", l.id);
            assert!(l.card_count >= 1);
        }
    }

    #[test]
    fn default_layout_is_single_card() {
        let l = layout_by_id(DEFAULT_LAYOUT_ID).unwrap();
        assert_eq!(l.card_count, 1);
        assert_eq!(l.name, "Single Card");
    }

    #[test]
    fn unknown_layout_is_none() {
        assert!(layout_by_id("horseshoe").is_none());
    }

    #[test]
    fn celtic_cross_positions() {
        let l = layout_by_id("celtic_cross").unwrap();
        assert_eq!(l.card_count, 10);
        assert_eq!(l.position(1).unwrap().name, "Current Situation");
        assert_eq!(l.position(10).unwrap().name, "Outcome");
        assert!(l.position(11).is_none());
        assert!(l.position(0).is_none());
    }

    #[test]
    fn by_difficulty() {
        let beginner = layouts_by_difficulty(Difficulty::Beginner);
        assert_eq!(beginner.len(), 2);
        let advanced = layouts_by_difficulty(Difficulty::Advanced);
        assert_eq!(advanced.len(), 1);
        assert_eq!(advanced[0].id, "celtic_cross");
    }

    #[test]
    fn layout_serde_roundtrip() {
        let l = layout_by_id("three_card").unwrap();
        let json = serde_json::to_string(l).unwrap();
        let back: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "three_card");
        assert_eq!(back.positions.len(), 3);
    }
}
