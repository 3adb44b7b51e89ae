//! Question classification.

use arcana_deck::{DEFAULT_LAYOUT_ID, QuestionCategory};

use crate::context::ReadingContext;
use crate::error::ReadingResult;
use crate::flow::{Stage, Transition};

const LOVE_KEYWORDS: &[&str] = &[
    "love",
    "relationship",
    "romance",
    "partner",
    "marriage",
    "crush",
    "boyfriend",
    "girlfriend",
    "dating",
    "breakup",
];

const CAREER_KEYWORDS: &[&str] = &[
    "career",
    "job",
    "work",
    "promotion",
    "business",
    "interview",
    "salary",
    "study",
    "exam",
    "boss",
];

const HEALTH_KEYWORDS: &[&str] = &[
    "health", "body", "sleep", "illness", "recover", "energy", "stress", "doctor",
];

const DECISION_KEYWORDS: &[&str] = &[
    "should i",
    "choose",
    "choice",
    "decide",
    "decision",
    "whether",
    "which one",
];

/// Classifies the question into a [`QuestionCategory`] by keyword matching
/// and recommends a layout for it. No generation call is involved.
#[derive(Debug, Default)]
pub struct ClassifyStage;

/// Result of classifying one question.
#[derive(Debug)]
pub struct Classification {
    /// Detected category.
    pub category: QuestionCategory,
    /// Human-readable note on the match.
    pub analysis: String,
    /// Layout id suited to the category.
    pub recommended_layout: &'static str,
}

fn classify(question: &str) -> QuestionCategory {
    let lower = question.to_lowercase();
    let hit = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if hit(LOVE_KEYWORDS) {
        QuestionCategory::Love
    } else if hit(CAREER_KEYWORDS) {
        QuestionCategory::Career
    } else if hit(HEALTH_KEYWORDS) {
        QuestionCategory::Health
    } else if hit(DECISION_KEYWORDS) {
        QuestionCategory::Decision
    } else {
        QuestionCategory::General
    }
}

fn recommend(category: QuestionCategory) -> &'static str {
    match category {
        QuestionCategory::Love | QuestionCategory::Career | QuestionCategory::Decision => {
            "three_card"
        }
        QuestionCategory::Health | QuestionCategory::General => DEFAULT_LAYOUT_ID,
    }
}

impl Stage<ReadingContext> for ClassifyStage {
    type Prepared = String;
    type Output = Classification;

    fn prepare(&self, ctx: &ReadingContext) -> ReadingResult<String> {
        Ok(ctx.question.trim().to_string())
    }

    fn process(&self, question: &String) -> ReadingResult<Classification> {
        let category = if question.is_empty() {
            QuestionCategory::General
        } else {
            classify(question)
        };
        let analysis = if question.is_empty() {
            "No question given; reading for general guidance.".to_string()
        } else {
            format!("Question reads as a {category} matter.")
        };

        Ok(Classification {
            category,
            analysis,
            recommended_layout: recommend(category),
        })
    }

    fn finalize(
        &self,
        ctx: &mut ReadingContext,
        _question: String,
        output: Classification,
    ) -> ReadingResult<Transition> {
        ctx.category = Some(output.category);
        ctx.analysis = Some(output.analysis);
        // An explicitly requested layout always wins over the
        // recommendation.
        ctx.layout_id = Some(
            ctx.requested_layout
                .clone()
                .unwrap_or_else(|| output.recommended_layout.to_string()),
        );
        Ok(Transition::default())
    }
}
