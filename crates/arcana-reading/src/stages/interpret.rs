//! The per-card interpretation stage.

use std::sync::Arc;

use arcana_deck::{CardMeaning, QuestionCategory};
use arcana_store::IndividualInterpretation;

use crate::context::ReadingContext;
use crate::error::{ReadingError, ReadingResult};
use crate::flow::{Stage, Transition};
use crate::interpret::interpret_cards;
use crate::narrator::Narrator;

/// Generates per-card narratives in one batched narrator call. Never
/// aborts: narrator failure is covered by deterministic fallback text.
pub struct InterpretStage {
    narrator: Arc<dyn Narrator>,
}

impl InterpretStage {
    /// An interpret stage over the given narrator.
    pub fn new(narrator: Arc<dyn Narrator>) -> InterpretStage {
        InterpretStage { narrator }
    }
}

impl Stage<ReadingContext> for InterpretStage {
    type Prepared = (String, QuestionCategory, Vec<CardMeaning>);
    type Output = Vec<IndividualInterpretation>;

    fn prepare(
        &self,
        ctx: &ReadingContext,
    ) -> ReadingResult<(String, QuestionCategory, Vec<CardMeaning>)> {
        let category = ctx
            .category
            .ok_or(ReadingError::MissingField("category"))?;
        Ok((ctx.question.clone(), category, ctx.card_meanings.clone()))
    }

    fn process(
        &self,
        (question, category, meanings): &(String, QuestionCategory, Vec<CardMeaning>),
    ) -> ReadingResult<Vec<IndividualInterpretation>> {
        Ok(interpret_cards(
            self.narrator.as_ref(),
            question,
            *category,
            meanings,
        ))
    }

    fn finalize(
        &self,
        ctx: &mut ReadingContext,
        _prepared: (String, QuestionCategory, Vec<CardMeaning>),
        output: Vec<IndividualInterpretation>,
    ) -> ReadingResult<Transition> {
        ctx.individual_interpretations = output;
        Ok(Transition::default())
    }
}
