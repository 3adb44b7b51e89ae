//! The combined interpretation stage.

use std::sync::Arc;

use arcana_deck::{CardMeaning, QuestionCategory};
use arcana_store::CombinedInterpretation;

use crate::context::ReadingContext;
use crate::error::{ReadingError, ReadingResult};
use crate::flow::{Stage, Transition};
use crate::interpret::synthesize_combined;
use crate::narrator::Narrator;

/// Generates the whole-layout narrative and its summary. Never aborts:
/// narrator failure is covered by deterministic fallback text.
pub struct SynthesizeStage {
    narrator: Arc<dyn Narrator>,
}

impl SynthesizeStage {
    /// A synthesize stage over the given narrator.
    pub fn new(narrator: Arc<dyn Narrator>) -> SynthesizeStage {
        SynthesizeStage { narrator }
    }
}

impl Stage<ReadingContext> for SynthesizeStage {
    type Prepared = (String, QuestionCategory, Vec<CardMeaning>);
    type Output = CombinedInterpretation;

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
    ) -> ReadingResult<CombinedInterpretation> {
        Ok(synthesize_combined(
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
        output: CombinedInterpretation,
    ) -> ReadingResult<Transition> {
        ctx.combined = Some(output);
        Ok(Transition::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::DynStage;
    use crate::narrator::OfflineNarrator;
    use arcana_deck::{Catalogue, DrawnCard, layout_by_id};

    #[test]
    fn offline_narrator_yields_fallback_referencing_card_count() {
        let mut ctx = ReadingContext::new("What lies ahead?", None);
        ctx.category = Some(QuestionCategory::General);
        let layout = layout_by_id("three_card").unwrap();
        let catalogue = Catalogue::standard();
        ctx.card_meanings = ["The Fool", "The Sun", "The Moon"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let card = catalogue.card_by_name(name).unwrap();
                let drawn = DrawnCard {
                    name: (*name).to_string(),
                    reversed: false,
                    position: i as u32 + 1,
                };
                CardMeaning::resolve(card, &drawn, layout, QuestionCategory::General)
            })
            .collect();

        SynthesizeStage::new(Arc::new(OfflineNarrator))
            .execute(&mut ctx)
            .unwrap();

        let combined = ctx.combined.unwrap();
        assert!(combined.narrative.contains("3 cards"));
        assert!(!combined.summary.is_empty());
    }
}
