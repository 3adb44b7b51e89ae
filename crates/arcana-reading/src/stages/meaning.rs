//! The meaning stage.

use arcana_deck::{CardMeaning, Catalogue, DrawnCard, LayoutConfig, QuestionCategory};

use crate::context::ReadingContext;
use crate::error::{ReadingError, ReadingResult};
use crate::flow::{Stage, Transition};

/// Joins each drawn card with its catalogue meanings and layout position
/// metadata. A drawn card missing from the catalogue indicates a corrupted
/// context and aborts the run.
#[derive(Debug, Default)]
pub struct MeaningStage;

impl Stage<ReadingContext> for MeaningStage {
    type Prepared = (Vec<DrawnCard>, LayoutConfig, QuestionCategory);
    type Output = Vec<CardMeaning>;

    fn prepare(
        &self,
        ctx: &ReadingContext,
    ) -> ReadingResult<(Vec<DrawnCard>, LayoutConfig, QuestionCategory)> {
        let layout = ctx
            .layout
            .clone()
            .ok_or(ReadingError::MissingField("layout"))?;
        let category = ctx
            .category
            .ok_or(ReadingError::MissingField("category"))?;
        Ok((ctx.drawn_cards.clone(), layout, category))
    }

    fn process(
        &self,
        (drawn, layout, category): &(Vec<DrawnCard>, LayoutConfig, QuestionCategory),
    ) -> ReadingResult<Vec<CardMeaning>> {
        let catalogue = Catalogue::standard();
        drawn
            .iter()
            .map(|card| {
                let entry = catalogue
                    .card_by_name(&card.name)
                    .ok_or_else(|| ReadingError::UnknownCard(card.name.clone()))?;
                Ok(CardMeaning::resolve(entry, card, layout, *category))
            })
            .collect()
    }

    fn finalize(
        &self,
        ctx: &mut ReadingContext,
        _prepared: (Vec<DrawnCard>, LayoutConfig, QuestionCategory),
        output: Vec<CardMeaning>,
    ) -> ReadingResult<Transition> {
        ctx.card_meanings = output;
        Ok(Transition::default())
    }
}
