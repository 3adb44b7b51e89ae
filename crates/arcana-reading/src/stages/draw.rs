//! The draw stage.

use std::cell::RefCell;

use rand::SeedableRng;
use rand::rngs::StdRng;

use arcana_deck::{Catalogue, DrawnCard, draw};

use crate::context::ReadingContext;
use crate::error::{ReadingError, ReadingResult};
use crate::flow::{Stage, Transition};

/// Draws the layout's worth of cards, honouring the exclusion list. Owns
/// the session RNG; a draw validation failure aborts the run.
pub struct DrawStage {
    rng: RefCell<StdRng>,
}

impl DrawStage {
    /// A draw stage with a fixed seed when given, OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> DrawStage {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        DrawStage {
            rng: RefCell::new(rng),
        }
    }
}

impl Stage<ReadingContext> for DrawStage {
    type Prepared = (usize, Vec<String>);
    type Output = Vec<DrawnCard>;

    fn prepare(&self, ctx: &ReadingContext) -> ReadingResult<(usize, Vec<String>)> {
        let layout = ctx
            .layout
            .as_ref()
            .ok_or(ReadingError::MissingField("layout"))?;
        Ok((layout.card_count, ctx.excluded_cards.clone()))
    }

    fn process(&self, (count, excluded): &(usize, Vec<String>)) -> ReadingResult<Vec<DrawnCard>> {
        let mut rng = self.rng.borrow_mut();
        Ok(draw(Catalogue::standard(), *count, excluded, &mut rng)?)
    }

    fn finalize(
        &self,
        ctx: &mut ReadingContext,
        _prepared: (usize, Vec<String>),
        output: Vec<DrawnCard>,
    ) -> ReadingResult<Transition> {
        ctx.drawn_cards = output;
        Ok(Transition::default())
    }
}
