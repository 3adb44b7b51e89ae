//! Layout resolution.

use arcana_deck::{DEFAULT_LAYOUT_ID, LayoutConfig, layout_by_id};

use crate::context::ReadingContext;
use crate::error::{ReadingError, ReadingResult};
use crate::flow::{Stage, Transition};

/// Resolves the layout id in the context into a [`LayoutConfig`] clone.
/// Unknown ids fall back to the default single-card layout rather than
/// failing.
#[derive(Debug, Default)]
pub struct SetupStage;

impl Stage<ReadingContext> for SetupStage {
    type Prepared = String;
    type Output = LayoutConfig;

    fn prepare(&self, ctx: &ReadingContext) -> ReadingResult<String> {
        Ok(ctx
            .layout_id
            .clone()
            .or_else(|| ctx.requested_layout.clone())
            .unwrap_or_else(|| DEFAULT_LAYOUT_ID.to_string()))
    }

    fn process(&self, layout_id: &String) -> ReadingResult<LayoutConfig> {
        let layout = layout_by_id(layout_id).or_else(|| {
            log::warn!("unknown layout id {layout_id:?}, using {DEFAULT_LAYOUT_ID:?}");
            layout_by_id(DEFAULT_LAYOUT_ID)
        });
        layout
            .cloned()
            .ok_or(ReadingError::MissingField("default layout"))
    }

    fn finalize(
        &self,
        ctx: &mut ReadingContext,
        _layout_id: String,
        output: LayoutConfig,
    ) -> ReadingResult<Transition> {
        ctx.layout_id = Some(output.id.clone());
        ctx.layout = Some(output);
        Ok(Transition::default())
    }
}
