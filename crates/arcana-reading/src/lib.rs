//! Staged tarot reading pipeline.
//!
//! A reading runs as a [`flow::Pipeline`] of stages over a shared
//! [`context::ReadingContext`]: classify the question, resolve the layout,
//! draw cards, join meanings, generate narratives (batched, with
//! deterministic fallback when the [`narrator::Narrator`] backend fails),
//! and persist the result. [`reader::Reader`] wires the stages together
//! for callers.

pub mod context;
pub mod error;
pub mod flow;
pub mod interpret;
pub mod narrator;
pub mod reader;
pub mod stages;

pub use context::ReadingContext;
pub use error::{ReadingError, ReadingResult};
pub use flow::{DEFAULT_LABEL, Pipeline, PipelineBuilder, Stage, Transition};
pub use narrator::{Narrator, NarratorError, OfflineNarrator};
pub use reader::{Reader, ReaderConfig, Reading};
