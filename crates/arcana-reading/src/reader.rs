//! The caller-facing runner.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use arcana_deck::{DrawnCard, QuestionCategory};
use arcana_store::{IndividualInterpretation, RecordStore};

use crate::context::ReadingContext;
use crate::error::{ReadingError, ReadingResult};
use crate::flow::Pipeline;
use crate::narrator::Narrator;
use crate::stages::{
    ClassifyStage, DrawStage, InterpretStage, MeaningStage, PersistStage, SetupStage,
    SynthesizeStage,
};

/// Settings for a [`Reader`].
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Fixed RNG seed for reproducible draws; OS entropy when absent.
    pub seed: Option<u64>,
    /// Whether completed readings are appended to the store. When off, the
    /// abbreviated pipeline runs: no per-card generation, no persistence.
    pub persist: bool,
    /// Path of the record log.
    pub store_path: PathBuf,
}

impl Default for ReaderConfig {
    fn default() -> ReaderConfig {
        ReaderConfig {
            seed: None,
            persist: true,
            store_path: PathBuf::from("readings.json"),
        }
    }
}

/// The outcome of one completed reading, extracted from the context.
#[derive(Debug)]
pub struct Reading {
    /// The question that was asked.
    pub question: String,
    /// Detected question category.
    pub category: QuestionCategory,
    /// Id of the layout used.
    pub layout_id: String,
    /// Display name of the layout used.
    pub layout_name: String,
    /// Classification note.
    pub analysis: String,
    /// The cards as drawn.
    pub drawn_cards: Vec<DrawnCard>,
    /// Per-card narratives. Empty for an abbreviated reading.
    pub individual_interpretations: Vec<IndividualInterpretation>,
    /// Whole-layout narrative.
    pub narrative: String,
    /// Short summary of the narrative.
    pub summary: String,
    /// Whether the reading reached the store.
    pub persisted: bool,
    /// Id of the persisted record, when one was written.
    pub record_id: Option<String>,
    /// Timestamp of the persisted record, when one was written.
    pub created_at: Option<DateTime<Utc>>,
}

/// Owns the narrator, the store, and the built pipelines, and runs
/// readings over them.
pub struct Reader {
    store: Arc<RecordStore>,
    full: Pipeline<ReadingContext>,
    quick: Pipeline<ReadingContext>,
    persist: bool,
}

impl Reader {
    /// Build a reader with both pipelines wired up.
    pub fn new(config: &ReaderConfig, narrator: Arc<dyn Narrator>) -> ReadingResult<Reader> {
        let store = Arc::new(RecordStore::new(config.store_path.clone()));

        let full = Pipeline::builder("classify")
            .stage("classify", ClassifyStage)
            .stage("setup", SetupStage)
            .stage("draw", DrawStage::new(config.seed))
            .stage("meaning", MeaningStage)
            .stage("interpret", InterpretStage::new(Arc::clone(&narrator)))
            .stage("synthesize", SynthesizeStage::new(Arc::clone(&narrator)))
            .stage("persist", PersistStage::new(Arc::clone(&store)))
            .chain([
                "classify",
                "setup",
                "draw",
                "meaning",
                "interpret",
                "synthesize",
                "persist",
            ])
            .build()?;

        let quick = Pipeline::builder("classify")
            .stage("classify", ClassifyStage)
            .stage("setup", SetupStage)
            .stage("draw", DrawStage::new(config.seed))
            .stage("meaning", MeaningStage)
            .stage("synthesize", SynthesizeStage::new(narrator))
            .chain(["classify", "setup", "draw", "meaning", "synthesize"])
            .build()?;

        Ok(Reader {
            store,
            full,
            quick,
            persist: config.persist,
        })
    }

    /// The record store backing this reader.
    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    /// Run one reading. The full pipeline when persistence is on, the
    /// abbreviated one otherwise.
    pub fn read(&self, question: &str, layout: Option<&str>) -> ReadingResult<Reading> {
        self.read_excluding(question, layout, Vec::new())
    }

    /// Run one reading with certain cards barred from the draw.
    pub fn read_excluding(
        &self,
        question: &str,
        layout: Option<&str>,
        excluded: Vec<String>,
    ) -> ReadingResult<Reading> {
        let mut ctx = ReadingContext::new(question, layout.map(ToString::to_string));
        ctx.excluded_cards = excluded;
        let pipeline = if self.persist { &self.full } else { &self.quick };
        pipeline.run(&mut ctx)?;
        extract(ctx)
    }
}

fn extract(ctx: ReadingContext) -> ReadingResult<Reading> {
    let category = ctx
        .category
        .ok_or(ReadingError::MissingField("category"))?;
    let layout = ctx.layout.ok_or(ReadingError::MissingField("layout"))?;
    let combined = ctx
        .combined
        .ok_or(ReadingError::MissingField("combined"))?;
    let analysis = ctx
        .analysis
        .ok_or(ReadingError::MissingField("analysis"))?;

    Ok(Reading {
        question: ctx.question,
        category,
        layout_id: layout.id,
        layout_name: layout.name,
        analysis,
        drawn_cards: ctx.drawn_cards,
        individual_interpretations: ctx.individual_interpretations,
        narrative: combined.narrative,
        summary: combined.summary,
        persisted: ctx.persisted,
        record_id: ctx.record_id,
        created_at: ctx.created_at,
    })
}
