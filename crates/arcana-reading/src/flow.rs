//! Staged execution engine.
//!
//! A [`Pipeline`] is a directed graph of [`Stage`]s keyed by id, with edges
//! keyed by `(stage id, transition label)`. A run starts at the entry stage
//! and follows labelled transitions until a stage emits a label with no
//! registered successor. Stage errors abort the whole run.
//!
//! Stages are generic over the context type so the engine carries no
//! reading-specific knowledge; the context is the sole channel between
//! stages.

use std::collections::HashMap;

use crate::error::{ReadingError, ReadingResult};

/// The transition label emitted when a stage has nothing to branch on.
pub const DEFAULT_LABEL: &str = "default";

/// Label naming the outgoing edge a stage wants to follow.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition(String);

impl Transition {
    /// A transition with the given label.
    pub fn new(label: impl Into<String>) -> Transition {
        Transition(label.into())
    }

    /// The label.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl Default for Transition {
    fn default() -> Transition {
        Transition::new(DEFAULT_LABEL)
    }
}

/// One step of a pipeline, split into a fixed three-operation contract.
///
/// `prepare` extracts what the stage needs from the context (read-only),
/// `process` does the work on the extracted data and may call collaborators
/// the stage owns, and `finalize` writes results back into the context and
/// names the outgoing edge. Keeping context writes confined to `finalize`
/// makes each stage testable against a hand-built context.
pub trait Stage<C> {
    /// Data extracted from the context before processing.
    type Prepared;
    /// Result of processing.
    type Output;

    /// Extract the stage's inputs from the context.
    fn prepare(&self, ctx: &C) -> ReadingResult<Self::Prepared>;

    /// Do the stage's work on the prepared inputs.
    fn process(&self, prepared: &Self::Prepared) -> ReadingResult<Self::Output>;

    /// Write results into the context and pick the outgoing edge.
    fn finalize(
        &self,
        ctx: &mut C,
        prepared: Self::Prepared,
        output: Self::Output,
    ) -> ReadingResult<Transition>;
}

/// Object-safe driver over [`Stage`], so stages with differing associated
/// types can live in one pipeline. Blanket-implemented; not meant to be
/// implemented directly.
pub trait DynStage<C> {
    /// Run prepare, process, and finalize in order.
    fn execute(&self, ctx: &mut C) -> ReadingResult<Transition>;
}

impl<C, S: Stage<C>> DynStage<C> for S {
    fn execute(&self, ctx: &mut C) -> ReadingResult<Transition> {
        let prepared = self.prepare(ctx)?;
        let output = self.process(&prepared)?;
        self.finalize(ctx, prepared, output)
    }
}

/// A validated stage graph, ready to run any number of times.
pub struct Pipeline<C> {
    stages: HashMap<String, Box<dyn DynStage<C>>>,
    edges: HashMap<(String, String), String>,
    entry: String,
}

impl<C> Pipeline<C> {
    /// Start building a pipeline that enters at the given stage id.
    pub fn builder(entry: impl Into<String>) -> PipelineBuilder<C> {
        PipelineBuilder {
            entry: entry.into(),
            stages: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    /// Run the pipeline over a context. Ends normally when a stage emits a
    /// transition with no registered successor; any stage error aborts and
    /// propagates.
    pub fn run(&self, ctx: &mut C) -> ReadingResult<()> {
        let mut current = self.entry.clone();
        loop {
            let stage = self
                .stages
                .get(&current)
                .ok_or_else(|| ReadingError::UnknownStage(current.clone()))?;
            let transition = stage.execute(ctx)?;

            let key = (current, transition.label().to_string());
            match self.edges.get(&key) {
                Some(next) => current = next.clone(),
                None => return Ok(()),
            }
        }
    }
}

/// Builder for [`Pipeline`].
pub struct PipelineBuilder<C> {
    entry: String,
    stages: HashMap<String, Box<dyn DynStage<C>>>,
    edges: HashMap<(String, String), String>,
}

impl<C> PipelineBuilder<C> {
    /// Register a stage under an id.
    pub fn stage(mut self, id: impl Into<String>, stage: impl Stage<C> + 'static) -> Self {
        self.stages.insert(id.into(), Box::new(stage));
        self
    }

    /// Register an edge: when `from` emits `label`, continue at `to`.
    pub fn edge(
        mut self,
        from: impl Into<String>,
        label: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.edges.insert((from.into(), label.into()), to.into());
        self
    }

    /// Register default-labelled edges along a linear chain of stage ids.
    pub fn chain<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        for pair in ids.windows(2) {
            self = self.edge(pair[0].clone(), DEFAULT_LABEL, pair[1].clone());
        }
        self
    }

    /// Validate the graph: the entry stage and every edge endpoint must be
    /// registered.
    pub fn build(self) -> ReadingResult<Pipeline<C>> {
        if !self.stages.contains_key(&self.entry) {
            return Err(ReadingError::UnknownStage(self.entry));
        }
        for ((from, _), to) in &self.edges {
            if !self.stages.contains_key(from) {
                return Err(ReadingError::UnknownStage(from.clone()));
            }
            if !self.stages.contains_key(to) {
                return Err(ReadingError::UnknownStage(to.clone()));
            }
        }

        Ok(Pipeline {
            stages: self.stages,
            edges: self.edges,
            entry: self.entry,
        })
    }
}
