//! The persistence stage.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use arcana_store::{RECORD_VERSION, ReadingRecord, RecordStore};

use crate::context::ReadingContext;
use crate::error::{ReadingError, ReadingResult};
use crate::flow::{Stage, Transition};

/// Snapshots the context into a [`ReadingRecord`] and appends it to the
/// store. The id and timestamp are assigned here so the context can carry
/// them; a store failure leaves `persisted` false but never aborts.
pub struct PersistStage {
    store: Arc<RecordStore>,
}

impl PersistStage {
    /// A persist stage writing to the given store.
    pub fn new(store: Arc<RecordStore>) -> PersistStage {
        PersistStage { store }
    }
}

impl Stage<ReadingContext> for PersistStage {
    type Prepared = ReadingRecord;
    type Output = bool;

    fn prepare(&self, ctx: &ReadingContext) -> ReadingResult<ReadingRecord> {
        let category = ctx
            .category
            .ok_or(ReadingError::MissingField("category"))?;
        let layout = ctx
            .layout
            .clone()
            .ok_or(ReadingError::MissingField("layout"))?;
        let combined = ctx
            .combined
            .clone()
            .ok_or(ReadingError::MissingField("combined"))?;

        Ok(ReadingRecord {
            id: Some(Uuid::new_v4().to_string()),
            created_at: Some(Utc::now()),
            version: RECORD_VERSION.to_string(),
            question: ctx.question.clone(),
            category,
            layout_id: layout.id.clone(),
            layout,
            drawn_cards: ctx.drawn_cards.clone(),
            card_meanings: ctx.card_meanings.clone(),
            individual_interpretations: ctx.individual_interpretations.clone(),
            combined,
        })
    }

    fn process(&self, record: &ReadingRecord) -> ReadingResult<bool> {
        Ok(self.store.append(record.clone()))
    }

    fn finalize(
        &self,
        ctx: &mut ReadingContext,
        record: ReadingRecord,
        persisted: bool,
    ) -> ReadingResult<Transition> {
        ctx.persisted = persisted;
        ctx.record_id = record.id;
        ctx.created_at = record.created_at;
        Ok(Transition::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::DynStage;
    use arcana_deck::{QuestionCategory, layout_by_id};
    use arcana_store::CombinedInterpretation;

    fn ready_ctx() -> ReadingContext {
        let mut ctx = ReadingContext::new("What lies ahead?", None);
        ctx.category = Some(QuestionCategory::General);
        ctx.layout = Some(layout_by_id("single").unwrap().clone());
        ctx.combined = Some(CombinedInterpretation {
            narrative: "A steady path forward.".to_string(),
            summary: "A steady path forward.".to_string(),
        });
        ctx
    }

    #[test]
    fn persists_and_records_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(RecordStore::new(dir.path().join("readings.json")));

        let mut ctx = ready_ctx();
        PersistStage::new(Arc::clone(&store))
            .execute(&mut ctx)
            .unwrap();

        assert!(ctx.persisted);
        let id = ctx.record_id.unwrap();
        let found = store.find_by_id(&id).unwrap().unwrap();
        assert_eq!(found.question, "What lies ahead?");
        assert_eq!(found.created_at, ctx.created_at);
    }

    #[test]
    fn store_failure_does_not_abort() {
        // A directory path cannot be written as a file.
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(RecordStore::new(dir.path()));

        let mut ctx = ready_ctx();
        PersistStage::new(store).execute(&mut ctx).unwrap();
        assert!(!ctx.persisted);
    }

    #[test]
    fn incomplete_context_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(RecordStore::new(dir.path().join("readings.json")));

        let mut ctx = ReadingContext::new("q", None);
        let err = PersistStage::new(store).execute(&mut ctx).unwrap_err();
        assert!(matches!(err, ReadingError::MissingField("category")));
    }
}
