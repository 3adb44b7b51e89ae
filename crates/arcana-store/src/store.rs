//! File-backed append-only record log.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use arcana_deck::QuestionCategory;

use crate::error::StoreResult;
use crate::record::ReadingRecord;

/// Aggregate counts over the whole record log.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreStatistics {
    /// Total number of persisted readings.
    pub total: usize,
    /// Reading counts keyed by question category.
    pub by_category: HashMap<QuestionCategory, usize>,
    /// Reading counts keyed by layout id.
    pub by_layout: HashMap<String, usize>,
    /// Timestamp of the most recent reading.
    pub newest: Option<DateTime<Utc>>,
    /// Timestamp of the oldest reading.
    pub oldest: Option<DateTime<Utc>>,
    /// Average readings per distinct calendar month (UTC) that has at
    /// least one reading. Zero when the log is empty.
    pub average_per_month: f64,
}

/// The JSON-file record log. Appends rewrite the whole file atomically
/// (write to a temporary sibling, then rename), serialized behind a mutex
/// so concurrent appends cannot interleave.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl RecordStore {
    /// Create a store backed by the given file path. The file is created
    /// lazily on first append.
    pub fn new(path: impl Into<PathBuf>) -> RecordStore {
        RecordStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record to the log, assigning an id and timestamp if the
    /// record does not carry them yet.
    ///
    /// Persistence is best-effort: failures are logged and reported as
    /// `false` so a reading can still complete when the log is
    /// unwritable.
    pub fn append(&self, record: ReadingRecord) -> bool {
        match self.try_append(record) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("failed to persist reading to {}: {err}", self.path.display());
                false
            }
        }
    }

    fn try_append(&self, mut record: ReadingRecord) -> StoreResult<()> {
        let guard = self.lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        if record.id.is_none() {
            record.id = Some(Uuid::new_v4().to_string());
        }
        if record.created_at.is_none() {
            record.created_at = Some(Utc::now());
        }

        let mut records = self.read_log()?;
        records.push(record);
        self.write_log(&records)?;

        drop(guard);
        Ok(())
    }

    /// All records, newest first. A missing log file is an empty log.
    pub fn load_all(&self) -> StoreResult<Vec<ReadingRecord>> {
        let mut records = self.read_log()?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    /// Look up a single record by id.
    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<ReadingRecord>> {
        let records = self.read_log()?;
        Ok(records.into_iter().find(|r| r.id.as_deref() == Some(id)))
    }

    /// All records with the given question category, newest first.
    pub fn filter_by_category(
        &self,
        category: QuestionCategory,
    ) -> StoreResult<Vec<ReadingRecord>> {
        let mut records = self.load_all()?;
        records.retain(|r| r.category == category);
        Ok(records)
    }

    /// All records that used the given layout, newest first.
    pub fn filter_by_layout(&self, layout_id: &str) -> StoreResult<Vec<ReadingRecord>> {
        let mut records = self.load_all()?;
        records.retain(|r| r.layout_id == layout_id);
        Ok(records)
    }

    /// Aggregate statistics over the whole log.
    pub fn statistics(&self) -> StoreResult<StoreStatistics> {
        let records = self.read_log()?;

        let mut by_category: HashMap<QuestionCategory, usize> = HashMap::new();
        let mut by_layout: HashMap<String, usize> = HashMap::new();
        let mut months: HashMap<String, usize> = HashMap::new();
        let mut newest: Option<DateTime<Utc>> = None;
        let mut oldest: Option<DateTime<Utc>> = None;

        for record in &records {
            *by_category.entry(record.category).or_default() += 1;
            *by_layout.entry(record.layout_id.clone()).or_default() += 1;

            if let Some(at) = record.created_at {
                *months.entry(at.format("%Y-%m").to_string()).or_default() += 1;
                newest = Some(newest.map_or(at, |n| n.max(at)));
                oldest = Some(oldest.map_or(at, |o| o.min(at)));
            }
        }

        let average_per_month = if months.is_empty() {
            0.0
        } else {
            records.len() as f64 / months.len() as f64
        };

        Ok(StoreStatistics {
            total: records.len(),
            by_category,
            by_layout,
            newest,
            oldest,
            average_per_month,
        })
    }

    fn read_log(&self) -> StoreResult<Vec<ReadingRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_log(&self, records: &[ReadingRecord]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
