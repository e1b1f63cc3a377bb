//! Record repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the record collection and the record id counter.
//! - Provide keyed lookup and filtered listing over stored records.
//!
//! # Invariants
//! - `allocate_id` is strictly increasing and never hands out an id twice.
//! - Records are never physically removed; `put_record` only inserts or
//!   replaces.
//! - Listing is ordered by ascending id.

use crate::model::record::{Record, RecordId, RecordKind, UserId};
use std::collections::BTreeMap;

/// Query options for listing records.
///
/// The default query returns every active record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordListQuery {
    pub kind: Option<RecordKind>,
    pub user_id: Option<UserId>,
    pub parent_id: Option<RecordId>,
    pub include_deleted: bool,
}

impl RecordListQuery {
    /// Active notes owned by `user_id`.
    pub fn notes_by_user(user_id: UserId) -> Self {
        Self {
            kind: Some(RecordKind::Note),
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    /// Active comments attached directly to `parent_id`.
    pub fn comments_by_parent(parent_id: RecordId) -> Self {
        Self {
            kind: Some(RecordKind::Comment),
            parent_id: Some(parent_id),
            ..Self::default()
        }
    }

    /// Returns whether `record` passes every filter in this query.
    pub fn matches(&self, record: &Record) -> bool {
        if !self.include_deleted && record.is_deleted() {
            return false;
        }
        if self.kind.is_some_and(|kind| record.kind() != kind) {
            return false;
        }
        if self.user_id.is_some_and(|user_id| record.user_id() != user_id) {
            return false;
        }
        if let Some(parent_id) = self.parent_id {
            if record.parent_id() != Some(parent_id) {
                return false;
            }
        }
        true
    }
}

/// Repository interface for record storage.
pub trait RecordRepository {
    /// Advances the id counter and returns the new value.
    fn allocate_id(&mut self) -> RecordId;
    /// Inserts `record`, or replaces the record stored under the same id.
    fn put_record(&mut self, record: Record);
    fn get_record(&self, id: RecordId) -> Option<Record>;
    fn list_records(&self, query: &RecordListQuery) -> Vec<Record>;
    /// Number of stored records, tombstones included.
    fn record_count(&self) -> usize;
}

/// Process-memory record repository. Contents are lost when dropped.
#[derive(Debug, Default)]
pub struct InMemoryRecordRepository {
    records: BTreeMap<RecordId, Record>,
    last_id: RecordId,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last id handed out by `allocate_id`, or `0` before the first call.
    pub fn last_id(&self) -> RecordId {
        self.last_id
    }
}

impl RecordRepository for InMemoryRecordRepository {
    fn allocate_id(&mut self) -> RecordId {
        self.last_id += 1;
        self.last_id
    }

    fn put_record(&mut self, record: Record) {
        self.records.insert(record.id(), record);
    }

    fn get_record(&self, id: RecordId) -> Option<Record> {
        self.records.get(&id).cloned()
    }

    fn list_records(&self, query: &RecordListQuery) -> Vec<Record> {
        self.records
            .values()
            .filter(|record| query.matches(record))
            .cloned()
            .collect()
    }

    fn record_count(&self) -> usize {
        self.records.len()
    }
}
