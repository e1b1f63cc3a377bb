//! Wall use-case service.
//!
//! # Responsibility
//! - Provide the wall operations: create, soft-delete/restore, edit, queries.
//! - Enforce soft-delete rules on top of a storage-agnostic repository.
//!
//! # Invariants
//! - Ids come from the repository counter only. Caller-supplied ids on
//!   create input are overwritten.
//! - Nothing is created or edited under a soft-deleted parent.
//! - A soft-deleted record only accepts the restore transition.
//! - Unknown ids on delete/restore/edit are silent no-ops, not errors.

use crate::model::record::{Comment, Note, Record, RecordId, UserId};
use crate::model::user::User;
use crate::repo::record_repo::{InMemoryRecordRepository, RecordListQuery, RecordRepository};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type WallResult<T> = Result<T, WallError>;

/// Which record in a rejected operation is soft-deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletedTarget {
    /// The record being edited.
    Record,
    /// The parent the record is (or would be) attached to.
    Parent,
}

/// Wall operation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WallError {
    /// A create or edit touched a soft-deleted record. `id` names that record.
    NotPermittedOnDeleted { id: RecordId, target: DeletedTarget },
}

impl Display for WallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPermittedOnDeleted {
                id,
                target: DeletedTarget::Record,
            } => write!(f, "operation not permitted: record {id} is deleted"),
            Self::NotPermittedOnDeleted {
                id,
                target: DeletedTarget::Parent,
            } => write!(
                f,
                "operation not permitted: parent record {id} is deleted"
            ),
        }
    }
}

impl Error for WallError {}

/// Wall store facade over a record repository.
pub struct WallService<R: RecordRepository> {
    repo: R,
}

impl WallService<InMemoryRecordRepository> {
    /// Creates an empty wall backed by process memory.
    pub fn in_memory() -> Self {
        Self::new(InMemoryRecordRepository::new())
    }
}

impl<R: RecordRepository> WallService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Stores a new note and returns it with its assigned id.
    ///
    /// # Contract
    /// - The returned note is active regardless of the input flag.
    pub fn create_note(&mut self, note: Note) -> WallResult<Note> {
        let mut note = note;
        note.id = self.repo.allocate_id();
        note.is_deleted = false;
        self.insert_record(Record::Note(note.clone()))?;
        Ok(note)
    }

    /// Stores a new comment and returns it with its assigned id.
    ///
    /// # Errors
    /// - `NotPermittedOnDeleted` when the parent is soft-deleted. Nothing is
    ///   stored, but the allocated id stays consumed.
    pub fn create_comment(&mut self, comment: Comment) -> WallResult<Comment> {
        let mut comment = comment;
        comment.id = self.repo.allocate_id();
        comment.is_deleted = false;
        self.insert_record(Record::Comment(comment.clone()))?;
        Ok(comment)
    }

    /// Soft-deletes the note (or any record) with `id`.
    pub fn delete(&mut self, id: RecordId) {
        self.set_deleted(id, true);
    }

    pub fn delete_comment(&mut self, id: RecordId) {
        self.set_deleted(id, true);
    }

    /// Clears the soft-delete flag of the note (or any record) with `id`.
    pub fn restore(&mut self, id: RecordId) {
        self.set_deleted(id, false);
    }

    pub fn restore_comment(&mut self, id: RecordId) {
        self.set_deleted(id, false);
    }

    /// Replaces the record stored at `id` with `note`.
    ///
    /// # Errors
    /// - `NotPermittedOnDeleted` when the stored record or its parent is
    ///   soft-deleted.
    pub fn edit(&mut self, id: RecordId, note: Note) -> WallResult<()> {
        self.edit_record(id, Record::Note(note))
    }

    /// Replaces the record stored at `id` with `comment`.
    ///
    /// # Errors
    /// - `NotPermittedOnDeleted` when the stored record, its parent, or the
    ///   replacement's parent is soft-deleted.
    pub fn edit_comment(&mut self, id: RecordId, comment: Comment) -> WallResult<()> {
        self.edit_record(id, Record::Comment(comment))
    }

    /// Active notes owned by `user_id`, in ascending id order.
    pub fn get_notes_by_user(&self, user_id: UserId) -> Vec<Note> {
        self.repo
            .list_records(&RecordListQuery::notes_by_user(user_id))
            .into_iter()
            .filter_map(Record::into_note)
            .collect()
    }

    /// Record with exactly `id`, deleted or not.
    pub fn get_by_id(&self, id: RecordId) -> Option<Record> {
        self.repo.get_record(id)
    }

    /// Active comments whose parent is `parent_id`.
    pub fn get_comments_by_parent(&self, parent_id: RecordId) -> Vec<Comment> {
        self.repo
            .list_records(&RecordListQuery::comments_by_parent(parent_id))
            .into_iter()
            .filter_map(Record::into_comment)
            .collect()
    }

    /// Notes of every friend of `user`, concatenated in friend-list order.
    ///
    /// A friend listed twice contributes their notes twice.
    pub fn get_friends_notes(&self, user: &User) -> Vec<Note> {
        user.friend_ids
            .iter()
            .flat_map(|friend_id| self.get_notes_by_user(*friend_id))
            .collect()
    }

    /// Lists records using filter options.
    pub fn list_records(&self, query: &RecordListQuery) -> Vec<Record> {
        self.repo.list_records(query)
    }

    /// Number of stored records, soft-deleted ones included.
    pub fn record_count(&self) -> usize {
        self.repo.record_count()
    }

    fn insert_record(&mut self, record: Record) -> WallResult<()> {
        let id = record.id();
        if self.repo.get_record(id).is_some() {
            return self.edit_record(id, record);
        }

        if let Some(parent_id) = record.parent_id() {
            if let Err(err) = self.ensure_parent_active(parent_id) {
                warn!(
                    "event=record_create module=wall status=rejected id={} parent_id={} reason=parent_deleted",
                    id, parent_id
                );
                return Err(err);
            }
        }

        info!(
            "event=record_create module=wall status=ok id={} kind={:?} user_id={}",
            id,
            record.kind(),
            record.user_id()
        );
        self.repo.put_record(record);
        Ok(())
    }

    fn edit_record(&mut self, id: RecordId, replacement: Record) -> WallResult<()> {
        let Some(current) = self.repo.get_record(id) else {
            debug!("event=record_edit module=wall status=noop id={} reason=not_found", id);
            return Ok(());
        };

        if current.is_deleted() {
            warn!(
                "event=record_edit module=wall status=rejected id={} reason=record_deleted",
                id
            );
            return Err(WallError::NotPermittedOnDeleted {
                id,
                target: DeletedTarget::Record,
            });
        }

        let parents = [current.parent_id(), replacement.parent_id()];
        for parent_id in parents.into_iter().flatten() {
            if let Err(err) = self.ensure_parent_active(parent_id) {
                warn!(
                    "event=record_edit module=wall status=rejected id={} parent_id={} reason=parent_deleted",
                    id, parent_id
                );
                return Err(err);
            }
        }

        let mut replacement = replacement;
        replacement.set_id(id);
        replacement.restore();
        info!(
            "event=record_edit module=wall status=ok id={} kind={:?}",
            id,
            replacement.kind()
        );
        self.repo.put_record(replacement);
        Ok(())
    }

    fn set_deleted(&mut self, id: RecordId, is_deleted: bool) {
        let event = if is_deleted {
            "record_delete"
        } else {
            "record_restore"
        };
        let Some(mut record) = self.repo.get_record(id) else {
            debug!("event={} module=wall status=noop id={} reason=not_found", event, id);
            return;
        };

        if is_deleted {
            record.soft_delete();
        } else {
            record.restore();
        }
        self.repo.put_record(record);
        info!("event={} module=wall status=ok id={}", event, id);
    }

    /// Unknown parents are accepted; only a present, soft-deleted parent fails.
    fn ensure_parent_active(&self, parent_id: RecordId) -> WallResult<()> {
        match self.repo.get_record(parent_id) {
            Some(parent) if parent.is_deleted() => Err(WallError::NotPermittedOnDeleted {
                id: parent_id,
                target: DeletedTarget::Parent,
            }),
            _ => Ok(()),
        }
    }
}
