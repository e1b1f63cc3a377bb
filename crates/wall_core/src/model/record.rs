//! Wall record domain model.
//!
//! # Responsibility
//! - Define the closed Note/Comment variant set over one shared record shape.
//! - Provide lifecycle helpers for soft-delete semantics.
//!
//! # Invariants
//! - `id` is assigned by the store; `0` marks an unassigned input value.
//! - Notes never carry a parent; comments always do.
//! - `is_deleted` is the source of truth for tombstone state.

use serde::{Deserialize, Serialize};

/// Store-assigned record identifier. Shared by notes and comments.
pub type RecordId = u64;

/// Owner identifier, matching `User::id`.
pub type UserId = u64;

/// Placeholder id carried by records that have not been stored yet.
pub const UNASSIGNED_ID: RecordId = 0;

/// Discriminant of the record variants, used by list filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Note,
    Comment,
}

/// Top-level post on a user's wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: RecordId,
    pub user_id: UserId,
    pub text: String,
    pub is_deleted: bool,
}

impl Note {
    /// Builds an unassigned, active note for `WallService::create_note`.
    pub fn new(user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            user_id,
            text: text.into(),
            is_deleted: false,
        }
    }
}

/// Reply attached to another record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: RecordId,
    pub user_id: UserId,
    pub text: String,
    /// Usually a note. Any record id is accepted, so comment threads may nest.
    pub parent_id: RecordId,
    pub is_deleted: bool,
}

impl Comment {
    /// Builds an unassigned, active comment for `WallService::create_comment`.
    pub fn new(user_id: UserId, parent_id: RecordId, text: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            user_id,
            text: text.into(),
            parent_id,
            is_deleted: false,
        }
    }
}

/// Stored wall entity.
///
/// Serialized with an inline `kind` tag so one collection can hold both
/// variants without a wrapper object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Note(Note),
    Comment(Comment),
}

impl Record {
    pub fn id(&self) -> RecordId {
        match self {
            Self::Note(note) => note.id,
            Self::Comment(comment) => comment.id,
        }
    }

    pub fn user_id(&self) -> UserId {
        match self {
            Self::Note(note) => note.user_id,
            Self::Comment(comment) => comment.user_id,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Note(note) => note.text.as_str(),
            Self::Comment(comment) => comment.text.as_str(),
        }
    }

    /// Returns the parent record id. Always `None` for notes.
    pub fn parent_id(&self) -> Option<RecordId> {
        match self {
            Self::Note(_) => None,
            Self::Comment(comment) => Some(comment.parent_id),
        }
    }

    pub fn is_deleted(&self) -> bool {
        match self {
            Self::Note(note) => note.is_deleted,
            Self::Comment(comment) => comment.is_deleted,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Note(_) => RecordKind::Note,
            Self::Comment(_) => RecordKind::Comment,
        }
    }

    /// Returns whether this record should be considered visible/active.
    pub fn is_active(&self) -> bool {
        !self.is_deleted()
    }

    /// Marks this record as softly deleted (tombstoned).
    pub fn soft_delete(&mut self) {
        self.set_deleted(true);
    }

    /// Clears soft delete flag.
    pub fn restore(&mut self) {
        self.set_deleted(false);
    }

    pub(crate) fn set_id(&mut self, id: RecordId) {
        match self {
            Self::Note(note) => note.id = id,
            Self::Comment(comment) => comment.id = id,
        }
    }

    fn set_deleted(&mut self, is_deleted: bool) {
        match self {
            Self::Note(note) => note.is_deleted = is_deleted,
            Self::Comment(comment) => comment.is_deleted = is_deleted,
        }
    }

    /// Returns the note payload, if this record is a note.
    pub fn as_note(&self) -> Option<&Note> {
        match self {
            Self::Note(note) => Some(note),
            Self::Comment(_) => None,
        }
    }

    /// Returns the comment payload, if this record is a comment.
    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Self::Note(_) => None,
            Self::Comment(comment) => Some(comment),
        }
    }

    pub fn into_note(self) -> Option<Note> {
        match self {
            Self::Note(note) => Some(note),
            Self::Comment(_) => None,
        }
    }

    pub fn into_comment(self) -> Option<Comment> {
        match self {
            Self::Note(_) => None,
            Self::Comment(comment) => Some(comment),
        }
    }
}

impl From<Note> for Record {
    fn from(value: Note) -> Self {
        Self::Note(value)
    }
}

impl From<Comment> for Record {
    fn from(value: Comment) -> Self {
        Self::Comment(value)
    }
}
