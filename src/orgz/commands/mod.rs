//! # Command Layer
//!
//! The business logic of the organizer. Each operation lives in its own
//! submodule as a function generic over [`crate::store::RecordStore`], and
//! most are also generic over the record type, since the four collections
//! share the same CRUD shape.
//!
//! Commands return structured [`CmdResult`] values carrying the touched
//! records and leveled [`CmdMessage`]s. They never print, never prompt, and
//! never exit; the menu layer decides how to render what they return. The
//! only files commands touch are the ones whose contract is the file itself
//! (CSV export/import and the finance report).
//!
//! ## Command Modules
//!
//! - [`create`]: allocate an id, append, persist
//! - [`list`]: load a collection for display
//! - [`view`]: look a record up by id
//! - [`update`]: overwrite a record's fields in place
//! - [`complete`]: mark a task done
//! - [`delete`]: remove a record by id
//! - [`search`]: find contacts by exact name or phone
//! - [`filter`]: finance listing filtered by date or category
//! - [`report`]: finance totals over a date range, written to a CSV
//! - [`export`]: whole-collection CSV export
//! - [`import`]: CSV import with id-collision reassignment

use serde::Serialize;

pub mod complete;
pub mod create;
pub mod delete;
pub mod export;
pub mod filter;
pub mod import;
pub mod list;
pub mod report;
pub mod search;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back: the records it touched or listed, plus
/// messages for the UI to render.
#[derive(Debug)]
pub struct CmdResult<R> {
    pub records: Vec<R>,
    pub messages: Vec<CmdMessage>,
}

impl<R> Default for CmdResult<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            messages: Vec::new(),
        }
    }
}

impl<R> CmdResult<R> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<R>) -> Self {
        self.records = records;
        self
    }

    /// True when some message carries the given level.
    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
