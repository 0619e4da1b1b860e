//! Intents: user-facing workflows built from ordered store transitions.
//!
//! Each intent runs its transitions strictly in sequence; later steps rely on
//! the completed effects of earlier ones. A failing transition stops the
//! sequence and its error is returned as-is.

use crate::config::NotekeeperConfig;
use crate::model::Note;

pub mod compose;
pub mod config;
pub mod edit;
pub mod empty_trash;
pub mod exit;
pub mod list;
pub mod open;
pub mod restore;
pub mod trash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
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

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<Note>,
    pub config: Option<NotekeeperConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_config(mut self, config: NotekeeperConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Display label for a note, falling back when the title is blank.
pub(crate) fn label(title: &str) -> &str {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        "(untitled)"
    } else {
        trimmed
    }
}
