use crate::error::NotekeeperError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const DEFAULT_THEME: &str = "dark";
pub const DEFAULT_FONT: &str = "glacial";
pub const DEFAULT_PRESET: &str = "important";

pub const USER_NOTES: &str = "userNotes";
pub const TRASHED_NOTES: &str = "trashedNotes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub text: String,
    pub theme: String,
    pub font: String,
    pub preset: String,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
    pub favourite: bool,
}

impl Note {
    /// Builds a fresh record from the draft. Both timestamps share one instant.
    pub fn from_draft(draft: &Draft) -> Self {
        let now = Utc::now();
        Self {
            id: new_note_id(),
            title: draft.note_title.trim().to_string(),
            text: draft.note_text.clone(),
            theme: draft.note_theme.clone(),
            font: draft.note_font.clone(),
            preset: draft.note_preset.clone(),
            create_date: now,
            update_date: now,
            favourite: draft.note_is_favourite,
        }
    }

    pub fn is_blank(&self) -> bool {
        is_blank_content(&self.title, &self.text)
    }
}

/// A note with only whitespace in both title and text counts as empty.
pub fn is_blank_content(title: &str, text: &str) -> bool {
    title.trim().is_empty() && text.trim().is_empty()
}

pub fn new_note_id() -> String {
    format!("note-id-{}", Uuid::new_v4().simple())
}

/// The note currently being edited, plus the dialog flags the UI drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub is_note_empty: bool,
    pub is_note_new: bool,
    pub is_note_dialog_visible: bool,
    /// Empty for a note that has never been saved.
    pub note_id: String,
    pub note_title: String,
    pub note_text: String,
    pub note_preset: String,
    pub note_theme: String,
    pub note_font: String,
    pub note_is_favourite: bool,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            is_note_empty: true,
            is_note_new: true,
            is_note_dialog_visible: false,
            note_id: String::new(),
            note_title: String::new(),
            note_text: String::new(),
            note_preset: DEFAULT_PRESET.to_string(),
            note_theme: DEFAULT_THEME.to_string(),
            note_font: DEFAULT_FONT.to_string(),
            note_is_favourite: false,
        }
    }
}

impl Draft {
    pub fn has_content(&self) -> bool {
        !is_blank_content(&self.note_title, &self.note_text)
    }
}

/// Full store state. This is also the snapshot written to the durable slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoteState {
    pub user_notes: Vec<Note>,
    pub favourite_notes: Vec<Note>,
    pub trashed_notes: Vec<Note>,
    #[serde(flatten)]
    pub draft: Draft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Text,
    Theme,
    Font,
    Preset,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DraftField::Title => "title",
            DraftField::Text => "text",
            DraftField::Theme => "theme",
            DraftField::Font => "font",
            DraftField::Preset => "preset",
        };
        f.write_str(name)
    }
}

/// Where `commit_note` places the freshly built record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Create,
    Trash,
}

impl FromStr for Destination {
    type Err = NotekeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Destination::Create),
            "trash" => Ok(Destination::Trash),
            other => Err(unknown_tag("destination", other)),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Create => f.write_str("create"),
            Destination::Trash => f.write_str("trash"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrashScope {
    One,
    All,
}

impl FromStr for TrashScope {
    type Err = NotekeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one" => Ok(TrashScope::One),
            "all" => Ok(TrashScope::All),
            other => Err(unknown_tag("trash scope", other)),
        }
    }
}

impl fmt::Display for TrashScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrashScope::One => f.write_str("one"),
            TrashScope::All => f.write_str("all"),
        }
    }
}

/// The page the editor was opened from. Only `Trash` changes exit behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Favourites,
    Trash,
    Other(String),
}

impl Page {
    pub fn is_trash(&self) -> bool {
        matches!(self, Page::Trash)
    }
}

impl FromStr for Page {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "home" => Page::Home,
            "favourites" | "favorites" => Page::Favourites,
            "trash" => Page::Trash,
            other => {
                log::debug!("unlisted page {:?}, treating as a notes page", other);
                Page::Other(other.to_string())
            }
        })
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home => f.write_str("home"),
            Page::Favourites => f.write_str("favourites"),
            Page::Trash => f.write_str("trash"),
            Page::Other(name) => f.write_str(name),
        }
    }
}

fn unknown_tag(kind: &'static str, tag: &str) -> NotekeeperError {
    log::warn!("ignoring unrecognized {} tag {:?}", kind, tag);
    NotekeeperError::UnknownTag {
        kind,
        tag: tag.to_string(),
    }
}
