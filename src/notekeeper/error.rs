use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotekeeperError {
    #[error("Note not found in {collection}: {id}")]
    NoteNotFound {
        id: String,
        collection: &'static str,
    },

    #[error("Unknown {kind}: {tag}")]
    UnknownTag { kind: &'static str, tag: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl NotekeeperError {
    pub fn not_found(id: impl Into<String>, collection: &'static str) -> Self {
        NotekeeperError::NoteNotFound {
            id: id.into(),
            collection,
        }
    }
}

pub type Result<T> = std::result::Result<T, NotekeeperError>;
