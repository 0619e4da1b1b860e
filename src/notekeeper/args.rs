use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "notekeeper", version = get_version())]
#[command(about = "Notes with favourites, trash and a persistent draft", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the state snapshot and config
    #[arg(long, global = true, env = "NOTEKEEPER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a new, empty note
    #[command(alias = "n")]
    New,

    /// Open an existing note (active or trashed) for editing
    #[command(alias = "o")]
    Open { id: String },

    /// Set the title of the note being edited
    Title { value: String },

    /// Set the text of the note being edited
    Text { value: String },

    /// Set the theme of the note being edited
    Theme { value: String },

    /// Set the font of the note being edited
    Font { value: String },

    /// Set the preset of the note being edited
    Preset { value: String },

    /// Toggle the favourite flag of the note being edited
    #[command(alias = "f")]
    Fav,

    /// Close the editor, saving or discarding the note
    #[command(alias = "x")]
    Exit {
        /// Page the note was opened from (notes opened from "trash" are not
        /// saved). Defaults to "trash" for trashed notes, "home" otherwise.
        #[arg(long)]
        page: Option<String>,
    },

    /// Move the note being edited to the trash
    #[command(alias = "rm")]
    Trash,

    /// Restore the note being edited from the trash
    Restore,

    /// Permanently delete trashed notes
    EmptyTrash {
        /// "one" deletes only the open note, "all" empties the trash
        #[arg(default_value = "all")]
        scope: String,
    },

    /// List notes
    #[command(alias = "ls")]
    List {
        /// Show only favourite notes
        #[arg(long, conflicts_with = "trashed")]
        favourites: bool,

        /// Show trashed notes
        #[arg(long)]
        trashed: bool,
    },

    /// Show the note being edited
    Show,

    /// Get or set configuration
    Config {
        /// Configuration key (slot, pretty)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
