use notekeeper::api::NotesApi;
use notekeeper::config::NotekeeperConfig;
use notekeeper::model::{DraftField, NoteState, Page, TrashScope};
use notekeeper::store::backend::SlotBackend;
use notekeeper::store::fs_backend::FsBackend;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

fn open(dir: &TempDir) -> NotesApi<FsBackend> {
    NotesApi::open(
        FsBackend::new(dir.path().to_path_buf()),
        &NotekeeperConfig::default(),
    )
    .unwrap()
}

fn note_json(id: &str, title: &str, favourite: bool) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "text": format!("{} text", title),
        "theme": "dark",
        "font": "glacial",
        "preset": "important",
        "createDate": "2024-03-01T10:00:00Z",
        "updateDate": "2024-03-02T10:00:00Z",
        "favourite": favourite
    })
}

#[test]
fn test_slot_basic_io() {
    let (_dir, backend) = setup();

    assert_eq!(backend.read_slot("store").unwrap(), None);

    backend.write_slot("store", "{}").unwrap();
    assert_eq!(backend.read_slot("store").unwrap(), Some("{}".to_string()));

    backend.clear_slot("store").unwrap();
    assert_eq!(backend.read_slot("store").unwrap(), None);

    // Clearing twice is fine
    backend.clear_slot("store").unwrap();
}

#[test]
fn test_slot_write_creates_dir_and_leaves_no_tmp_files() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("data");
    let backend = FsBackend::new(root.clone());

    backend.write_slot("store", "first").unwrap();
    backend.write_slot("store", "second").unwrap();

    let expected_path = root.join("store.json");
    assert_eq!(backend.slot_path("store"), expected_path);
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "second");

    for entry in fs::read_dir(&root).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_state_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    {
        let mut api = open(&dir);
        for (title, fav) in [("Fav", true), ("Plain", false), ("Doomed", false)] {
            api.compose().unwrap();
            api.edit(DraftField::Title, title).unwrap();
            if fav {
                api.toggle_favourite().unwrap();
            }
            api.exit_note(&Page::Home).unwrap();
        }
        let doomed = api.user_notes()[0].id.clone();
        api.open_note(&doomed).unwrap();
        api.move_to_trash().unwrap();
    }

    let raw = fs::read_to_string(dir.path().join("store.json")).unwrap();
    let on_disk: NoteState = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk.user_notes.len(), 2);
    assert_eq!(on_disk.favourite_notes.len(), 1);
    assert_eq!(on_disk.trashed_notes.len(), 1);

    let api = open(&dir);
    assert_eq!(api.state(), &on_disk);
}

#[test]
fn test_hydrates_from_existing_snapshot_and_trashes_by_id() {
    let (dir, backend) = setup();
    let snapshot = json!({
        "userNotes": [note_json("note-id-1", "First", true), note_json("note-id-2", "Second", false)],
        "favouriteNotes": [note_json("note-id-1", "First", true)],
        "trashedNotes": [],
    });
    backend.write_slot("store", &snapshot.to_string()).unwrap();

    let mut api = open(&dir);
    assert_eq!(api.user_notes().len(), 2);
    assert_eq!(api.draft().note_font, "glacial");

    api.open_note("note-id-1").unwrap();
    api.move_to_trash().unwrap();

    assert!(api.user_notes().iter().all(|n| n.id != "note-id-1"));
    assert_eq!(api.trashed_notes()[0].id, "note-id-1");
    assert_eq!(
        api.trashed_notes()[0].create_date.to_rfc3339(),
        "2024-03-01T10:00:00+00:00"
    );
    assert!(api.favourite_notes().is_empty());
    assert_eq!(api.draft().note_id, "");
    assert!(!api.draft().is_note_dialog_visible);
}

#[test]
fn test_empty_trash_all_persists() {
    let (dir, backend) = setup();
    let snapshot = json!({
        "trashedNotes": [
            note_json("note-id-1", "A", false),
            note_json("note-id-2", "B", false),
            note_json("note-id-3", "C", false)
        ],
    });
    backend.write_slot("store", &snapshot.to_string()).unwrap();

    {
        let mut api = open(&dir);
        assert_eq!(api.trashed_notes().len(), 3);
        api.empty_trash(TrashScope::All).unwrap();
    }

    let api = open(&dir);
    assert!(api.trashed_notes().is_empty());
}

#[test]
fn test_corrupt_snapshot_falls_back_to_defaults() {
    let (dir, backend) = setup();
    backend.write_slot("store", "{\"userNotes\": [").unwrap();

    let mut api = open(&dir);
    assert_eq!(api.state(), &NoteState::default());

    // The next transition overwrites the corrupt slot
    api.set_dialog_visible(true).unwrap();
    let raw = backend.read_slot("store").unwrap().unwrap();
    assert!(serde_json::from_str::<NoteState>(&raw).is_ok());
}

#[test]
fn test_pretty_snapshots() {
    let dir = TempDir::new().unwrap();
    let config = NotekeeperConfig {
        slot: "notes".to_string(),
        pretty: true,
    };
    let mut api = NotesApi::open(FsBackend::new(dir.path().to_path_buf()), &config).unwrap();
    api.compose().unwrap();

    let raw = fs::read_to_string(dir.path().join("notes.json")).unwrap();
    assert!(raw.contains("\n  \"userNotes\""));
}
