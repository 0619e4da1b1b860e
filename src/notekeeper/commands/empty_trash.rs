use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TrashScope;
use crate::store::NoteStore;

/// Permanently deletes trashed notes: just the draft's note for
/// [`TrashScope::One`], everything for [`TrashScope::All`].
pub fn run(store: &mut NoteStore, scope: TrashScope) -> Result<CmdResult> {
    let before = store.state().trashed_notes.len();
    store.purge_trash(scope)?;
    let purged = before - store.state().trashed_notes.len();
    store.reset_draft()?;

    let mut result = CmdResult::default();
    if purged == 0 {
        result.add_message(CmdMessage::info("No notes to purge."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Purged {} note{}.",
            purged,
            if purged == 1 { "" } else { "s" }
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::open;
    use crate::store::note_store::fixtures::StoreFixture;

    fn three_in_trash() -> NoteStore {
        StoreFixture::new()
            .with_note("Active")
            .with_trashed_note("A")
            .with_trashed_note("B")
            .with_trashed_note("C")
            .build()
    }

    #[test]
    fn empties_whole_trash() {
        let mut store = three_in_trash();
        let result = run(&mut store, TrashScope::All).unwrap();

        assert!(store.state().trashed_notes.is_empty());
        assert_eq!(store.state().user_notes.len(), 1);
        assert_eq!(store.draft().note_id, "");
        assert_eq!(result.messages[0].content, "Purged 3 notes.");
    }

    #[test]
    fn purges_only_the_open_note() {
        let mut store = three_in_trash();
        open::run(&mut store, "note-id-3").unwrap();
        run(&mut store, TrashScope::One).unwrap();

        let ids: Vec<_> = store
            .state()
            .trashed_notes
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["note-id-2", "note-id-4"]);
        assert_eq!(store.draft().note_id, "");
    }

    #[test]
    fn purging_one_without_open_note_is_harmless() {
        let mut store = three_in_trash();
        let result = run(&mut store, TrashScope::One).unwrap();
        assert_eq!(store.state().trashed_notes.len(), 3);
        assert_eq!(result.messages[0].content, "No notes to purge.");
    }
}
