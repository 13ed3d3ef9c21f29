use crate::models::{Note, NoteChange};
use leptos::prelude::*;

/// Authoritative client-side cache of every note currently known to the UI.
///
/// All write paths converge here: subtree fetches, search results, local
/// optimistic writes and feed events all go through `set`/`remove`, so the
/// UI only ever re-reads one collection. Owned by `AppState` and injected
/// through context; cleared on sign-out.
#[derive(Clone, Copy)]
pub(crate) struct NoteStore {
    notes: RwSignal<Vec<Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            notes: RwSignal::new(vec![]),
        }
    }

    /// All cached notes. Order is stable across reads until the next write.
    pub fn get_all(&self) -> Vec<Note> {
        self.notes.get()
    }

    pub fn get_all_untracked(&self) -> Vec<Note> {
        self.notes.get_untracked()
    }

    pub fn get_one(&self, id: i64) -> Option<Note> {
        self.notes.with(|all| all.iter().find(|n| n.id == id).cloned())
    }

    pub fn get_one_untracked(&self, id: i64) -> Option<Note> {
        self.notes
            .with_untracked(|all| all.iter().find(|n| n.id == id).cloned())
    }

    /// Upsert by id: an existing id is replaced wholesale (no field-level
    /// merge), a new id is appended. Idempotent.
    pub fn set(&self, incoming: Vec<Note>) {
        if incoming.is_empty() {
            return;
        }
        self.notes.update(|all| merge_notes(all, incoming));
    }

    /// Absent ids are a no-op.
    pub fn remove(&self, ids: &[i64]) {
        if ids.is_empty() {
            return;
        }
        self.notes.update(|all| remove_notes(all, ids));
    }

    pub fn clear(&self) {
        self.notes.set(vec![]);
    }

    /// Feed consumer: created/updated re-merge the full record, deleted
    /// drops the id. Racing against an in-flight local write is resolved
    /// as "last call wins" (no sequence stamping).
    pub fn apply(&self, change: NoteChange) {
        self.notes.update(|all| apply_change(all, change));
    }
}

pub(crate) fn merge_notes(existing: &mut Vec<Note>, incoming: Vec<Note>) {
    for note in incoming {
        if let Some(slot) = existing.iter_mut().find(|n| n.id == note.id) {
            *slot = note;
        } else {
            existing.push(note);
        }
    }
}

pub(crate) fn remove_notes(existing: &mut Vec<Note>, ids: &[i64]) {
    existing.retain(|n| !ids.contains(&n.id));
}

pub(crate) fn apply_change(existing: &mut Vec<Note>, change: NoteChange) {
    match change {
        NoteChange::Created(n) | NoteChange::Updated(n) => merge_notes(existing, vec![n]),
        NoteChange::Deleted(r) => remove_notes(existing, &[r.id]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, parent_id: Option<i64>, title: &str) -> Note {
        Note {
            id,
            owner_id: "u-1".to_string(),
            title: Some(title.to_string()),
            content: None,
            parent_id,
            created_at: format!("2025-08-14T12:00:{:02}Z", id),
        }
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut all = vec![];
        merge_notes(&mut all, vec![note(1, None, "Root")]);
        let once = all.clone();
        merge_notes(&mut all, vec![note(1, None, "Root")]);
        assert_eq!(all, once);
    }

    #[test]
    fn test_merge_keeps_ids_unique() {
        let mut all = vec![note(1, None, "a"), note(2, None, "b")];
        merge_notes(&mut all, vec![note(2, None, "b2"), note(3, None, "c")]);
        let mut ids: Vec<i64> = all.iter().map(|n| n.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_merge_replaces_whole_record() {
        let mut all = vec![note(1, None, "old")];
        let mut replacement = note(1, Some(9), "new");
        replacement.content = Some("doc".to_string());
        merge_notes(&mut all, vec![replacement.clone()]);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], replacement);
    }

    #[test]
    fn test_merge_keeps_existing_position_and_appends_new() {
        let mut all = vec![note(1, None, "a"), note(2, None, "b")];
        merge_notes(&mut all, vec![note(1, None, "a2"), note(3, None, "c")]);
        let ids: Vec<i64> = all.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(all[0].title.as_deref(), Some("a2"));
    }

    #[test]
    fn test_remove_ignores_absent_ids() {
        let mut all = vec![note(1, None, "a"), note(2, None, "b")];
        remove_notes(&mut all, &[2, 99]);
        let ids: Vec<i64> = all.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_apply_change_updated_then_read_back() {
        let mut all = vec![note(1, None, "Root")];
        let ev: NoteChange = serde_json::from_str(
            r#"{"kind": "updated",
                "record": {"id": 1, "owner_id": "u-1", "title": "Renamed",
                           "content": null, "parent_id": null,
                           "created_at": "2025-08-14T12:00:01Z"}}"#,
        )
        .expect("event should parse");
        apply_change(&mut all, ev);
        assert_eq!(all[0].title.as_deref(), Some("Renamed"));
    }

    #[test]
    fn test_apply_change_deleted_is_noop_when_absent() {
        let mut all = vec![note(1, None, "Root")];
        let ev: NoteChange =
            serde_json::from_str(r#"{"kind": "deleted", "record": {"id": 7}}"#)
                .expect("event should parse");
        apply_change(&mut all, ev);
        assert_eq!(all.len(), 1);

        let ev: NoteChange =
            serde_json::from_str(r#"{"kind": "deleted", "record": {"id": 1}}"#)
                .expect("event should parse");
        apply_change(&mut all, ev);
        assert!(all.is_empty());
    }
}
