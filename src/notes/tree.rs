use crate::api::ApiClient;
use crate::models::Note;
use crate::notes::store::NoteStore;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::{HashMap, HashSet};

/// Per-session expanded/collapsed flags, keyed by note id.
///
/// Holds no note data. Root notes are always visible; everything else is
/// revealed by its parent's flag. The loaded set records which nodes have
/// had their direct children fetched once — after that, the children list
/// is kept fresh by the change feed, so re-toggling never re-fetches.
#[derive(Clone, Copy)]
pub(crate) struct ExpandedNodes {
    flags: RwSignal<HashMap<i64, bool>>,
    loaded: RwSignal<HashSet<i64>>,
}

impl ExpandedNodes {
    pub fn new() -> Self {
        Self {
            flags: RwSignal::new(HashMap::new()),
            loaded: RwSignal::new(HashSet::new()),
        }
    }

    /// Absent key reads as collapsed.
    pub fn is_expanded(&self, id: i64) -> bool {
        self.flags.with(|m| m.get(&id).copied().unwrap_or(false))
    }

    fn toggle_flag(&self, id: i64) -> bool {
        let mut now = false;
        self.flags.update(|m| {
            now = toggle_flag_entry(m, id);
        });
        now
    }

    /// Returns true the first time a node is marked, false afterwards.
    fn mark_loaded(&self, id: i64) -> bool {
        let mut first = false;
        self.loaded.update(|s| {
            first = s.insert(id);
        });
        first
    }

    /// A parent with a brand-new child auto-expands to reveal it. The node
    /// is deliberately not marked loaded: a later collapse/expand still
    /// performs its first children fetch.
    pub fn on_child_created(&self, parent_id: i64) {
        self.flags.update(|m| {
            m.insert(parent_id, true);
        });
    }

    pub fn clear(&self) {
        self.flags.set(HashMap::new());
        self.loaded.set(HashSet::new());
    }
}

pub(crate) fn toggle_flag_entry(flags: &mut HashMap<i64, bool>, id: i64) -> bool {
    let entry = flags.entry(id).or_insert(false);
    *entry = !*entry;
    *entry
}

/// Flip a node's flag; on its first expansion, lazily fetch its direct
/// children and merge them into the store.
///
/// A failed or empty fetch still leaves the node expanded — an empty
/// subtree is a valid terminal state, not an error.
pub(crate) fn toggle_expand(
    store: NoteStore,
    expanded: ExpandedNodes,
    api: ApiClient,
    owner_id: String,
    id: i64,
) {
    let now_expanded = expanded.toggle_flag(id);
    if !now_expanded {
        return;
    }
    if !expanded.mark_loaded(id) {
        return;
    }

    spawn_local(async move {
        match api.find_notes(&owner_id, Some(id)).await {
            Ok(children) => store.set(children),
            Err(e) => warn!("children fetch for note {id} failed: {e}"),
        }
    });
}

/// Pure projection of one tree level: direct children of `parent_id`
/// (None selects the roots), in the gateway's order (`created_at`
/// descending, newest first). Recomputed from the store on every read —
/// feed pushes show up on the next render with no invalidation step.
pub(crate) fn children_of(notes: &[Note], parent_id: Option<i64>) -> Vec<Note> {
    let mut out: Vec<Note> = notes
        .iter()
        .filter(|n| n.parent_id == parent_id)
        .cloned()
        .collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    out
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
    fn test_children_of_reveals_exactly_the_direct_children() {
        let all = vec![note(1, None, "Root"), note(2, Some(1), "Child")];

        let roots = children_of(&all, None);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].id, 1);

        let depth1 = children_of(&all, Some(1));
        assert_eq!(depth1.len(), 1);
        assert_eq!(depth1[0].id, 2);

        assert!(children_of(&all, Some(2)).is_empty());
    }

    #[test]
    fn test_children_of_orders_newest_first() {
        let mut older = note(1, None, "old");
        older.created_at = "2025-08-14T09:00:00Z".to_string();
        let mut newer = note(2, None, "new");
        newer.created_at = "2025-08-14T10:00:00Z".to_string();

        let ids: Vec<i64> = children_of(&[older, newer], None)
            .iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_children_of_matches_parent_even_when_parent_is_uncached() {
        // A note with parent_id = p is a child of p whether or not p itself
        // is in the cache.
        let all = vec![note(5, Some(99), "orphan-side")];
        let kids = children_of(&all, Some(99));
        assert_eq!(kids.len(), 1);
        assert_eq!(kids[0].id, 5);
    }

    #[test]
    fn test_toggle_flag_entry_defaults_to_collapsed_and_flips() {
        let mut flags = HashMap::new();
        assert!(toggle_flag_entry(&mut flags, 7));
        assert!(!toggle_flag_entry(&mut flags, 7));
        assert!(toggle_flag_entry(&mut flags, 7));
    }

    #[test]
    fn test_flag_changes_do_not_touch_note_data() {
        let all = vec![note(1, None, "Root"), note(2, Some(1), "Child")];
        let before = all.clone();

        let mut flags = HashMap::new();
        toggle_flag_entry(&mut flags, 1);
        toggle_flag_entry(&mut flags, 2);
        toggle_flag_entry(&mut flags, 1);

        assert_eq!(all, before);
    }
}
