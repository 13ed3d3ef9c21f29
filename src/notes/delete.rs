use crate::api::{ApiClient, ApiResult};
use crate::models::Note;
use crate::notes::store::NoteStore;
use std::collections::{HashMap, HashSet};

/// Every cached descendant of `root`, via a DFS over a parent → children
/// index built once per call. Bounded by what has been fetched: uncached,
/// unexpanded descendants are invisible here and are the server's job.
pub(crate) fn descendant_ids(notes: &[Note], root: i64) -> Vec<i64> {
    let mut index: HashMap<i64, Vec<i64>> = HashMap::new();
    for n in notes {
        if let Some(p) = n.parent_id {
            index.entry(p).or_default().push(n.id);
        }
    }

    let mut out: Vec<i64> = Vec::new();
    let mut seen: HashSet<i64> = HashSet::new();
    let mut stack = vec![root];
    while let Some(p) = stack.pop() {
        let Some(children) = index.get(&p) else {
            continue;
        };
        for &c in children {
            // `seen` keeps a malformed parent link from looping the walk.
            if c != root && seen.insert(c) {
                out.push(c);
                stack.push(c);
            }
        }
    }
    out
}

/// Remove `id` and its cached descendants optimistically, then ask the
/// gateway for the real cascade (which also covers descendants the client
/// never loaded).
///
/// A failed remote call is returned to the caller; the local state stays
/// optimistically deleted.
pub(crate) async fn delete_cascading(store: NoteStore, api: ApiClient, id: i64) -> ApiResult<()> {
    let mut ids = descendant_ids(&store.get_all_untracked(), id);
    ids.push(id);
    store.remove(&ids);

    api.delete_note(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::store::remove_notes;

    fn note(id: i64, parent_id: Option<i64>) -> Note {
        Note {
            id,
            owner_id: "u-1".to_string(),
            title: None,
            content: None,
            parent_id,
            created_at: format!("2025-08-14T12:00:{:02}Z", id),
        }
    }

    #[test]
    fn test_chain_is_collected_transitively() {
        // A -> B -> C
        let all = vec![note(1, None), note(2, Some(1)), note(3, Some(2))];
        let mut ids = descendant_ids(&all, 1);
        ids.sort_unstable();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_chain_removal_leaves_no_survivors() {
        let mut all = vec![note(1, None), note(2, Some(1)), note(3, Some(2))];
        let mut ids = descendant_ids(&all, 1);
        ids.push(1);
        remove_notes(&mut all, &ids);
        assert!(all.is_empty());
    }

    #[test]
    fn test_siblings_outside_the_subtree_survive() {
        let mut all = vec![
            note(1, None),
            note(2, Some(1)),
            note(3, Some(1)),
            note(4, Some(3)),
            note(5, None),
        ];
        let mut ids = descendant_ids(&all, 3);
        ids.push(3);
        remove_notes(&mut all, &ids);
        let left: Vec<i64> = all.iter().map(|n| n.id).collect();
        assert_eq!(left, vec![1, 2, 5]);
    }

    #[test]
    fn test_leaf_and_unknown_targets_have_no_descendants() {
        let all = vec![note(1, None), note(2, Some(1))];
        assert!(descendant_ids(&all, 2).is_empty());
        assert!(descendant_ids(&all, 42).is_empty());
    }

    #[test]
    fn test_malformed_cycle_terminates() {
        // Forests are a convention, not a checked invariant; a bad parent
        // link must not hang the walk.
        let all = vec![note(1, Some(2)), note(2, Some(1))];
        let ids = descendant_ids(&all, 1);
        assert_eq!(ids, vec![2]);
    }
}
