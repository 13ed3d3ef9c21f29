use serde::{Deserialize, Serialize};

/// Signed-in account as returned by the auth endpoints.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// A single tree node. `id` is server-assigned and is the merge key for
/// the client-side cache; `parent_id == None` marks a root note.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Note {
    pub id: i64,
    pub owner_id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Serialized editor document. Opaque to the cache.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub created_at: String,
}

/// Prior record attached to a `deleted` feed event. The backend sends the
/// full row; only the id is consumed.
#[derive(Deserialize, Clone, Debug)]
pub(crate) struct DeletedRecord {
    pub id: i64,
}

/// One row-level change pushed over the feed channel.
///
/// The wire shape is `{"kind": "...", "record": {...}}`; anything that does
/// not parse into one of these variants is rejected at the boundary.
#[derive(Deserialize, Clone, Debug, strum::Display)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum NoteChange {
    Created(Note),
    Updated(Note),
    Deleted(DeletedRecord),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_deserialize_minimal_row() {
        // title/content/parent_id are nullable columns; absent keys must not fail.
        let json = r#"{"id": 7, "owner_id": "u-1", "created_at": "2025-08-14T12:34:56Z"}"#;
        let n: Note = serde_json::from_str(json).expect("note should parse");
        assert_eq!(n.id, 7);
        assert!(n.title.is_none());
        assert!(n.content.is_none());
        assert!(n.parent_id.is_none());
    }

    #[test]
    fn test_change_event_created_parses() {
        let json = r#"{
            "kind": "created",
            "record": {"id": 1, "owner_id": "u-1", "title": "Root",
                       "content": null, "parent_id": null,
                       "created_at": "2025-08-14T12:34:56Z"}
        }"#;
        let ev: NoteChange = serde_json::from_str(json).expect("event should parse");
        match ev {
            NoteChange::Created(n) => assert_eq!(n.title.as_deref(), Some("Root")),
            other => panic!("expected created, got {other}"),
        }
    }

    #[test]
    fn test_change_event_deleted_needs_only_id() {
        // Deleted rows arrive with whatever columns the backend had; extra
        // fields are ignored and only the id is read.
        let json =
            r#"{"kind": "deleted", "record": {"id": 42, "title": "gone", "owner_id": "u-1"}}"#;
        let ev: NoteChange = serde_json::from_str(json).expect("event should parse");
        match ev {
            NoteChange::Deleted(r) => assert_eq!(r.id, 42),
            other => panic!("expected deleted, got {other}"),
        }
    }

    #[test]
    fn test_change_event_unknown_kind_rejected() {
        let json = r#"{"kind": "truncated", "record": {"id": 1}}"#;
        assert!(serde_json::from_str::<NoteChange>(json).is_err());
    }

    #[test]
    fn test_change_event_kind_label() {
        let json = r#"{"kind": "updated", "record": {"id": 3, "owner_id": "u", "created_at": "t"}}"#;
        let ev: NoteChange = serde_json::from_str(json).expect("event should parse");
        assert_eq!(ev.to_string(), "updated");
    }
}
