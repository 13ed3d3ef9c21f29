use crate::models::Note;

/// Sidebar/search label for a note. Untitled rows keep a stable placeholder.
pub(crate) fn display_title(note: &Note) -> String {
    match note.title.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => "Untitled".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_with_title(title: Option<&str>) -> Note {
        Note {
            id: 1,
            owner_id: "u-1".to_string(),
            title: title.map(|t| t.to_string()),
            content: None,
            parent_id: None,
            created_at: "2025-08-14T12:34:56Z".to_string(),
        }
    }

    #[test]
    fn test_display_title_prefers_trimmed_title() {
        assert_eq!(display_title(&note_with_title(Some("  Plans  "))), "Plans");
    }

    #[test]
    fn test_display_title_falls_back_when_missing_or_blank() {
        assert_eq!(display_title(&note_with_title(None)), "Untitled");
        assert_eq!(display_title(&note_with_title(Some("   "))), "Untitled");
    }
}
