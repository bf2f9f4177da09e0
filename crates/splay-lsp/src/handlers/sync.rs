//! Document synchronization handlers.

use tower_lsp::lsp_types::*;
use tracing::{info, warn};

use crate::state::ServerState;

use super::lsp_utils::position_to_offset;

pub fn did_open(state: &ServerState, params: DidOpenTextDocumentParams) {
    let uri = params.text_document.uri;
    info!("Document opened: {}", uri);
    state.open_document(uri, params.text_document.version, params.text_document.text);
}

pub fn did_change(state: &ServerState, params: DidChangeTextDocumentParams) {
    let uri = params.text_document.uri;
    let version = params.text_document.version;

    info!("Document changed: {}", uri);

    if params.content_changes.is_empty() {
        return;
    }

    let Some(doc) = state.get_document(&uri) else {
        warn!("Received change for unknown document: {}", uri);
        return;
    };

    let Some(updated) = apply_content_changes(doc.text(), &params.content_changes) else {
        warn!("Failed to apply incremental changes for {}", uri);
        return;
    };

    state.update_document(&uri, version, updated);
}

pub fn did_close(state: &ServerState, params: DidCloseTextDocumentParams) {
    let uri = params.text_document.uri;
    info!("Document closed: {}", uri);
    state.close_document(&uri);
}

/// Applies `changes` in order. A change without a range replaces the whole
/// text.
fn apply_content_changes(
    content: &str,
    changes: &[TextDocumentContentChangeEvent],
) -> Option<String> {
    let mut updated = content.to_string();
    for change in changes {
        if let Some(range) = change.range {
            let start = usize::from(position_to_offset(&updated, range.start)?);
            let end = usize::from(position_to_offset(&updated, range.end)?);
            if start > end || end > updated.len() {
                return None;
            }
            updated.replace_range(start..end, &change.text);
        } else {
            updated = change.text.clone();
        }
    }
    Some(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_lsp::lsp_types::{Position, Range};

    fn change(range: Option<Range>, text: &str) -> TextDocumentContentChangeEvent {
        TextDocumentContentChangeEvent {
            range,
            range_length: None,
            text: text.to_string(),
        }
    }

    #[test]
    fn apply_content_changes_inserts_text() {
        let original = "class C\n{\n}\n";
        let insert = change(
            Some(Range::new(Position::new(2, 0), Position::new(2, 0))),
            "    void M(int a, int b) { }\n",
        );
        let updated = apply_content_changes(original, &[insert]).expect("apply change");
        assert_eq!(updated, "class C\n{\n    void M(int a, int b) { }\n}\n");
    }

    #[test]
    fn apply_content_changes_replaces_range() {
        let original = "Run(a, b);\n";
        let replace = change(
            Some(Range::new(Position::new(0, 7), Position::new(0, 8))),
            "c",
        );
        let updated = apply_content_changes(original, &[replace]).expect("apply change");
        assert_eq!(updated, "Run(a, c);\n");
    }

    #[test]
    fn apply_content_changes_in_sequence_after_wide_characters() {
        let original = "Log(\"é\", x);";
        let changes = [
            change(
                Some(Range::new(Position::new(0, 9), Position::new(0, 10))),
                "y",
            ),
            change(
                Some(Range::new(Position::new(0, 0), Position::new(0, 3))),
                "Trace",
            ),
        ];
        let updated = apply_content_changes(original, &changes).expect("apply changes");
        assert_eq!(updated, "Trace(\"é\", y);");
    }

    #[test]
    fn apply_content_changes_full_sync() {
        let replace_all = change(None, "Stop();\n");
        let updated = apply_content_changes("Run(a, b);\n", &[replace_all]).expect("apply change");
        assert_eq!(updated, "Stop();\n");
    }

    #[test]
    fn did_change_updates_stored_text() {
        let state = ServerState::new();
        let uri = Url::parse("file:///workspace/Program.cs").expect("uri");
        did_open(
            &state,
            DidOpenTextDocumentParams {
                text_document: TextDocumentItem::new(
                    uri.clone(),
                    "csharp".to_string(),
                    1,
                    "Run(a, b);".to_string(),
                ),
            },
        );
        did_change(
            &state,
            DidChangeTextDocumentParams {
                text_document: VersionedTextDocumentIdentifier::new(uri.clone(), 2),
                content_changes: vec![change(
                    Some(Range::new(Position::new(0, 4), Position::new(0, 4))),
                    "first, ",
                )],
            },
        );
        let document = state.get_document(&uri).expect("document");
        assert_eq!(document.version, 2);
        assert_eq!(document.text(), "Run(first, a, b);");

        did_close(
            &state,
            DidCloseTextDocumentParams {
                text_document: TextDocumentIdentifier::new(uri.clone()),
            },
        );
        assert!(state.get_document(&uri).is_none());
    }
}
