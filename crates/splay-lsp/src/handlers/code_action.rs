//! List layout code actions.
//!
//! Every applicable toggle is computed eagerly: the client receives the
//! finished edit with the action, so nothing is resolved later against a
//! document that may have moved on.

use std::collections::HashMap;

use splay_ide::{
    apply_list_layout_action, list_layout_actions, Cancelled, ListLayoutAction, LocalHost,
    SpacingFormatter, TextEdit as SourceEdit,
};
use tower_lsp::lsp_types::*;
use tracing::debug;

use crate::state::ServerState;

use super::lsp_utils::{range_to_text_range, text_range_to_range};

pub async fn code_action(
    state: &ServerState,
    params: CodeActionParams,
) -> Option<CodeActionResponse> {
    if !wants_rewrites(params.context.only.as_deref()) {
        return None;
    }

    let ticket = state.begin_request();
    let uri = params.text_document.uri;
    let doc = state.get_document(&uri)?;
    let range = range_to_text_range(doc.text(), params.range)?;
    let config = state.layout_config();

    let offered = list_layout_actions(&LocalHost, &doc.source, range, &ticket)
        .await
        .ok()?;

    let mut actions = Vec::new();
    for action in offered {
        let updated = match apply_list_layout_action(
            &LocalHost,
            &SpacingFormatter,
            &doc.source,
            &action,
            &config,
            &ticket,
        )
        .await
        {
            Ok(Some(updated)) => updated,
            Ok(None) => continue,
            Err(Cancelled) => {
                debug!("Code action request for {} cancelled", uri);
                return None;
            }
        };
        let Some(edit) = SourceEdit::between(doc.text(), updated.text()) else {
            continue;
        };
        actions.push(CodeActionOrCommand::CodeAction(layout_code_action(
            &uri,
            doc.text(),
            &action,
            edit,
        )));
    }

    (!actions.is_empty()).then_some(actions)
}

/// An `only` filter matches when one of its kinds is a prefix of ours.
fn wants_rewrites(only: Option<&[CodeActionKind]>) -> bool {
    let Some(only) = only else {
        return true;
    };
    let ours = CodeActionKind::REFACTOR_REWRITE;
    only.iter().any(|kind| {
        let kind = kind.as_str();
        kind.is_empty()
            || ours.as_str() == kind
            || ours
                .as_str()
                .strip_prefix(kind)
                .is_some_and(|rest| rest.starts_with('.'))
    })
}

fn layout_code_action(
    uri: &Url,
    content: &str,
    action: &ListLayoutAction,
    edit: SourceEdit,
) -> CodeAction {
    let edit = TextEdit {
        range: text_range_to_range(content, edit.range),
        new_text: edit.new_text,
    };
    let mut changes: HashMap<Url, Vec<TextEdit>> = HashMap::new();
    changes.insert(uri.clone(), vec![edit]);
    CodeAction {
        title: action.title(),
        kind: Some(CodeActionKind::REFACTOR_REWRITE),
        edit: Some(WorkspaceEdit {
            changes: Some(changes),
            document_changes: None,
            change_annotations: None,
        }),
        ..Default::default()
    }
}
