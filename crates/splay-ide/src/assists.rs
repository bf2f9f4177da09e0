//! List layout actions.
//!
//! This is the action host contract around the synchronous list algorithms:
//! [`list_layout_actions`] offers actions for a cursor position and
//! [`apply_list_layout_action`] performs one. Both await the host only at the
//! edges and check the request ticket after every await, so a cancelled
//! request never produces a document.
//!
//! Syntax nodes are not `Send`; they are created and dropped between awaits
//! and only trees, ranges and documents cross them.

use splay_syntax::SyntaxTree;
use text_size::{TextRange, TextSize};

use crate::cancel::{Cancelled, RequestTicket};
use crate::config::LayoutConfig;
use crate::document::{DocumentHost, Formatter};
use crate::list_layout::{
    locate, to_collapsed, to_expanded, Arguments, DelimitedList, Layout, ListKind, ListKindId,
    Parameters,
};

/// A layout toggle offered for one list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListLayoutAction {
    /// Which kind of list the action rewrites.
    pub kind: ListKindId,
    /// The list's layout when the action was offered.
    pub layout: Layout,
    /// Range of the list node when the action was offered.
    pub list_range: TextRange,
}

impl ListLayoutAction {
    /// The user-facing title, e.g. "Break arguments apart".
    #[must_use]
    pub fn title(&self) -> String {
        match self.layout {
            Layout::Collapsed => format!("Break {} apart", self.kind.noun()),
            Layout::Expanded => format!("Line-up {}", self.kind.noun()),
        }
    }
}

/// Returns the actions available at `range` of `document`.
///
/// At most one action is returned per list kind, so a cursor inside a call
/// that is itself inside a parameter default value may see two.
pub async fn list_layout_actions<H: DocumentHost>(
    host: &H,
    document: &H::Document,
    range: TextRange,
    ticket: &RequestTicket,
) -> Result<Vec<ListLayoutAction>, Cancelled> {
    let tree = host.syntax_tree(document).await;
    ticket.check()?;

    let actions: Vec<_> = [
        offer::<Arguments>(&tree, range),
        offer::<Parameters>(&tree, range),
    ]
    .into_iter()
    .flatten()
    .collect();
    tracing::debug!(?range, actions = actions.len(), "list layout actions");
    Ok(actions)
}

fn offer<K: ListKind>(tree: &SyntaxTree, range: TextRange) -> Option<ListLayoutAction> {
    let list = locate::<K>(tree, range)?;
    Some(ListLayoutAction {
        kind: K::ID,
        layout: list.layout(),
        list_range: list.text_range(),
    })
}

/// Performs `action` on `document`.
///
/// Returns `Ok(None)` when the list the action was offered for is gone or no
/// longer has the recorded layout. Collapsing is followed by a `formatter`
/// pass over the rewritten list; expanding is not.
pub async fn apply_list_layout_action<H, F>(
    host: &H,
    formatter: &F,
    document: &H::Document,
    action: &ListLayoutAction,
    config: &LayoutConfig,
    ticket: &RequestTicket,
) -> Result<Option<H::Document>, Cancelled>
where
    H: DocumentHost,
    F: Formatter<H::Document>,
{
    let tree = host.syntax_tree(document).await;
    ticket.check()?;

    let line_break = config.line_ending.resolve(&tree.text());
    let Some(rewrite) = rewrite(&tree, action, line_break) else {
        tracing::debug!(kind = ?action.kind, range = ?action.list_range, "list layout action is stale");
        return Ok(None);
    };
    let updated = host.with_syntax_tree(document, rewrite.tree);

    match action.layout {
        Layout::Collapsed => Ok(Some(updated)),
        Layout::Expanded => {
            let formatted = formatter.format(updated, rewrite.span).await;
            ticket.check()?;
            Ok(Some(formatted))
        }
    }
}

struct Rewrite {
    tree: SyntaxTree,
    /// Range of the new list in the new tree.
    span: TextRange,
}

fn rewrite(tree: &SyntaxTree, action: &ListLayoutAction, line_break: &str) -> Option<Rewrite> {
    match action.kind {
        ListKindId::Arguments => rewrite_list::<Arguments>(tree, action, line_break),
        ListKindId::Parameters => rewrite_list::<Parameters>(tree, action, line_break),
    }
}

fn rewrite_list<K: ListKind>(
    tree: &SyntaxTree,
    action: &ListLayoutAction,
    line_break: &str,
) -> Option<Rewrite> {
    let list = DelimitedList::<K>::cast(tree.node_at_range(K::LIST, action.list_range)?)?;
    if list.item_count() < 2 || list.layout() != action.layout {
        return None;
    }

    let replacement = match action.layout {
        Layout::Collapsed => to_expanded(&list, line_break),
        Layout::Expanded => to_collapsed(&list),
    };
    let start: TextSize = list.text_range().start();
    let span = TextRange::at(start, replacement.text_range().len());
    Some(Rewrite {
        tree: tree.replace_subtree(list.syntax(), replacement.green()),
        span,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::RequestGeneration;
    use crate::document::{LocalHost, SourceDocument};
    use crate::format::SpacingFormatter;

    fn cursor(source: &str, marker: &str) -> TextRange {
        let offset = source.find(marker).expect("marker in source");
        TextRange::empty(TextSize::try_from(offset).expect("offset fits"))
    }

    #[tokio::test]
    async fn offers_break_apart_for_collapsed_list() {
        let source = "Run(a, b);";
        let document = SourceDocument::new(source);
        let ticket = RequestTicket::detached();
        let actions = list_layout_actions(&LocalHost, &document, cursor(source, "a,"), &ticket)
            .await
            .expect("not cancelled");
        let titles: Vec<_> = actions.iter().map(ListLayoutAction::title).collect();
        assert_eq!(titles, ["Break arguments apart"]);
    }

    #[tokio::test]
    async fn offers_line_up_for_expanded_parameters() {
        let source = "void M(int a,\n       int b) { }";
        let document = SourceDocument::new(source);
        let ticket = RequestTicket::detached();
        let actions = list_layout_actions(&LocalHost, &document, cursor(source, "M("), &ticket)
            .await
            .expect("not cancelled");
        let titles: Vec<_> = actions.iter().map(ListLayoutAction::title).collect();
        assert_eq!(titles, ["Line-up parameters"]);
    }

    #[tokio::test]
    async fn offers_both_kinds_for_call_inside_default_value() {
        let source = "void M(int a = Make(x, y), int b) { }";
        let document = SourceDocument::new(source);
        let ticket = RequestTicket::detached();
        let actions = list_layout_actions(&LocalHost, &document, cursor(source, "x,"), &ticket)
            .await
            .expect("not cancelled");
        let titles: Vec<_> = actions.iter().map(ListLayoutAction::title).collect();
        assert_eq!(titles, ["Break arguments apart", "Break parameters apart"]);
    }

    #[tokio::test]
    async fn no_actions_without_list() {
        let source = "var total = a + b;";
        let document = SourceDocument::new(source);
        let ticket = RequestTicket::detached();
        let actions = list_layout_actions(&LocalHost, &document, cursor(source, "total"), &ticket)
            .await
            .expect("not cancelled");
        assert!(actions.is_empty());
    }

    #[tokio::test]
    async fn applying_break_apart_expands_without_formatting() {
        let source = "          Run(a, b, c);";
        let document = SourceDocument::new(source);
        let ticket = RequestTicket::detached();
        let actions = list_layout_actions(&LocalHost, &document, cursor(source, "b,"), &ticket)
            .await
            .expect("not cancelled");
        let updated = apply_list_layout_action(
            &LocalHost,
            &SpacingFormatter,
            &document,
            &actions[0],
            &LayoutConfig::default(),
            &ticket,
        )
        .await
        .expect("not cancelled")
        .expect("action applies");
        assert_eq!(
            updated.text(),
            "          Run(a,\n              b,\n              c);"
        );
    }

    #[tokio::test]
    async fn applying_line_up_collapses_and_formats() {
        let source = "Run(a,\n      b,\n         c);";
        let document = SourceDocument::new(source);
        let ticket = RequestTicket::detached();
        let actions = list_layout_actions(&LocalHost, &document, cursor(source, "c)"), &ticket)
            .await
            .expect("not cancelled");
        assert_eq!(actions[0].title(), "Line-up arguments");
        let updated = apply_list_layout_action(
            &LocalHost,
            &SpacingFormatter,
            &document,
            &actions[0],
            &LayoutConfig::default(),
            &ticket,
        )
        .await
        .expect("not cancelled")
        .expect("action applies");
        assert_eq!(updated.text(), "Run(a, b, c);");
    }

    #[tokio::test]
    async fn stale_action_is_not_applied() {
        let source = "Run(a, b);";
        let document = SourceDocument::new(source);
        let ticket = RequestTicket::detached();
        let actions = list_layout_actions(&LocalHost, &document, cursor(source, "a,"), &ticket)
            .await
            .expect("not cancelled");
        let edited = SourceDocument::new("Run(a,\n    b);");
        let result = apply_list_layout_action(
            &LocalHost,
            &SpacingFormatter,
            &edited,
            &actions[0],
            &LayoutConfig::default(),
            &ticket,
        )
        .await
        .expect("not cancelled");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn cancelled_request_produces_nothing() {
        let source = "Run(a, b);";
        let document = SourceDocument::new(source);
        let generation = RequestGeneration::new();
        let ticket = generation.begin();
        let actions = list_layout_actions(&LocalHost, &document, cursor(source, "a,"), &ticket)
            .await
            .expect("not cancelled");

        generation.cancel_all();
        let result = apply_list_layout_action(
            &LocalHost,
            &SpacingFormatter,
            &document,
            &actions[0],
            &LayoutConfig::default(),
            &ticket,
        )
        .await;
        assert_eq!(result, Err(Cancelled));
        assert_eq!(document.text(), source);
    }

    #[tokio::test]
    async fn crlf_documents_expand_with_crlf() {
        let source = "// header\r\nRun(a, b);";
        let document = SourceDocument::new(source);
        let ticket = RequestTicket::detached();
        let actions = list_layout_actions(&LocalHost, &document, cursor(source, "a,"), &ticket)
            .await
            .expect("not cancelled");
        let updated = apply_list_layout_action(
            &LocalHost,
            &SpacingFormatter,
            &document,
            &actions[0],
            &LayoutConfig::default(),
            &ticket,
        )
        .await
        .expect("not cancelled")
        .expect("action applies");
        assert_eq!(updated.text(), "// header\r\nRun(a,\r\n    b);");
    }
}
