//! Continuation indentation.

use splay_syntax::{SyntaxNode, SyntaxToken};

use super::{DelimitedList, ListKind};

/// Returns the 0-based column of the first item's first significant token.
///
/// Columns count Unicode scalar values from the last line break before the
/// token, so a tab counts as one column. The list must still be attached to
/// the tree it was parsed from: the column reflects the original position of
/// the item, before any of its trivia is discarded. An empty list yields 0.
#[must_use]
pub fn derive_indent<K: ListKind>(list: &DelimitedList<K>) -> usize {
    list.items()
        .next()
        .and_then(|item| first_significant_token(&item).or_else(|| item.first_token()))
        .map_or(0, |token| column_of(&token))
}

fn first_significant_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.descendants_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
        .find(|token| !token.kind().is_trivia())
}

fn column_of(token: &SyntaxToken) -> usize {
    let mut column = 0;
    let mut current = token.prev_token();
    while let Some(prev) = current {
        let text = prev.text();
        if let Some(line_break) = text.rfind(['\n', '\r']) {
            return column + text[line_break + 1..].chars().count();
        }
        column += text.chars().count();
        current = prev.prev_token();
    }
    column
}
