//! Finding the list around a cursor.

use splay_syntax::{SyntaxKind, SyntaxNode, SyntaxTree};
use text_size::TextRange;

use super::{DelimitedList, ListKind};

/// Returns the innermost list of kind `K` enclosing `range`.
///
/// The smallest node covering `range` is found first. When that node sits
/// directly under a head of `K` (a call name, a method name) the head's list
/// is returned even though the cursor is outside of it. Otherwise the
/// ancestors are searched for a list of kind `K`.
///
/// Lists with fewer than two items have no layout to toggle and yield `None`,
/// just like a cursor with no surrounding list.
#[must_use]
pub fn locate<K: ListKind>(tree: &SyntaxTree, range: TextRange) -> Option<DelimitedList<K>> {
    let root = tree.root();
    let node = covering_node(&root, range)?;

    let head_child = name_wrapper_root(node.clone());
    let list = match head_child.parent() {
        Some(head) if K::is_head(head.kind()) => {
            head.children().find(|child| child.kind() == K::LIST)
        }
        _ => node.ancestors().find(|ancestor| ancestor.kind() == K::LIST),
    }?;

    let list = DelimitedList::<K>::cast(list)?;
    let items = list.item_count();
    if items < 2 {
        tracing::debug!(kind = ?K::ID, items, "list too short to toggle");
        return None;
    }
    tracing::debug!(kind = ?K::ID, range = ?list.text_range(), items, "located list");
    Some(list)
}

fn covering_node(root: &SyntaxNode, range: TextRange) -> Option<SyntaxNode> {
    if !root.text_range().contains_range(range) {
        return None;
    }
    if range.is_empty() {
        let token = root
            .token_at_offset(range.start())
            .right_biased()
            .or_else(|| root.token_at_offset(range.start()).left_biased())?;
        return token.parent();
    }
    match root.covering_element(range) {
        rowan::NodeOrToken::Node(node) => Some(node),
        rowan::NodeOrToken::Token(token) => token.parent(),
    }
}

/// Type names are wrapped as `TypeRef > QualifiedName > Name`; the outermost
/// wrapper is what hangs off a declaration or `new` expression.
fn name_wrapper_root(node: SyntaxNode) -> SyntaxNode {
    let mut current = node;
    while current.kind() == SyntaxKind::Name || current.kind() == SyntaxKind::QualifiedName {
        match current.parent() {
            Some(parent)
                if matches!(
                    parent.kind(),
                    SyntaxKind::TypeRef | SyntaxKind::QualifiedName
                ) =>
            {
                current = parent;
            }
            _ => break,
        }
    }
    current
}
