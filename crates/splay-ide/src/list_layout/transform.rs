//! Layout transforms.
//!
//! Both transforms rebuild the list node from its green children: everything
//! up to the opening delimiter and from the closing delimiter on is copied
//! as is, separators are kept bare, trivia sitting directly between the
//! delimiters is dropped, and items get new leading and trailing trivia.

use rowan::{GreenNode, GreenNodeData, GreenToken, Language, NodeOrToken};
use splay_syntax::{BraceLanguage, SyntaxKind, SyntaxNode};

use super::{derive_indent, DelimitedList, ListKind};

type GreenElement = NodeOrToken<GreenNode, GreenToken>;

/// Puts every item on the same line.
///
/// All leading and trailing trivia of every item is removed, comments
/// included, leaving `(a,b,c)`. Spacing after separators is left to a
/// formatter pass over the returned list's span.
#[must_use]
pub fn to_collapsed<K: ListKind>(list: &DelimitedList<K>) -> DelimitedList<K> {
    let green = rebuild(list, |_, item| trim(item));
    tracing::debug!(kind = ?K::ID, range = ?list.text_range(), "collapsed list");
    DelimitedList::from_green(green)
}

/// Puts every item after the first on its own line.
///
/// The first item is stripped of its trivia and stays next to the opening
/// delimiter. Every later item is stripped of its trailing trivia and gets
/// exactly `line_break` followed by spaces up to the first item's original
/// column as leading trivia. `list` must be attached to its original tree.
#[must_use]
pub fn to_expanded<K: ListKind>(list: &DelimitedList<K>, line_break: &str) -> DelimitedList<K> {
    let column = derive_indent(list);
    let mut leading = String::with_capacity(line_break.len() + column);
    leading.push_str(line_break);
    leading.extend(std::iter::repeat_n(' ', column));
    let leading = GreenToken::new(SyntaxKind::Whitespace.into(), &leading);

    let green = rebuild(list, |index, item| {
        let item = trim(item);
        if index == 0 {
            item
        } else {
            prepend(&item, leading.clone())
        }
    });
    tracing::debug!(kind = ?K::ID, range = ?list.text_range(), column, "expanded list");
    DelimitedList::from_green(green)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Region {
    BeforeOpen,
    Inside,
    AfterClose,
}

fn rebuild<K: ListKind>(
    list: &DelimitedList<K>,
    mut rewrite_item: impl FnMut(usize, &SyntaxNode) -> GreenNode,
) -> GreenNode {
    let mut region = Region::BeforeOpen;
    let mut index = 0;
    let mut children: Vec<GreenElement> = Vec::new();

    for element in list.syntax().children_with_tokens() {
        match element {
            NodeOrToken::Token(token) => {
                let kind = token.kind();
                if region == Region::BeforeOpen && kind == K::OPEN {
                    region = Region::Inside;
                } else if region == Region::Inside && kind == K::CLOSE {
                    region = Region::AfterClose;
                } else if region == Region::Inside && kind.is_trivia() {
                    continue;
                }
                children.push(NodeOrToken::Token(token.green().to_owned()));
            }
            NodeOrToken::Node(node) if region == Region::Inside && node.kind() == K::ITEM => {
                children.push(NodeOrToken::Node(rewrite_item(index, &node)));
                index += 1;
            }
            NodeOrToken::Node(node) => {
                children.push(NodeOrToken::Node(node.green().into_owned()));
            }
        }
    }

    GreenNode::new(K::LIST.into(), children)
}

fn trim(item: &SyntaxNode) -> GreenNode {
    let (without_leading, _) = trim_leading(&item.green());
    let (trimmed, _) = trim_trailing(&without_leading);
    trimmed
}

/// Drops trivia before the first significant token, descending into the
/// first child nodes. The flag reports whether a significant token was found.
fn trim_leading(node: &GreenNodeData) -> (GreenNode, bool) {
    let mut found = false;
    let mut children = Vec::new();
    for child in node.children() {
        if found {
            children.push(owned(child));
            continue;
        }
        match child {
            NodeOrToken::Token(token) if is_trivia(token.kind()) => {}
            NodeOrToken::Token(token) => {
                found = true;
                children.push(NodeOrToken::Token(token.to_owned()));
            }
            NodeOrToken::Node(child) => {
                let (trimmed, child_found) = trim_leading(child);
                found = child_found;
                children.push(NodeOrToken::Node(trimmed));
            }
        }
    }
    (GreenNode::new(node.kind(), children), found)
}

/// Mirror image of [`trim_leading`].
fn trim_trailing(node: &GreenNodeData) -> (GreenNode, bool) {
    let mut found = false;
    let mut children = Vec::new();
    let original: Vec<_> = node.children().collect();
    for child in original.into_iter().rev() {
        if found {
            children.push(owned(child));
            continue;
        }
        match child {
            NodeOrToken::Token(token) if is_trivia(token.kind()) => {}
            NodeOrToken::Token(token) => {
                found = true;
                children.push(NodeOrToken::Token(token.to_owned()));
            }
            NodeOrToken::Node(child) => {
                let (trimmed, child_found) = trim_trailing(child);
                found = child_found;
                children.push(NodeOrToken::Node(trimmed));
            }
        }
    }
    children.reverse();
    (GreenNode::new(node.kind(), children), found)
}

fn prepend(node: &GreenNodeData, token: GreenToken) -> GreenNode {
    let children = std::iter::once(NodeOrToken::Token(token))
        .chain(node.children().map(owned))
        .collect::<Vec<_>>();
    GreenNode::new(node.kind(), children)
}

fn owned(element: NodeOrToken<&GreenNodeData, &rowan::GreenTokenData>) -> GreenElement {
    match element {
        NodeOrToken::Node(node) => NodeOrToken::Node(node.to_owned()),
        NodeOrToken::Token(token) => NodeOrToken::Token(token.to_owned()),
    }
}

fn is_trivia(raw: rowan::SyntaxKind) -> bool {
    BraceLanguage::kind_from_raw(raw).is_trivia()
}
