//! Immutable syntax tree snapshots.

use std::fmt;

use rowan::GreenNode;

use super::{SyntaxKind, SyntaxNode};

/// An immutable, persistent snapshot of a parsed source file.
///
/// The snapshot owns only the green tree, so it is cheap to clone and safe to
/// send across threads. Red nodes (`SyntaxNode`) are created on demand with
/// [`SyntaxTree::root`] and must not outlive the current thread.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SyntaxTree {
    green: GreenNode,
}

impl SyntaxTree {
    /// Wraps a green tree. The root is expected to be a `SourceFile` node.
    #[must_use]
    pub fn new(green: GreenNode) -> Self {
        Self { green }
    }

    /// Returns the root syntax node.
    #[must_use]
    pub fn root(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Returns the underlying green tree.
    #[must_use]
    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// Returns the full source text of the tree.
    #[must_use]
    pub fn text(&self) -> String {
        self.root().text().to_string()
    }

    /// Returns a new tree with `old` replaced by `replacement`.
    ///
    /// `old` must be a node of this tree; everything outside of it is shared
    /// with the original snapshot.
    #[must_use]
    pub fn replace_subtree(&self, old: &SyntaxNode, replacement: GreenNode) -> Self {
        debug_assert_eq!(
            old.ancestors().last().map(|root| root.green().into_owned()),
            Some(self.green.clone()),
            "replaced node must belong to this tree"
        );
        Self {
            green: old.replace_with(replacement),
        }
    }

    /// Returns the first node of `kind` whose range is exactly `range`.
    #[must_use]
    pub fn node_at_range(&self, kind: SyntaxKind, range: text_size::TextRange) -> Option<SyntaxNode> {
        let root = self.root();
        if !root.text_range().contains_range(range) {
            return None;
        }
        let element = root.covering_element(range);
        let start = match element {
            rowan::NodeOrToken::Node(node) => node,
            rowan::NodeOrToken::Token(token) => token.parent()?,
        };
        start
            .ancestors()
            .find(|node| node.kind() == kind && node.text_range() == range)
            .or_else(|| {
                start
                    .descendants()
                    .find(|node| node.kind() == kind && node.text_range() == range)
            })
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("len", &self.green.text_len())
            .finish()
    }
}

impl From<GreenNode> for SyntaxTree {
    fn from(green: GreenNode) -> Self {
        Self::new(green)
    }
}
