//! Collapsed/expanded layout toggle for argument and parameter lists.
//!
//! Both list flavours share one algorithm, parameterised by a [`ListKind`]:
//!
//! ```text
//! locate ──► classify ──┬─ expanded ──► to_collapsed ──► (formatter pass)
//!                       └─ collapsed ──► derive_indent ──► to_expanded
//! ```
//!
//! Items own all of the whitespace between them (see the trivia attachment
//! rules in `splay_syntax::parser`), so the transforms only ever rewrite the
//! leading and trailing trivia of items and never look inside their payload.

mod classify;
mod indent;
mod locate;
mod transform;

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use rowan::GreenNode;
use splay_syntax::{SyntaxKind, SyntaxNode, SyntaxToken};
use text_size::TextRange;

pub use classify::{is_expanded, is_line_break};
pub use indent::derive_indent;
pub use locate::locate;
pub use transform::{to_collapsed, to_expanded};

/// The syntactic shape of one flavour of delimited list.
pub trait ListKind: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Runtime identifier of this kind.
    const ID: ListKindId;
    /// Node kind of the list itself.
    const LIST: SyntaxKind;
    /// Node kind of a single item.
    const ITEM: SyntaxKind;
    /// Opening delimiter token.
    const OPEN: SyntaxKind = SyntaxKind::LParen;
    /// Closing delimiter token.
    const CLOSE: SyntaxKind = SyntaxKind::RParen;
    /// Separator token between items.
    const SEPARATOR: SyntaxKind = SyntaxKind::Comma;

    /// Returns true if `kind` is a node that owns a list of this kind as a
    /// direct child.
    fn is_head(kind: SyntaxKind) -> bool;
}

/// Call and object-creation arguments: `Run(a, b)`, `new Point(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arguments;

impl ListKind for Arguments {
    const ID: ListKindId = ListKindId::Arguments;
    const LIST: SyntaxKind = SyntaxKind::ArgList;
    const ITEM: SyntaxKind = SyntaxKind::Arg;

    fn is_head(kind: SyntaxKind) -> bool {
        matches!(kind, SyntaxKind::CallExpr | SyntaxKind::ObjectCreationExpr)
    }
}

/// Method and constructor parameters: `void M(int a, int b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameters;

impl ListKind for Parameters {
    const ID: ListKindId = ListKindId::Parameters;
    const LIST: SyntaxKind = SyntaxKind::ParamList;
    const ITEM: SyntaxKind = SyntaxKind::Param;

    fn is_head(kind: SyntaxKind) -> bool {
        matches!(kind, SyntaxKind::MethodDecl | SyntaxKind::ConstructorDecl)
    }
}

/// Runtime counterpart of [`ListKind`], for hosts that store actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKindId {
    /// See [`Arguments`].
    Arguments,
    /// See [`Parameters`].
    Parameters,
}

impl ListKindId {
    /// Plural noun used in action titles.
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Arguments => "arguments",
            Self::Parameters => "parameters",
        }
    }

    /// Node kind of lists of this kind.
    #[must_use]
    pub fn list_kind(self) -> SyntaxKind {
        match self {
            Self::Arguments => Arguments::LIST,
            Self::Parameters => Parameters::LIST,
        }
    }
}

/// The two layouts a list can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// All items on one line.
    Collapsed,
    /// At least one separator is followed or preceded by a line break.
    Expanded,
}

impl Layout {
    /// Returns the layout a toggle moves to.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

/// A typed view over an argument or parameter list node.
///
/// The node is either part of a parsed tree or the detached result of a
/// transform; both are plain `rowan` nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DelimitedList<K: ListKind> {
    node: SyntaxNode,
    kind: PhantomData<K>,
}

impl<K: ListKind> DelimitedList<K> {
    /// Wraps `node` if it is a list of kind `K`.
    #[must_use]
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        (node.kind() == K::LIST).then_some(Self {
            node,
            kind: PhantomData,
        })
    }

    pub(crate) fn from_green(green: GreenNode) -> Self {
        Self {
            node: SyntaxNode::new_root(green),
            kind: PhantomData,
        }
    }

    /// The underlying syntax node.
    #[must_use]
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    /// An owned copy of the underlying green node.
    #[must_use]
    pub fn green(&self) -> GreenNode {
        self.node.green().into_owned()
    }

    /// Range of the whole list node, including any trivia it owns.
    #[must_use]
    pub fn text_range(&self) -> TextRange {
        self.node.text_range()
    }

    /// The opening delimiter, if present.
    #[must_use]
    pub fn open_delimiter(&self) -> Option<SyntaxToken> {
        self.direct_tokens().find(|token| token.kind() == K::OPEN)
    }

    /// The closing delimiter, if present.
    #[must_use]
    pub fn close_delimiter(&self) -> Option<SyntaxToken> {
        self.direct_tokens().find(|token| token.kind() == K::CLOSE)
    }

    /// Items in source order.
    pub fn items(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.node.children().filter(|child| child.kind() == K::ITEM)
    }

    /// Separators in source order. Separators of nested lists are not included.
    pub fn separators(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.direct_tokens()
            .filter(|token| token.kind() == K::SEPARATOR)
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items().count()
    }

    /// Current layout of the list.
    #[must_use]
    pub fn layout(&self) -> Layout {
        if is_expanded(self) {
            Layout::Expanded
        } else {
            Layout::Collapsed
        }
    }

    fn direct_tokens(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.node
            .children_with_tokens()
            .filter_map(rowan::NodeOrToken::into_token)
    }
}
