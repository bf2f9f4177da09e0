//! Document collaborators.
//!
//! The list toggle never parses or prints text itself. It asks a
//! [`DocumentHost`] for the current tree, hands a rewritten tree back, and on
//! the collapse path asks a [`Formatter`] to tidy the rewritten span. Both
//! traits are async because real hosts may parse or format off-thread.

use std::sync::Arc;

use async_trait::async_trait;
use splay_syntax::{parse, SyntaxTree};
use text_size::TextRange;

/// Provides syntax trees for documents and builds documents from trees.
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// The host's document handle.
    type Document: Clone + Send + Sync + 'static;

    /// Returns the parsed tree of `document`.
    async fn syntax_tree(&self, document: &Self::Document) -> SyntaxTree;

    /// Returns a copy of `document` whose content is `tree`.
    fn with_syntax_tree(&self, document: &Self::Document, tree: SyntaxTree) -> Self::Document;
}

/// Formats a span of a document.
#[async_trait]
pub trait Formatter<D: Send + 'static>: Send + Sync {
    /// Returns `document` with `span` formatted.
    async fn format(&self, document: D, span: TextRange) -> D;
}

/// An in-memory document: source text plus its tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    text: Arc<str>,
    tree: SyntaxTree,
}

impl SourceDocument {
    /// Parses `text` into a document.
    #[must_use]
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let tree = parse(&text).tree();
        Self { text, tree }
    }

    /// Builds a document whose text is the text of `tree`.
    #[must_use]
    pub fn from_tree(tree: SyntaxTree) -> Self {
        Self {
            text: tree.text().into(),
            tree,
        }
    }

    /// The document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The document tree.
    #[must_use]
    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }
}

/// A [`DocumentHost`] over [`SourceDocument`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHost;

#[async_trait]
impl DocumentHost for LocalHost {
    type Document = SourceDocument;

    async fn syntax_tree(&self, document: &SourceDocument) -> SyntaxTree {
        document.tree.clone()
    }

    fn with_syntax_tree(&self, _document: &SourceDocument, tree: SyntaxTree) -> SourceDocument {
        SourceDocument::from_tree(tree)
    }
}
