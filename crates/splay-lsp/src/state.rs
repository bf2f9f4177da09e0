//! Server state management.
//!
//! Holds the open documents, the active layout settings and the request
//! generation used to cancel in-flight code action requests.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use splay_ide::{LayoutConfig, RequestGeneration, RequestTicket, SourceDocument};
use std::path::PathBuf;
use tower_lsp::lsp_types::Url;

/// A document managed by the server.
#[derive(Debug, Clone)]
pub struct Document {
    /// The document version.
    pub version: i32,
    /// Text and syntax tree.
    pub source: SourceDocument,
}

impl Document {
    fn new(version: i32, content: String) -> Self {
        Self {
            version,
            source: SourceDocument::new(content),
        }
    }

    /// The document content.
    pub fn text(&self) -> &str {
        self.source.text()
    }
}

/// The server state.
#[derive(Default)]
pub struct ServerState {
    /// Open documents.
    documents: RwLock<FxHashMap<Url, Document>>,
    /// Settings from the config file, overridden by client settings.
    layout: RwLock<LayoutConfig>,
    /// First workspace folder, if the client sent one.
    workspace_root: RwLock<Option<PathBuf>>,
    /// Cancels outstanding requests when a newer one starts or text changes.
    requests: RequestGeneration,
}

impl ServerState {
    /// Creates an empty state with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_document(&self, uri: Url, version: i32, content: String) {
        self.requests.cancel_all();
        self.documents
            .write()
            .insert(uri, Document::new(version, content));
    }

    /// Replaces the content of a known document. Returns false if `uri` is
    /// not open.
    pub fn update_document(&self, uri: &Url, version: i32, content: String) -> bool {
        self.requests.cancel_all();
        let mut documents = self.documents.write();
        match documents.get_mut(uri) {
            Some(document) => {
                *document = Document::new(version, content);
                true
            }
            None => false,
        }
    }

    pub fn close_document(&self, uri: &Url) {
        self.documents.write().remove(uri);
    }

    pub fn get_document(&self, uri: &Url) -> Option<Document> {
        self.documents.read().get(uri).cloned()
    }

    pub fn layout_config(&self) -> LayoutConfig {
        *self.layout.read()
    }

    pub fn set_layout_config(&self, config: LayoutConfig) {
        *self.layout.write() = config;
    }

    pub fn workspace_root(&self) -> Option<PathBuf> {
        self.workspace_root.read().clone()
    }

    pub fn set_workspace_root(&self, root: PathBuf) {
        *self.workspace_root.write() = Some(root);
    }

    /// Starts a request, superseding every earlier one.
    pub fn begin_request(&self) -> RequestTicket {
        self.requests.begin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri() -> Url {
        Url::parse("file:///workspace/Program.cs").expect("uri")
    }

    #[test]
    fn documents_open_update_and_close() {
        let state = ServerState::new();
        state.open_document(uri(), 1, "Run(a, b);".to_string());
        assert_eq!(state.get_document(&uri()).map(|doc| doc.version), Some(1));

        assert!(state.update_document(&uri(), 2, "Run(a);".to_string()));
        let document = state.get_document(&uri()).expect("document");
        assert_eq!(document.version, 2);
        assert_eq!(document.text(), "Run(a);");
        assert_eq!(document.source.tree().text(), "Run(a);");

        state.close_document(&uri());
        assert!(state.get_document(&uri()).is_none());
        assert!(!state.update_document(&uri(), 3, String::new()));
    }

    #[test]
    fn text_changes_cancel_running_requests() {
        let state = ServerState::new();
        state.open_document(uri(), 1, "Run(a, b);".to_string());
        let ticket = state.begin_request();
        assert!(!ticket.is_cancelled());

        state.update_document(&uri(), 2, "Run(a, c);".to_string());
        assert!(ticket.is_cancelled());
    }

    #[test]
    fn newer_request_supersedes_older() {
        let state = ServerState::new();
        let first = state.begin_request();
        let second = state.begin_request();
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
    }
}
