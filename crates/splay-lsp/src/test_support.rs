//! Test helpers shared across LSP unit tests.

use std::sync::{Arc, Mutex};
use tower_lsp::{Client, LanguageServer, LspService};

/// A detached client: notifications sent through it go nowhere.
pub(crate) fn test_client() -> Client {
    struct NullServer;

    #[tower_lsp::async_trait]
    impl LanguageServer for NullServer {
        async fn initialize(
            &self,
            _: tower_lsp::lsp_types::InitializeParams,
        ) -> tower_lsp::jsonrpc::Result<tower_lsp::lsp_types::InitializeResult> {
            Ok(tower_lsp::lsp_types::InitializeResult::default())
        }

        async fn shutdown(&self) -> tower_lsp::jsonrpc::Result<()> {
            Ok(())
        }
    }

    let captured = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&captured);
    let (_service, socket) = LspService::new(move |client| {
        *sink.lock().expect("lock test client") = Some(client.clone());
        NullServer
    });
    drop(socket);

    let client = captured
        .lock()
        .expect("lock test client")
        .take()
        .expect("test client");
    client
}
