//! `splay-lsp` - Language Server offering the delimited-list layout toggle.
//!
//! Every call argument list and declaration parameter list with at least two
//! items gets a "Break ... apart" or "Line-up ..." code action.

mod config;
mod handlers;
mod state;
#[cfg(test)]
mod test_support;

use std::sync::Arc;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};
use tracing::info;

use crate::state::ServerState;

/// The main language server struct.
pub struct SplayLanguageServer {
    /// LSP client for sending notifications.
    client: Client,
    /// Server state.
    state: Arc<ServerState>,
}

impl SplayLanguageServer {
    /// Creates a new language server instance.
    fn new(client: Client) -> Self {
        Self {
            client,
            state: Arc::new(ServerState::new()),
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for SplayLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        info!("splay language server initializing");
        handlers::set_workspace(&self.state, &params);

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                // Text document sync - incremental updates
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::INCREMENTAL),
                        ..Default::default()
                    },
                )),

                // Code actions
                code_action_provider: Some(CodeActionProviderCapability::Options(
                    CodeActionOptions {
                        code_action_kinds: Some(vec![CodeActionKind::REFACTOR_REWRITE]),
                        resolve_provider: Some(false),
                        ..Default::default()
                    },
                )),

                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "splay-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        info!("splay language server initialized");
        self.client
            .log_message(MessageType::INFO, "splay language server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!("splay language server shutting down");
        Ok(())
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        handlers::did_change_configuration(&self.state, params);
    }

    // =========================================================================
    // Document Synchronization
    // =========================================================================

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        handlers::did_open(&self.state, params);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        handlers::did_change(&self.state, params);
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        handlers::did_close(&self.state, params);
    }

    async fn code_action(&self, params: CodeActionParams) -> Result<Option<CodeActionResponse>> {
        Ok(handlers::code_action(&self.state, params).await)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;

    info!("Starting splay language server");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(SplayLanguageServer::new);
    Server::new(stdin, stdout, socket).serve(service).await;
    Ok(())
}
