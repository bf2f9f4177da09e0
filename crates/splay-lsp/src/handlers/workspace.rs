//! Workspace-level handlers.

use std::path::PathBuf;

use tower_lsp::lsp_types::*;
use tracing::info;

use crate::config;
use crate::state::ServerState;

/// Records the workspace root and loads its config file.
#[allow(deprecated)]
pub fn set_workspace(state: &ServerState, params: &InitializeParams) {
    let root = params
        .workspace_folders
        .as_ref()
        .and_then(|folders| folders.first())
        .map(|folder| &folder.uri)
        .or(params.root_uri.as_ref())
        .and_then(|uri| uri.to_file_path().ok());

    if let Some(root) = root {
        info!("Workspace root: {}", root.display());
        load_workspace_config(state, root);
    }
}

fn load_workspace_config(state: &ServerState, root: PathBuf) {
    state.set_layout_config(config::load(&root));
    state.set_workspace_root(root);
}

/// Applies client settings. A payload without a `splay.layout` section
/// falls back to the workspace config file.
pub fn did_change_configuration(state: &ServerState, params: DidChangeConfigurationParams) {
    if let Some(layout) = config::from_settings(&params.settings) {
        state.set_layout_config(layout);
    } else if let Some(root) = state.workspace_root() {
        state.set_layout_config(config::load(&root));
    }
    info!(
        line_ending = ?state.layout_config().line_ending,
        "Updated workspace configuration"
    );
}
