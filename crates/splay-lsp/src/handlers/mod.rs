//! LSP request handlers.
//!
//! This module wires handler submodules together.

mod code_action;
mod lsp_utils;
mod sync;
mod workspace;

pub use code_action::code_action;
pub use sync::{did_change, did_close, did_open};
pub use workspace::{did_change_configuration, set_workspace};
