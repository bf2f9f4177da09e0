//! `splay-ide` - Layout toggles for delimited lists.
//!
//! This crate offers a single, cursor-triggered refactoring: switch a call's
//! argument list or a declaration's parameter list between a one-line layout
//! and a one-item-per-line layout.
//!
//! - **Locate**: Find the innermost list of a given kind around the cursor
//! - **Classify**: Decide whether the list is currently collapsed or expanded
//! - **Indent**: Derive the continuation column from the first item
//! - **Transform**: Rebuild the list with new inter-item trivia
//!
//! # Architecture
//!
//! The list algorithms in [`list_layout`] are synchronous, pure functions over
//! [`splay_syntax::SyntaxTree`] snapshots. The [`assists`] module wraps them in
//! the asynchronous action host contract, talking to a [`DocumentHost`] for
//! trees and a [`Formatter`] for the post-collapse spacing pass.
//!
//! ```
//! use splay_ide::list_layout::{locate, to_expanded, Arguments};
//! use splay_syntax::parse;
//! use text_size::{TextRange, TextSize};
//!
//! let tree = parse("Run(first, second);").tree();
//! let list = locate::<Arguments>(&tree, TextRange::empty(TextSize::from(5))).unwrap();
//! let expanded = to_expanded(&list, "\n");
//! assert_eq!(expanded.syntax().text().to_string(), "(first,\n    second)");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod assists;
pub mod cancel;
pub mod config;
pub mod document;
pub mod format;
pub mod list_layout;
pub mod text_edit;

pub use assists::{apply_list_layout_action, list_layout_actions, ListLayoutAction};
pub use cancel::{Cancelled, RequestGeneration, RequestTicket};
pub use config::{LayoutConfig, LineEnding};
pub use document::{DocumentHost, Formatter, LocalHost, SourceDocument};
pub use format::{format_span, SpacingFormatter};
pub use list_layout::{Arguments, DelimitedList, Layout, ListKind, ListKindId, Parameters};
pub use text_edit::TextEdit;
