//! Grammar rules for brace-syntax source files.
//!
//! This module contains the grammar rules organized by category:
//!
//! - `items.rs` - Using directives, classes, methods, constructors, fields
//! - `statements.rs` - Statement parsing
//! - `expressions.rs` - Expression parsing (Pratt parser)

mod expressions;
mod items;
mod statements;
