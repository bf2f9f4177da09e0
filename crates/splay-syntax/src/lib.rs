//! `splay-syntax` - Lexer, parser, and lossless syntax tree for brace-syntax source files.
//!
//! This crate provides the syntactic layer consumed by the list layout
//! assists in `splay-ide`:
//!
//! - **Lexer**: Tokenizes source text into a stream of tokens
//! - **Parser**: Builds a concrete syntax tree (CST) from tokens
//! - **Syntax Tree**: Lossless, immutable representation of the source code
//!
//! The language is a small C-family subset: using directives, classes,
//! methods, constructors, fields, statements and expressions with calls,
//! `new` expressions, named and `ref`/`out` arguments.
//!
//! # Design Principles
//!
//! - **Lossless**: All source text is preserved, including whitespace and comments
//! - **Error-tolerant**: Parsing continues after errors, producing a partial tree
//! - **Persistent**: [`SyntaxTree`] snapshots share structure and never mutate
//!
//! # Example
//!
//! ```
//! use splay_syntax::lexer::{lex, TokenKind};
//!
//! let source = "Run(a, b);";
//! let tokens = lex(source);
//!
//! let meaningful: Vec<_> = tokens.iter()
//!     .filter(|t| !t.kind.is_trivia())
//!     .collect();
//!
//! assert_eq!(meaningful[0].kind, TokenKind::Ident);
//! assert_eq!(meaningful[1].kind, TokenKind::LParen);
//! assert_eq!(meaningful[2].kind, TokenKind::Ident);
//! assert_eq!(meaningful[3].kind, TokenKind::Comma);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod lexer;
pub mod parser;
pub mod syntax;
mod token_kinds;

pub use lexer::{lex, Lexer, Token, TokenKind};
pub use parser::{parse, Parse, ParseError};
pub use syntax::{BraceLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, SyntaxTree};
