//! Lexer for brace-syntax source files.
//!
//! This module provides a lexer that tokenizes source code into a stream
//! of tokens with their positions in the source text.

mod tokens;

pub use tokens::TokenKind;

use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte range of the token in the source text.
    pub range: TextRange,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// Returns the length of the token in bytes.
    #[must_use]
    pub fn len(&self) -> TextSize {
        self.range.len()
    }

    /// Returns true if the token has zero length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Returns the text of this token within `source`.
    #[must_use]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[usize::from(self.range.start())..usize::from(self.range.end())]
    }
}

/// Lexer for brace-syntax source code.
///
/// The lexer is an iterator over tokens. It handles all error recovery
/// internally - any unrecognized characters are returned as `TokenKind::Error`.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
        }
    }

    /// Returns the source text being lexed.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the text of the current token.
    #[must_use]
    pub fn slice(&self) -> &'src str {
        self.inner.slice()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?;
        let span = self.inner.span();

        let kind = kind.unwrap_or(TokenKind::Error);
        let range = TextRange::new(text_size_at(span.start), text_size_at(span.end));

        Some(Token::new(kind, range))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn text_size_at(offset: usize) -> TextSize {
    TextSize::from(offset as u32)
}

/// Lex the entire source and return all tokens.
///
/// This is a convenience function for testing and simple use cases.
/// For the parser, use the `Lexer` iterator directly.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Lex source and return tokens paired with their text.
///
/// Useful for debugging and testing.
#[must_use]
pub fn lex_with_text(source: &str) -> Vec<(Token, &str)> {
    Lexer::new(source)
        .map(|token| (token, token.text(source)))
        .collect()
}
