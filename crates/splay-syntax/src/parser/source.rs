//! Token source for the parser.
//!
//! This module provides the `Source` struct that wraps a token stream
//! and provides lookahead and consumption operations over non-trivia tokens.

use crate::lexer::{Token, TokenKind};

/// A token source that provides tokens to the parser.
pub struct Source<'t, 'src> {
    tokens: &'t [Token],
    source: &'src str,
    cursor: usize,
}

impl<'t, 'src> Source<'t, 'src> {
    /// Creates a new source from tokens and source text.
    pub fn new(tokens: &'t [Token], source: &'src str) -> Self {
        Self {
            tokens,
            source,
            cursor: 0,
        }
    }

    /// Returns the current token kind, or `Eof` if at end.
    pub fn current(&self) -> TokenKind {
        self.peek_kind_n(0)
    }

    /// Returns the current token, or `None` if at end.
    pub fn current_token(&self) -> Option<&Token> {
        self.peek_token_n(0)
    }

    /// Peeks at the nth non-trivia token ahead.
    pub fn peek_kind_n(&self, n: usize) -> TokenKind {
        self.peek_token_n(n).map_or(TokenKind::Eof, |token| token.kind)
    }

    /// Peeks at the nth non-trivia token ahead and returns the token.
    pub fn peek_token_n(&self, n: usize) -> Option<&Token> {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .filter(|token| !token.kind.is_trivia())
            .nth(n)
    }

    /// Advances past the current token.
    pub fn bump(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            self.cursor += 1;
            if !token.kind.is_trivia() {
                break;
            }
        }
    }

    /// Returns `true` if at end of input.
    pub fn at_end(&self) -> bool {
        self.peek_kind_n(0) == TokenKind::Eof
    }

    /// Returns the end offset of the source text.
    pub fn end_offset(&self) -> text_size::TextSize {
        text_size::TextSize::of(self.source)
    }

    /// Returns true if a type reference followed by a name starts here.
    ///
    /// Used to tell `Type name ...` declarations apart from expressions and
    /// constructors: `int[] values`, `System.String name`.
    pub fn at_type_then_name(&self) -> bool {
        let mut n = 0;
        if self.peek_kind_n(n) != TokenKind::Ident {
            return false;
        }
        n += 1;
        loop {
            match (self.peek_kind_n(n), self.peek_kind_n(n + 1)) {
                (TokenKind::Dot, TokenKind::Ident) => n += 2,
                (TokenKind::LBracket, TokenKind::RBracket) => n += 2,
                _ => break,
            }
        }
        self.peek_kind_n(n) == TokenKind::Ident
    }
}
