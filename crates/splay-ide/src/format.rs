//! Span formatter used after collapsing a list.
//!
//! The formatter only normalises single-line gaps between tokens: a gap that
//! holds a comment or a line break is never touched, and neither is anything
//! outside the requested span.

use async_trait::async_trait;
use splay_syntax::{lex, Token, TokenKind};
use text_size::TextRange;

use crate::document::{Formatter, SourceDocument};
use crate::text_edit::{apply_edits, TextEdit};

/// A [`Formatter`] that fixes horizontal spacing between tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacingFormatter;

#[async_trait]
impl Formatter<SourceDocument> for SpacingFormatter {
    async fn format(&self, document: SourceDocument, span: TextRange) -> SourceDocument {
        let edits = format_span(document.text(), span);
        if edits.is_empty() {
            return document;
        }
        tracing::debug!(edits = edits.len(), ?span, "formatted span");
        SourceDocument::new(apply_edits(document.text(), &edits))
    }
}

/// Returns the edits that normalise spacing inside `span` of `text`.
///
/// Every gap between two consecutive significant tokens that lies wholly
/// inside `span` and holds nothing but spaces and tabs becomes either empty
/// or a single space.
#[must_use]
pub fn format_span(text: &str, span: TextRange) -> Vec<TextEdit> {
    let tokens = lex(text);
    let mut edits = Vec::new();
    let mut before_prev: Option<TokenKind> = None;
    let mut prev: Option<&Token> = None;
    let mut gap_is_plain = true;

    for token in &tokens {
        if token.kind.is_trivia() {
            if token.kind != TokenKind::Whitespace || token.text(text).contains(['\n', '\r']) {
                gap_is_plain = false;
            }
            continue;
        }

        if let Some(left) = prev {
            let gap = TextRange::new(left.range.end(), token.range.start());
            if gap_is_plain && span.contains_range(gap) {
                let wanted = if should_glue(before_prev, left.kind, token.kind) {
                    ""
                } else {
                    " "
                };
                if &text[gap] != wanted {
                    edits.push(TextEdit::replace(gap, wanted));
                }
            }
            before_prev = Some(left.kind);
        }

        prev = Some(token);
        gap_is_plain = true;
    }

    edits
}

fn should_glue(before_prev: Option<TokenKind>, prev: TokenKind, current: TokenKind) -> bool {
    if matches!(prev, TokenKind::LParen | TokenKind::LBracket | TokenKind::Dot) {
        return true;
    }

    if prev == TokenKind::Bang || (prev == TokenKind::Minus && is_unary_position(before_prev)) {
        return true;
    }

    if matches!(
        current,
        TokenKind::RParen
            | TokenKind::RBracket
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Dot
            | TokenKind::Colon
    ) {
        return true;
    }

    // Calls, declarations and indexing: `Run(`, `Run(a)(`, `items[`.
    if matches!(current, TokenKind::LParen | TokenKind::LBracket)
        && matches!(
            prev,
            TokenKind::Ident | TokenKind::RParen | TokenKind::RBracket
        )
    {
        return true;
    }

    false
}

/// A `-` is unary unless it follows an operand.
fn is_unary_position(before: Option<TokenKind>) -> bool {
    !matches!(
        before,
        Some(
            TokenKind::Ident
                | TokenKind::IntLiteral
                | TokenKind::RealLiteral
                | TokenKind::StringLiteral
                | TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::KwTrue
                | TokenKind::KwFalse
                | TokenKind::KwNull
                | TokenKind::KwThis
        )
    )
}
