//! Token definitions for brace-syntax source files.
//!
//! The token kinds are designed to work with both the `logos` lexer generator
//! and the `rowan` lossless syntax tree library.

use logos::Logos;

fn lex_block_comment(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut i = 0usize;

    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            lex.bump(i + 2);
            return true;
        }
        i += 1;
    }

    // Unterminated comments swallow the rest of the input.
    lex.bump(bytes.len());
    false
}

/// All token kinds of the brace syntax.
///
/// Token kinds are divided into categories:
/// - Trivia (whitespace, comments) - preserved but not semantically significant
/// - Punctuation and operators
/// - Keywords (reserved words)
/// - Literals and identifiers
/// - Special tokens (errors, EOF)
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[derive(Default)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Whitespace (spaces, tabs, newlines)
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Single-line comment: // ...
    #[regex(r"//[^\r\n]*", allow_greedy = true)]
    LineComment,

    /// Block comment: /* ... */
    #[token("/*", lex_block_comment)]
    BlockComment,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `;`
    #[token(";")]
    Semicolon,

    /// `:`
    #[token(":")]
    Colon,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    // =========================================================================
    // OPERATORS
    // =========================================================================
    /// `=`
    #[token("=")]
    Eq,

    /// `==`
    #[token("==")]
    EqEq,

    /// `!=`
    #[token("!=")]
    BangEq,

    /// `!`
    #[token("!")]
    Bang,

    /// `<`
    #[token("<")]
    Lt,

    /// `<=`
    #[token("<=")]
    LtEq,

    /// `>`
    #[token(">")]
    Gt,

    /// `>=`
    #[token(">=")]
    GtEq,

    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,

    /// `*`
    #[token("*")]
    Star,

    /// `/`
    #[token("/")]
    Slash,

    /// `%`
    #[token("%")]
    Percent,

    /// `&&`
    #[token("&&")]
    AmpAmp,

    /// `||`
    #[token("||")]
    PipePipe,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    /// `using`
    #[token("using")]
    KwUsing,

    /// `class`
    #[token("class")]
    KwClass,

    /// `return`
    #[token("return")]
    KwReturn,

    /// `if`
    #[token("if")]
    KwIf,

    /// `else`
    #[token("else")]
    KwElse,

    /// `while`
    #[token("while")]
    KwWhile,

    /// `var`
    #[token("var")]
    KwVar,

    /// `new`
    #[token("new")]
    KwNew,

    /// `this`
    #[token("this")]
    KwThis,

    /// `true`
    #[token("true")]
    KwTrue,

    /// `false`
    #[token("false")]
    KwFalse,

    /// `null`
    #[token("null")]
    KwNull,

    /// `ref`
    #[token("ref")]
    KwRef,

    /// `out`
    #[token("out")]
    KwOut,

    /// `params`
    #[token("params")]
    KwParams,

    /// `public`
    #[token("public")]
    KwPublic,

    /// `private`
    #[token("private")]
    KwPrivate,

    /// `protected`
    #[token("protected")]
    KwProtected,

    /// `internal`
    #[token("internal")]
    KwInternal,

    /// `static`
    #[token("static")]
    KwStatic,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Integer literal: `42`
    #[regex(r"[0-9][0-9_]*")]
    IntLiteral,

    /// Real literal: `3.14`
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*")]
    RealLiteral,

    /// String literal: `"text"` with backslash escapes
    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    StringLiteral,

    // =========================================================================
    // IDENTIFIERS
    // =========================================================================
    /// Identifier: `foo`, `_bar`, `Baz42`
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // =========================================================================
    // SPECIAL TOKENS
    // =========================================================================
    /// Lexer error - unrecognized character
    #[default]
    Error,

    /// End of file marker (not produced by lexer, added by parser)
    Eof,
}

impl TokenKind {
    /// Returns `true` if this token is trivia (whitespace or comment).
    #[inline]
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }

    /// Returns `true` if this token is a keyword.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::KwUsing as u16) && (self as u16) <= (Self::KwStatic as u16)
    }

    /// Returns `true` if this token is a declaration modifier.
    #[must_use]
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Self::KwPublic | Self::KwPrivate | Self::KwProtected | Self::KwInternal | Self::KwStatic
        )
    }

    /// Returns `true` if this token can start an expression.
    #[must_use]
    pub fn can_start_expr(self) -> bool {
        matches!(
            self,
            Self::Ident
                | Self::IntLiteral
                | Self::RealLiteral
                | Self::StringLiteral
                | Self::KwTrue
                | Self::KwFalse
                | Self::KwNull
                | Self::KwThis
                | Self::KwNew
                | Self::LParen
                | Self::Bang
                | Self::Minus
        )
    }

    /// Returns `true` if this token can start a statement.
    #[must_use]
    pub fn can_start_statement(self) -> bool {
        self.can_start_expr()
            || matches!(
                self,
                Self::KwVar
                    | Self::KwReturn
                    | Self::KwIf
                    | Self::KwWhile
                    | Self::LBrace
                    | Self::Semicolon
            )
    }

    /// Returns the binding power for Pratt parsing (left, right).
    /// Returns None if not an infix operator.
    #[must_use]
    pub fn infix_binding_power(self) -> Option<(u8, u8)> {
        Some(match self {
            Self::Eq => (2, 1), // Right associative
            Self::PipePipe => (3, 4),
            Self::AmpAmp => (5, 6),
            Self::EqEq | Self::BangEq => (7, 8),
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => (9, 10),
            Self::Plus | Self::Minus => (11, 12),
            Self::Star | Self::Slash | Self::Percent => (13, 14),
            _ => return None,
        })
    }

    /// Returns the binding power for prefix operators.
    #[must_use]
    pub fn prefix_binding_power(self) -> Option<u8> {
        Some(match self {
            Self::Bang | Self::Minus => 15,
            _ => return None,
        })
    }
}

impl From<TokenKind> for rowan::SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        Self(kind as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<(TokenKind, &str)> {
        TokenKind::lexer(input)
            .spanned()
            .map(|(tok, span)| (tok.unwrap_or(TokenKind::Error), &input[span]))
            .collect()
    }

    #[test]
    fn test_keywords_win_over_identifiers() {
        let tokens = lex("class classy return_value");
        assert_eq!(tokens[0], (TokenKind::KwClass, "class"));
        assert_eq!(tokens[2], (TokenKind::Ident, "classy"));
        assert_eq!(tokens[4], (TokenKind::Ident, "return_value"));
    }

    #[test]
    fn test_operators_prefer_longest_match() {
        let kinds: Vec<_> = lex("a==b!=c<=d>=e&&f||g")
            .into_iter()
            .map(|(kind, _)| kind)
            .filter(|kind| *kind != TokenKind::Ident)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::EqEq,
                TokenKind::BangEq,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::AmpAmp,
                TokenKind::PipePipe,
            ]
        );
    }

    #[test]
    fn test_numeric_literals() {
        assert_eq!(lex("42"), vec![(TokenKind::IntLiteral, "42")]);
        assert_eq!(lex("1_000"), vec![(TokenKind::IntLiteral, "1_000")]);
        assert_eq!(lex("3.25"), vec![(TokenKind::RealLiteral, "3.25")]);
    }

    #[test]
    fn test_string_literal_with_escapes() {
        let tokens = lex(r#""say \"hi\"""#);
        assert_eq!(tokens, vec![(TokenKind::StringLiteral, r#""say \"hi\"""#)]);
    }

    #[test]
    fn test_comments_are_trivia() {
        let tokens = lex("// line\n/* block\n still */x");
        assert_eq!(tokens[0], (TokenKind::LineComment, "// line"));
        assert_eq!(tokens[1], (TokenKind::Whitespace, "\n"));
        assert_eq!(tokens[2], (TokenKind::BlockComment, "/* block\n still */"));
        assert_eq!(tokens[3], (TokenKind::Ident, "x"));
        assert!(tokens[0].0.is_trivia());
        assert!(tokens[2].0.is_trivia());
    }

    #[test]
    fn test_unterminated_block_comment_is_error() {
        let tokens = lex("/* never closed");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, TokenKind::Error);
    }

    #[test]
    fn test_unknown_character_is_error() {
        let kinds: Vec<_> = lex("a # b").into_iter().map(|(kind, _)| kind).collect();
        assert!(kinds.contains(&TokenKind::Error));
    }

    #[test]
    fn test_keyword_and_modifier_classification() {
        assert!(TokenKind::KwUsing.is_keyword());
        assert!(TokenKind::KwStatic.is_keyword());
        assert!(!TokenKind::Ident.is_keyword());
        assert!(TokenKind::KwPublic.is_modifier());
        assert!(!TokenKind::KwClass.is_modifier());
    }
}
