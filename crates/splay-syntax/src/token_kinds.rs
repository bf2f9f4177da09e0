//! Single list of token kind names shared by `TokenKind` and `SyntaxKind`.
//!
//! The order must match the declaration order of `TokenKind`, with `Eof` last.

macro_rules! for_each_token_kind {
    ($callback:ident) => {
        $callback! {
            Whitespace,
            LineComment,
            BlockComment,
            Semicolon,
            Colon,
            Comma,
            Dot,
            LParen,
            RParen,
            LBrace,
            RBrace,
            LBracket,
            RBracket,
            Eq,
            EqEq,
            BangEq,
            Bang,
            Lt,
            LtEq,
            Gt,
            GtEq,
            Plus,
            Minus,
            Star,
            Slash,
            Percent,
            AmpAmp,
            PipePipe,
            KwUsing,
            KwClass,
            KwReturn,
            KwIf,
            KwElse,
            KwWhile,
            KwVar,
            KwNew,
            KwThis,
            KwTrue,
            KwFalse,
            KwNull,
            KwRef,
            KwOut,
            KwParams,
            KwPublic,
            KwPrivate,
            KwProtected,
            KwInternal,
            KwStatic,
            IntLiteral,
            RealLiteral,
            StringLiteral,
            Ident,
            Error,
            Eof,
        }
    };
}

pub(crate) use for_each_token_kind;
