//! Syntax tree types for brace-syntax source files.
//!
//! This module provides the `rowan`-based syntax tree implementation,
//! including the `SyntaxKind` enum that covers both tokens and composite nodes.

mod tree;

pub use tree::SyntaxTree;

use crate::lexer::TokenKind;
use crate::token_kinds::for_each_token_kind;

macro_rules! define_syntax_kind {
    ($($token:ident),* $(,)?) => {
        /// All syntax node and token kinds of the brace syntax.
        ///
        /// This enum includes both token kinds (from the lexer) and composite
        /// node kinds (produced by the parser).
        // Variants mirror lexer/token names; documenting each would be noisy.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum SyntaxKind {
            // =========================================================================
            // TOKEN KINDS (mirrors TokenKind)
            // =========================================================================
            $($token,)*

            // COMPOSITE NODE KINDS (produced by parser)
            // =========================================================================
            /// Root node of a source file
            SourceFile,

            /// A using directive: `using System.Text;`
            UsingDirective,

            /// A class declaration: `class Name { members }`
            ClassDecl,

            /// A method declaration: `int Add(int a, int b) { ... }`
            MethodDecl,

            /// A constructor declaration: `Name(int a) { ... }`
            ConstructorDecl,

            /// A field declaration: `int count = 0;`
            FieldDecl,

            /// Declaration modifiers: `public static`
            Modifiers,

            /// A name (identifier) at a declaration site
            Name,

            /// A qualified name: `System.Text`
            QualifiedName,

            /// A type reference: `int`, `System.String`, `int[]`
            TypeRef,

            /// Array rank specifier: `[]`
            ArrayRank,

            /// Parameter list in a declaration: `(int a, int b)`
            ParamList,

            /// Single parameter: `ref int a = 0`
            Param,

            /// Default value of a parameter or initializer of a field: `= expr`
            Initializer,

            /// Block: `{ statements }`
            Block,

            /// Local variable statement: `var x = expr;`
            LocalVarStmt,

            /// Expression statement: `Run(a, b);`
            ExprStmt,

            /// Return statement: `return expr;`
            ReturnStmt,

            /// If statement: `if (cond) stmt else stmt`
            IfStmt,

            /// Else branch
            ElseBranch,

            /// While statement: `while (cond) stmt`
            WhileStmt,

            /// Empty statement: `;`
            EmptyStmt,

            // Expressions
            /// Assignment expression: `a = b`
            AssignExpr,

            /// Binary expression: `a + b`
            BinaryExpr,

            /// Unary expression: `-x`, `!x`
            UnaryExpr,

            /// Parenthesized expression: `(expr)`
            ParenExpr,

            /// Invocation: `callee(args)`
            CallExpr,

            /// Object creation: `new Point(x, y)`
            ObjectCreationExpr,

            /// Element access: `items[i]`
            IndexExpr,

            /// Member access: `target.member`
            FieldExpr,

            /// Name reference (variable, method, type)
            NameRef,

            /// Literal value
            Literal,

            /// This reference: `this`
            ThisExpr,

            /// Argument list in a call: `(a, b)`
            ArgList,

            /// Single argument (may be named or carry `ref`/`out`): `name: value`
            Arg,
        }
    };
}

for_each_token_kind!(define_syntax_kind);

impl SyntaxKind {
    /// Returns `true` if this is a trivia kind.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }

    /// Returns `true` if this is a token kind (not a composite node).
    #[must_use]
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::Eof as u16)
    }

    /// Returns `true` if this is a composite node kind.
    #[must_use]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }
}

macro_rules! map_token_kinds {
    ($($name:ident),* $(,)?) => {
        impl From<TokenKind> for SyntaxKind {
            fn from(kind: TokenKind) -> Self {
                match kind {
                    $(TokenKind::$name => SyntaxKind::$name,)*
                }
            }
        }
    };
}

for_each_token_kind!(map_token_kinds);

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// The language type for brace-syntax trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BraceLanguage {}

macro_rules! define_syntax_kinds {
    ($($token:ident),* $(,)?) => {
        const SYNTAX_KINDS: &[SyntaxKind] = &[
            $(SyntaxKind::$token,)*
            SyntaxKind::SourceFile,
            SyntaxKind::UsingDirective,
            SyntaxKind::ClassDecl,
            SyntaxKind::MethodDecl,
            SyntaxKind::ConstructorDecl,
            SyntaxKind::FieldDecl,
            SyntaxKind::Modifiers,
            SyntaxKind::Name,
            SyntaxKind::QualifiedName,
            SyntaxKind::TypeRef,
            SyntaxKind::ArrayRank,
            SyntaxKind::ParamList,
            SyntaxKind::Param,
            SyntaxKind::Initializer,
            SyntaxKind::Block,
            SyntaxKind::LocalVarStmt,
            SyntaxKind::ExprStmt,
            SyntaxKind::ReturnStmt,
            SyntaxKind::IfStmt,
            SyntaxKind::ElseBranch,
            SyntaxKind::WhileStmt,
            SyntaxKind::EmptyStmt,
            SyntaxKind::AssignExpr,
            SyntaxKind::BinaryExpr,
            SyntaxKind::UnaryExpr,
            SyntaxKind::ParenExpr,
            SyntaxKind::CallExpr,
            SyntaxKind::ObjectCreationExpr,
            SyntaxKind::IndexExpr,
            SyntaxKind::FieldExpr,
            SyntaxKind::NameRef,
            SyntaxKind::Literal,
            SyntaxKind::ThisExpr,
            SyntaxKind::ArgList,
            SyntaxKind::Arg,
        ];
    };
}

for_each_token_kind!(define_syntax_kinds);

impl rowan::Language for BraceLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SYNTAX_KINDS
            .get(raw.0 as usize)
            .copied()
            .unwrap_or(SyntaxKind::Error)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A syntax node in the brace-syntax tree.
pub type SyntaxNode = rowan::SyntaxNode<BraceLanguage>;

/// A syntax token in the brace-syntax tree.
pub type SyntaxToken = rowan::SyntaxToken<BraceLanguage>;

/// A syntax element (either node or token) in the brace-syntax tree.
pub type SyntaxElement = rowan::SyntaxElement<BraceLanguage>;
