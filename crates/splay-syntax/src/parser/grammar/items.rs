//! Item parsing: using directives, classes and their members.
//!
//! Handles:
//! - `using A.B;`
//! - `class Name { ... }`
//! - Methods, constructors and fields with optional modifiers
//! - Parameter lists with `ref`/`out`/`params` and default values
//! - Type references, including array ranks: `int[]`

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::Parser;

impl Parser<'_, '_> {
    /// Parse a using directive.
    pub(crate) fn parse_using_directive(&mut self) {
        self.start_node(SyntaxKind::UsingDirective);
        self.bump(); // using
        self.parse_qualified_name();
        self.expect_semicolon();
        self.finish_node();
    }

    /// Returns true if a class or member declaration starts here.
    pub(crate) fn at_member_start(&self) -> bool {
        self.current().is_modifier() || self.at(TokenKind::KwClass) || self.source.at_type_then_name()
    }

    fn at_constructor_start(&self) -> bool {
        self.at(TokenKind::Ident) && self.peek_kind_n(1) == TokenKind::LParen
    }

    /// Parse a class, method, constructor, or field declaration.
    ///
    /// Constructors are only recognised inside a class body, where a bare
    /// `Name(` cannot be a call.
    pub(crate) fn parse_member(&mut self) {
        self.parse_member_in(false);
    }

    fn parse_member_in(&mut self, in_class: bool) {
        let marker = self.start();

        if self.current().is_modifier() {
            self.start_node(SyntaxKind::Modifiers);
            while self.current().is_modifier() {
                self.bump();
            }
            self.finish_node();
        }

        if self.at(TokenKind::KwClass) {
            self.parse_class_body();
            marker.complete(self, SyntaxKind::ClassDecl);
            return;
        }

        if in_class && self.at_constructor_start() {
            self.parse_name();
            self.parse_param_list();
            self.parse_block();
            marker.complete(self, SyntaxKind::ConstructorDecl);
            return;
        }

        self.parse_type_ref();
        if self.at(TokenKind::Ident) {
            self.parse_name();
        } else {
            self.error("expected member name");
        }

        if self.at(TokenKind::LParen) {
            self.parse_param_list();
            if self.at(TokenKind::Semicolon) {
                self.bump();
            } else {
                self.parse_block();
            }
            marker.complete(self, SyntaxKind::MethodDecl);
            return;
        }

        if self.at(TokenKind::Eq) {
            self.parse_initializer();
        }
        self.expect_semicolon();
        marker.complete(self, SyntaxKind::FieldDecl);
    }

    fn parse_class_body(&mut self) {
        self.bump(); // class
        if self.at(TokenKind::Ident) {
            self.parse_name();
        } else {
            self.error("expected class name");
        }

        if !self.expect(TokenKind::LBrace, "expected '{'") {
            return;
        }

        while !self.at(TokenKind::RBrace) && !self.at_end() {
            if self.at_member_start() || self.at_constructor_start() {
                self.parse_member_in(true);
            } else {
                self.error("expected member declaration");
                self.bump();
            }
        }

        self.expect(TokenKind::RBrace, "expected '}'");
    }

    /// Parse a parameter list: `(int a, ref string b, int c = 0)`.
    pub(crate) fn parse_param_list(&mut self) {
        self.start_node(SyntaxKind::ParamList);
        self.bump(); // (

        while !self.at(TokenKind::RParen) && !self.at_end() && !self.is_sync_point() {
            self.parse_param();

            if self.at(TokenKind::Comma) {
                self.bump();
            } else {
                break;
            }
        }

        self.expect(TokenKind::RParen, "expected ')'");
        self.finish_node();
    }

    fn parse_param(&mut self) {
        self.start_node(SyntaxKind::Param);

        if matches!(
            self.current(),
            TokenKind::KwRef | TokenKind::KwOut | TokenKind::KwParams | TokenKind::KwThis
        ) {
            self.bump();
        }

        if self.at(TokenKind::Ident) {
            self.parse_type_ref();
            if self.at(TokenKind::Ident) {
                self.parse_name();
            } else {
                self.error("expected parameter name");
            }
        } else {
            self.error("expected parameter type");
        }

        if self.at(TokenKind::Eq) {
            self.parse_initializer();
        }

        self.finish_node();
    }

    /// Parse `= expr`.
    pub(crate) fn parse_initializer(&mut self) {
        self.start_node(SyntaxKind::Initializer);
        self.bump(); // =
        self.parse_expression();
        self.finish_node();
    }

    /// Parse a type reference: `int`, `System.String`, `int[][]`.
    pub(crate) fn parse_type_ref(&mut self) {
        self.start_node(SyntaxKind::TypeRef);
        if self.at(TokenKind::Ident) && self.peek_kind_n(1) == TokenKind::Dot {
            self.parse_qualified_name();
        } else if self.at(TokenKind::Ident) {
            self.parse_name();
        } else {
            self.error("expected type");
        }

        while self.at(TokenKind::LBracket) && self.peek_kind_n(1) == TokenKind::RBracket {
            self.start_node(SyntaxKind::ArrayRank);
            self.bump(); // [
            self.bump(); // ]
            self.finish_node();
        }
        self.finish_node();
    }

    /// Parse a simple name.
    pub(crate) fn parse_name(&mut self) {
        self.start_node(SyntaxKind::Name);
        if self.at(TokenKind::Ident) {
            self.bump();
        }
        self.finish_node();
    }

    /// Parse a qualified name (e.g., `System.Text`).
    pub(crate) fn parse_qualified_name(&mut self) {
        self.start_node(SyntaxKind::QualifiedName);
        if self.at(TokenKind::Ident) {
            self.parse_name();
        } else {
            self.error("expected name");
        }

        while self.at(TokenKind::Dot) {
            self.bump();
            if self.at(TokenKind::Ident) {
                self.parse_name();
            } else {
                self.error("expected name after '.'");
                break;
            }
        }

        self.finish_node();
    }
}
