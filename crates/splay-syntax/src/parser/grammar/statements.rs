//! Statement parsing.
//!
//! Supported statements:
//! - Block: `{ ... }`
//! - Local declaration: `var x = expr;`, `int[] xs = expr;`
//! - Expression statement: `Run(a, b);`, `x = y;`
//! - `if (...) ... else ...`
//! - `while (...) ...`
//! - `return expr;`
//! - Empty statement: `;`

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::Parser;

impl Parser<'_, '_> {
    /// Parse a braced block of statements.
    pub(crate) fn parse_block(&mut self) {
        self.start_node(SyntaxKind::Block);
        if !self.expect(TokenKind::LBrace, "expected '{'") {
            self.finish_node();
            return;
        }

        while !self.at(TokenKind::RBrace) && !self.at_end() {
            if self.current().can_start_statement() {
                self.parse_statement();
            } else {
                self.error("expected statement");
                self.bump();
            }
        }

        self.expect(TokenKind::RBrace, "expected '}'");
        self.finish_node();
    }

    /// Parse a single statement.
    pub(crate) fn parse_statement(&mut self) {
        match self.current() {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::KwVar => self.parse_local_var_stmt(),
            TokenKind::KwReturn => self.parse_return_stmt(),
            TokenKind::KwIf => self.parse_if_stmt(),
            TokenKind::KwWhile => self.parse_while_stmt(),
            TokenKind::Semicolon => {
                self.start_node(SyntaxKind::EmptyStmt);
                self.bump();
                self.finish_node();
            }
            _ if self.source.at_type_then_name() => self.parse_local_var_stmt(),
            kind if kind.can_start_expr() => {
                self.start_node(SyntaxKind::ExprStmt);
                self.parse_expression();
                self.expect_semicolon();
                self.finish_node();
            }
            _ => {
                self.error("expected statement");
                self.recover_statement();
            }
        }
    }

    fn parse_local_var_stmt(&mut self) {
        self.start_node(SyntaxKind::LocalVarStmt);
        if self.at(TokenKind::KwVar) {
            self.bump();
        } else {
            self.parse_type_ref();
        }

        if self.at(TokenKind::Ident) {
            self.parse_name();
        } else {
            self.error("expected variable name");
        }

        if self.at(TokenKind::Eq) {
            self.parse_initializer();
        }

        self.expect_semicolon();
        self.finish_node();
    }

    fn parse_return_stmt(&mut self) {
        self.start_node(SyntaxKind::ReturnStmt);
        self.bump(); // return
        if !self.at(TokenKind::Semicolon) && self.current().can_start_expr() {
            self.parse_expression();
        }
        self.expect_semicolon();
        self.finish_node();
    }

    fn parse_if_stmt(&mut self) {
        self.start_node(SyntaxKind::IfStmt);
        self.bump(); // if
        self.parse_condition();
        self.parse_embedded_statement();

        if self.at(TokenKind::KwElse) {
            self.start_node(SyntaxKind::ElseBranch);
            self.bump();
            self.parse_embedded_statement();
            self.finish_node();
        }

        self.finish_node();
    }

    fn parse_while_stmt(&mut self) {
        self.start_node(SyntaxKind::WhileStmt);
        self.bump(); // while
        self.parse_condition();
        self.parse_embedded_statement();
        self.finish_node();
    }

    fn parse_condition(&mut self) {
        self.expect(TokenKind::LParen, "expected '('");
        self.parse_expression();
        self.expect(TokenKind::RParen, "expected ')'");
    }

    fn parse_embedded_statement(&mut self) {
        if self.current().can_start_statement() {
            self.parse_statement();
        } else {
            self.error("expected statement");
        }
    }
}
