//! Expression parsing using Pratt parsing.
//!
//! Operator precedence (low to high):
//! - `=` (2-1, right associative)
//! - `||` (3-4)
//! - `&&` (5-6)
//! - `==`, `!=` (7-8)
//! - `<`, `<=`, `>`, `>=` (9-10)
//! - `+`, `-` (11-12)
//! - `*`, `/`, `%` (13-14)
//! - `!`, unary `-` (15)

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::CompletedMarker;
use super::super::Parser;

impl Parser<'_, '_> {
    /// Parse an expression using Pratt parsing.
    pub(crate) fn parse_expression(&mut self) -> CompletedMarker {
        self.parse_expr_bp(0)
    }

    /// Parse expression with minimum binding power.
    pub(crate) fn parse_expr_bp(&mut self, min_bp: u8) -> CompletedMarker {
        let mut lhs = if let Some(bp) = self.current().prefix_binding_power() {
            let marker = self.start();
            self.bump();
            self.parse_expr_bp(bp);
            marker.complete(self, SyntaxKind::UnaryExpr)
        } else {
            self.parse_primary_expr()
        };

        loop {
            if let Some(next) = self.parse_postfix_expr(lhs) {
                lhs = next;
                continue;
            }

            let op = self.current();
            if let Some((l_bp, r_bp)) = op.infix_binding_power() {
                if l_bp < min_bp {
                    break;
                }

                let marker = lhs.precede(self);
                self.bump(); // operator
                self.parse_expr_bp(r_bp);
                let kind = if op == TokenKind::Eq {
                    SyntaxKind::AssignExpr
                } else {
                    SyntaxKind::BinaryExpr
                };
                lhs = marker.complete(self, kind);
                continue;
            }

            break;
        }

        lhs
    }

    /// Parse postfix expressions (member access, calls, indexing).
    pub(crate) fn parse_postfix_expr(&mut self, lhs: CompletedMarker) -> Option<CompletedMarker> {
        match self.current() {
            TokenKind::Dot => {
                let marker = lhs.precede(self);
                self.bump();
                if self.at(TokenKind::Ident) {
                    self.parse_name();
                } else {
                    self.error("expected member name");
                }
                Some(marker.complete(self, SyntaxKind::FieldExpr))
            }
            TokenKind::LParen => {
                let marker = lhs.precede(self);
                self.parse_arg_list();
                Some(marker.complete(self, SyntaxKind::CallExpr))
            }
            TokenKind::LBracket => {
                let marker = lhs.precede(self);
                self.bump();
                self.parse_expression();
                self.expect(TokenKind::RBracket, "expected ']'");
                Some(marker.complete(self, SyntaxKind::IndexExpr))
            }
            _ => None,
        }
    }

    /// Parse primary expressions (literals, names, parenthesized, `new`).
    pub(crate) fn parse_primary_expr(&mut self) -> CompletedMarker {
        match self.current() {
            TokenKind::IntLiteral
            | TokenKind::RealLiteral
            | TokenKind::StringLiteral
            | TokenKind::KwTrue
            | TokenKind::KwFalse
            | TokenKind::KwNull => {
                let marker = self.start();
                self.bump();
                marker.complete(self, SyntaxKind::Literal)
            }
            TokenKind::Ident => {
                let marker = self.start();
                self.bump();
                marker.complete(self, SyntaxKind::NameRef)
            }
            TokenKind::KwThis => {
                let marker = self.start();
                self.bump();
                marker.complete(self, SyntaxKind::ThisExpr)
            }
            TokenKind::LParen => {
                let marker = self.start();
                self.bump();
                self.parse_expression();
                self.expect(TokenKind::RParen, "expected ')'");
                marker.complete(self, SyntaxKind::ParenExpr)
            }
            TokenKind::KwNew => {
                let marker = self.start();
                self.bump();
                self.parse_type_ref();
                if self.at(TokenKind::LParen) {
                    self.parse_arg_list();
                } else {
                    self.error("expected '('");
                }
                marker.complete(self, SyntaxKind::ObjectCreationExpr)
            }
            _ => {
                let marker = self.start();
                self.error("expected expression");
                if !self.at_end()
                    && !self.is_sync_point()
                    && !matches!(self.current(), TokenKind::Comma | TokenKind::RParen)
                {
                    self.bump();
                }
                marker.complete(self, SyntaxKind::Error)
            }
        }
    }

    /// Parse argument list for calls and object creation.
    pub(crate) fn parse_arg_list(&mut self) {
        self.start_node(SyntaxKind::ArgList);
        self.bump(); // (

        while !self.at(TokenKind::RParen) && !self.at_end() && !self.is_sync_point() {
            self.start_node(SyntaxKind::Arg);

            // Named argument: `name: value`
            if self.at(TokenKind::Ident) && self.peek_kind_n(1) == TokenKind::Colon {
                self.parse_name();
                self.bump(); // :
            }

            if matches!(self.current(), TokenKind::KwRef | TokenKind::KwOut) {
                self.bump();
                if self.at(TokenKind::KwVar) {
                    // `out var name`
                    self.bump();
                }
            }

            self.parse_expression();
            self.finish_node();

            if self.at(TokenKind::Comma) {
                self.bump();
            } else {
                break;
            }
        }

        self.expect(TokenKind::RParen, "expected ')'");
        self.finish_node();
    }
}
