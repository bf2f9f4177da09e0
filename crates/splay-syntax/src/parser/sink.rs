//! Sink for converting parser events into a syntax tree.
//!
//! Trivia is flushed lazily: it is emitted right before the next token or
//! right before a node is finished. Whitespace that precedes the first token
//! of a node therefore lands inside that node, and whitespace that precedes
//! the end of a node lands inside the node being finished.

use crate::lexer::Token;
use crate::parser::event::Event;
use crate::syntax::SyntaxKind;

/// Builds a syntax tree from parser events.
pub struct Sink<'t, 'src> {
    tokens: &'t [Token],
    source: &'src str,
    events: Vec<Event>,
    cursor: usize,
    builder: rowan::GreenNodeBuilder<'static>,
}

impl<'t, 'src> Sink<'t, 'src> {
    /// Creates a new sink.
    pub fn new(tokens: &'t [Token], source: &'src str, events: Vec<Event>) -> Self {
        Self {
            tokens,
            source,
            events,
            cursor: 0,
            builder: rowan::GreenNodeBuilder::new(),
        }
    }

    /// Consumes the sink and returns the green tree.
    pub fn finish(mut self) -> rowan::GreenNode {
        for i in 0..self.events.len() {
            match std::mem::replace(&mut self.events[i], Event::Placeholder) {
                Event::Start {
                    kind,
                    forward_parent,
                } => {
                    // Handle forward parent chain
                    let mut kinds = vec![kind];
                    let mut idx = i;
                    let mut fp = forward_parent;

                    while let Some(fp_idx) = fp {
                        idx += fp_idx as usize;
                        if let Event::Start {
                            kind,
                            forward_parent,
                        } = std::mem::replace(&mut self.events[idx], Event::Placeholder)
                        {
                            kinds.push(kind);
                            fp = forward_parent;
                        } else {
                            break;
                        }
                    }

                    for kind in kinds.into_iter().rev() {
                        self.builder.start_node(kind.into());
                    }
                }
                Event::Token { kind } => {
                    self.eat_trivia();
                    self.token(kind);
                }
                Event::Finish => {
                    self.eat_trivia();
                    self.builder.finish_node();
                }
                Event::Placeholder => {}
            }
        }

        self.builder.finish()
    }

    /// Adds trivia (whitespace, comments) to the tree.
    fn eat_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            if !token.kind.is_trivia() {
                break;
            }
            self.token(SyntaxKind::from(token.kind));
        }
    }

    /// Adds a token to the tree.
    fn token(&mut self, kind: SyntaxKind) {
        if let Some(token) = self.tokens.get(self.cursor) {
            self.builder.token(kind.into(), token.text(self.source));
            self.cursor += 1;
        }
    }
}
