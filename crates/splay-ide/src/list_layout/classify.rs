//! Layout classification.

use splay_syntax::{SyntaxKind, SyntaxToken};

use super::{DelimitedList, ListKind};

/// Returns true if any separator of `list` has a line break in its attached
/// trivia.
///
/// A separator's attached trivia is the run of trivia tokens directly
/// before it and the run directly after it, so both `a,\n b` and the
/// leading-comma style `a\n, b` count as expanded. Line breaks inside items
/// (for example in a nested call) do not.
#[must_use]
pub fn is_expanded<K: ListKind>(list: &DelimitedList<K>) -> bool {
    list.separators()
        .any(|separator| attached_trivia(&separator).any(|token| is_line_break(&token)))
}

/// Returns true if `token` is whitespace containing a line-break marker.
#[must_use]
pub fn is_line_break(token: &SyntaxToken) -> bool {
    token.kind() == SyntaxKind::Whitespace && token.text().contains(['\n', '\r'])
}

fn attached_trivia(separator: &SyntaxToken) -> impl Iterator<Item = SyntaxToken> {
    let before = std::iter::successors(separator.prev_token(), SyntaxToken::prev_token)
        .take_while(|token| token.kind().is_trivia());
    let after = std::iter::successors(separator.next_token(), SyntaxToken::next_token)
        .take_while(|token| token.kind().is_trivia());
    before.chain(after)
}
