//! The parser produces a lossless tree.

use proptest::{prop_assert_eq, proptest};
use splay_syntax::parse;

proptest! {
    #[test]
    fn renders_the_same(s in r".*") {
        let tree = parse(&s).tree();
        prop_assert_eq!(s, tree.text());
    }

    #[test]
    fn renders_brace_soup_the_same(s in r"[a-z(),;{}=\s/*.\[\]:!-]{0,64}") {
        let tree = parse(&s).tree();
        prop_assert_eq!(s, tree.text());
    }
}

#[test]
fn unterminated_block_comment() {
    let s = "Run(a, /* b";
    assert_eq!(parse(s).tree().text(), s);
}

#[test]
fn stray_closing_delimiters() {
    let s = ") ) } Run(a,, b));";
    assert_eq!(parse(s).tree().text(), s);
}

#[test]
fn trailing_whitespace() {
    let s = "Run(a, b); \n\t";
    assert_eq!(parse(s).tree().text(), s);
}
