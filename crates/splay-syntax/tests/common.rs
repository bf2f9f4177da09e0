//! Shared helpers for parser snapshot tests.
#![allow(dead_code, unused_imports)]

pub use splay_syntax::parser::parse;
pub use splay_syntax::syntax::SyntaxKind;

/// Formats a parse result for snapshot testing.
///
/// Trivia tokens are printed too, so snapshots show which node owns each
/// run of whitespace.
pub fn snapshot_parse(source: &str) -> String {
    let parsed = parse(source);
    let syntax = parsed.syntax();

    let mut output = String::new();
    format_node(&syntax, &mut output, 0);

    if !parsed.ok() {
        output.push_str("---\nErrors:\n");
        for err in parsed.errors() {
            output.push_str(&format!("  - {err}\n"));
        }
    }

    output
}

fn format_node(node: &splay_syntax::SyntaxNode, out: &mut String, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!("{indent}{:?}@{:?}\n", node.kind(), node.text_range()));

    for child in node.children_with_tokens() {
        match child {
            rowan::NodeOrToken::Node(n) => format_node(&n, out, depth + 1),
            rowan::NodeOrToken::Token(t) => {
                out.push_str(&format!(
                    "{}{:?}@{:?} {:?}\n",
                    "  ".repeat(depth + 1),
                    t.kind(),
                    t.text_range(),
                    t.text()
                ));
            }
        }
    }
}

/// Returns the kinds of all nodes in the tree, in preorder.
pub fn node_kinds(source: &str) -> Vec<SyntaxKind> {
    parse(source)
        .syntax()
        .descendants()
        .map(|node| node.kind())
        .collect()
}
