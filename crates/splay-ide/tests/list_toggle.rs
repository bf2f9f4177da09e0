//! End-to-end behaviour of the list toggle on parsed trees.

use expect_test::expect;
use proptest::prelude::*;
use splay_ide::list_layout::{
    derive_indent, is_expanded, locate, to_collapsed, to_expanded, Arguments, DelimitedList,
    ListKind, Parameters,
};
use splay_syntax::{lex, parse, SyntaxNode, SyntaxTree, TokenKind};
use text_size::{TextRange, TextSize};

fn cursor(source: &str, marker: &str) -> TextRange {
    let offset = source.find(marker).expect("marker in source");
    TextRange::empty(TextSize::try_from(offset).expect("offset fits"))
}

/// Replaces `list` in `tree` and locates the new list again.
fn install<K: ListKind>(
    tree: &SyntaxTree,
    old: &DelimitedList<K>,
    new: &DelimitedList<K>,
) -> (SyntaxTree, DelimitedList<K>) {
    let start = old.text_range().start();
    let updated = tree.replace_subtree(old.syntax(), new.green());
    let list = locate::<K>(&updated, TextRange::empty(start)).expect("list after replace");
    (updated, list)
}

fn significant_tokens(node: &SyntaxNode) -> Vec<String> {
    node.descendants_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
        .filter(|token| !token.kind().is_trivia())
        .map(|token| token.text().to_string())
        .collect()
}

fn item_payloads<K: ListKind>(list: &DelimitedList<K>) -> Vec<Vec<String>> {
    list.items().map(|item| significant_tokens(&item)).collect()
}

#[test]
fn collapsed_call_expands_to_first_item_column() {
    // `a` starts at column 10.
    let source = "      Run(a, b, c);";
    let tree = parse(source).tree();
    let list = locate::<Arguments>(&tree, cursor(source, "b")).expect("list");
    assert_eq!(derive_indent(&list), 10);
    assert!(!is_expanded(&list));

    let expanded = to_expanded(&list, "\n");
    assert_eq!(
        expanded.syntax().text().to_string(),
        "(a,\n          b,\n          c)"
    );
    assert!(is_expanded(&expanded));
}

#[test]
fn expanded_call_collapses_before_formatting() {
    let source = "Run(a,\n   b,\n           c);";
    let tree = parse(source).tree();
    let list = locate::<Arguments>(&tree, cursor(source, "a,")).expect("list");
    assert!(is_expanded(&list));

    let collapsed = to_collapsed(&list);
    assert!(!is_expanded(&collapsed));
    assert_eq!(collapsed.syntax().text().to_string(), "(a,b,c)");
}

#[test]
fn nested_call_cursor_picks_inner_list() {
    let source = "Outer(first, Inner(x, y), last);";
    let tree = parse(source).tree();
    let list = locate::<Arguments>(&tree, cursor(source, "y)")).expect("list");
    assert_eq!(list.syntax().text().to_string(), "(x, y)");

    let expanded = to_expanded(&list, "\n");
    let (updated, _) = install(&tree, &list, &expanded);
    assert_eq!(
        updated.text(),
        "Outer(first, Inner(x,\n                   y), last);"
    );
}

#[test]
fn continuation_lines_get_twelve_spaces_for_column_twelve() {
    let source = "class C\n{\n    void M()\n    {\n        Run(first,\n  second,\t\tthird);\n    }\n}\n";
    let tree = parse(source).tree();
    let list = locate::<Arguments>(&tree, cursor(source, "first")).expect("list");
    assert_eq!(derive_indent(&list), 12);

    // Expanded already, so collapse, then expand from the collapsed form.
    let collapsed = to_collapsed(&list);
    let (tree, list) = install(&tree, &list, &collapsed);
    let expanded = to_expanded(&list, "\n");
    let (tree, _) = install(&tree, &list, &expanded);
    expect![[r#"
        class C
        {
            void M()
            {
                Run(first,
                    second,
                    third);
            }
        }
    "#]]
    .assert_eq(&tree.text());
}

#[test]
fn expanding_twice_is_stable() {
    let source = "    Configure(host, port, retries);";
    let tree = parse(source).tree();
    let list = locate::<Arguments>(&tree, cursor(source, "host")).expect("list");

    let once = to_expanded(&list, "\n");
    let (tree, list) = install(&tree, &list, &once);
    assert!(is_expanded(&list));

    let twice = to_expanded(&list, "\n");
    let (again, list) = install(&tree, &list, &twice);
    assert!(is_expanded(&list));
    assert_eq!(tree.text(), again.text());
}

#[test]
fn parameters_round_trip_preserves_payload() {
    let source = "public int Add(int a, ref int b, params int[] rest) { return a; }";
    let tree = parse(source).tree();
    let list = locate::<Parameters>(&tree, cursor(source, "Add")).expect("list");
    let before = item_payloads(&list);

    let expanded = to_expanded(&list, "\n");
    let (tree, list) = install(&tree, &list, &expanded);
    assert_eq!(item_payloads(&list), before);
    assert_eq!(
        tree.text(),
        "public int Add(int a,\n               ref int b,\n               params int[] rest) { return a; }"
    );

    let collapsed = to_collapsed(&list);
    let (_, list) = install(&tree, &list, &collapsed);
    assert_eq!(item_payloads(&list), before);
    assert!(!is_expanded(&list));
}

#[test]
fn single_item_and_empty_lists_are_not_applicable() {
    for source in ["Run(a);", "Run();", "void M(int a) { }", "void M() { }"] {
        let tree = parse(source).tree();
        let range = TextRange::up_to(TextSize::of(source));
        for offset in 0..source.len() {
            let offset = TextSize::try_from(offset).expect("offset fits");
            assert!(locate::<Arguments>(&tree, TextRange::empty(offset)).is_none(), "{source}");
            assert!(locate::<Parameters>(&tree, TextRange::empty(offset)).is_none(), "{source}");
        }
        assert!(locate::<Arguments>(&tree, range).is_none());
    }
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}".prop_filter("identifier, not keyword", |text| {
        matches!(lex(text).as_slice(), [token] if token.kind == TokenKind::Ident)
    })
}

fn argument() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier(),
        "[0-9]{1,3}",
        identifier().prop_map(|name| format!("{name} + 1")),
        (identifier(), identifier()).prop_map(|(a, b)| format!("Inner({a}, {b})")),
        identifier().prop_map(|name| format!("name: {name}")),
        identifier().prop_map(|name| format!("ref {name}")),
    ]
}

fn gap() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(""),
        Just(" "),
        Just("   "),
        Just("\n    "),
        Just("\r\n\t"),
        Just(" /* note */ "),
        Just(" // note\n  "),
    ]
}

fn call_source() -> impl Strategy<Value = String> {
    (
        "[ ]{0,12}",
        prop::collection::vec((gap(), argument(), gap()), 2..6),
    )
        .prop_map(|(indent, items)| {
            let args = items
                .iter()
                .map(|(before, item, after)| format!("{before}{item}{after}"))
                .collect::<Vec<_>>()
                .join(",");
            format!("{indent}Call({args});")
        })
}

proptest! {
    #[test]
    fn toggles_set_the_layout_they_promise(source in call_source()) {
        let tree = parse(&source).tree();
        let list = locate::<Arguments>(&tree, cursor(&source, "Call")).expect("list");
        prop_assert!(is_expanded(&to_expanded(&list, "\n")));
        prop_assert!(!is_expanded(&to_collapsed(&list)));
    }

    #[test]
    fn toggles_preserve_items(source in call_source()) {
        let tree = parse(&source).tree();
        let list = locate::<Arguments>(&tree, cursor(&source, "Call")).expect("list");
        let payloads = item_payloads(&list);

        let expanded = to_expanded(&list, "\n");
        prop_assert_eq!(expanded.item_count(), list.item_count());
        prop_assert_eq!(item_payloads(&expanded), payloads.clone());

        let collapsed = to_collapsed(&list);
        prop_assert_eq!(collapsed.item_count(), list.item_count());
        prop_assert_eq!(item_payloads(&collapsed), payloads);
    }

    #[test]
    fn round_trips_keep_payload_and_reparse_cleanly(source in call_source()) {
        let tree = parse(&source).tree();
        let list = locate::<Arguments>(&tree, cursor(&source, "Call")).expect("list");
        let payloads = item_payloads(&list);

        let expanded = to_expanded(&list, "\n");
        let (tree, list) = install(&tree, &list, &expanded);
        let collapsed = to_collapsed(&list);
        let (tree, list) = install(&tree, &list, &collapsed);
        prop_assert_eq!(item_payloads(&list), payloads);

        let reparsed = parse(&tree.text());
        prop_assert!(reparsed.ok(), "errors: {:?}", reparsed.errors());
    }

    #[test]
    fn expanded_items_start_at_first_item_column(source in call_source()) {
        let tree = parse(&source).tree();
        let list = locate::<Arguments>(&tree, cursor(&source, "Call")).expect("list");
        let column = derive_indent(&list);

        let expanded = to_expanded(&list, "\n");
        let (tree, _) = install(&tree, &list, &expanded);

        let text = tree.text();
        for line in text.lines().skip(1) {
            let indent = line.len() - line.trim_start_matches(' ').len();
            prop_assert_eq!(indent, column);
        }
    }
}
