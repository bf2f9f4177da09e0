#![no_main]

use libfuzzer_sys::fuzz_target;
use splay_ide::list_layout::{
    is_expanded, locate, to_collapsed, to_expanded, Arguments, DelimitedList, ListKind,
    Parameters,
};
use splay_syntax::{parse, SyntaxNode, SyntaxTree};
use text_size::{TextRange, TextSize};

const MAX_SOURCE_BYTES: usize = 4096;

fn significant_text(node: &SyntaxNode) -> Vec<String> {
    node.descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| !token.kind().is_trivia())
        .map(|token| token.text().to_string())
        .collect()
}

fn check_toggle<K: ListKind>(tree: &SyntaxTree, range: TextRange) {
    let Some(list) = locate::<K>(tree, range) else {
        return;
    };
    let before = significant_text(list.syntax());
    let items = list.item_count();

    let expanded = to_expanded(&list, "\n");
    assert!(is_expanded(&expanded));
    check_result(tree, &list, &expanded, &before, items);

    let collapsed = to_collapsed(&list);
    assert!(!is_expanded(&collapsed));
    check_result(tree, &list, &collapsed, &before, items);
}

fn check_result<K: ListKind>(
    tree: &SyntaxTree,
    original: &DelimitedList<K>,
    rewritten: &DelimitedList<K>,
    before: &[String],
    items: usize,
) {
    assert_eq!(rewritten.item_count(), items);
    assert_eq!(significant_text(rewritten.syntax()), before);

    let replaced = tree.replace_subtree(original.syntax(), rewritten.green());
    let start = usize::from(original.text_range().start());
    let end = usize::from(original.text_range().end());
    let old_text = tree.text();
    let new_text = replaced.text();
    assert!(new_text.starts_with(&old_text[..start]));
    assert!(new_text.ends_with(&old_text[end..]));
}

fuzz_target!(|data: &[u8]| {
    let Some((&seed, rest)) = data.split_first() else {
        return;
    };
    let capped = &rest[..rest.len().min(MAX_SOURCE_BYTES)];
    let source = String::from_utf8_lossy(capped);
    let tree = parse(&source).tree();

    let offset = if source.is_empty() {
        0
    } else {
        usize::from(seed) * source.len() / 256
    };
    let Ok(offset) = TextSize::try_from(offset) else {
        return;
    };
    let range = TextRange::empty(offset);

    check_toggle::<Arguments>(&tree, range);
    check_toggle::<Parameters>(&tree, range);
});
