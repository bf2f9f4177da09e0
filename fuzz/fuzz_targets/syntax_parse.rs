#![no_main]

use libfuzzer_sys::fuzz_target;
use splay_syntax::parse;

const MAX_SOURCE_BYTES: usize = 8192;

fuzz_target!(|data: &[u8]| {
    let capped = &data[..data.len().min(MAX_SOURCE_BYTES)];
    let source = String::from_utf8_lossy(capped);

    let parsed = parse(&source);
    let tree = parsed.tree();
    assert_eq!(tree.text(), source, "parse must be lossless");
    for error in parsed.errors() {
        assert!(tree.root().text_range().contains_range(error.range));
    }
});
