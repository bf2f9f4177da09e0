//! Plain text edits.

use text_size::{TextRange, TextSize};

/// A text edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// The range to replace.
    pub range: TextRange,
    /// The new text.
    pub new_text: String,
}

impl TextEdit {
    /// Creates an edit replacing `range` with `new_text`.
    #[must_use]
    pub fn replace(range: TextRange, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Returns the single edit turning `old` into `new`, or `None` if they
    /// are equal.
    ///
    /// The common prefix and suffix are left out of the edit. Both are cut
    /// on `char` boundaries.
    #[must_use]
    pub fn between(old: &str, new: &str) -> Option<Self> {
        if old == new {
            return None;
        }

        let prefix: usize = old
            .chars()
            .zip(new.chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();

        let max_suffix = old.len().min(new.len()) - prefix;
        let suffix: usize = old[prefix..]
            .chars()
            .rev()
            .zip(new[prefix..].chars().rev())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .scan(0usize, |total, len| {
                *total += len;
                (*total <= max_suffix).then_some(len)
            })
            .sum();

        let start = TextSize::try_from(prefix).ok()?;
        let end = TextSize::try_from(old.len() - suffix).ok()?;
        Some(Self::replace(
            TextRange::new(start, end),
            &new[prefix..new.len() - suffix],
        ))
    }
}

/// Applies non-overlapping `edits` to `text`.
#[must_use]
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> String {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by_key(|edit| edit.range.start());

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;
    for edit in sorted {
        let start = usize::from(edit.range.start());
        let end = usize::from(edit.range.end());
        if start < cursor || end > text.len() {
            continue;
        }
        out.push_str(&text[cursor..start]);
        out.push_str(&edit.new_text);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}
