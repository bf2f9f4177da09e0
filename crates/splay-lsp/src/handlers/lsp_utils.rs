//! LSP conversion helpers.
//!
//! LSP positions count columns in UTF-16 code units; the syntax tree counts
//! bytes. Everything crossing the protocol boundary goes through here.

use text_size::{TextRange, TextSize};
use tower_lsp::lsp_types::{Position, Range};

pub(crate) fn offset_to_position(content: &str, offset: TextSize) -> Position {
    let offset = usize::from(offset);
    let mut line = 0u32;
    let mut character = 0u32;

    for (i, c) in content.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            character = 0;
        } else {
            character += c.len_utf16() as u32;
        }
    }

    Position { line, character }
}

pub(crate) fn position_to_offset(content: &str, position: Position) -> Option<TextSize> {
    let mut line = 0u32;
    let mut character = 0u32;

    for (i, c) in content.char_indices() {
        if line == position.line && character >= position.character {
            return TextSize::try_from(i).ok();
        }
        if c == '\n' {
            if line == position.line {
                // Past the end of the line: clamp to the line break.
                return TextSize::try_from(i).ok();
            }
            line += 1;
            character = 0;
        } else {
            character += c.len_utf16() as u32;
        }
    }

    if line == position.line {
        TextSize::try_from(content.len()).ok()
    } else {
        None
    }
}

pub(crate) fn range_to_text_range(content: &str, range: Range) -> Option<TextRange> {
    let start = position_to_offset(content, range.start)?;
    let end = position_to_offset(content, range.end)?;
    (start <= end).then(|| TextRange::new(start, end))
}

pub(crate) fn text_range_to_range(content: &str, range: TextRange) -> Range {
    Range {
        start: offset_to_position(content, range.start()),
        end: offset_to_position(content, range.end()),
    }
}
