//! Terminal cell widths
//!
//! Measuring, clipping and painting all go through [`char_width`], so a
//! field's cached width always matches the cells it is drawn into.

use unicode_width::UnicodeWidthChar;

/// Cells taken by `ch`: 2 for wide (CJK, most emoji), 0 for control and
/// combining characters
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Cells taken by one line of text
pub fn display_width(line: &str) -> usize {
    line.chars().map(char_width).sum()
}

/// The part of `line` covering cells `start..start + size`.
///
/// A wide character cut by either edge is replaced by a space for each of
/// its cells that falls inside the range, so the result is never wider
/// than `size`.
pub fn slice_columns(line: &str, start: usize, size: usize) -> String {
    let end = start + size;
    let mut out = String::new();
    let mut x = 0;
    for ch in line.chars() {
        if x >= end {
            break;
        }
        let next = x + char_width(ch);
        if next <= start {
            x = next;
            continue;
        }
        if x < start || next > end {
            let shown = next.min(end) - x.max(start);
            out.extend(std::iter::repeat(' ').take(shown));
        } else if next > x || !out.is_empty() {
            // Zero-width characters only attach to something already shown
            out.push(ch);
        }
        x = next;
    }
    out
}
