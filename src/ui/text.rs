//! Text fitting helpers. Widths are terminal cells, so wide glyphs count twice.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Cuts `text` to at most `width` cells, ending with an ellipsis when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = prefix_within(text, width - 1).to_string();
    out.push(ELLIPSIS);
    out
}

/// Word-wraps `text` to `width` cells and keeps at most `max_lines` lines.
///
/// When text is dropped the last kept line ends with an ellipsis. Words
/// longer than a line are split.
pub fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for mut word in text.split_whitespace() {
        while !word.is_empty() {
            let word_width = word.width();
            let needed = if current_width == 0 {
                word_width
            } else {
                current_width + 1 + word_width
            };
            if needed <= width {
                if current_width > 0 {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                break;
            }
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
                continue;
            }
            // Word alone is wider than a line.
            let (head, rest) = split_word(word, width);
            lines.push(head.to_string());
            word = rest;
        }
    }
    if current_width > 0 {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let kept = prefix_within(last, width.saturating_sub(1)).trim_end();
            *last = format!("{}{}", kept, ELLIPSIS);
        }
    }
    lines
}

/// Display width of `text` in terminal cells.
pub fn width(text: &str) -> usize {
    text.width()
}

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Longest prefix of `text` that fits in `width` cells.
fn prefix_within(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (index, ch) in text.char_indices() {
        used += char_width(ch);
        if used > width {
            return &text[..index];
        }
    }
    text
}

/// Splits an over-long word at `width` cells. Always takes at least one
/// char so a glyph wider than the line still makes progress.
fn split_word(word: &str, width: usize) -> (&str, &str) {
    let head = prefix_within(word, width);
    if head.is_empty() {
        let end = word.chars().next().map_or(0, char::len_utf8);
        return word.split_at(end);
    }
    word.split_at(head.len())
}
