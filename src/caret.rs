//! Caret Arithmetic
//!
//! Line and cursor helpers for multi-line item text. All offsets here are
//! char indices; the DOM speaks UTF-16 code units, so widget handles convert
//! at the boundary with [`utf16_to_char_offset`] / [`char_to_utf16_offset`].

/// Number of chars in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Lines split on `\n`; an empty text still has one (empty) line
pub fn lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

pub fn line_count(text: &str) -> usize {
    text.matches('\n').count() + 1
}

/// 0-based line holding the caret: line breaks before `offset`
pub fn line_index_at(text: &str, offset: usize) -> usize {
    text.chars().take(offset).filter(|&c| c == '\n').count()
}

pub fn is_first_line(text: &str, offset: usize) -> bool {
    line_index_at(text, offset) == 0
}

pub fn is_last_line(text: &str, offset: usize) -> bool {
    line_index_at(text, offset) == line_count(text) - 1
}

/// Offset just after the last char of line `line` (clamped to the last line)
pub fn line_end_offset(text: &str, line: usize) -> usize {
    let lines = lines(text);
    let line = line.min(lines.len() - 1);
    let mut position = 0;
    for (i, l) in lines.iter().enumerate().take(line + 1) {
        position += char_len(l);
        if i < line {
            position += 1; // newline
        }
    }
    position
}

pub fn end_of_first_line(text: &str) -> usize {
    line_end_offset(text, 0)
}

pub fn end_of_last_line(text: &str) -> usize {
    line_end_offset(text, usize::MAX)
}

/// More than one line, and every line is whitespace only
pub fn is_blank_multiline(text: &str) -> bool {
    let lines = lines(text);
    lines.len() > 1 && lines.iter().all(|l| l.trim().is_empty())
}

/// `text` without the char just before `offset`
pub fn remove_char_before(text: &str, offset: usize) -> String {
    if offset == 0 {
        return text.to_string();
    }
    text.chars()
        .enumerate()
        .filter(|&(i, _)| i != offset - 1)
        .map(|(_, c)| c)
        .collect()
}

/// DOM selection offset (UTF-16 units) to char index
pub fn utf16_to_char_offset(text: &str, pos_utf16: u32) -> usize {
    let mut acc: u32 = 0;
    for (i, ch) in text.chars().enumerate() {
        if acc >= pos_utf16 {
            return i;
        }
        acc += ch.len_utf16() as u32;
    }
    char_len(text)
}

/// Char index to DOM selection offset (UTF-16 units)
pub fn char_to_utf16_offset(text: &str, offset: usize) -> u32 {
    text.chars().take(offset).map(|c| c.len_utf16() as u32).sum()
}
