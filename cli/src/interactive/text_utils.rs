//! Text layout helpers for the terminal browser
//!
//! Unicode-aware width calculation, word wrapping and truncation.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap text to fit within `max_width` columns, breaking at word boundaries.
/// Words wider than a line are split by character.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        if text_width(paragraph) <= max_width {
            lines.push(paragraph.to_string());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = text_width(word);

            if word_width > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let (mut pieces, rest) = split_by_width(word, max_width);
                lines.append(&mut pieces);
                current_width = text_width(&rest);
                current = rest;
            } else if current_width > 0 && current_width + 1 + word_width > max_width {
                lines.push(std::mem::replace(&mut current, word.to_string()));
                current_width = word_width;
            } else {
                if current_width > 0 {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Split a long word into full-width pieces plus the remainder
fn split_by_width(word: &str, max_width: usize) -> (Vec<String>, String) {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0;

    for ch in word.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > max_width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            width = 0;
        }
        piece.push(ch);
        width += ch_width;
    }

    (pieces, piece)
}

/// Cut text to at most `max_width` columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = char_width(ch);
        if width + ch_width + 1 > max_width {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}

/// Terminal size in columns and rows, with a fallback when unavailable
pub fn terminal_size() -> (u16, u16) {
    crossterm::terminal::size().unwrap_or((80, 24))
}

/// Calculate the display width of text considering Unicode characters
pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Calculate the display width of a single character
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_simple() {
        assert_eq!(wrap_text("Hello world", 20), vec!["Hello world"]);
    }

    #[test]
    fn test_wrap_text_long_line() {
        let text = "Spaces that inspire productivity and define luxury.";
        let wrapped = wrap_text(text, 20);
        assert!(wrapped.len() > 1);
        for line in &wrapped {
            assert!(text_width(line) <= 20, "{:?}", line);
        }
        assert_eq!(wrapped.join(" "), text);
    }

    #[test]
    fn test_wrap_text_long_word() {
        let wrapped = wrap_text("see vedanco.official@gmail.com now", 10);
        for line in &wrapped {
            assert!(text_width(line) <= 10, "{:?}", line);
        }
        assert_eq!(wrapped.concat().replace(' ', ""), "seevedanco.official@gmail.comnow");
    }

    #[test]
    fn test_wrap_text_unicode() {
        for line in wrap_text("这是一个包含中文的测试文本", 10) {
            assert!(text_width(&line) <= 10);
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("Portfolio", 20), "Portfolio");
        assert_eq!(truncate_to_width("Portfolio", 5), "Port…");
        assert_eq!(text_width(&truncate_to_width("Vedanco Tours & Travels", 8)), 8);
    }
}
