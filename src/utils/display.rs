//! Terminal display utilities for CLI output formatting.
//!
//! Handles terminal width detection and unicode-aware truncation for the
//! glossary table.

use std::io::{self, IsTerminal};
use std::sync::OnceLock;
use terminal_size::terminal_size;
use unicode_width::UnicodeWidthChar;

/// Terminal information with cached size and capabilities.
#[derive(Debug, Clone)]
pub struct Terminal {
    width: usize,
    is_tty: bool,
}

static TERMINAL_INFO: OnceLock<Terminal> = OnceLock::new();

/// Default width when terminal size cannot be determined.
pub const DEFAULT_WIDTH: usize = 100;

/// Get the global terminal information, initialized on first call.
pub fn terminal_info() -> &'static Terminal {
    TERMINAL_INFO.get_or_init(|| Terminal {
        width: terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(DEFAULT_WIDTH),
        is_tty: io::stdout().is_terminal(),
    })
}

/// Get the current terminal width in characters.
#[inline]
pub fn terminal_width() -> usize {
    terminal_info().width
}

/// Check if stdout is a terminal.
#[inline]
pub fn is_terminal() -> bool {
    terminal_info().is_tty
}

fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(1)).sum()
}

/// Truncate text to fit within the specified width using unicode-aware truncation.
///
/// Appends an ellipsis when truncation occurred.
///
/// # Examples
///
/// ```
/// use course_glossary::utils::truncate_with_ellipsis;
///
/// assert_eq!(truncate_with_ellipsis("Hello World", 8), "Hello...");
/// assert_eq!(truncate_with_ellipsis("Hi", 8), "Hi");
/// ```
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if display_width(text) <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut used = 0;
    let mut truncated = String::new();

    for c in text.chars() {
        let w = c.width().unwrap_or(1);
        if used + w > budget {
            break;
        }
        used += w;
        truncated.push(c);
    }

    format!("{}...", truncated)
}

/// Truncate text at the last word boundary that fits.
///
/// Falls back to [`truncate_with_ellipsis`] when no boundary fits.
pub fn truncate_at_word(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if display_width(text) <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut best: Option<usize> = None;
    let mut used = 0;

    for (idx, c) in text.char_indices() {
        if c == ' ' && used <= budget {
            best = Some(idx);
        }
        used += c.width().unwrap_or(1);
        if used > budget {
            break;
        }
    }

    match best {
        Some(idx) if idx > 0 => format!("{}...", text[..idx].trim_end()),
        _ => truncate_with_ellipsis(text, max_width),
    }
}

/// Column widths for the glossary table.
///
/// Returns (index_width, term_width, definition_width, modules_width).
pub fn term_table_columns(terminal_width: usize) -> (usize, usize, usize, usize) {
    let index = 4;
    // Borders and padding of a four column UTF-8 table
    let chrome = 13;
    let available = terminal_width.saturating_sub(index + chrome).max(40);

    let term = (available / 4).clamp(12, 40);
    let modules = (available / 5).clamp(10, 30);
    let definition = available.saturating_sub(term + modules).max(20);

    (index, term, definition, modules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_basic() {
        assert_eq!(truncate_with_ellipsis("Hello", 10), "Hello");
        assert_eq!(truncate_with_ellipsis("Hello World", 8), "Hello...");
    }

    #[test]
    fn test_truncate_with_ellipsis_empty() {
        assert_eq!(truncate_with_ellipsis("", 10), "");
        assert_eq!(truncate_with_ellipsis("Hello", 0), "");
        assert_eq!(truncate_with_ellipsis("Hello", 1), "...");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_with_ellipsis("数据结构与算法", 7), "数据...");
    }

    #[test]
    fn test_truncate_at_word() {
        assert_eq!(truncate_at_word("The quick brown fox", 12), "The quick...");
        assert_eq!(truncate_at_word("Short", 12), "Short");
        assert_eq!(truncate_at_word("Supercalifragilistic", 10), "Superca...");
    }

    #[test]
    fn test_term_table_columns_fit() {
        let (index, term, definition, modules) = term_table_columns(120);
        assert_eq!(index, 4);
        assert!(term >= 12);
        assert!(modules >= 10);
        assert!(index + term + definition + modules + 13 <= 120);
    }
}
