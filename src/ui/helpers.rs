//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used across components: cursor positioning, match
//! highlighting with ANSI escape management, and character-safe truncation.
//! All text positions are character indices, never byte indices.

use crate::ui::theme::Theme;

const ELLIPSIS: &str = "...";

/// Positions the cursor at a 1-indexed row and column (`\u{1b}[{row};{col}H`).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `max_chars` characters.
///
/// Text that does not fit keeps its leading characters followed by `...`. The
/// second value is how many characters of the original text survive, so match
/// ranges can be clipped to it.
///
/// # Example
///
/// ```rust
/// use bookshelf::ui::helpers::truncate_chars;
///
/// assert_eq!(truncate_chars("Moby-Dick", 20), ("Moby-Dick".to_string(), 9));
/// assert_eq!(truncate_chars("Moby-Dick", 7), ("Moby...".to_string(), 4));
/// ```
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> (String, usize) {
    let len = text.chars().count();
    if len <= max_chars {
        return (text.to_string(), len);
    }

    let ellipsis_len = ELLIPSIS.len();
    if max_chars <= ellipsis_len {
        return (text.chars().take(max_chars).collect(), max_chars);
    }

    let kept = max_chars - ellipsis_len;
    let mut truncated: String = text.chars().take(kept).collect();
    truncated.push_str(ELLIPSIS);
    (truncated, kept)
}

/// Renders text with highlighted character ranges for query matches.
///
/// Highlighted sections use the match highlight colors; after each one the
/// escape sequences in `restore_style` are printed so the rest of the row
/// keeps its styling (bold, row colors, selection background).
///
/// Ranges past the end of `text` are ignored.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore_style: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.max(current_pos).min(chars.len());
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{restore_style}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_chars("1984", 4), ("1984".to_string(), 4));
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(
            truncate_chars("To Kill a Mockingbird", 13),
            ("To Kill a ...".to_string(), 10)
        );
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(truncate_chars("Ödön Ödön", 9), ("Ödön Ödön".to_string(), 9));
        assert_eq!(truncate_chars("Ödön Ödön", 7), ("Ödön...".to_string(), 4));
    }

    #[test]
    fn tiny_budget_drops_ellipsis() {
        assert_eq!(truncate_chars("Moby-Dick", 3), ("Mob".to_string(), 3));
        assert_eq!(truncate_chars("Moby-Dick", 0), (String::new(), 0));
    }
}
