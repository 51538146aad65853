//! Book list component renderer.
//!
//! Each book occupies [`ROW_HEIGHT`] lines: a cover tile spanning the first two
//! lines, "Title: ..." in bold beside the top half, "Author: ..." beside the
//! bottom half, then a blank padding line.

use crate::domain::ImageRef;
use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, AUTHOR_LABEL, COVER_COLUMN_WIDTH, COVER_GAP, COVER_MARGIN, COVER_TILE_WIDTH,
    ROW_HEIGHT, TITLE_LABEL,
};

/// Renders all book rows starting at `row` and returns the first row after them.
pub fn render_book_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_book_row(current_row, item, theme, cols);
    }
    current_row
}

/// Label, text and highlights for one text line of a book row.
struct TextLine<'a> {
    label: &'static str,
    text: &'a str,
    highlights: &'a [(usize, usize)],
    bold: bool,
}

impl TextLine<'_> {
    /// The line as it reads on screen, without styling.
    fn plain(&self) -> String {
        format!("{}{}", self.label, self.text)
    }
}

/// The title line and the author line, top to bottom.
fn text_lines(item: &DisplayItem) -> [TextLine<'_>; 2] {
    [
        TextLine {
            label: TITLE_LABEL,
            text: &item.title,
            highlights: &item.title_highlights,
            bold: true,
        },
        TextLine {
            label: AUTHOR_LABEL,
            text: &item.author,
            highlights: &item.author_highlights,
            bold: false,
        },
    ]
}

fn render_book_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    for (offset, line) in text_lines(item).iter().enumerate() {
        position_cursor(row + offset, 1);
        render_cover_line(&item.cover, offset == 1, theme);
        render_text_line(line, item.is_selected, theme, cols);
    }

    row + ROW_HEIGHT
}

/// One line of the cover tile; the lower line carries the cover's monogram.
fn render_cover_line(cover: &ImageRef, with_monogram: bool, theme: &Theme) {
    print!("{}", " ".repeat(COVER_MARGIN));
    print!("{}", Theme::bg(&theme.colors.cover_fg));
    print!("{}", Theme::fg(&theme.colors.selection_fg));
    if with_monogram {
        let inner = format!("  {}", cover_monogram(cover));
        print!("{inner:<width$}", width = COVER_TILE_WIDTH);
    } else {
        print!("{}", " ".repeat(COVER_TILE_WIDTH));
    }
    print!("{}", Theme::reset());
}

fn render_text_line(line: &TextLine<'_>, is_selected: bool, theme: &Theme, cols: usize) {
    let row_style = if is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    let text_style = if line.bold { format!("{}{row_style}", Theme::bold()) } else { row_style.clone() };

    print!("{row_style}");
    print!("{}", " ".repeat(COVER_GAP));

    if !is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", line.label);

    print!("{text_style}");
    helpers::render_highlighted_text(line.text, line.highlights, theme, &text_style);

    let used = COVER_COLUMN_WIDTH + line.plain().chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
}

/// First letter or digit of the cover asset name, uppercased.
fn cover_monogram(cover: &ImageRef) -> char {
    cover
        .as_str()
        .chars()
        .find(|c| c.is_alphanumeric())
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, author: &str) -> DisplayItem {
        DisplayItem {
            title: title.to_string(),
            author: author.to_string(),
            cover: ImageRef::new("moby_dick"),
            is_selected: false,
            title_highlights: vec![(0, 4)],
            author_highlights: vec![],
        }
    }

    #[test]
    fn rows_read_title_then_author() {
        let item = item("Moby-Dick", "Herman Melville");
        let lines = text_lines(&item);
        assert_eq!(lines[0].plain(), "Title: Moby-Dick");
        assert_eq!(lines[1].plain(), "Author: Herman Melville");
        assert!(lines[0].bold);
        assert!(!lines[1].bold);
        assert_eq!(lines[0].highlights.to_vec(), vec![(0, 4)]);
        assert!(lines[1].highlights.is_empty());
    }

    #[test]
    fn monogram_skips_punctuation() {
        assert_eq!(cover_monogram(&ImageRef::new("the_great_gatsby")), 'T');
        assert_eq!(cover_monogram(&ImageRef::new("_984")), '9');
        assert_eq!(cover_monogram(&ImageRef::new("__")), '?');
    }
}
