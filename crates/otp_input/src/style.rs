//! Terminal styling for the cell row.

use crossterm::style::{Color, ContentStyle, Stylize};
use unicode_width::UnicodeWidthStr;

/// Styles and glyphs used by [`Otp::view`](crate::Otp::view).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    /// Style for an idle cell.
    pub cell: ContentStyle,
    /// Style for a highlighted cell.
    pub highlighted: ContentStyle,
    /// Style for cells of a disabled input.
    pub disabled: ContentStyle,
    /// Style for the caret glyph.
    pub caret: ContentStyle,
    /// Shown in empty cells.
    pub placeholder: char,
    /// Drawn before each cell's character.
    pub open: String,
    /// Drawn after each cell's character.
    pub close: String,
    /// Columns between horizontally joined parts.
    pub gap: usize,
    /// Minimum width of a cell's character slot, in columns.
    pub cell_width: usize,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            cell: ContentStyle::new(),
            highlighted: ContentStyle::new().reverse(),
            disabled: ContentStyle::new().dim(),
            caret: ContentStyle::new().with(Color::Blue),
            placeholder: ' ',
            open: "[".to_string(),
            close: "]".to_string(),
            gap: 1,
            cell_width: 1,
        }
    }
}

impl Styles {
    /// Styles that emit no escape sequences, for `NO_COLOR` terminals and
    /// tests.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            highlighted: ContentStyle::new(),
            disabled: ContentStyle::new(),
            caret: ContentStyle::new(),
            ..Self::default()
        }
    }

    /// Sets the placeholder character.
    #[must_use]
    pub fn placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Sets the gap between horizontally joined parts.
    #[must_use]
    pub fn gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }
}

/// Renders `text` in `style`; an empty style leaves the text untouched.
pub(crate) fn paint(style: &ContentStyle, text: &str) -> String {
    if *style == ContentStyle::new() {
        text.to_string()
    } else {
        style.apply(text).to_string()
    }
}

/// Display width of `s`, ignoring ANSI escape sequences.
#[must_use]
pub fn visible_width(s: &str) -> usize {
    let mut plain = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }
        plain.push(c);
    }
    plain.width()
}

/// Joins multi-line blocks side by side, top-aligned, `gap` columns apart.
pub(crate) fn join_horizontal(blocks: &[String], gap: usize) -> String {
    let split: Vec<Vec<&str>> = blocks.iter().map(|b| b.lines().collect()).collect();
    let widths: Vec<usize> = split
        .iter()
        .map(|lines| lines.iter().map(|l| visible_width(l)).max().unwrap_or(0))
        .collect();
    let height = split.iter().map(Vec::len).max().unwrap_or(0);
    let spacer = " ".repeat(gap);

    let mut out = Vec::with_capacity(height);
    for row in 0..height {
        let mut line = String::new();
        for (i, lines) in split.iter().enumerate() {
            if i > 0 {
                line.push_str(&spacer);
            }
            let part = lines.get(row).copied().unwrap_or("");
            line.push_str(part);
            // The last block needs no trailing padding.
            if i + 1 < split.len() {
                line.push_str(&" ".repeat(widths[i].saturating_sub(visible_width(part))));
            }
        }
        out.push(line);
    }
    out.join("\n")
}
