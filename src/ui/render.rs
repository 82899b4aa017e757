//! Menu frame painting
//!
//! A frame is the optional title line followed by one row per item, painted
//! from a fixed anchor row so that every repaint overwrites the previous one.
//! Rows are padded to a common width so the highlight bar has the same length
//! on every row; two trailing blanks cover what a wider bar may have left behind.

use crate::console::Console;
use crate::menu::item::MenuItem;
use crate::ui::theme::ColorPair;
use std::io;
use unicode_width::UnicodeWidthStr;

/// Indent in front of enabled plain items, as wide as a checkbox glyph
const PLAIN_INDENT: &str = "    ";

/// Blanks after the padded label
const ROW_TAIL: &str = "  ";

/// Everything needed to paint one frame
#[derive(Debug, Clone, Copy)]
pub struct MenuRenderData<'a> {
    pub title: &'a str,
    pub items: &'a [MenuItem],
    pub active: usize,
    pub colors: ColorPair,
    pub anchor_row: u16,
}

impl MenuRenderData<'_> {
    /// Number of screen rows the frame occupies
    pub fn rows(&self) -> u16 {
        frame_rows(self.title, self.items.len())
    }
}

/// Rows covered by a frame with `title` and `count` items
pub fn frame_rows(title: &str, count: usize) -> u16 {
    let title_rows = usize::from(!title.is_empty());
    u16::try_from(count + title_rows).unwrap_or(u16::MAX)
}

/// Common label width. Disabled items are drawn without the indent, so their
/// label may be that much wider without widening the frame.
pub fn display_width(items: &[MenuItem]) -> usize {
    items
        .iter()
        .map(|item| {
            let width = item.text.width();
            if item.enabled {
                width
            } else {
                width.saturating_sub(PLAIN_INDENT.len())
            }
        })
        .max()
        .unwrap_or(0)
}

/// Text of one item row, without colors or the line break
pub fn row_text(item: &MenuItem, width: usize) -> String {
    let prefix = match item.check.glyph() {
        Some(glyph) => glyph,
        None if item.enabled => PLAIN_INDENT,
        None => "",
    };
    let padding = width.saturating_sub(item.text.width());

    let mut row = String::with_capacity(prefix.len() + item.text.len() + padding + ROW_TAIL.len());
    row.push_str(prefix);
    row.push_str(&item.text);
    row.extend(std::iter::repeat(' ').take(padding));
    row.push_str(ROW_TAIL);
    row
}

/// Paint one frame. Returns the number of rows painted.
pub fn render_menu<C: Console + ?Sized>(console: &mut C, data: &MenuRenderData) -> io::Result<u16> {
    console.move_to(0, data.anchor_row)?;
    console.set_colors(data.colors)?;
    if !data.title.is_empty() {
        console.write_line(data.title)?;
    }

    let width = display_width(data.items);
    for (index, item) in data.items.iter().enumerate() {
        let colors = if index == data.active {
            data.colors.reversed()
        } else {
            data.colors
        };
        console.set_colors(colors)?;
        console.write(&row_text(item, width))?;
        console.write_line("")?;
    }

    Ok(data.rows())
}

/// Blank `rows` full-width lines starting at `anchor_row`, then park the cursor
/// on the anchor.
pub fn clear_menu<C: Console + ?Sized>(console: &mut C, anchor_row: u16, rows: u16) -> io::Result<()> {
    let blank = " ".repeat(console.buffer_width()? as usize);
    for offset in 0..rows {
        console.move_to(0, anchor_row.saturating_add(offset))?;
        console.write(&blank)?;
    }
    console.move_to(0, anchor_row)
}
