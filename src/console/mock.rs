// In-memory console for tests and headless runs

use super::{Console, MenuKey};
use crate::ui::theme::{ColorPair, DEFAULT_COLORS};
use std::collections::VecDeque;
use std::io;

/// One character cell of the mock screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub colors: ColorPair,
}

/// Mock console with a growable screen and a scripted key queue.
///
/// Writes never wrap or scroll; rows are created on demand. Reading a key after
/// the script is exhausted fails with `UnexpectedEof`.
#[derive(Debug, Clone)]
pub struct MockConsole {
    rows: Vec<Vec<Cell>>,
    column: u16,
    row: u16,
    width: u16,
    colors: ColorPair,
    cursor_visible: bool,
    keys: VecDeque<MenuKey>,
    keys_read: usize,
}

impl MockConsole {
    pub fn new() -> Self {
        MockConsole {
            rows: Vec::new(),
            column: 0,
            row: 0,
            width: 80,
            colors: DEFAULT_COLORS,
            cursor_visible: true,
            keys: VecDeque::new(),
            keys_read: 0,
        }
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn with_colors(mut self, colors: ColorPair) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_cursor(mut self, column: u16, row: u16) -> Self {
        self.column = column;
        self.row = row;
        self
    }

    pub fn with_keys(mut self, keys: impl IntoIterator<Item = MenuKey>) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Queue more keys for the next run
    pub fn push_keys(&mut self, keys: impl IntoIterator<Item = MenuKey>) {
        self.keys.extend(keys);
    }

    /// Number of keys consumed so far
    pub fn keys_read(&self) -> usize {
        self.keys_read
    }

    /// Keys still waiting in the script
    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    /// Text of a screen row with trailing blanks removed
    pub fn line(&self, row: u16) -> String {
        self.raw_line(row).trim_end().to_string()
    }

    /// Text of a screen row exactly as painted
    pub fn raw_line(&self, row: u16) -> String {
        self.rows
            .get(row as usize)
            .map(|cells| cells.iter().map(|cell| cell.ch).collect())
            .unwrap_or_default()
    }

    /// Every row, trimmed
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows.len() as u16).map(|row| self.line(row)).collect()
    }

    pub fn cell(&self, column: u16, row: u16) -> Option<Cell> {
        self.rows
            .get(row as usize)
            .and_then(|cells| cells.get(column as usize))
            .copied()
    }

    fn put(&mut self, ch: char) {
        let row = self.row as usize;
        let column = self.column as usize;
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let blank = Cell {
            ch: ' ',
            colors: self.colors,
        };
        let cells = &mut self.rows[row];
        if cells.len() <= column {
            cells.resize(column + 1, blank);
        }
        cells[column] = Cell {
            ch,
            colors: self.colors,
        };
        self.column = self.column.saturating_add(1);
    }
}

impl Default for MockConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for MockConsole {
    fn cursor_position(&mut self) -> io::Result<(u16, u16)> {
        Ok((self.column, self.row))
    }

    fn move_to(&mut self, column: u16, row: u16) -> io::Result<()> {
        self.column = column;
        self.row = row;
        Ok(())
    }

    fn colors(&self) -> ColorPair {
        self.colors
    }

    fn set_colors(&mut self, colors: ColorPair) -> io::Result<()> {
        self.colors = colors;
        Ok(())
    }

    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        for ch in text.chars() {
            self.put(ch);
        }
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.column = 0;
        self.row = self.row.saturating_add(1);
        Ok(())
    }

    fn buffer_width(&mut self) -> io::Result<u16> {
        Ok(self.width)
    }

    fn read_key(&mut self) -> io::Result<MenuKey> {
        let key = self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "mock console ran out of keys")
        })?;
        self.keys_read += 1;
        Ok(key)
    }
}
