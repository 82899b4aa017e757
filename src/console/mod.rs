//! Terminal boundary used by the renderer and the selection loop
//!
//! Everything the menu needs from a terminal goes through [`Console`]: cursor
//! placement, the active color pair, cursor visibility, text output and reading
//! one key at a time. Two implementations ship with the crate:
//!
//! - [`CrosstermConsole`]: a real terminal driven through crossterm
//! - [`MockConsole`]: an in-memory screen with scripted keys, for tests

pub mod mock;
pub mod term;

pub use mock::MockConsole;
pub use term::CrosstermConsole;

use crate::ui::theme::ColorPair;
use std::io;

/// The key events a menu reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Enter,
    /// Any other key; ignored by the menu
    Other,
}

/// A character terminal with an addressable cursor
pub trait Console {
    /// Current cursor position as `(column, row)`
    fn cursor_position(&mut self) -> io::Result<(u16, u16)>;

    fn move_to(&mut self, column: u16, row: u16) -> io::Result<()>;

    /// Color pair that subsequent writes use
    fn colors(&self) -> ColorPair;

    fn set_colors(&mut self, colors: ColorPair) -> io::Result<()>;

    fn cursor_visible(&self) -> bool;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Write text at the cursor without a line break
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write text followed by a line break; the cursor ends at column 0 of the next row
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Width of the screen buffer in columns
    fn buffer_width(&mut self) -> io::Result<u16>;

    /// Block until one key is pressed
    fn read_key(&mut self) -> io::Result<MenuKey>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
