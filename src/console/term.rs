//! crossterm-backed [`Console`]

use super::{Console, MenuKey};
use crate::ui::theme::{ColorPair, DEFAULT_COLORS};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::{Colors, Print, ResetColor, SetColors},
    terminal::{self, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Stdout, Write};

/// A real terminal.
///
/// Terminals cannot report their current colors, so the console remembers the
/// last pair it set, starting from a startup pair. Setting the startup pair
/// again resets the terminal to its own default colors.
pub struct CrosstermConsole<W: Write> {
    out: W,
    colors: ColorPair,
    startup_colors: ColorPair,
    cursor_visible: bool,
}

impl CrosstermConsole<Stdout> {
    pub fn stdout() -> Self {
        CrosstermConsole::new(io::stdout())
    }
}

impl<W: Write> CrosstermConsole<W> {
    pub fn new(out: W) -> Self {
        CrosstermConsole {
            out,
            colors: DEFAULT_COLORS,
            startup_colors: DEFAULT_COLORS,
            cursor_visible: true,
        }
    }

    /// Override the pair assumed to be the terminal's default
    pub fn with_startup_colors(mut self, colors: ColorPair) -> Self {
        self.colors = colors;
        self.startup_colors = colors;
        self
    }
}

impl<W: Write> Console for CrosstermConsole<W> {
    fn cursor_position(&mut self) -> io::Result<(u16, u16)> {
        self.out.flush()?;
        cursor::position()
    }

    fn move_to(&mut self, column: u16, row: u16) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(column, row))
    }

    fn colors(&self) -> ColorPair {
        self.colors
    }

    fn set_colors(&mut self, colors: ColorPair) -> io::Result<()> {
        if colors == self.startup_colors {
            queue!(self.out, ResetColor)?;
        } else {
            queue!(
                self.out,
                SetColors(Colors::new(colors.fore, colors.back))
            )?;
        }
        self.colors = colors;
        Ok(())
    }

    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            queue!(self.out, cursor::Show)?;
        } else {
            queue!(self.out, cursor::Hide)?;
        }
        self.cursor_visible = visible;
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        // Cooked mode: the tty maps "\n" to CR LF.
        queue!(self.out, Print(text), Print("\n"))
    }

    fn buffer_width(&mut self) -> io::Result<u16> {
        terminal::size().map(|(columns, _)| columns)
    }

    fn read_key(&mut self) -> io::Result<MenuKey> {
        self.out.flush()?;
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return translate_key(key);
                }
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Map a crossterm key to a [`MenuKey`]. Ctrl+C becomes an `Interrupted` error
/// because raw mode keeps the terminal from raising SIGINT.
fn translate_key(key: KeyEvent) -> io::Result<MenuKey> {
    match key.code {
        KeyCode::Up => Ok(MenuKey::Up),
        KeyCode::Down => Ok(MenuKey::Down),
        KeyCode::Enter => Ok(MenuKey::Enter),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Err(
            io::Error::new(io::ErrorKind::Interrupted, "menu interrupted by Ctrl+C"),
        ),
        _ => Ok(MenuKey::Other),
    }
}

/// Raw mode for the lifetime of the guard
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    fn output(console: CrosstermConsole<Vec<u8>>) -> String {
        String::from_utf8(console.out).unwrap()
    }

    #[test]
    fn test_translate_keys() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(translate_key(key(KeyCode::Up)).unwrap(), MenuKey::Up);
        assert_eq!(translate_key(key(KeyCode::Down)).unwrap(), MenuKey::Down);
        assert_eq!(translate_key(key(KeyCode::Enter)).unwrap(), MenuKey::Enter);
        assert_eq!(translate_key(key(KeyCode::Char('c'))).unwrap(), MenuKey::Other);
        assert_eq!(translate_key(key(KeyCode::Esc)).unwrap(), MenuKey::Other);
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let err = translate_key(key).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);
    }

    #[test]
    fn test_startup_colors_reset_terminal() {
        let mut console = CrosstermConsole::new(Vec::new());
        console.set_colors(DEFAULT_COLORS).unwrap();
        assert_eq!(output(console), "\x1b[0m");
    }

    #[test]
    fn test_other_colors_are_tracked() {
        let mut console = CrosstermConsole::new(Vec::new());
        let pair = ColorPair::new(Color::Blue, Color::White);
        console.set_colors(pair).unwrap();
        assert_eq!(console.colors(), pair);
        assert!(!output(console).is_empty());
    }

    #[test]
    fn test_cursor_visibility_is_tracked() {
        let mut console = CrosstermConsole::new(Vec::new());
        assert!(console.cursor_visible());
        console.set_cursor_visible(false).unwrap();
        assert!(!console.cursor_visible());
        assert_eq!(output(console), "\x1b[?25l");
    }

    #[test]
    fn test_write_line_appends_newline() {
        let mut console = CrosstermConsole::new(Vec::new());
        console.write("ab").unwrap();
        console.write_line("cd").unwrap();
        assert_eq!(output(console), "abcd\n");
    }
}
