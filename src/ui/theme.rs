use crate::menu::errors::{MenuError, Result};
use crossterm::style::Color;

/// Background/foreground pair used to paint menu rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub back: Color,
    pub fore: Color,
}

impl ColorPair {
    pub const fn new(back: Color, fore: Color) -> Self {
        ColorPair { back, fore }
    }

    /// Same pair with background and foreground swapped (highlight bar)
    pub const fn reversed(self) -> Self {
        ColorPair {
            back: self.fore,
            fore: self.back,
        }
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        DEFAULT_COLORS
    }
}

/// Classic console defaults, assumed when the terminal cannot be asked
pub const DEFAULT_COLORS: ColorPair = ColorPair::new(Color::Black, Color::Grey);

/// Parse a color name (`dark_blue`, `Dark-Blue`, `gray`, `reset`) or `#rrggbb`
pub fn parse_color(name: &str) -> Result<Color> {
    let unknown = || MenuError::UnknownColor {
        name: name.to_string(),
    };

    if let Some(hex) = name.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(unknown());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| unknown())
        };
        return Ok(Color::Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        });
    }

    let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
    let color = match normalized.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Black,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        "red" => Color::Red,
        "dark_red" => Color::DarkRed,
        "green" => Color::Green,
        "dark_green" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "dark_yellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "dark_blue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "dark_magenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "dark_cyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        _ => return Err(unknown()),
    };
    Ok(color)
}
