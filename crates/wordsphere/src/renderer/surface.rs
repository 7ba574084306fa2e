//! Rendering surface capabilities and color types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CloudError;

/// Drawable area of a rendering surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceCapabilities {
    /// Width in surface units
    pub width: f64,
    /// Height in surface units
    pub height: f64,
}

impl SurfaceCapabilities {
    /// Centre of the drawable area
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Color representation supporting multiple formats
///
/// Serialized as a lowercase name (`"white"`, `"dark_grey"`) or `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// Reset to default
    #[default]
    Reset,
    /// Standard ANSI color
    Black,
    DarkGrey,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Grey,
    /// 256-color palette
    AnsiValue(u8),
    /// True color RGB
    Rgb(u8, u8, u8),
}

const NAMED: &[(&str, Color)] = &[
    ("reset", Color::Reset),
    ("black", Color::Black),
    ("dark_grey", Color::DarkGrey),
    ("red", Color::Red),
    ("dark_red", Color::DarkRed),
    ("green", Color::Green),
    ("dark_green", Color::DarkGreen),
    ("yellow", Color::Yellow),
    ("dark_yellow", Color::DarkYellow),
    ("blue", Color::Blue),
    ("dark_blue", Color::DarkBlue),
    ("magenta", Color::Magenta),
    ("dark_magenta", Color::DarkMagenta),
    ("cyan", Color::Cyan),
    ("dark_cyan", Color::DarkCyan),
    ("white", Color::White),
    ("grey", Color::Grey),
];

impl Color {
    /// Convert to crossterm color
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        match self {
            Color::Reset => crossterm::style::Color::Reset,
            Color::Black => crossterm::style::Color::Black,
            Color::DarkGrey => crossterm::style::Color::DarkGrey,
            Color::Red => crossterm::style::Color::Red,
            Color::DarkRed => crossterm::style::Color::DarkRed,
            Color::Green => crossterm::style::Color::Green,
            Color::DarkGreen => crossterm::style::Color::DarkGreen,
            Color::Yellow => crossterm::style::Color::Yellow,
            Color::DarkYellow => crossterm::style::Color::DarkYellow,
            Color::Blue => crossterm::style::Color::Blue,
            Color::DarkBlue => crossterm::style::Color::DarkBlue,
            Color::Magenta => crossterm::style::Color::Magenta,
            Color::DarkMagenta => crossterm::style::Color::DarkMagenta,
            Color::Cyan => crossterm::style::Color::Cyan,
            Color::DarkCyan => crossterm::style::Color::DarkCyan,
            Color::White => crossterm::style::Color::White,
            Color::Grey => crossterm::style::Color::Grey,
            Color::AnsiValue(v) => crossterm::style::Color::AnsiValue(*v),
            Color::Rgb(r, g, b) => crossterm::style::Color::Rgb {
                r: *r,
                g: *g,
                b: *b,
            },
        }
    }

    /// Blend two colors with alpha (0.0 = self, 1.0 = other)
    pub fn blend(&self, other: &Color, alpha: f64) -> Color {
        let alpha = alpha.clamp(0.0, 1.0);
        match (self.to_rgb(), other.to_rgb()) {
            (Some((r1, g1, b1)), Some((r2, g2, b2))) => {
                let mix = |a: u8, b: u8| (a as f64 * (1.0 - alpha) + b as f64 * alpha).round() as u8;
                Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
            }
            _ => {
                if alpha > 0.5 {
                    *other
                } else {
                    *self
                }
            }
        }
    }

    /// Fade towards `background` as opacity drops
    pub fn with_opacity(&self, opacity: f64, background: &Color) -> Color {
        background.blend(self, opacity)
    }

    /// Convert to RGB tuple if possible
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Rgb(r, g, b) => Some((*r, *g, *b)),
            Color::Black => Some((0, 0, 0)),
            Color::White => Some((255, 255, 255)),
            Color::Red => Some((255, 0, 0)),
            Color::Green => Some((0, 255, 0)),
            Color::Blue => Some((0, 0, 255)),
            Color::Yellow => Some((255, 255, 0)),
            Color::Cyan => Some((0, 255, 255)),
            Color::Magenta => Some((255, 0, 255)),
            Color::Grey => Some((128, 128, 128)),
            Color::DarkGrey => Some((64, 64, 64)),
            Color::DarkRed => Some((128, 0, 0)),
            Color::DarkGreen => Some((0, 128, 0)),
            Color::DarkBlue => Some((0, 0, 128)),
            Color::DarkYellow => Some((128, 128, 0)),
            Color::DarkCyan => Some((0, 128, 128)),
            Color::DarkMagenta => Some((128, 0, 128)),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::AnsiValue(v) => write!(f, "ansi({})", v),
            named => {
                let name = NAMED
                    .iter()
                    .find(|(_, c)| c == named)
                    .map(|(name, _)| *name)
                    .unwrap_or("reset");
                f.write_str(name)
            }
        }
    }
}

impl FromStr for Color {
    type Err = CloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || CloudError::InvalidColor(s.to_string());

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        if let Some(value) = trimmed
            .strip_prefix("ansi(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return value.parse().map(Color::AnsiValue).map_err(|_| invalid());
        }

        let key = trimmed.to_ascii_lowercase().replace(['-', ' '], "_");
        NAMED
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, color)| *color)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for Color {
    type Error = CloudError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_and_hex() {
        assert_eq!("white".parse::<Color>().unwrap(), Color::White);
        assert_eq!("Dark-Grey".parse::<Color>().unwrap(), Color::DarkGrey);
        assert_eq!("#ff8000".parse::<Color>().unwrap(), Color::Rgb(255, 128, 0));
        assert_eq!("ansi(208)".parse::<Color>().unwrap(), Color::AnsiValue(208));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("#12345".parse::<Color>(), Err(CloudError::InvalidColor(_))));
        assert!("#gg0000".parse::<Color>().is_err());
        assert!("#+f+f+f".parse::<Color>().is_err());
        assert!("#-10000".parse::<Color>().is_err());
        assert!("chartreuse".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for color in [Color::DarkMagenta, Color::Rgb(1, 2, 3), Color::AnsiValue(7), Color::Reset] {
            assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn test_opacity_fades_to_background() {
        let bg = Color::Black;
        assert_eq!(Color::White.with_opacity(1.0, &bg), Color::Rgb(255, 255, 255));
        assert_eq!(Color::White.with_opacity(0.0, &bg), Color::Rgb(0, 0, 0));
        assert_eq!(Color::White.with_opacity(0.5, &bg), Color::Rgb(128, 128, 128));
    }
}
