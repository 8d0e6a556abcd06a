use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cell::Cell;
use crate::cell::MAX_CELL_AGE;

/// An 8 bit per channel RGBA color
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Linearly interpolate from `self` (at `t = 0`) to `other` (at `t = 1`).
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        assert!((0f64..=1f64).contains(&t), "lerp t lives in [0, 1]");

        // interpolate a channel
        let f = |a: u8, b: u8| (a as f64 + t * (b as f64 - a as f64)).round() as u8;

        Color {
            r: f(self.r, other.r),
            g: f(self.g, other.g),
            b: f(self.b, other.b),
            a: f(self.a, other.a),
        }
    }
}

/// The display color of a live cell: newborns get `start`, cells at [`MAX_CELL_AGE`] get `end`,
/// and everything in between is interpolated on age.
///
/// Dead cells are meant to be drawn with the background color. They have age `0`, so asking
/// anyway yields `start`.
pub fn color_for(cell: Cell, start: Color, end: Color) -> Color {
    let t = cell.age() as f64 / MAX_CELL_AGE as f64;

    start.lerp(&end, t)
}

/// Formats as `#RRGGBBAA`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Colors start with '#'")]
    MissingHash,

    #[error("Expected 6 or 8 hex digits, found {got}")]
    InvalidLength { got: usize },

    #[error("Invalid hex digits \"{got}\"")]
    InvalidHex { got: String },
}

/// Parses `#RRGGBB` (opaque) and `#RRGGBBAA`
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').ok_or(ColorError::MissingHash)?;

        if !matches!(hex.len(), 6 | 8) {
            return Err(ColorError::InvalidLength { got: hex.len() });
        }

        let channel = |i: usize| -> Result<u8, ColorError> {
            let digits = hex.get(i..i + 2).ok_or_else(|| ColorError::InvalidHex {
                got: hex.to_string(),
            })?;

            u8::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHex {
                got: digits.to_string(),
            })
        };

        let a = if hex.len() == 8 { channel(6)? } else { 255 };

        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}
