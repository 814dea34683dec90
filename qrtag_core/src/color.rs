use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::Error;

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Construct an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, u8::MAX)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Get the same color with its alpha channel scaled by `coverage`, clamped to `0.0..=1.0`.
    /// # Example
    /// ```
    /// use qrtag_core::Color;
    /// assert_eq!(Color::BLACK.with_coverage(0.0).a, 0);
    /// assert_eq!(Color::BLACK.with_coverage(1.0).a, 255);
    /// ```
    pub fn with_coverage(self, coverage: f32) -> Self {
        let coverage = coverage.clamp(0.0, 1.0);
        Self {
            a: (self.a as f32 * coverage).round() as u8,
            ..self
        }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(value: Color) -> Self {
        Rgba([value.r, value.g, value.b, value.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(value: Rgba<u8>) -> Self {
        let [r, g, b, a] = value.0;
        Self { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != u8::MAX {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse `#rrggbb` or `#rrggbbaa`, the leading `#` being optional.
    /// # Example
    /// ```
    /// use qrtag_core::Color;
    /// assert_eq!("#ffbb01".parse::<Color>().unwrap(), Color::rgb(255, 187, 1));
    /// assert_eq!("36363680".parse::<Color>().unwrap(), Color::rgba(54, 54, 54, 128));
    /// assert!("#fff".parse::<Color>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |k: usize| u8::from_str_radix(&hex[2 * k..2 * k + 2], 16).map_err(|_| invalid());
        let alpha = if hex.len() == 8 { channel(3)? } else { u8::MAX };
        Ok(Self::rgba(channel(0)?, channel(1)?, channel(2)?, alpha))
    }
}
