//! Colors and the band palette used for chart strip lines.
//!
//! Colors are written to chart JSON as CSS hex strings. The palette
//! defaults reproduce the forecast page's look: white day bands, light
//! grey alternation bands and grey label text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An RGBA color that (de)serializes as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    /// Parse `#RGB`, `#RRGGBB`, `#RRGGBBAA` or a basic color name.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex_color(hex).ok_or_else(|| ColorError::InvalidHex(s.to_string()));
        }
        named_color(s).ok_or_else(|| ColorError::UnknownName(s.to_string()))
    }

    /// Hex form; the alpha channel is omitted when opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::parse(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

fn parse_hex_color(s: &str) -> Option<Color> {
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();

    match s.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&s[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: channel(6)?,
        }),
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Color> {
    let c = match name.to_lowercase().as_str() {
        "transparent" => Color::transparent(),
        "black" => Color::rgb(0, 0, 0),
        "white" => Color::rgb(255, 255, 255),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        "lightgray" | "lightgrey" => Color::rgb(211, 211, 211),
        "blue" => Color::rgb(0, 0, 255),
        _ => return None,
    };
    Some(c)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    #[error("Unknown color name: {0}")]
    UnknownName(String),
}

impl From<ColorError> for crate::ForecastError {
    fn from(err: ColorError) -> Self {
        crate::ForecastError::InvalidConfig(err.to_string())
    }
}

/// Fill and label colors for day bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandPalette {
    /// Fill of bands that carry a day label
    pub labeled_fill: Color,
    /// Fill of the alternating unlabeled bands
    pub background_fill: Color,
    pub label_font: Color,
    pub label_background: Color,
    /// Line color of the value series
    pub series: Color,
}

impl Default for BandPalette {
    fn default() -> Self {
        Self {
            labeled_fill: Color::rgb(0xFF, 0xFF, 0xFF),
            background_fill: Color::rgb(0xF2, 0xF2, 0xF2),
            label_font: Color::rgb(0x83, 0x83, 0x83),
            label_background: Color::rgb(0xFF, 0xFF, 0xFF),
            series: Color::rgb(0x0D, 0x9E, 0xFF),
        }
    }
}
