#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 8-bit color stored as `(r, g, b, a)`. Converts losslessly to and from
/// packed `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u32", into = "u32"))]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);
    pub const MAGENTA: Color = Color(255, 0, 255, 255);
    pub const BLUE: Color = Color(0, 0, 255, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }
    pub fn from_argb(argb: u32) -> Self {
        Color(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }
    pub fn to_argb(self) -> u32 {
        (self.3 as u32) << 24 | (self.0 as u32) << 16 | (self.1 as u32) << 8 | self.2 as u32
    }
    /// Parses `#RRGGBB` or `#RRGGBBAA`. Malformed channels read as 0; any
    /// other length yields opaque black.
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.trim_start_matches('#');
        let channel = |i: usize| {
            digits
                .get(i * 2..i * 2 + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .unwrap_or(0)
        };
        match digits.len() {
            6 => Color(channel(0), channel(1), channel(2), 255),
            8 => Color(channel(0), channel(1), channel(2), channel(3)),
            _ => Color::BLACK,
        }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    /// Blends towards `other` by `ratio`: 0.0 returns `self`, 1.0 returns
    /// `other`. Each channel is `c1 * (1 - ratio) + c2 * ratio` truncated to
    /// an integer, without gamma correction.
    pub fn blend(self, other: Color, ratio: f32) -> Color {
        let inverse = 1.0 - ratio;
        let mix = |a: u8, b: u8| (a as f32 * inverse + b as f32 * ratio) as u8;
        Color(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
            mix(self.3, other.3),
        )
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color::from_argb(argb)
    }
}

impl From<Color> for u32 {
    fn from(c: Color) -> Self {
        c.to_argb()
    }
}
