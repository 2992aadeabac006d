use crate::error::{Error, Result};
use palette::IntoColor;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// minimum contrast ratio for title text drawn over a swatch
const MIN_CONTRAST_TITLE_TEXT: f32 = 3.0;

/// An opaque 8-bit sRGB color.
///
/// The textual forms produced here are what every renderer prints: the 7 character hex form
/// `#rrggbb`, the 3 digit shorthand `#rgb` where it is lossless, and the functional `rgb(r,g,b)`
/// form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Color {
        Self { red, green, blue }
    }

    /// Build a color from wider integers, failing with [`Error::OutOfRange`] for the first
    /// channel that does not fit in [0, 255].
    pub fn from_channels(red: i32, green: i32, blue: i32) -> Result<Color> {
        Ok(Self::new(channel(red)?, channel(green)?, channel(blue)?))
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn red(self) -> u8 {
        self.red
    }

    pub fn green(self) -> u8 {
        self.green
    }

    pub fn blue(self) -> u8 {
        self.blue
    }

    pub fn to_hex(self, lowercase: bool) -> String {
        let (r, g, b) = self.rgb();

        if lowercase {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}")
        }
    }

    /// The `#rgb` form if every channel is a repeated hex digit (`#aabbcc` -> `#abc`), otherwise
    /// exactly [`Color::to_hex`].
    pub fn to_short_hex(self, lowercase: bool) -> String {
        match self.short_digits() {
            Some((r, g, b)) if lowercase => format!("#{r:x}{g:x}{b:x}"),
            Some((r, g, b)) => format!("#{r:X}{g:X}{b:X}"),
            None => self.to_hex(lowercase),
        }
    }

    pub fn to_rgb_functional(self) -> String {
        format!("rgb({},{},{})", self.red, self.green, self.blue)
    }

    /// Hue in degrees [0, 360), saturation and lightness in [0, 1].
    pub fn hsl(self) -> (f32, f32, f32) {
        let raw = palette::Srgb::from_components(self.rgb());
        let raw_float: palette::Srgb<f32> = raw.into_format();
        let hsl: palette::Hsl = raw_float.into_color();
        let (h, s, l) = hsl.into_components();

        (h.to_positive_degrees(), s, l)
    }

    /// WCAG relative luminance, 0 for black and 1 for white.
    pub fn relative_luminance(self) -> f32 {
        let raw_float: palette::Srgb<f32> = palette::Srgb::from_components(self.rgb()).into_format();
        let linear: palette::LinSrgb = raw_float.into_linear();

        0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
    }

    pub fn contrast_ratio(self, other: Color) -> f32 {
        let (a, b) = (self.relative_luminance(), other.relative_luminance());
        let (lighter, darker) = if a > b { (a, b) } else { (b, a) };

        (lighter + 0.05) / (darker + 0.05)
    }

    /// White if it is legible as title text over this color, black otherwise.
    pub fn title_text_color(self) -> Color {
        if Color::WHITE.contrast_ratio(self) >= MIN_CONTRAST_TITLE_TEXT {
            Color::WHITE
        } else {
            Color::BLACK
        }
    }

    fn short_digits(self) -> Option<(u8, u8, u8)> {
        let digit = |c: u8| (c >> 4 == c & 0x0f).then_some(c & 0x0f);
        Some((digit(self.red)?, digit(self.green)?, digit(self.blue)?))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex(true))
    }
}

/// Parses `#rgb`, `#rrggbb` and `rgb(r,g,b)`.
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::ParseColor(s.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        let body = s
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let parts = body
            .split(',')
            .map(|part| part.trim().parse::<i32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>>>()?;

        match parts[..] {
            [r, g, b] => Color::from_channels(r, g, b),
            _ => Err(invalid()),
        }
    }
}

fn channel(value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::OutOfRange { value })
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |digits: &str| u8::from_str_radix(digits, 16).ok();

    match hex.len() {
        3 => {
            let digit = |i: usize| byte(&hex[i..=i]).map(|d| d * 17);
            Some(Color::new(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => Some(Color::new(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
        _ => None,
    }
}
