/// Color values, random generation and overlay contrast.
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::error::PaletteError;

/// Largest 24-bit RGB value.
pub const MAX_COLOR: u32 = 0xFF_FFFF;

/// A 24-bit RGB color. `Display` gives the canonical `#rrggbb` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }

    /// Uppercased form shown on swatches, e.g. `#A1B2C3`.
    pub fn display_hex(self) -> String {
        format!("#{:06X}", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if !is_valid_hex(value) {
            return Err(PaletteError::InvalidHex(s.to_string()));
        }
        u32::from_str_radix(&value[1..], 16)
            .map(Self)
            .map_err(|_| PaletteError::InvalidHex(s.to_string()))
    }
}

#[cfg(test)]
impl Color {
    pub(crate) const BLACK: Color = Color(0x000000);
    pub(crate) const WHITE: Color = Color(MAX_COLOR);

    pub(crate) fn from_value(value: u32) -> Option<Self> {
        (value <= MAX_COLOR).then_some(Self(value))
    }

    pub(crate) fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
    }

    pub(crate) fn value(self) -> u32 {
        self.0
    }
}

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Entropy for color generation.
pub trait RandomSource {
    /// Returns a value in `0..=MAX_COLOR`.
    fn next_color_value(&mut self) -> u32;
}

/// Thread-local RNG, the default source.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_color_value(&mut self) -> u32 {
        rand::rng().random_range(0..=MAX_COLOR)
    }
}

/// Reproducible source for `--seed`.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_color_value(&mut self) -> u32 {
        self.rng.random_range(0..=MAX_COLOR)
    }
}

/// Generate a uniformly random color.
pub fn generate_color(source: &mut dyn RandomSource) -> Color {
    Color(source.next_color_value() & MAX_COLOR)
}

/// Which overlay text reads best on top of a swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContrastClass {
    /// Light background, draw dark text.
    DarkText,
    /// Dark background, draw light text.
    LightText,
}

impl fmt::Display for ContrastClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContrastClass::DarkText => f.write_str("dark-text"),
            ContrastClass::LightText => f.write_str("light-text"),
        }
    }
}

/// Perceptual luminance in `0.0..=1.0` using the 0.299/0.587/0.114 weights.
pub fn luminance(color: Color) -> f64 {
    let (r, g, b) = color.rgb();
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0
}

pub fn contrast_class(color: Color) -> ContrastClass {
    if luminance(color) > 0.5 {
        ContrastClass::DarkText
    } else {
        ContrastClass::LightText
    }
}

/// Replays a fixed list of values, wrapping around at the end.
#[cfg(test)]
pub(crate) struct SequenceRandom {
    values: Vec<u32>,
    next: usize,
}

#[cfg(test)]
impl SequenceRandom {
    pub(crate) fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for SequenceRandom {
    fn next_color_value(&mut self) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
