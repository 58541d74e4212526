use crate::error::Result;
use crate::mask::Mask;
use crate::rgb::Rgb;
use crate::score::dominance;
use std::fmt;

/// One scored input entry.
///
/// The score is computed once, against the mask given at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    hex: String,
    rgb: Rgb,
    score: f64,
}

impl Color {
    pub fn new(hex: impl Into<String>, rgb: Rgb, mask: Mask) -> Self {
        Color {
            hex: hex.into(),
            rgb,
            score: dominance(rgb, mask),
        }
    }

    /// Decodes and scores an entry such as `#ff3c1e`.
    ///
    /// The text is kept as given, including anything after the six digits.
    pub fn parse(text: &str, mask: Mask) -> Result<Self> {
        let rgb = Rgb::from_hex(text)?;
        Ok(Color::new(text, rgb, mask))
    }

    /// Decodes and scores a raw input line.
    ///
    /// Channels come from the raw bytes; only the stored text is converted
    /// lossily.
    pub fn from_bytes(raw: &[u8], mask: Mask) -> Result<Self> {
        let rgb = Rgb::from_bytes(raw)?;
        Ok(Color::new(String::from_utf8_lossy(raw), rgb, mask))
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{:.6}", self.hex, self.rgb, self.score)
    }
}

/// Colors kept in descending score order.
///
/// Entries with equal scores stay in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `color` before the first entry with a strictly lower score.
    pub fn insert(&mut self, color: Color) {
        let index = self
            .colors
            .iter()
            .position(|existing| color.score > existing.score)
            .unwrap_or(self.colors.len());
        self.colors.insert(index, color);
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn first(&self) -> Option<&Color> {
        self.colors.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut palette = Palette::new();
        for color in iter {
            palette.insert(color);
        }
        palette
    }
}

impl Extend<Color> for Palette {
    fn extend<I: IntoIterator<Item = Color>>(&mut self, iter: I) {
        for color in iter {
            self.insert(color);
        }
    }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
