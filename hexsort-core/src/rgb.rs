use crate::error::{HexsortError, Result};
use std::fmt;
use std::ops::Index;

/// Minimum length of a color entry: `#` followed by six hex digits.
pub const MIN_HEX_LEN: usize = 7;

/// An RGB triple decoded from a `#rrggbb` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb([r, g, b])
    }

    /// Decodes the three channels of a `#rrggbb` entry.
    ///
    /// Decoding is permissive: each two-byte window keeps its leading hex
    /// digits and stops at the first byte that is not one, so `g5` reads as
    /// 0 and `5g` as 5. Only the length and the leading `#` are checked.
    /// Anything after the seventh byte is ignored.
    pub fn from_hex(text: &str) -> Result<Self> {
        Self::from_bytes(text.as_bytes())
    }

    /// Same as [`Rgb::from_hex`], on raw input bytes that need not be UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.first() != Some(&b'#') {
            return Err(HexsortError::MissingPrefix);
        }
        if bytes.len() < MIN_HEX_LEN {
            return Err(HexsortError::LineTooShort { len: bytes.len() });
        }

        Ok(Rgb([
            decode_pair(&bytes[1..3]),
            decode_pair(&bytes[3..5]),
            decode_pair(&bytes[5..7]),
        ]))
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{}", hex::encode(self.0))
    }

    pub fn red(&self) -> u8 {
        self.0[0]
    }

    pub fn green(&self) -> u8 {
        self.0[1]
    }

    pub fn blue(&self) -> u8 {
        self.0[2]
    }

    /// Sum of all three channels, 0..=765.
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&c| u32::from(c)).sum()
    }
}

impl Index<usize> for Rgb {
    type Output = u8;

    fn index(&self, channel: usize) -> &u8 {
        &self.0[channel]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0[0], self.0[1], self.0[2])
    }
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn decode_pair(window: &[u8]) -> u8 {
    window
        .iter()
        .map_while(|&b| hex_digit(b))
        .fold(0, |acc, digit| (acc << 4) | digit)
}
