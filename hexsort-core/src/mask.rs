//! Channel selector for scoring.
//!
//! A mask is a 3-bit RGB pattern: bit 2 selects red, bit 1 green and bit 0
//! blue. Selected channels are the "pure" hue, the others its "negative".

use std::fmt;

/// Index of a channel inside an [`Rgb`](crate::Rgb) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    fn bit(self) -> u8 {
        match self {
            Channel::Red => 4,
            Channel::Green => 2,
            Channel::Blue => 1,
        }
    }
}

/// Scoring policy implied by a mask value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    /// One channel selected (1, 2, 4).
    Single,
    /// Two channels selected (3, 5, 6).
    Pair,
    /// All or no channels (0, 7), and any value above 7.
    Extreme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask(u8);

impl Mask {
    pub const BLACK: Mask = Mask(0);
    pub const BLUE: Mask = Mask(1);
    pub const GREEN: Mask = Mask(2);
    pub const CYAN: Mask = Mask(3);
    pub const RED: Mask = Mask(4);
    pub const MAGENTA: Mask = Mask(5);
    pub const YELLOW: Mask = Mask(6);
    pub const WHITE: Mask = Mask(7);

    pub const fn new(value: u8) -> Self {
        Mask(value)
    }

    /// Parses a mask the way C's `atoi` followed by a `uint8_t` store does.
    ///
    /// Leading whitespace is skipped, one sign is accepted, and decimal
    /// digits are read up to the first other character. Text without digits
    /// yields 0. The result wraps to 8 bits, so `-1` becomes 255 and `300`
    /// becomes 44. This never fails.
    pub fn parse(text: &str) -> Self {
        let rest = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
        let (negative, digits) = match rest.as_bytes().first() {
            Some(b'-') => (true, &rest[1..]),
            Some(b'+') => (false, &rest[1..]),
            _ => (false, rest),
        };

        let magnitude = digits
            .bytes()
            .take_while(u8::is_ascii_digit)
            .fold(0i64, |acc, d| {
                acc.wrapping_mul(10).wrapping_add(i64::from(d - b'0'))
            });
        let value = if negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        };

        Mask(value as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Whether `channel` counts as part of the pure hue.
    pub fn selects(&self, channel: Channel) -> bool {
        self.0 & channel.bit() != 0
    }

    pub fn kind(&self) -> MaskKind {
        match self.0 {
            1 | 2 | 4 => MaskKind::Single,
            3 | 5 | 6 => MaskKind::Pair,
            _ => MaskKind::Extreme,
        }
    }

    pub fn name(&self) -> &'static str {
        match self.0 {
            0 => "black",
            1 => "blue",
            2 => "green",
            3 => "cyan",
            4 => "red",
            5 => "magenta",
            6 => "yellow",
            7 => "white",
            _ => "raw",
        }
    }
}

impl Default for Mask {
    /// Brightest first.
    fn default() -> Self {
        Mask::WHITE
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:03b})", self.name(), self.0 & 7)
    }
}
