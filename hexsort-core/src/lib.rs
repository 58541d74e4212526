//! # hexsort
//!
//! Score hexadecimal colors by how strongly they express a hue, and keep
//! them sorted with the most dominant first.
//!
//! A [`Mask`] picks the hue as a 3-bit RGB pattern (`100` is red, `011`
//! cyan, `111` plain brightness). Every `#rrggbb` entry is decoded into an
//! [`Rgb`] triple, scored once with [`dominance`], and inserted into a
//! [`Palette`] that stays in descending score order.
//!
//! ## Quick Start
//!
//! ```rust
//! use hexsort::{read_palette, write_palette, Mask, Result};
//!
//! # fn main() -> Result<()> {
//! let input = "#ff2d2d\n#ff3c1e\n#ffffff\n";
//! let palette = read_palette(input.as_bytes(), Mask::RED)?;
//!
//! let mut out = Vec::new();
//! write_palette(&mut out, &palette)?;
//! assert!(String::from_utf8_lossy(&out).starts_with("#ff3c1e\t255,60,30\t"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`rgb`] - `#rrggbb` decoding
//! - [`mask`] - channel selector
//! - [`score`] - channel ratio and dominance scoring
//! - [`palette`] - scored colors in descending order
//! - [`reader`] / [`printer`] - line-oriented input and output

pub mod error;
pub mod mask;
pub mod palette;
pub mod printer;
pub mod reader;
pub mod rgb;
pub mod score;

pub use error::{HexsortError, Result};
pub use mask::{Channel, Mask, MaskKind};
pub use palette::{Color, Palette};
pub use printer::write_palette;
pub use reader::read_palette;
pub use rgb::Rgb;
pub use score::{channel_ratio, dominance, mask_ratio};
