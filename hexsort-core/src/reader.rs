//! Line-oriented color input.

use crate::error::{HexsortError, Result};
use crate::mask::Mask;
use crate::palette::{Color, Palette};
use std::io::BufRead;
use tracing::{debug, warn};

/// Reads every color entry from `reader` into a palette scored by `mask`.
///
/// Only lines starting with `#` are entries; everything else is ignored.
/// Entries shorter than `#rrggbb` are skipped with a warning. Input is
/// decoded lossily, so stray non-UTF-8 bytes never abort the run.
pub fn read_palette<R: BufRead>(mut reader: R, mask: Mask) -> Result<Palette> {
    let mut palette = Palette::new();
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    let mut skipped = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let mut line = buf.as_slice();
        while let Some((b'\n' | b'\r', rest)) = line.split_last() {
            line = rest;
        }
        if line.first() != Some(&b'#') {
            continue;
        }

        match Color::from_bytes(line, mask) {
            Ok(color) => palette.insert(color),
            Err(HexsortError::LineTooShort { len }) => {
                warn!(
                    "Skipping line {}: entry '{}' is {} bytes long",
                    line_no,
                    String::from_utf8_lossy(line),
                    len
                );
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        "Read {} colors from {} lines ({} skipped) with mask {}",
        palette.len(),
        line_no,
        skipped,
        mask
    );
    Ok(palette)
}
