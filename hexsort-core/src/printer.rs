use crate::error::Result;
use crate::palette::Palette;
use std::io::Write;

/// Writes the palette in its current order, one `<hex>\t<r>,<g>,<b>\t<score>`
/// line per color.
pub fn write_palette<W: Write>(mut writer: W, palette: &Palette) -> Result<()> {
    for color in palette {
        writeln!(writer, "{}", color)?;
    }
    writer.flush()?;
    Ok(())
}
