use crate::{DumpResult, DumpSink};

/// Number of bytes rendered per dump line. Compile-time fixed.
pub const BYTES_PER_LINE: usize = 16;

/// Render a byte as ` 0xHH` with a leading space and zero padding.
/// Always exactly 5 characters.
pub fn format_byte(value: u8) -> String {
    format!(" 0x{:02X}", value)
}

/// Render a line offset as `0xHHHH`, zero padded to 4 digits.
/// Always exactly 6 characters.
pub fn format_offset(value: u16) -> String {
    format!("0x{:04X}", value)
}

/// Glyph shown in the ASCII column for one byte.
///
/// Printable ASCII (0x20..=0x7E) is shown as itself. 0x00 and 0xFF are
/// shown as spaces so erased or zeroed regions read as blank instead of
/// walls of dots. Every other byte is a dot.
pub fn glyph(value: u8) -> char {
    if (0x20..=0x7E).contains(&value) {
        value as char
    } else if value != 0x00 && value != 0xFF {
        '.'
    } else {
        ' '
    }
}

/// Write the first `length` bytes of `memory` to `sink` as hex+ASCII
/// lines of [`BYTES_PER_LINE`] bytes each.
///
/// The final line always renders a full 16-byte block: when `length` is
/// not a multiple of 16, bytes past the logical end are rendered up to
/// the next boundary. `memory` must extend to that boundary, otherwise
/// the slice index panics.
///
/// Offsets are 16-bit; dumps past 64 KiB wrap the offset column.
pub fn dump(memory: &[u8], length: usize, sink: &mut dyn DumpSink) -> DumpResult<()> {
    tracing::trace!("Dumping {} bytes", length);
    if length % BYTES_PER_LINE != 0 {
        tracing::debug!(
            "Length {} is not a multiple of {}; the final line renders through the boundary",
            length,
            BYTES_PER_LINE
        );
    }

    let mut offset = 0usize;
    while offset < length {
        sink.put_str(&format_offset(offset as u16))?;
        sink.put_str(": ")?;

        for i in 0..BYTES_PER_LINE {
            sink.put_str(&format_byte(memory[offset + i]))?;
        }
        sink.put_str("  ")?;

        let mut ascii = String::with_capacity(BYTES_PER_LINE);
        for i in 0..BYTES_PER_LINE {
            ascii.push(glyph(memory[offset + i]));
        }
        sink.put_str(&ascii)?;

        sink.end_line()?;
        offset += BYTES_PER_LINE;
    }

    Ok(())
}
