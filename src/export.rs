use std::fmt;

use crate::canvas::Canvas;

/// Canvas bits packed 8 cells per byte, grouped by the row in which each
/// byte was completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedBitmap {
    rows: Vec<Vec<u8>>,
}

impl PackedBitmap {
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().flatten().copied()
    }

    pub fn byte_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// `0x..` lowercase hex per byte, each followed by `, `; one line per canvas row.
impl fmt::Display for PackedBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for byte in row {
                write!(f, "0x{:x}, ", byte)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Pack the canvas row-major, first cell of each group in the MSB.
///
/// The accumulator is not reset at row ends: a byte may straddle two rows
/// and is emitted with the row where it completes. A trailing partial byte
/// at the end of the canvas is dropped.
pub fn pack(canvas: &Canvas) -> PackedBitmap {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return PackedBitmap::default();
    }

    let mut rows = Vec::with_capacity(height as usize);
    let mut byte = 0u8;
    let mut count = 0u32;

    for row in canvas.pixels().chunks(width as usize) {
        let mut packed = Vec::with_capacity(row.len() / 8);
        for &cell in row {
            if cell {
                byte |= 1 << count;
            }
            count += 1;

            if count == 8 {
                packed.push(byte.reverse_bits());
                byte = 0;
                count = 0;
            }
        }
        rows.push(packed);
    }

    PackedBitmap { rows }
}
