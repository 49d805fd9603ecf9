use embedded_graphics::prelude::{Point, Size};
use log::trace;

use crate::{
    canvas::{Canvas, Shade},
    error::{Error, Result},
};

/// Small pixel-art stamp authored as text rows.
///
/// `.` and space are clear cells, every other character is set. Masks are
/// plain borrowed data so they can live in `static` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteMask<'a> {
    rows: &'a [&'a str],
}

impl<'a> SpriteMask<'a> {
    pub const fn new(rows: &'a [&'a str]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &'a [&'a str] {
        self.rows
    }

    fn is_set(cell: char) -> bool {
        !matches!(cell, '.' | ' ')
    }

    /// Check that every row has the same number of cells and return the
    /// mask size in cells.
    pub fn validate(&self) -> Result<Size> {
        let expected = self.rows.first().map_or(0, |row| row.chars().count());
        for (row, cells) in self.rows.iter().enumerate() {
            let found = cells.chars().count();
            if found != expected {
                return Err(Error::MaskShape {
                    row,
                    expected,
                    found,
                });
            }
        }
        Ok(Size::new(expected as u32, self.rows.len() as u32))
    }

    /// Iterate `(column, row)` of set cells, in row-major order.
    pub fn set_cells(&self) -> impl Iterator<Item = (usize, usize)> + 'a {
        let rows = self.rows;
        rows.iter().enumerate().flat_map(|(r, row)| {
            row.chars()
                .enumerate()
                .filter(|&(_, cell)| Self::is_set(cell))
                .map(move |(c, _)| (c, r))
        })
    }
}

fn scaled(origin: i32, cell: usize, scale: u32) -> i32 {
    let offset = i32::try_from(cell as u64 * scale as u64).unwrap_or(i32::MAX);
    origin.saturating_add(offset)
}

/// Stamp `mask` onto `canvas` with each set cell blown up to a
/// `scale`×`scale` block of ink whose top-left corner is
/// `origin + (column, row) * scale`.
///
/// Clear cells leave the canvas untouched. The mask shape and scale are
/// checked before any pixel is written.
pub fn stamp(canvas: &mut Canvas, mask: &SpriteMask, origin: Point, scale: u32) -> Result<()> {
    if scale == 0 {
        return Err(Error::InvalidScale);
    }
    let size = mask.validate()?;
    trace!(
        "Stamping {}x{} mask at ({}, {}) scale {}",
        size.width, size.height, origin.x, origin.y, scale
    );
    for (c, r) in mask.set_cells() {
        let x = scaled(origin.x, c, scale);
        let y = scaled(origin.y, r, scale);
        canvas.fill_rect(x, y, scale, scale, Shade::Ink);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packer::{decode, encode};

    static PLUS: SpriteMask<'static> = SpriteMask::new(&[".#.", "###", ".#."]);

    #[test]
    fn scale_one_places_single_pixels() {
        let mut canvas = Canvas::new(5, 5).unwrap();
        stamp(&mut canvas, &PLUS, Point::new(1, 1), 1).unwrap();
        assert_eq!(canvas.ink_count(), 5);
        assert!(canvas.is_ink(2, 1));
        assert!(canvas.is_ink(1, 2));
        assert!(canvas.is_ink(3, 2));
        assert!(!canvas.is_ink(1, 1));
    }

    #[test]
    fn scaled_cells_become_exact_blocks() {
        let scale = 3u32;
        let mut canvas = Canvas::new(16, 12).unwrap();
        stamp(&mut canvas, &PLUS, Point::zero(), scale).unwrap();
        let canvas = decode(encode(&canvas).as_bytes(), 16, 12).unwrap();

        for y in 0..12 {
            for x in 0..16 {
                let (c, r) = ((x / 3) as usize, (y / 3) as usize);
                let expected = r < 3
                    && c < 3
                    && PLUS.rows()[r].as_bytes()[c] == b'#';
                assert_eq!(canvas.is_ink(x, y), expected, "pixel ({x}, {y})");
            }
        }
        assert_eq!(canvas.ink_count(), 5 * 9);
    }

    #[test]
    fn stamping_is_additive() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        canvas.set(0, 0, Shade::Ink);
        stamp(&mut canvas, &PLUS, Point::zero(), 1).unwrap();
        assert!(canvas.is_ink(0, 0));
        assert_eq!(canvas.ink_count(), 6);
    }

    #[test]
    fn clipped_at_canvas_edges() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        stamp(&mut canvas, &PLUS, Point::new(-1, -1), 2).unwrap();
        assert!(canvas.is_ink(1, 0));
        assert!(canvas.is_ink(0, 1));
        assert!(canvas.is_ink(3, 2));
        assert!(!canvas.is_ink(0, 0));
        assert!(!canvas.is_ink(3, 3));
        assert_eq!(canvas.ink_count(), 12);
    }

    #[test]
    fn ragged_mask_fails_before_drawing() {
        static RAGGED: SpriteMask<'static> = SpriteMask::new(&["##", "###", "##"]);
        let mut canvas = Canvas::new(8, 8).unwrap();
        assert_eq!(
            stamp(&mut canvas, &RAGGED, Point::zero(), 2),
            Err(Error::MaskShape {
                row: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(canvas.ink_count(), 0);
    }

    #[test]
    fn zero_scale_is_rejected() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        assert_eq!(
            stamp(&mut canvas, &PLUS, Point::zero(), 0),
            Err(Error::InvalidScale)
        );
        assert_eq!(canvas.ink_count(), 0);
    }

    #[test]
    fn any_non_blank_character_is_ink() {
        static STEAM: SpriteMask<'static> = SpriteMask::new(&["~. ", "..#"]);
        let mut canvas = Canvas::new(3, 2).unwrap();
        stamp(&mut canvas, &STEAM, Point::zero(), 1).unwrap();
        assert!(canvas.is_ink(0, 0));
        assert!(canvas.is_ink(2, 1));
        assert_eq!(canvas.ink_count(), 2);
    }
}
