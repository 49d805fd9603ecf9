//! 1-bit packing of a [`Canvas`].
//!
//! Rows are stored top to bottom, each row padded to a whole number of
//! bytes. Within a byte the leftmost pixel is the most significant bit.
//! Ink is `1`, background and padding are `0`. The firmware reads bits in
//! exactly this order.

use alloc::{vec, vec::Vec};

use crate::{
    canvas::{Canvas, Shade},
    error::{Error, Result},
};

/// Bytes needed for one packed row of `width` pixels.
pub const fn bytes_per_row(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

/// Total packed length of a `width`×`height` image.
pub const fn packed_len(width: u32, height: u32) -> usize {
    bytes_per_row(width) * height as usize
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PackedBitmap {
    /// Wrap already packed bytes, e.g. a `.bin` read back from storage.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyCanvas { width, height });
        }
        let expected = packed_len(width, height);
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes_per_row(&self) -> usize {
        bytes_per_row(self.width)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.bytes_per_row();
        let start = y as usize * stride;
        Some(&self.data[start..start + stride])
    }

    pub fn decode(&self) -> Result<Canvas> {
        decode(&self.data, self.width, self.height)
    }
}

pub fn encode(canvas: &Canvas) -> PackedBitmap {
    let width = canvas.width();
    let height = canvas.height();
    let stride = bytes_per_row(width);
    let mut data = vec![0u8; stride * height as usize];

    for (y, out) in data.chunks_exact_mut(stride).enumerate() {
        let Some(row) = canvas.row(y as u32) else {
            break;
        };
        for (x, &shade) in row.iter().enumerate() {
            if shade == Shade::Ink {
                out[x / 8] |= 1 << (7 - (x % 8));
            }
        }
    }

    assert_eq!(
        data.len(),
        packed_len(width, height),
        "packed length does not match geometry"
    );
    PackedBitmap {
        width,
        height,
        data,
    }
}

fn unpack_into(canvas: &mut Canvas, data: &[u8]) {
    let width = canvas.width() as usize;
    let stride = bytes_per_row(canvas.width());
    for (y, row) in data.chunks_exact(stride).enumerate() {
        for x in 0..width {
            if (row[x / 8] >> (7 - (x % 8))) & 1 == 1 {
                canvas.set(x as i32, y as i32, Shade::Ink);
            }
        }
    }
}

/// Rebuild a canvas from packed bytes. Padding bits are ignored.
pub fn decode(data: &[u8], width: u32, height: u32) -> Result<Canvas> {
    let mut canvas = Canvas::new(width, height)?;
    let expected = packed_len(width, height);
    if data.len() != expected {
        return Err(Error::DataLength {
            expected,
            actual: data.len(),
        });
    }
    unpack_into(&mut canvas, data);
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Dither;
    use embedded_graphics::{
        prelude::{Point, Size},
        primitives::Rectangle,
    };

    fn all_ink(width: u32, height: u32) -> Canvas {
        let mut canvas = Canvas::new(width, height).unwrap();
        canvas.clear_to(Shade::Ink);
        canvas
    }

    #[test]
    fn two_corner_pixels() {
        let mut canvas = Canvas::new(16, 2).unwrap();
        canvas.set(0, 0, Shade::Ink);
        canvas.set(15, 1, Shade::Ink);
        let packed = encode(&canvas);
        assert_eq!(packed.bytes_per_row(), 2);
        assert_eq!(packed.as_bytes(), &[0x80, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn length_matches_geometry() {
        for width in 1..=33 {
            for height in [1, 2, 7, 8, 9] {
                let packed = encode(&Canvas::new(width, height).unwrap());
                assert_eq!(
                    packed.len(),
                    height as usize * (width as usize).div_ceil(8),
                    "{width}x{height}"
                );
            }
        }
        assert_eq!(encode(&Canvas::new(320, 240).unwrap()).len(), 9600);
        assert_eq!(encode(&Canvas::new(40, 40).unwrap()).len(), 200);
    }

    #[test]
    fn background_packs_to_zeros() {
        let packed = encode(&Canvas::new(13, 5).unwrap());
        assert_eq!(packed.len(), 10);
        assert!(packed.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn padding_bits_stay_clear() {
        let packed = encode(&all_ink(13, 3));
        for y in 0..3 {
            assert_eq!(packed.row(y), Some(&[0xFF, 0xF8][..]));
        }
        let packed = encode(&all_ink(1, 2));
        assert_eq!(packed.as_bytes(), &[0x80, 0x80]);
        let packed = encode(&all_ink(16, 1));
        assert_eq!(packed.as_bytes(), &[0xFF, 0xFF]);
    }

    #[test]
    fn msb_is_leftmost_pixel() {
        let mut canvas = Canvas::new(8, 1).unwrap();
        canvas.set(1, 0, Shade::Ink);
        canvas.set(6, 0, Shade::Ink);
        assert_eq!(encode(&canvas).as_bytes(), &[0b0100_0010]);
    }

    #[test]
    fn round_trip_preserves_pixels() {
        for (width, height) in [(1, 1), (7, 3), (13, 11), (40, 40), (321, 5)] {
            let mut canvas = Canvas::new(width, height).unwrap();
            Dither::every(3).fill(
                &mut canvas,
                &Rectangle::new(Point::zero(), Size::new(width, height)),
            );
            canvas.set(width as i32 - 1, height as i32 - 1, Shade::Ink);
            let packed = encode(&canvas);
            assert_eq!(decode(packed.as_bytes(), width, height).unwrap(), canvas);
            assert_eq!(packed.decode().unwrap(), canvas);
        }
    }

    #[test]
    fn round_trip_every_small_pattern() {
        for (width, height) in [(3u32, 3u32), (9, 1), (1, 9)] {
            let cells = width * height;
            for pattern in 0u32..(1 << cells) {
                let mut canvas = Canvas::new(width, height).unwrap();
                for cell in 0..cells {
                    if pattern & (1 << cell) != 0 {
                        let (x, y) = (cell % width, cell / width);
                        canvas.set(x as i32, y as i32, Shade::Ink);
                    }
                }
                let packed = encode(&canvas);
                assert_eq!(packed.decode().unwrap(), canvas, "{width}x{height} {pattern:#x}");
            }
        }
    }

    #[test]
    fn round_trip_pseudo_random_widths() {
        let mut seed = 0x2545_F491u32;
        for width in 1..=17 {
            let mut canvas = Canvas::new(width, 5).unwrap();
            for y in 0..5 {
                for x in 0..width as i32 {
                    // xorshift32
                    seed ^= seed << 13;
                    seed ^= seed >> 17;
                    seed ^= seed << 5;
                    if seed & 1 == 1 {
                        canvas.set(x, y, Shade::Ink);
                    }
                }
            }
            let packed = encode(&canvas);
            assert_eq!(decode(packed.as_bytes(), width, 5).unwrap(), canvas, "width {width}");
        }
    }

    #[test]
    fn decode_ignores_padding_bits() {
        let canvas = decode(&[0xFF, 0xFF], 12, 1).unwrap();
        assert_eq!(canvas.ink_count(), 12);
        assert_eq!(encode(&canvas).as_bytes(), &[0xFF, 0xF0]);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(
            decode(&[0; 3], 16, 2),
            Err(Error::DataLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            decode(&[], 0, 2),
            Err(Error::EmptyCanvas {
                width: 0,
                height: 2
            })
        );
        assert_eq!(
            decode(&[0; 4], 16, 0),
            Err(Error::EmptyCanvas {
                width: 16,
                height: 0
            })
        );
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(PackedBitmap::from_raw(320, 240, vec![0; 9600]).is_ok());
        assert_eq!(
            PackedBitmap::from_raw(320, 240, vec![0; 9599]),
            Err(Error::DataLength {
                expected: 9600,
                actual: 9599
            })
        );
        assert!(PackedBitmap::from_raw(0, 240, Vec::new()).is_err());
    }
}
