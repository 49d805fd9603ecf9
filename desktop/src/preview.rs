use std::path::Path;

use image::{
    ImageError, ImageResult,
    error::{ParameterError, ParameterErrorKind},
};
use log::info;
use pocketgfx_core::packer::PackedBitmap;

fn too_large(bitmap: &PackedBitmap, scale: u32) -> ImageError {
    ImageError::Parameter(ParameterError::from_kind(ParameterErrorKind::Generic(
        format!(
            "{}x{} scaled by {scale} does not fit an image",
            bitmap.width(),
            bitmap.height()
        ),
    )))
}

/// Grayscale pixels of `bitmap`, ink black on white, each pixel blown up
/// to a `scale`×`scale` block.
pub fn blowup(bitmap: &PackedBitmap, scale: u32) -> ImageResult<(Vec<u8>, u32, u32)> {
    let scale = scale.max(1);
    let (Some(width), Some(height)) = (
        bitmap.width().checked_mul(scale),
        bitmap.height().checked_mul(scale),
    ) else {
        return Err(too_large(bitmap, scale));
    };
    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| too_large(bitmap, scale))?;
    let mut pixels = vec![255u8; len];
    for (y, out) in pixels.chunks_exact_mut(width as usize).enumerate() {
        let Some(row) = bitmap.row(y as u32 / scale) else {
            continue;
        };
        for (x, pixel) in out.iter_mut().enumerate() {
            let source = x / scale as usize;
            if (row[source / 8] >> (7 - source % 8)) & 0x01 == 1 {
                *pixel = 0;
            }
        }
    }
    Ok((pixels, width, height))
}

pub fn save_png(path: &Path, bitmap: &PackedBitmap, scale: u32) -> ImageResult<()> {
    let (pixels, width, height) = blowup(bitmap, scale)?;
    image::save_buffer(path, &pixels, width, height, image::ColorType::L8)?;
    info!("Saved preview {} ({}x{})", path.display(), width, height);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_dot() -> PackedBitmap {
        // 10x2, only the top-left pixel and the last pixel of row 1 set
        PackedBitmap::from_raw(10, 2, vec![0x80, 0x00, 0x00, 0x40]).unwrap()
    }

    #[test]
    fn ink_is_black() {
        let (pixels, width, height) = blowup(&corner_dot(), 1).unwrap();
        assert_eq!((width, height), (10, 2));
        assert_eq!(pixels[0], 0);
        assert_eq!(pixels[1], 255);
        assert_eq!(pixels[19], 0);
        assert_eq!(pixels.iter().filter(|&&p| p == 0).count(), 2);
    }

    #[test]
    fn scale_repeats_pixels() {
        let (pixels, width, height) = blowup(&corner_dot(), 3).unwrap();
        assert_eq!((width, height), (30, 6));
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(pixels[y * 30 + x], 0);
            }
        }
        assert_eq!(pixels[3], 255);
        assert_eq!(pixels.iter().filter(|&&p| p == 0).count(), 18);
    }

    #[test]
    fn oversized_scale_is_an_error() {
        assert!(matches!(
            blowup(&corner_dot(), u32::MAX),
            Err(ImageError::Parameter(_))
        ));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.png");
        assert!(save_png(&path, &corner_dot(), u32::MAX / 4).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        save_png(&path, &corner_dot(), 4).unwrap();
        let image = image::open(&path).unwrap().into_luma8();
        assert_eq!(image.dimensions(), (40, 8));
        assert_eq!(image.get_pixel(0, 0).0, [0]);
        assert_eq!(image.get_pixel(39, 7).0, [0]);
        assert_eq!(image.get_pixel(20, 0).0, [255]);
    }
}
