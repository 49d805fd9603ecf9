use alloc::{vec, vec::Vec};

use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Point, Size},
};

use crate::error::{Error, Result};

/// Value of a single canvas pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shade {
    /// Undrawn paper.
    #[default]
    Background,
    /// Drawn, visible pixel.
    Ink,
}

impl From<BinaryColor> for Shade {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => Shade::Ink,
            BinaryColor::Off => Shade::Background,
        }
    }
}

impl From<Shade> for BinaryColor {
    fn from(shade: Shade) -> Self {
        match shade {
            Shade::Ink => BinaryColor::On,
            Shade::Background => BinaryColor::Off,
        }
    }
}

/// Monochrome drawing surface for a single asset.
///
/// All coordinates are clipped: writes outside the canvas are dropped and
/// reads outside it return `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Shade>,
}

impl Canvas {
    /// Create a canvas filled with [`Shade::Background`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyCanvas { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![Shade::Background; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Shade> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    pub fn is_ink(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(Shade::Ink)
    }

    pub fn set(&mut self, x: i32, y: i32, shade: Shade) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = shade;
        }
    }

    /// Fill a `width`×`height` block with its top-left corner at `(x, y)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, shade: Shade) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add_unsigned(width).min(self.width as i32);
        let y1 = y.saturating_add_unsigned(height).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for yy in y0..y1 {
            let row = yy as usize * self.width as usize;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(shade);
        }
    }

    pub fn clear_to(&mut self, shade: Shade) {
        self.pixels.fill(shade);
    }

    pub fn ink_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p == Shade::Ink).count()
    }

    /// Row `y` as a slice of shades, `None` when out of range.
    pub fn row(&self, y: u32) -> Option<&[Shade]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.pixels[start..start + self.width as usize])
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set(x, y, color.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        Drawable,
        prelude::Primitive,
        primitives::{PrimitiveStyle, Rectangle},
    };

    #[test]
    fn rejects_empty_geometry() {
        assert_eq!(
            Canvas::new(0, 4),
            Err(Error::EmptyCanvas { width: 0, height: 4 })
        );
        assert!(Canvas::new(3, 0).is_err());
    }

    #[test]
    fn out_of_bounds_access_is_clipped() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        canvas.set(-1, 0, Shade::Ink);
        canvas.set(4, 0, Shade::Ink);
        canvas.set(0, 3, Shade::Ink);
        assert_eq!(canvas.ink_count(), 0);
        assert_eq!(canvas.get(-1, 0), None);
        assert_eq!(canvas.get(3, 2), Some(Shade::Background));
    }

    #[test]
    fn fill_rect_clips_to_canvas() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.fill_rect(-2, 6, 4, 10, Shade::Ink);
        assert_eq!(canvas.ink_count(), 4);
        assert!(canvas.is_ink(0, 6));
        assert!(canvas.is_ink(1, 7));
        assert!(!canvas.is_ink(2, 7));

        canvas.fill_rect(10, 10, 3, 3, Shade::Ink);
        assert_eq!(canvas.ink_count(), 4);
    }

    #[test]
    fn draw_target_maps_binary_color() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        Rectangle::new(Point::new(2, 2), Size::new(3, 3))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut canvas)
            .ok();
        assert_eq!(canvas.ink_count(), 9);

        Pixel(Point::new(3, 3), BinaryColor::Off)
            .draw(&mut canvas)
            .ok();
        assert_eq!(canvas.get(3, 3), Some(Shade::Background));
        assert_eq!(canvas.ink_count(), 8);
    }
}
