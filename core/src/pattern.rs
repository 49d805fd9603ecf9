use embedded_graphics::primitives::Rectangle;

use crate::canvas::{Canvas, Shade};

/// Diagonal dot pattern: ink wherever `(x + y) % modulus == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dither {
    modulus: u32,
}

impl Dither {
    /// Pattern with an explicit modulus. A modulus of 0 is treated as 1.
    pub const fn every(modulus: u32) -> Self {
        Self {
            modulus: if modulus == 0 { 1 } else { modulus },
        }
    }

    /// Pattern from an ink density.
    ///
    /// Densities above 1 are clamped to 1 (solid fill). Zero, negative and
    /// NaN densities draw nothing and return `None`. Otherwise the modulus is
    /// `1 / density` truncated toward zero, saturating at `u32::MAX`.
    pub fn from_density(density: f32) -> Option<Self> {
        if density.is_nan() || density <= 0.0 {
            return None;
        }
        let density = density.min(1.0);
        Some(Self::every((1.0 / density) as u32))
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    pub fn is_ink(&self, x: i32, y: i32) -> bool {
        (x as i64 + y as i64).rem_euclid(self.modulus as i64) == 0
    }

    /// Paint the pattern over `area`. Existing ink is left in place.
    pub fn fill(&self, canvas: &mut Canvas, area: &Rectangle) {
        let Some(bottom_right) = area.bottom_right() else {
            return;
        };
        for y in area.top_left.y..=bottom_right.y {
            for x in area.top_left.x..=bottom_right.x {
                if self.is_ink(x, y) {
                    canvas.set(x, y, Shade::Ink);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::{Point, Size};

    #[test]
    fn density_maps_to_truncated_reciprocal() {
        assert_eq!(Dither::from_density(0.25).map(|d| d.modulus()), Some(4));
        assert_eq!(Dither::from_density(0.3).map(|d| d.modulus()), Some(3));
        assert_eq!(Dither::from_density(1.0).map(|d| d.modulus()), Some(1));
    }

    #[test]
    fn degenerate_densities_never_divide_by_zero() {
        assert_eq!(Dither::from_density(4.0).map(|d| d.modulus()), Some(1));
        assert_eq!(Dither::from_density(0.0), None);
        assert_eq!(Dither::from_density(-0.5), None);
        assert_eq!(Dither::from_density(f32::NAN), None);
        assert_eq!(
            Dither::from_density(f32::MIN_POSITIVE).map(|d| d.modulus()),
            Some(u32::MAX)
        );
        assert_eq!(Dither::every(0).modulus(), 1);
    }

    #[test]
    fn checkerboard_fill() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        Dither::every(2).fill(&mut canvas, &Rectangle::new(Point::zero(), Size::new(4, 4)));
        assert_eq!(canvas.ink_count(), 8);
        assert!(canvas.is_ink(0, 0));
        assert!(!canvas.is_ink(1, 0));
        assert!(canvas.is_ink(1, 1));
    }

    #[test]
    fn fill_is_clipped_and_handles_negative_coordinates() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        Dither::every(3).fill(
            &mut canvas,
            &Rectangle::new(Point::new(-3, -3), Size::new(10, 10)),
        );
        // (0,0), (1,2), (2,1) sum to multiples of 3 inside the canvas.
        assert_eq!(canvas.ink_count(), 3);
        assert!(canvas.is_ink(2, 1));
    }
}
