//! Shape helpers over `embedded-graphics` using inclusive corner
//! coordinates, so scene code can be written as box corners.

use embedded_graphics::{
    Drawable, Pixel,
    pixelcolor::BinaryColor,
    prelude::{Point, Primitive, Size},
    primitives::{
        Ellipse, Line, Polyline, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle,
        StrokeAlignment, Triangle,
    },
};
use pocketgfx_core::canvas::Canvas;

const INK: BinaryColor = BinaryColor::On;

fn inset_stroke(width: u32) -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyleBuilder::new()
        .stroke_color(INK)
        .stroke_width(width)
        .stroke_alignment(StrokeAlignment::Inside)
        .build()
}

fn bounds(x0: i32, y0: i32, x1: i32, y1: i32) -> (Point, Size) {
    let size = Size::new((x1 - x0 + 1).max(0) as u32, (y1 - y0 + 1).max(0) as u32);
    (Point::new(x0, y0), size)
}

pub fn point(canvas: &mut Canvas, x: i32, y: i32) {
    Pixel(Point::new(x, y), INK).draw(canvas).ok();
}

/// Rectangle outline, stroke grown inward from the corners.
pub fn outline(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, width: u32) {
    Rectangle::with_corners(Point::new(x0, y0), Point::new(x1, y1))
        .into_styled(inset_stroke(width))
        .draw(canvas)
        .ok();
}

pub fn fill(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32) {
    Rectangle::with_corners(Point::new(x0, y0), Point::new(x1, y1))
        .into_styled(PrimitiveStyle::with_fill(INK))
        .draw(canvas)
        .ok();
}

pub fn line(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, width: u32) {
    Line::new(Point::new(x0, y0), Point::new(x1, y1))
        .into_styled(PrimitiveStyle::with_stroke(INK, width))
        .draw(canvas)
        .ok();
}

/// Closed polygon outline.
pub fn polygon(canvas: &mut Canvas, points: &[Point], width: u32) {
    let Some(&first) = points.first() else {
        return;
    };
    let mut closed = points.to_vec();
    closed.push(first);
    Polyline::new(&closed)
        .into_styled(PrimitiveStyle::with_stroke(INK, width))
        .draw(canvas)
        .ok();
}

pub fn triangle(canvas: &mut Canvas, a: Point, b: Point, c: Point) {
    Triangle::new(a, b, c)
        .into_styled(PrimitiveStyle::with_fill(INK))
        .draw(canvas)
        .ok();
}

pub fn ellipse(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, width: u32) {
    let (top_left, size) = bounds(x0, y0, x1, y1);
    Ellipse::new(top_left, size)
        .into_styled(inset_stroke(width))
        .draw(canvas)
        .ok();
}

/// Paint an ellipse back to background, e.g. to carve a crescent.
pub fn erase_ellipse(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32) {
    let (top_left, size) = bounds(x0, y0, x1, y1);
    Ellipse::new(top_left, size)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
        .draw(canvas)
        .ok();
}

/// Small `+` sparkle with arms of `arm` pixels.
pub fn cross(canvas: &mut Canvas, x: i32, y: i32, arm: i32) {
    line(canvas, x - arm, y, x + arm, y, 1);
    line(canvas, x, y - arm, x, y + arm, 1);
}

/// End point of a ray of `length` from `(x, y)` at `degrees`, truncated
/// toward zero.
pub fn polar(x: i32, y: i32, length: f32, degrees: f32) -> Point {
    let rad = degrees.to_radians();
    Point::new(x + (length * rad.cos()) as i32, y + (length * rad.sin()) as i32)
}
