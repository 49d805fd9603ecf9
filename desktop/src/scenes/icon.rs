//! 40×40 launcher icon: wizard hat between a sword and a staff.

use embedded_graphics::prelude::Point;
use pocketgfx_core::{Result, canvas::Canvas};

use super::draw::{ellipse, fill, line, outline, point, polygon};

pub fn mages_descent(canvas: &mut Canvas) -> Result<()> {
    // hat
    line(canvas, 10, 24, 30, 24, 2);
    polygon(
        canvas,
        &[Point::new(14, 24), Point::new(20, 6), Point::new(26, 24)],
        2,
    );
    for (x, y) in [(20, 5), (19, 6), (21, 6), (20, 7)] {
        point(canvas, x, y);
    }

    // staff
    line(canvas, 30, 8, 30, 36, 2);
    ellipse(canvas, 27, 5, 33, 11, 1);
    point(canvas, 30, 8);

    // sword
    line(canvas, 10, 10, 10, 36, 2);
    line(canvas, 7, 15, 13, 15, 1);
    fill(canvas, 8, 35, 12, 37);

    // "M"
    for (x, y) in [(17, 32), (18, 33), (19, 32), (20, 33), (21, 32), (17, 34), (21, 34)] {
        point(canvas, x, y);
    }

    outline(canvas, 0, 0, 39, 39, 1);
    Ok(())
}
