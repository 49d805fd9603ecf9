//! Pomodoro timer backgrounds: a main menu and four quote screens.

use embedded_graphics::prelude::Point;
use pocketgfx_core::{Result, canvas::Canvas, sprite::stamp};

use super::{
    HEIGHT, WIDTH,
    draw::{fill, line, outline, point, polar},
    sprites::{BOOK, CLOCK, COFFEE, MOUNTAIN, STAR, SUN, TOMATO, TREE},
};

const W: i32 = WIDTH as i32;
const H: i32 = HEIGHT as i32;

pub fn main_menu(canvas: &mut Canvas) -> Result<()> {
    // double border
    outline(canvas, 0, 0, W - 1, H - 1, 2);
    outline(canvas, 6, 6, W - 7, H - 7, 2);

    stamp(canvas, &TOMATO, Point::new(30, 60), 6)?;
    for (x, y) in [(20, 20), (280, 30), (290, 180), (15, 200)] {
        stamp(canvas, &STAR, Point::new(x, y), 2)?;
    }
    stamp(canvas, &CLOCK, Point::new(250, 50), 3)?;

    for x in (140..240).step_by(4) {
        point(canvas, x, 70);
        point(canvas, x, 72);
    }

    fill(canvas, 15, H - 25, W - 15, H - 23);
    fill(canvas, 15, H - 20, W - 15, H - 18);
    Ok(())
}

/// Double-stroke bracket in each corner.
fn corner_brackets(canvas: &mut Canvas) {
    let (r, b) = (W - 1, H - 1);
    line(canvas, 0, 0, 30, 0, 2);
    line(canvas, 0, 0, 0, 30, 2);
    line(canvas, 5, 5, 25, 5, 1);
    line(canvas, 5, 5, 5, 25, 1);

    line(canvas, r - 29, 0, r, 0, 2);
    line(canvas, r, 0, r, 30, 2);
    line(canvas, r - 24, 5, r - 5, 5, 1);
    line(canvas, r - 5, 5, r - 5, 25, 1);

    line(canvas, 0, b, 30, b, 2);
    line(canvas, 0, b - 29, 0, b, 2);
    line(canvas, 5, b - 5, 25, b - 5, 1);
    line(canvas, 5, b - 24, 5, b - 5, 1);

    line(canvas, r - 29, b, r, b, 2);
    line(canvas, r, b - 29, r, b, 2);
    line(canvas, r - 24, b - 5, r - 5, b - 5, 1);
    line(canvas, r - 5, b - 24, r - 5, b - 5, 1);
}

pub fn quote_bg_productivity(canvas: &mut Canvas) -> Result<()> {
    corner_brackets(canvas);
    stamp(canvas, &COFFEE, Point::new(W - 50, H - 55), 3)?;
    stamp(canvas, &BOOK, Point::new(20, H - 50), 3)
}

pub fn quote_bg_nature(canvas: &mut Canvas) -> Result<()> {
    stamp(canvas, &SUN, Point::new(W - 60, 15), 2)?;

    stamp(canvas, &MOUNTAIN, Point::new(20, H - 45), 4)?;
    stamp(canvas, &MOUNTAIN, Point::new(150, H - 35), 3)?;
    stamp(canvas, &MOUNTAIN, Point::new(230, H - 40), 3)?;

    stamp(canvas, &TREE, Point::new(15, H - 75), 2)?;
    stamp(canvas, &TREE, Point::new(W - 40, H - 70), 2)?;

    for x in (20..W - 20).step_by(8) {
        fill(canvas, x, 8, x + 4, 10);
    }
    Ok(())
}

pub fn quote_bg_motivation(canvas: &mut Canvas) -> Result<()> {
    let stars = [
        (15, 15),
        (50, 25),
        (100, 10),
        (W - 30, 20),
        (W - 60, 35),
        (W - 20, 60),
        (20, H - 40),
        (60, H - 25),
        (W - 40, H - 35),
        (W - 70, H - 20),
        (150, 15),
        (200, 25),
    ];
    for (x, y) in stars {
        stamp(canvas, &STAR, Point::new(x, y), 2)?;
    }

    line(canvas, 10, 45, 45, 10, 2);
    line(canvas, W - 45, 10, W - 10, 45, 2);
    line(canvas, 10, H - 45, 45, H - 10, 2);
    line(canvas, W - 45, H - 10, W - 10, H - 45, 2);
    Ok(())
}

pub fn quote_bg_focus(canvas: &mut Canvas) -> Result<()> {
    stamp(canvas, &TOMATO, Point::new(W - 55, H - 60), 3)?;

    // open zen circle, gap facing east
    let (cx, cy) = (45, H - 45);
    for angle in (45..315).step_by(5) {
        let from = polar(cx, cy, 25.0, angle as f32);
        let to = polar(cx, cy, 25.0, (angle + 5) as f32);
        line(canvas, from.x, from.y, to.x, to.y, 2);
    }

    fill(canvas, W / 2 - 40, 10, W / 2 + 40, 12);
    fill(canvas, W / 2 - 20, 15, W / 2 + 20, 16);
    Ok(())
}
