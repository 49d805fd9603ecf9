//! Frame graphics for the RPG screens.
//!
//! The game clears its text areas before printing, so only the edges and a
//! few illustration bands carry ink.

use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};
use pocketgfx_core::{Result, canvas::Canvas, pattern::Dither, sprite::stamp};

use super::{
    draw::{cross, ellipse, erase_ellipse, fill, line, outline, point, polar, polygon, triangle},
    sprites::{SKULL, WIZARD},
};

/// L-shaped ornament with a diagonal accent, mirrored by the flip flags.
fn corner_ornament(canvas: &mut Canvas, cx: i32, cy: i32, flip_x: bool, flip_y: bool) {
    let dx = if flip_x { -1 } else { 1 };
    let dy = if flip_y { -1 } else { 1 };
    for i in 0..12 {
        point(canvas, cx + i * dx, cy);
        point(canvas, cx, cy + i * dy);
    }
    for i in 0..8 {
        point(canvas, cx + i * dx, cy + i * dy);
    }
}

fn frame(canvas: &mut Canvas) {
    outline(canvas, 0, 0, 319, 239, 2);
}

fn sword(canvas: &mut Canvas, x: i32) {
    line(canvas, x, 80, x, 140, 2);
    line(canvas, x - 5, 95, x + 5, 95, 2);
    fill(canvas, x - 3, 140, x + 3, 146);
}

pub fn title(canvas: &mut Canvas) -> Result<()> {
    frame(canvas);
    outline(canvas, 3, 3, 316, 236, 1);

    corner_ornament(canvas, 6, 6, false, false);
    corner_ornament(canvas, 313, 6, true, false);
    corner_ornament(canvas, 6, 233, false, true);
    corner_ornament(canvas, 313, 233, true, true);

    stamp(canvas, &WIZARD, Point::new(142, 68), 3)?;

    // staff with orb
    fill(canvas, 132, 72, 133, 126);
    ellipse(canvas, 127, 64, 139, 76, 2);

    sword(canvas, 55);
    sword(canvas, 264);

    for (x, y) in [(35, 75), (285, 80), (40, 140), (280, 145), (75, 110), (245, 105)] {
        cross(canvas, x, y, 2);
    }

    line(canvas, 30, 56, 290, 56, 1);
    line(canvas, 30, 175, 290, 175, 1);
    Ok(())
}

pub fn town(canvas: &mut Canvas) -> Result<()> {
    frame(canvas);

    for (cx, cy, dx, dy) in [(5, 5, 1, 1), (314, 5, -1, 1), (5, 234, 1, -1), (314, 234, -1, -1)] {
        line(canvas, cx, cy, cx + 15 * dx, cy, 1);
        line(canvas, cx, cy, cx, cy + 15 * dy, 1);
    }

    // rooftops squeezed into the top six rows
    for x in (10..310).step_by(30) {
        polygon(
            canvas,
            &[Point::new(x, 6), Point::new(x + 12, 2), Point::new(x + 24, 6)],
            1,
        );
    }

    line(canvas, 10, 220, 310, 220, 1);
    for x in (10..310).step_by(8) {
        point(canvas, x, 222);
    }
    Ok(())
}

pub fn gameover(canvas: &mut Canvas) -> Result<()> {
    let checker = Dither::every(2);
    for band in [
        Rectangle::new(Point::new(0, 0), Size::new(320, 12)),
        Rectangle::new(Point::new(0, 228), Size::new(320, 12)),
        Rectangle::new(Point::new(0, 12), Size::new(12, 216)),
        Rectangle::new(Point::new(308, 12), Size::new(12, 216)),
    ] {
        checker.fill(canvas, &band);
    }
    outline(canvas, 12, 12, 307, 227, 2);

    stamp(canvas, &SKULL, Point::new(140, 18), 3)?;

    // broken swords
    line(canvas, 120, 185, 135, 210, 2);
    line(canvas, 135, 210, 140, 205, 1);
    line(canvas, 185, 185, 200, 210, 2);
    line(canvas, 183, 187, 190, 183, 1);
    Ok(())
}

pub fn battle_cave(canvas: &mut Canvas) -> Result<()> {
    for x in (0..320).step_by(12) {
        let h = 3 + (x * 7 + 5) % 5;
        triangle(canvas, Point::new(x, 0), Point::new(x + 5, h), Point::new(x + 10, 0));
    }

    let texture = Dither::every(3);
    for y in (0..240).step_by(4) {
        let left = 4 + (y * 3 + 7) % 6;
        texture.fill(canvas, &Rectangle::new(Point::new(0, y), Size::new(left as u32, 1)));

        // mirrored, so the pattern runs from the right edge inward
        let right = 4 + (y * 5 + 3) % 6;
        for x in 0..right {
            if (x + y) % 3 == 0 {
                point(canvas, 319 - x, y);
            }
        }
    }

    // rocky ground
    for x in (0..320).step_by(3) {
        let top = 220 + (x * 11 + 5) % 18;
        texture.fill(
            canvas,
            &Rectangle::new(Point::new(x, top), Size::new(1, (240 - top) as u32)),
        );
    }

    polygon(
        canvas,
        &[Point::new(5, 235), Point::new(18, 218), Point::new(30, 235)],
        1,
    );
    polygon(
        canvas,
        &[Point::new(290, 235), Point::new(305, 220), Point::new(315, 235)],
        1,
    );
    Ok(())
}

fn pine(canvas: &mut Canvas, trunk_x: i32, trunk_top: i32, tip_x: i32, tiers: [(i32, i32); 2]) {
    fill(canvas, trunk_x, trunk_top, trunk_x + 7, 230);
    for (base, peak) in tiers {
        polygon(
            canvas,
            &[
                Point::new(tip_x - 7, base),
                Point::new(tip_x, peak),
                Point::new(tip_x + 7, base),
            ],
            1,
        );
    }
}

pub fn battle_forest(canvas: &mut Canvas) -> Result<()> {
    pine(canvas, 3, 40, 7, [(45, 10), (30, 0)]);
    pine(canvas, 309, 50, 312, [(55, 20), (40, 5)]);

    line(canvas, 0, 225, 319, 225, 1);
    for x in (5..315).step_by(10) {
        line(canvas, x, 225, x - 2, 220, 1);
        line(canvas, x, 225, x + 1, 219, 1);
        line(canvas, x, 225, x + 3, 221, 1);
    }

    for y in (228..240).step_by(3) {
        for x in (0..320).step_by(7) {
            if (x + y) % 4 == 0 {
                point(canvas, x, y);
            }
        }
    }
    Ok(())
}

fn torch(canvas: &mut Canvas, x: i32) {
    fill(canvas, x, 100, x + 4, 118);
    polygon(
        canvas,
        &[Point::new(x - 2, 100), Point::new(x + 2, 90), Point::new(x + 6, 100)],
        1,
    );
}

pub fn battle_tower(canvas: &mut Canvas) -> Result<()> {
    // brick walls, alternate courses offset by half a brick
    for y in (0..240).step_by(10) {
        let offset = if (y / 10) % 2 == 0 { 0 } else { 6 };
        line(canvas, 0, y, 12, y, 1);
        for x in (offset..13).step_by(12) {
            line(canvas, x, y, x, y + 10, 1);
        }
        line(canvas, 308, y, 319, y, 1);
        for x in (308 + offset..320).step_by(12) {
            line(canvas, x, y, x, y + 10, 1);
        }
    }

    torch(canvas, 14);
    torch(canvas, 301);

    line(canvas, 0, 220, 319, 220, 1);
    for x in (0..320).step_by(20) {
        line(canvas, x, 220, x, 239, 1);
    }
    Ok(())
}

pub fn levelup(canvas: &mut Canvas) -> Result<()> {
    frame(canvas);
    outline(canvas, 3, 3, 316, 236, 1);

    for (cx, cy) in [(15, 15), (304, 15), (15, 224), (304, 224)] {
        for angle in (0..360).step_by(30) {
            let end = polar(cx, cy, 10.0, angle as f32);
            line(canvas, cx, cy, end.x, end.y, 1);
        }
    }

    let edge_stars = [
        (30, 8),
        (160, 5),
        (290, 8),
        (8, 120),
        (311, 120),
        (30, 232),
        (160, 235),
        (290, 232),
    ];
    for (x, y) in edge_stars {
        cross(canvas, x, y, 3);
        for (dx, dy) in [(-2, -2), (2, -2), (-2, 2), (2, 2)] {
            point(canvas, x + dx, y + dy);
        }
    }

    // up arrows
    triangle(canvas, Point::new(10, 120), Point::new(5, 130), Point::new(15, 130));
    triangle(canvas, Point::new(309, 120), Point::new(304, 130), Point::new(314, 130));
    Ok(())
}

pub fn chest(canvas: &mut Canvas) -> Result<()> {
    frame(canvas);

    let sparkles = [
        (15, 15),
        (305, 15),
        (15, 225),
        (305, 225),
        (160, 5),
        (160, 235),
        (8, 120),
        (312, 120),
    ];
    for (x, y) in sparkles {
        cross(canvas, x, y, 3);
    }

    let (cx, cy) = (140, 185);
    outline(canvas, cx, cy, cx + 40, cy + 25, 2);
    line(canvas, cx, cy + 12, cx + 40, cy + 12, 1);
    // lid
    outline(canvas, cx - 2, cy - 12, cx + 42, cy, 2);
    // lock
    ellipse(canvas, cx + 16, cy + 3, cx + 24, cy + 11, 1);

    for x in (cx + 5..cx + 35).step_by(6) {
        let lean = if x < cx + 20 { -2 } else { 2 };
        line(canvas, x, cy - 12, x + lean, cy - 25, 1);
    }
    Ok(())
}

pub fn inn(canvas: &mut Canvas) -> Result<()> {
    frame(canvas);

    // crescent moon
    ellipse(canvas, 285, 8, 305, 28, 2);
    erase_ellipse(canvas, 290, 5, 310, 25);

    for (x, y) in [(15, 12), (40, 20), (270, 18), (15, 225), (305, 225)] {
        cross(canvas, x, y, 1);
    }

    for (i, (x, y)) in [(298, 60), (302, 50), (306, 40)].into_iter().enumerate() {
        let size = 4 + i as i32;
        line(canvas, x, y, x + size, y, 1);
        line(canvas, x + size, y, x, y + size, 1);
        line(canvas, x, y + size, x + size, y + size, 1);
    }

    let (bx, by) = (100, 200);
    // headboard, mattress, pillow
    outline(canvas, bx, by, bx + 12, by + 22, 1);
    outline(canvas, bx + 12, by + 6, bx + 80, by + 22, 1);
    ellipse(canvas, bx + 14, by + 8, bx + 28, by + 16, 1);
    // legs
    fill(canvas, bx + 12, by + 22, bx + 16, by + 26);
    fill(canvas, bx + 76, by + 22, bx + 80, by + 26);
    Ok(())
}
