use pocketgfx_core::sprite::SpriteMask;

pub static TOMATO: SpriteMask<'static> = SpriteMask::new(&[
    "....####....",
    "...######...",
    "..###..###..",
    ".####..####.",
    ".##########.",
    "############",
    "##..####..##",
    "############",
    "############",
    "############",
    ".##########.",
    ".##########.",
    "..########..",
    "...######...",
    "....####....",
    "......##....",
]);

pub static CLOCK: SpriteMask<'static> = SpriteMask::new(&[
    "....####....",
    "..########..",
    ".##......##.",
    ".#..####..#.",
    "#....##....#",
    "#....##....#",
    "#....##....#",
    "#....#####.#",
    "#..........#",
    "#..........#",
    ".#........#.",
    ".##......##.",
    "..########..",
    "....####....",
]);

pub static STAR: SpriteMask<'static> = SpriteMask::new(&[
    "..#..",
    "..#..",
    "#####",
    ".###.",
    ".#.#.",
]);

/// Steam rows use `~`, which stamps as ink like `#`.
pub static COFFEE: SpriteMask<'static> = SpriteMask::new(&[
    "..~..~..~..",
    "...~..~....",
    "...........",
    ".#########.",
    ".#########.",
    ".####..###.",
    ".####.#.##.",
    ".####..###.",
    ".#########.",
    ".#########.",
    "..#######..",
    "...#####...",
]);

pub static MOUNTAIN: SpriteMask<'static> = SpriteMask::new(&[
    "........#........",
    ".......###.......",
    "......#####......",
    ".....##.####.....",
    "....###..#####...",
    "...####...#####..",
    "..#####....#####.",
    ".######.....#####",
    "#######......####",
]);

pub static TREE: SpriteMask<'static> = SpriteMask::new(&[
    "....##....",
    "...####...",
    "..######..",
    ".########.",
    "..######..",
    ".########.",
    "##########",
    "....##....",
    "....##....",
    "....##....",
]);

pub static SUN: SpriteMask<'static> = SpriteMask::new(&[
    "....#....#....",
    ".....#..#.....",
    "..#..####..#..",
    "...########...",
    "..##########..",
    "####......####",
    "###........###",
    "###........###",
    "####......####",
    "..##########..",
    "...########...",
    "..#..####..#..",
    ".....#..#.....",
    "....#....#....",
]);

pub static BOOK: SpriteMask<'static> = SpriteMask::new(&[
    "..##########..",
    ".#..........#.",
    "#.##......##.#",
    "#.##......##.#",
    "#.##......##.#",
    "#.##......##.#",
    "#.##......##.#",
    "#..#......#..#",
    ".#..######..#.",
    "..##########..",
]);

pub static WIZARD: SpriteMask<'static> = SpriteMask::new(&[
    "....####....",
    "...######...",
    "..###..###..",
    "..########..",
    "..###..###..",
    "..##....##..",
    "..########..",
    ".####..####.",
    ".##.####.##.",
    ".##.####.##.",
    ".##.####.##.",
    "..########..",
    "...##..##...",
    "...##..##...",
    "..###..###..",
]);

pub static SKULL: SpriteMask<'static> = SpriteMask::new(&[
    "..........",
    "..######..",
    ".########.",
    ".##.##.##.",
    ".##.##.##.",
    ".########.",
    "..#.##.#..",
    "..######..",
    "...#.#.#..",
    "..........",
]);
