//! Built-in asset catalogues.

mod draw;
mod icon;
mod pomodoro;
mod rpg;
mod sprites;

use std::str::FromStr;

use pocketgfx_core::{
    asset::Asset,
    pipeline::{AssetSpec, Catalogue, DocumentConfig, DrawFn},
    source::Dialect,
};

pub const WIDTH: u32 = 320;
pub const HEIGHT: u32 = 240;
pub const SCREEN_BYTES: usize = 9600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Set {
    Pomodoro,
    Rpg,
    Icon,
}

impl Set {
    pub fn repr(self) -> &'static str {
        match self {
            Set::Pomodoro => "pomodoro",
            Set::Rpg => "rpg",
            Set::Icon => "icon",
        }
    }
}

impl FromStr for Set {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pomodoro" => Ok(Set::Pomodoro),
            "rpg" => Ok(Set::Rpg),
            "icon" => Ok(Set::Icon),
            other => Err(format!(
                "unknown asset set '{other}' (expected pomodoro, rpg or icon)"
            )),
        }
    }
}

fn screen(name: &'static str, draw: DrawFn) -> AssetSpec<'static> {
    AssetSpec {
        asset: Asset::new(name, WIDTH, HEIGHT),
        expected_len: Some(SCREEN_BYTES),
        file_stem: None,
        draw,
    }
}

static POMODORO_BANNER: [&str; 2] = [
    "Auto-generated pixel art graphics for Pomodoro app",
    "Display: 320x240 1-bit monochrome",
];

static RPG_BANNER: [&str; 1] = ["Mage's Descent frame graphics, 320x240 1-bit"];

pub fn catalogue(set: Set) -> Catalogue<'static> {
    match set {
        Set::Pomodoro => Catalogue {
            name: set.repr(),
            assets: vec![
                screen("quote_bg_productivity", pomodoro::quote_bg_productivity),
                screen("quote_bg_nature", pomodoro::quote_bg_nature),
                screen("quote_bg_motivation", pomodoro::quote_bg_motivation),
                screen("quote_bg_focus", pomodoro::quote_bg_focus),
                // the firmware loads this one as main_menu.bin
                AssetSpec {
                    file_stem: Some("main_menu"),
                    ..screen("main_menu_graphic", pomodoro::main_menu)
                },
            ],
            binary_dir: Some("graphics".to_string()),
            document: Some(DocumentConfig {
                path: "graphics/pomodoro_graphics.h".to_string(),
                dialect: Dialect::Progmem,
                symbol_prefix: "",
                banner: &POMODORO_BANNER,
            }),
        },
        Set::Rpg => Catalogue {
            name: set.repr(),
            assets: vec![
                screen("title", rpg::title),
                screen("town", rpg::town),
                screen("gameover", rpg::gameover),
                screen("battle_1", rpg::battle_cave),
                screen("battle_2", rpg::battle_forest),
                screen("battle_3", rpg::battle_tower),
                screen("levelup", rpg::levelup),
                screen("chest", rpg::chest),
                screen("inn", rpg::inn),
            ],
            binary_dir: Some("rpg/gfx".to_string()),
            document: Some(DocumentConfig {
                path: "rpg_graphics.h".to_string(),
                dialect: Dialect::Progmem,
                symbol_prefix: "gfx_",
                banner: &RPG_BANNER,
            }),
        },
        Set::Icon => Catalogue {
            name: set.repr(),
            assets: vec![AssetSpec {
                asset: Asset::new("mages_descent_ICON", 40, 40),
                expected_len: Some(200),
                file_stem: None,
                draw: icon::mages_descent,
            }],
            binary_dir: Some(String::new()),
            document: None,
        },
    }
}
