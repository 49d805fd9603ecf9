use std::path::{Path, PathBuf};

use log::{error, info};
use pocketgfx_core::{
    asset::Asset,
    pipeline::{BinarySource, DocumentConfig, convert_binaries},
    source::Dialect,
};

use crate::std_fs::StdFilesystem;

mod std_fs;

/// CLI Arguments
#[derive(argh::FromArgs)]
struct Args {
    /// packed .bin file, repeat for several arrays
    #[argh(option, short = 'i')]
    input: Vec<String>,

    /// output source file
    #[argh(option, short = 'o')]
    output: String,

    /// image width in pixels
    #[argh(option, default = "320")]
    width: u32,

    /// image height in pixels
    #[argh(option, default = "240")]
    height: u32,

    /// prefix for every array symbol
    #[argh(option, default = "String::from(\"gfx_\")")]
    prefix: String,

    /// output dialect: progmem or rust
    #[argh(option, default = "Dialect::Progmem")]
    dialect: Dialect,
}

fn stem(path: &str) -> &str {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(path)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    if args.input.is_empty() {
        error!("No input files given");
        std::process::exit(1);
    }

    let sources = args
        .input
        .iter()
        .map(|path| BinarySource {
            asset: Asset::new(stem(path), args.width, args.height),
            path: path.clone(),
            expected_len: None,
        })
        .collect::<Vec<_>>();
    let document = DocumentConfig {
        path: args.output.clone(),
        dialect: args.dialect,
        symbol_prefix: &args.prefix,
        banner: &[],
    };

    let fs = StdFilesystem::new_with_base_path(PathBuf::new());
    match convert_binaries(&fs, &sources, &document) {
        Ok(report) => info!(
            "Converted {} binaries into {} ({} bytes)",
            sources.len(),
            args.output,
            report.total_bytes()
        ),
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}
