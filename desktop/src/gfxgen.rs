use std::{error::Error, path::PathBuf};

use log::{error, info};
use pocketgfx_core::{
    pipeline::{render, write_outputs},
    source::Dialect,
};

use crate::{
    scenes::{Set, catalogue},
    std_fs::StdFilesystem,
};

mod preview;
mod scenes;
mod std_fs;

/// CLI Arguments
#[derive(argh::FromArgs)]
struct Args {
    /// asset set to generate: pomodoro, rpg or icon
    #[argh(positional)]
    set: Set,

    /// output directory
    #[argh(option, short = 'o', default = "String::from(\".\")")]
    output_dir: String,

    /// directory for PNG previews
    #[argh(option)]
    preview: Option<String>,

    /// preview upscaling factor
    #[argh(option, default = "1")]
    scale: u32,

    /// source document dialect: progmem or rust
    #[argh(option)]
    dialect: Option<Dialect>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    if let Err(err) = generate(&args) {
        error!("{}: {err}", args.set.repr());
        std::process::exit(1);
    }
}

fn generate(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut catalogue = catalogue(args.set);
    if let (Some(dialect), Some(document)) = (args.dialect, catalogue.document.as_mut()) {
        document.dialect = dialect;
        let extension = match dialect {
            Dialect::Progmem => "h",
            Dialect::Rust => "rs",
        };
        document.path = PathBuf::from(&document.path)
            .with_extension(extension)
            .to_string_lossy()
            .into_owned();
    }

    let rendered = render(&catalogue)?;
    let fs = StdFilesystem::new_with_base_path(PathBuf::from(&args.output_dir));
    let report = write_outputs(&fs, &catalogue, &rendered)?;
    info!(
        "{}: wrote {} files, {} bytes",
        catalogue.name,
        report.files.len(),
        report.total_bytes()
    );

    if let Some(dir) = &args.preview {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        for r in &rendered {
            preview::save_png(&dir.join(format!("{}.png", r.file_stem)), &r.bitmap, args.scale)?;
        }
    }
    Ok(())
}
