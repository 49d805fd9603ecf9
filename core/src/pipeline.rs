//! Batch generation of assets.
//!
//! A batch is all-or-nothing up to the first write: every asset is drawn,
//! packed and validated, and the source document is rendered, before any
//! file is created.

use alloc::{
    collections::BTreeSet,
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

use embedded_io::{ErrorType, Read, Write};
use log::{info, warn};

use crate::{
    asset::{Asset, check_name, validate},
    binary::write_binary,
    canvas::Canvas,
    error::{Error, Result},
    fs::{File, Filesystem, Mode},
    packer::{PackedBitmap, encode},
    source::{Dialect, emit_document},
};

pub type DrawFn = fn(&mut Canvas) -> Result<()>;

/// Appended to an output path while it is being written.
pub const STAGING_SUFFIX: &str = ".tmp";

/// One catalogue entry: what to draw and how large it must pack.
#[derive(Clone, Copy)]
pub struct AssetSpec<'a> {
    pub asset: Asset<'a>,
    /// Defaults to the length implied by the geometry.
    pub expected_len: Option<usize>,
    /// Stem of the `.bin` file; defaults to the asset name.
    pub file_stem: Option<&'a str>,
    pub draw: DrawFn,
}

impl<'a> AssetSpec<'a> {
    pub fn expected_len(&self) -> usize {
        self.expected_len.unwrap_or(self.asset.expected_len())
    }

    pub fn file_stem(&self) -> &'a str {
        self.file_stem.unwrap_or(self.asset.name)
    }
}

#[derive(Debug, Clone)]
pub struct DocumentConfig<'a> {
    pub path: String,
    pub dialect: Dialect,
    /// Prepended to every asset name to form the array symbol.
    pub symbol_prefix: &'a str,
    pub banner: &'a [&'a str],
}

#[derive(Clone)]
pub struct Catalogue<'a> {
    /// Batch name, used in logs and for errors not tied to one asset.
    pub name: &'a str,
    pub assets: Vec<AssetSpec<'a>>,
    /// Directory receiving `<asset>.bin`; `None` skips the binaries.
    pub binary_dir: Option<String>,
    pub document: Option<DocumentConfig<'a>>,
}

pub struct RenderedAsset<'a> {
    pub asset: Asset<'a>,
    pub file_stem: &'a str,
    pub bitmap: PackedBitmap,
}

/// Binary already on storage, fed to [`convert_binaries`].
#[derive(Debug, Clone)]
pub struct BinarySource<'a> {
    pub asset: Asset<'a>,
    pub path: String,
    pub expected_len: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub asset: String,
    pub path: String,
    pub bytes: usize,
}

#[derive(Debug, Default)]
pub struct Report {
    pub files: Vec<WrittenFile>,
}

impl Report {
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

pub fn join_path(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}

fn parent_dir(path: &str) -> Option<&str> {
    path.rsplit_once('/')
        .map(|(parent, _)| parent)
        .filter(|parent| !parent.is_empty())
}

/// Draw, pack and validate every asset. Nothing is written.
///
/// Asset names and `.bin` stems must be unique within the catalogue.
pub fn render<'a>(catalogue: &Catalogue<'a>) -> Result<Vec<RenderedAsset<'a>>> {
    let mut rendered = Vec::with_capacity(catalogue.assets.len());
    let mut names = BTreeSet::new();
    let mut stems = BTreeSet::new();
    for spec in &catalogue.assets {
        let asset = spec.asset;
        let file_stem = spec.file_stem();
        check_name(asset.name)?;
        if !names.insert(asset.name) {
            return Err(Error::DuplicateName(asset.name.to_string()));
        }
        if !stems.insert(file_stem) {
            return Err(Error::DuplicateName(file_stem.to_string()));
        }
        let mut canvas = Canvas::new(asset.width, asset.height)?;
        (spec.draw)(&mut canvas)?;
        let bitmap = encode(&canvas);
        validate(&asset, &bitmap, spec.expected_len())?;
        rendered.push(RenderedAsset {
            asset,
            file_stem,
            bitmap,
        });
    }
    info!(
        "{}: rendered and validated {} assets",
        catalogue.name,
        rendered.len()
    );
    Ok(rendered)
}

fn render_document<'b>(
    config: &DocumentConfig,
    assets: impl IntoIterator<Item = (&'b str, &'b PackedBitmap)>,
) -> Result<String> {
    let named = assets
        .into_iter()
        .map(|(name, bitmap)| (format!("{}{}", config.symbol_prefix, name), bitmap))
        .collect::<Vec<_>>();
    emit_document(
        config.dialect,
        config.banner,
        named.iter().map(|(name, bitmap)| (name.as_str(), *bitmap)),
    )
}

fn create_parent<F: Filesystem>(fs: &F, owner: &str, path: &str) -> Result<()> {
    if let Some(parent) = parent_dir(path) {
        fs.create_dir_all(parent)
            .map_err(|e| Error::io(owner, parent, e))?;
    }
    Ok(())
}

/// Write `path` through a staging file that is renamed into place once
/// `write` has succeeded, so a failed write never leaves a partial file at
/// `path`.
fn persist<F, W>(fs: &F, owner: &str, path: &str, write: W) -> Result<()>
where
    F: Filesystem,
    W: FnOnce(&mut F::File) -> core::result::Result<(), <F::File as ErrorType>::Error>,
{
    let staging = format!("{path}{STAGING_SUFFIX}");
    let mut file = fs
        .open_file(&staging, Mode::Write)
        .map_err(|e| Error::io(owner, path, e))?;
    let written = write(&mut file);
    drop(file);
    if let Err(e) = written {
        if let Err(cleanup) = fs.remove_file(&staging) {
            warn!("{owner}: could not remove {staging}: {cleanup:?}");
        }
        return Err(Error::io(owner, path, e));
    }
    fs.rename(&staging, path)
        .map_err(|e| Error::io(owner, path, e))
}

fn write_document<F: Filesystem>(
    fs: &F,
    owner: &str,
    path: &str,
    text: &str,
    report: &mut Report,
) -> Result<()> {
    create_parent(fs, owner, path)?;
    persist(fs, owner, path, |file| {
        file.write_all(text.as_bytes())?;
        file.flush()
    })?;
    info!("{owner}: wrote {path} ({} bytes)", text.len());
    report.files.push(WrittenFile {
        asset: owner.to_string(),
        path: path.to_string(),
        bytes: text.len(),
    });
    Ok(())
}

/// Write the binaries and the source document of an already rendered batch.
///
/// The document is rendered before the first file is created. Each file is
/// written through a [`STAGING_SUFFIX`] sibling, so an I/O error keeps the
/// files completed so far and never leaves a truncated one behind.
pub fn write_outputs<F: Filesystem>(
    fs: &F,
    catalogue: &Catalogue,
    rendered: &[RenderedAsset],
) -> Result<Report> {
    let document = match &catalogue.document {
        Some(config) => Some(render_document(
            config,
            rendered.iter().map(|r| (r.asset.name, &r.bitmap)),
        )?),
        None => None,
    };
    if catalogue.binary_dir.is_none() && document.is_none() {
        warn!("{}: no outputs configured", catalogue.name);
    }

    let mut report = Report::default();
    if let Some(dir) = &catalogue.binary_dir {
        if !dir.is_empty() {
            fs.create_dir_all(dir)
                .map_err(|e| Error::io(catalogue.name, dir, e))?;
        }
        for RenderedAsset {
            asset,
            file_stem,
            bitmap,
        } in rendered
        {
            let path = join_path(dir, &format!("{file_stem}.bin"));
            persist(fs, asset.name, &path, |file| write_binary(file, bitmap))?;
            info!("{}: wrote {path} ({} bytes)", asset.name, bitmap.len());
            report.files.push(WrittenFile {
                asset: asset.name.to_string(),
                path,
                bytes: bitmap.len(),
            });
        }
    }
    if let (Some(config), Some(text)) = (&catalogue.document, &document) {
        write_document(fs, catalogue.name, &config.path, text, &mut report)?;
    }
    Ok(report)
}

/// Render the catalogue, then write the binaries and the source document.
pub fn run<F: Filesystem>(fs: &F, catalogue: &Catalogue) -> Result<Report> {
    let rendered = render(catalogue)?;
    write_outputs(fs, catalogue, &rendered)
}

fn read_source<F: Filesystem>(fs: &F, source: &BinarySource) -> Result<PackedBitmap> {
    let name = source.asset.name;
    let path = source.path.as_str();
    check_name(name)?;
    let mut file = fs
        .open_file(path, Mode::Read)
        .map_err(|e| Error::io(name, path, e))?;
    let mut data = vec![0u8; file.size()];
    file.read_exact(&mut data)
        .map_err(|e| Error::from_read_exact_error(name, path, e))?;
    info!("{name}: read {path} ({} bytes)", data.len());

    let expected = source.expected_len.unwrap_or(source.asset.expected_len());
    if data.len() != expected {
        return Err(Error::SizeMismatch {
            asset: name.to_string(),
            expected,
            actual: data.len(),
        });
    }
    PackedBitmap::from_raw(source.asset.width, source.asset.height, data)
}

/// Build a source document straight from existing binaries.
///
/// Every source is read and checked before the document is written.
pub fn convert_binaries<F: Filesystem>(
    fs: &F,
    sources: &[BinarySource],
    document: &DocumentConfig,
) -> Result<Report> {
    let bitmaps = sources
        .iter()
        .map(|source| read_source(fs, source))
        .collect::<Result<Vec<_>>>()?;
    let text = render_document(
        document,
        sources
            .iter()
            .zip(&bitmaps)
            .map(|(source, bitmap)| (source.asset.name, bitmap)),
    )?;
    let mut report = Report::default();
    write_document(fs, "document", &document.path, &text, &mut report)?;
    Ok(report)
}
