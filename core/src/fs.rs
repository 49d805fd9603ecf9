use embedded_io::ErrorType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    /// Create or truncate.
    Write,
}

pub trait File: embedded_io::Read + embedded_io::Write {
    fn size(&self) -> usize;
}

/// Storage the pipeline reads binaries from and writes its outputs to.
///
/// Paths are `/`-separated and relative to the filesystem root.
pub trait Filesystem: ErrorType {
    type File: File;

    fn open_file(&self, path: &str, mode: Mode) -> Result<Self::File, Self::Error>;
    fn create_dir_all(&self, path: &str) -> Result<(), Self::Error>;
    /// Move `from` to `to`, replacing any file already at `to`.
    fn rename(&self, from: &str, to: &str) -> Result<(), Self::Error>;
    fn remove_file(&self, path: &str) -> Result<(), Self::Error>;
}
