use alloc::string::String;
use core::fmt;

/// Errors raised while drawing, packing, validating or writing assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A canvas or bitmap was requested with a zero dimension.
    EmptyCanvas { width: u32, height: u32 },
    /// Sprite mask rows are not all the same length.
    MaskShape {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Sprite stamp scale must be at least 1.
    InvalidScale,
    /// Raw bitmap data does not match the declared geometry.
    DataLength { expected: usize, actual: usize },
    /// Packed asset length disagrees with the catalogue.
    SizeMismatch {
        asset: String,
        expected: usize,
        actual: usize,
    },
    /// Asset name cannot be used as an array identifier.
    InvalidName(String),
    /// Two assets of one batch map to the same array symbol or `.bin` file.
    DuplicateName(String),
    IoError {
        asset: String,
        path: String,
        kind: embedded_io::ErrorKind,
    },
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(asset: &str, path: &str, error: impl embedded_io::Error) -> Self {
        Error::IoError {
            asset: String::from(asset),
            path: String::from(path),
            kind: error.kind(),
        }
    }

    pub(crate) fn from_read_exact_error<E: embedded_io::Error>(
        asset: &str,
        path: &str,
        error: embedded_io::ReadExactError<E>,
    ) -> Self {
        match error {
            embedded_io::ReadExactError::UnexpectedEof => Error::IoError {
                asset: String::from(asset),
                path: String::from(path),
                kind: embedded_io::ErrorKind::InvalidData,
            },
            embedded_io::ReadExactError::Other(e) => Error::io(asset, path, e),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyCanvas { width, height } => {
                write!(f, "canvas must not be empty (got {width}x{height})")
            }
            Error::MaskShape { row, expected, found } => write!(
                f,
                "sprite mask row {row} has {found} cells, expected {expected}"
            ),
            Error::InvalidScale => write!(f, "sprite scale must be at least 1"),
            Error::DataLength { expected, actual } => {
                write!(f, "bitmap data is {actual} bytes, expected {expected}")
            }
            Error::SizeMismatch {
                asset,
                expected,
                actual,
            } => write!(f, "{asset} packs to {actual} bytes, expected {expected}"),
            Error::InvalidName(name) => write!(f, "'{name}' is not a valid identifier"),
            Error::DuplicateName(name) => write!(f, "'{name}' is used by more than one asset"),
            Error::IoError { asset, path, kind } => {
                write!(f, "{asset}: I/O error on {path}: {kind:?}")
            }
        }
    }
}

impl core::error::Error for Error {}

impl embedded_io::Error for Error {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            Error::IoError { kind, .. } => *kind,
            Error::DataLength { .. } | Error::SizeMismatch { .. } => {
                embedded_io::ErrorKind::InvalidData
            }
            Error::EmptyCanvas { .. }
            | Error::MaskShape { .. }
            | Error::InvalidScale
            | Error::InvalidName(_)
            | Error::DuplicateName(_) => embedded_io::ErrorKind::InvalidInput,
        }
    }
}
