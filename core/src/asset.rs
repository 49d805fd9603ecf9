use alloc::string::String;

use log::info;

use crate::{
    error::{Error, Result},
    packer::{PackedBitmap, packed_len},
};

/// Named image with a fixed geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset<'a> {
    pub name: &'a str,
    pub width: u32,
    pub height: u32,
}

impl<'a> Asset<'a> {
    pub const fn new(name: &'a str, width: u32, height: u32) -> Self {
        Self {
            name,
            width,
            height,
        }
    }

    /// Packed size in bytes implied by the geometry.
    pub const fn expected_len(&self) -> usize {
        packed_len(self.width, self.height)
    }
}

/// `name` must be usable as a C and Rust identifier.
pub fn check_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidName(String::from(name)))
    }
}

/// Fail when `bitmap` is not `expected` bytes long.
pub fn validate(asset: &Asset, bitmap: &PackedBitmap, expected: usize) -> Result<()> {
    if bitmap.len() != expected {
        return Err(Error::SizeMismatch {
            asset: String::from(asset.name),
            expected,
            actual: bitmap.len(),
        });
    }
    info!("{}: {} bytes OK", asset.name, bitmap.len());
    Ok(())
}
