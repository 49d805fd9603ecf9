#![no_std]

pub mod asset;
pub mod binary;
pub mod canvas;
pub mod error;
pub mod fs;
pub mod packer;
pub mod pattern;
pub mod pipeline;
pub mod source;
pub mod sprite;


extern crate alloc;

pub use error::{Error, Result};
