//! Source array emitter.
//!
//! Every array is laid out the same way regardless of dialect: a comment
//! line, the opener, data lines of at most [`BYTES_PER_LINE`] `0xHH` tokens
//! indented by four spaces (no trailing comma after the final byte), the
//! closer and then the width and height constants.

use alloc::{
    collections::BTreeSet,
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::str::FromStr;

use crate::{
    asset::check_name,
    error::{Error, Result},
    packer::PackedBitmap,
};

pub const BYTES_PER_LINE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Arduino header with `PROGMEM` arrays.
    #[default]
    Progmem,
    /// Rust module with `static` arrays.
    Rust,
}

impl Dialect {
    pub fn repr(self) -> &'static str {
        match self {
            Dialect::Progmem => "progmem",
            Dialect::Rust => "rust",
        }
    }

    fn preamble(self) -> &'static str {
        match self {
            Dialect::Progmem => "#pragma once\n#include <pgmspace.h>\n",
            Dialect::Rust => "// Auto-generated bitmap file\n",
        }
    }

    fn symbol(self, name: &str) -> String {
        match self {
            Dialect::Progmem => name.to_string(),
            Dialect::Rust => name.to_ascii_uppercase(),
        }
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "progmem" | "c" | "arduino" => Ok(Dialect::Progmem),
            "rust" | "rs" => Ok(Dialect::Rust),
            other => Err(format!("unknown dialect '{other}' (expected progmem or rust)")),
        }
    }
}

/// Hex data lines for `bytes`, without indentation or line breaks.
pub fn data_lines(bytes: &[u8]) -> impl Iterator<Item = String> + '_ {
    let last = bytes.len().div_ceil(BYTES_PER_LINE).saturating_sub(1);
    bytes
        .chunks(BYTES_PER_LINE)
        .enumerate()
        .map(move |(index, chunk)| {
            let tokens = chunk
                .iter()
                .map(|b| format!("0x{b:02X}"))
                .collect::<Vec<_>>()
                .join(", ");
            if index < last {
                tokens + ","
            } else {
                tokens
            }
        })
}

/// Render one named array plus its width and height constants.
pub fn emit_array(dialect: Dialect, name: &str, bitmap: &PackedBitmap) -> Result<String> {
    check_name(name)?;
    let symbol = dialect.symbol(name);
    let len = bitmap.len();
    let dim_fits_u16 = bitmap.width() <= u16::MAX as u32 && bitmap.height() <= u16::MAX as u32;

    let mut code = String::new();
    code.push_str(&format!(
        "// {symbol}: {}x{} pixels, {len} bytes\n",
        bitmap.width(),
        bitmap.height()
    ));
    code.push_str(&match dialect {
        Dialect::Progmem => format!("const uint8_t {symbol}[] PROGMEM = {{\n"),
        Dialect::Rust => format!("pub static {symbol}: [u8; {len}] = [\n"),
    });
    for line in data_lines(bitmap.as_bytes()) {
        code.push_str("    ");
        code.push_str(&line);
        code.push('\n');
    }
    match dialect {
        Dialect::Progmem => {
            let ty = if dim_fits_u16 { "uint16_t" } else { "uint32_t" };
            code.push_str("};\n");
            code.push_str(&format!("const {ty} {symbol}_width = {};\n", bitmap.width()));
            code.push_str(&format!("const {ty} {symbol}_height = {};\n", bitmap.height()));
        }
        Dialect::Rust => {
            let ty = if dim_fits_u16 { "u16" } else { "u32" };
            code.push_str("];\n");
            code.push_str(&format!("pub const {symbol}_WIDTH: {ty} = {};\n", bitmap.width()));
            code.push_str(&format!("pub const {symbol}_HEIGHT: {ty} = {};\n", bitmap.height()));
        }
    }
    Ok(code)
}

/// Render several arrays, in order, behind one shared preamble.
///
/// `banner` lines are emitted as comments above the preamble. Names that
/// end up as the same symbol in `dialect` are rejected.
pub fn emit_document<'a, I>(dialect: Dialect, banner: &[&str], assets: I) -> Result<String>
where
    I: IntoIterator<Item = (&'a str, &'a PackedBitmap)>,
{
    let mut document = String::new();
    for line in banner {
        document.push_str(&format!("// {line}\n"));
    }
    if !banner.is_empty() {
        document.push('\n');
    }
    document.push_str(dialect.preamble());
    let mut symbols = BTreeSet::new();
    for (name, bitmap) in assets {
        if !symbols.insert(dialect.symbol(name)) {
            return Err(Error::DuplicateName(name.to_string()));
        }
        document.push('\n');
        document.push_str(&emit_array(dialect, name, bitmap)?);
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn bitmap(len: usize) -> PackedBitmap {
        let data = (0..len).map(|i| i as u8).collect();
        PackedBitmap::from_raw(8, len as u32, data).unwrap()
    }

    fn array_lines(code: &str) -> Vec<&str> {
        code.lines().filter(|l| l.starts_with("    ")).collect()
    }

    #[test]
    fn line_count_is_ceil_of_sixteenths() {
        for len in [1usize, 15, 16, 17, 32, 33, 200] {
            let code = emit_array(Dialect::Progmem, "a", &bitmap(len)).unwrap();
            let lines = array_lines(&code);
            assert_eq!(lines.len(), len.div_ceil(16), "len {len}");
            for line in &lines {
                let tokens = line.trim().trim_end_matches(',').split(", ").count();
                assert!(tokens <= 16);
            }
            assert!(!lines.last().unwrap().ends_with(','));
            for line in &lines[..lines.len() - 1] {
                assert!(line.ends_with(','));
            }
        }
    }

    #[test]
    fn full_screen_has_600_lines() {
        let screen = PackedBitmap::from_raw(320, 240, vec![0xA5; 9600]).unwrap();
        let code = emit_array(Dialect::Progmem, "title", &screen).unwrap();
        assert_eq!(array_lines(&code).len(), 600);
        assert!(code.contains("const uint16_t title_width = 320;\n"));
        assert!(code.contains("const uint16_t title_height = 240;\n"));
    }

    #[test]
    fn progmem_layout() {
        let code = emit_array(Dialect::Progmem, "gfx_dot", &bitmap(18)).unwrap();
        let expected = "\
// gfx_dot: 8x18 pixels, 18 bytes
const uint8_t gfx_dot[] PROGMEM = {
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
    0x10, 0x11
};
const uint16_t gfx_dot_width = 8;
const uint16_t gfx_dot_height = 18;
";
        assert_eq!(code, expected);
    }

    #[test]
    fn rust_layout() {
        let code = emit_array(Dialect::Rust, "inn", &bitmap(2)).unwrap();
        let expected = "\
// INN: 8x2 pixels, 2 bytes
pub static INN: [u8; 2] = [
    0x00, 0x01
];
pub const INN_WIDTH: u16 = 8;
pub const INN_HEIGHT: u16 = 2;
";
        assert_eq!(code, expected);
    }

    #[test]
    fn document_keeps_order_behind_one_preamble() {
        let first = bitmap(1);
        let second = bitmap(2);
        let document = emit_document(
            Dialect::Progmem,
            &["Generated", "Display: 320x240"],
            [("zeta", &first), ("alpha", &second)],
        )
        .unwrap();
        assert!(document.starts_with("// Generated\n// Display: 320x240\n\n#pragma once\n"));
        assert_eq!(document.matches("#pragma once").count(), 1);
        let zeta = document.find("zeta[]").unwrap();
        let alpha = document.find("alpha[]").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn invalid_names_are_rejected() {
        assert_eq!(
            emit_array(Dialect::Progmem, "battle-1", &bitmap(1)),
            Err(Error::InvalidName("battle-1".to_string()))
        );
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        let inn = bitmap(2);
        assert_eq!(
            emit_document(Dialect::Rust, &[], [("inn", &inn), ("INN", &inn)]),
            Err(Error::DuplicateName("INN".to_string()))
        );
        assert_eq!(
            emit_document(Dialect::Progmem, &[], [("inn", &inn), ("inn", &inn)]),
            Err(Error::DuplicateName("inn".to_string()))
        );
        // case matters for C symbols
        assert!(emit_document(Dialect::Progmem, &[], [("inn", &inn), ("INN", &inn)]).is_ok());
    }

    #[test]
    fn dialect_from_str() {
        assert_eq!("rust".parse::<Dialect>(), Ok(Dialect::Rust));
        assert_eq!("progmem".parse::<Dialect>(), Ok(Dialect::Progmem));
        assert!("cobol".parse::<Dialect>().is_err());
    }
}
