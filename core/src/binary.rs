use crate::packer::PackedBitmap;

/// Write the packed bytes verbatim. The file carries no header: width and
/// height are known to the firmware per asset.
pub fn write_binary<W: embedded_io::Write>(
    out: &mut W,
    bitmap: &PackedBitmap,
) -> Result<(), W::Error> {
    out.write_all(bitmap.as_bytes())?;
    out.flush()
}
