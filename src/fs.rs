//! Path-based entry points.
//!
//! Failures name the path: I/O errors as [`BitmapError::Io`], everything else
//! wrapped in [`BitmapError::AtPath`].

use std::path::Path;

use enough::Unstoppable;

use crate::bmp::{self, BmpHeader};
use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::ChannelLayout;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> BitmapError + '_ {
    move |source| BitmapError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read a 24-bit BMP file into its header and a planar pixel buffer.
pub fn decode(path: impl AsRef<Path>) -> Result<(BmpHeader, PixelBuffer), BitmapError> {
    decode_with_layout(path, ChannelLayout::Planar)
}

/// Read a 24-bit BMP file into its header and a buffer arranged as `layout`.
///
/// The whole file is read before parsing; the read buffer is dropped before
/// returning.
pub fn decode_with_layout(
    path: impl AsRef<Path>,
    layout: ChannelLayout,
) -> Result<(BmpHeader, PixelBuffer), BitmapError> {
    let path = path.as_ref();
    read_and_decode(path, layout, None).map_err(|e| e.at_path(path))
}

/// Like [`decode_with_layout`], bounded by `limits`.
///
/// The file length is checked against `max_memory_bytes` before it is read,
/// then the read buffer and the pixel buffer are counted together.
pub fn decode_with_limits(
    path: impl AsRef<Path>,
    layout: ChannelLayout,
    limits: &Limits,
) -> Result<(BmpHeader, PixelBuffer), BitmapError> {
    let path = path.as_ref();
    read_and_decode(path, layout, Some(limits)).map_err(|e| e.at_path(path))
}

fn read_and_decode(
    path: &Path,
    layout: ChannelLayout,
    limits: Option<&Limits>,
) -> Result<(BmpHeader, PixelBuffer), BitmapError> {
    if let Some(limits) = limits {
        let file_len = std::fs::metadata(path).map_err(io_error(path))?.len();
        limits.check_file_len(file_len)?;
    }
    let data = std::fs::read(path).map_err(io_error(path))?;
    bmp::decode(&data, layout, limits, &Unstoppable)
}

/// Write `header` and `pixels` to `path` as a 24-bit BMP file.
///
/// The file is written in one operation. `pixels` is consumed.
pub fn encode(
    path: impl AsRef<Path>,
    header: &BmpHeader,
    pixels: PixelBuffer,
) -> Result<(), BitmapError> {
    let path = path.as_ref();
    let bytes = bmp::encode(header, pixels, None, &Unstoppable).map_err(|e| e.at_path(path))?;
    std::fs::write(path, bytes).map_err(io_error(path))
}
