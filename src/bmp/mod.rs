//! 24-bit BMP decoder and encoder (internal).
//!
//! Use top-level [`crate::decode`], [`crate::encode`], [`crate::DecodeRequest`]
//! or [`crate::EncodeRequest`].

mod decode;
mod encode;
mod header;
pub(crate) mod utils;

pub use header::BmpHeader;

use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::ChannelLayout;
use alloc::vec::Vec;
use enough::Stop;
use utils::{RowGeometry, try_zeroed};

/// Parse the header, validate it, and extract the pixel array.
///
/// Bit depth is checked before anything is allocated.
pub(crate) fn decode(
    data: &[u8],
    layout: ChannelLayout,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<(BmpHeader, PixelBuffer), BitmapError> {
    let header = BmpHeader::parse(data)?;
    header.ensure_24bit()?;
    let geometry = RowGeometry::new(header.width, header.rows())?;
    if let Some(limits) = limits {
        limits.check_decode(data.len(), &geometry)?;
    }
    stop.check()?;

    let mut pixels = try_zeroed(geometry.buffer_len)?;
    decode::decode_pixels(
        &data[BmpHeader::SIZE..],
        &geometry,
        layout,
        &mut pixels,
        stop,
    )?;
    let buffer = PixelBuffer::from_parts(pixels, header.width, header.rows(), layout);
    Ok((header, buffer))
}

/// Serialize `header` and `pixels`. The buffer is consumed.
pub(crate) fn encode(
    header: &BmpHeader,
    pixels: PixelBuffer,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    header.ensure_24bit()?;
    let geometry = RowGeometry::new(header.width, header.rows())?;
    if pixels.width() != header.width
        || pixels.rows() != header.rows()
        || pixels.len() != geometry.buffer_len
    {
        return Err(BitmapError::BufferSizeMismatch {
            expected: geometry.buffer_len,
            actual: pixels.len(),
        });
    }
    if let Some(limits) = limits {
        limits.check_encode(&geometry)?;
    }
    stop.check()?;
    encode::encode_bmp24(header, pixels.as_bytes(), &geometry, pixels.layout(), stop)
}
