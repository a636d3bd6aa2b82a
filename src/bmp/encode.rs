//! Planar or interleaved buffer → 24-bit BMP file bytes.

use alloc::vec::Vec;
use enough::Stop;

use super::header::BmpHeader;
use super::utils::{RowGeometry, try_with_capacity};
use crate::error::BitmapError;
use crate::pixel::{BYTES_PER_PIXEL, ChannelLayout};

/// Write `header` verbatim followed by the padded pixel array built from `pixels`.
///
/// `pixels` must be `geometry.buffer_len` bytes; the caller checks this.
pub(crate) fn encode_bmp24(
    header: &BmpHeader,
    pixels: &[u8],
    geometry: &RowGeometry,
    layout: ChannelLayout,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    let file_size = geometry
        .pixel_array_size
        .checked_add(BmpHeader::SIZE)
        .ok_or(BitmapError::DimensionsTooLarge {
            width: header.width,
            height: header.rows(),
        })?;

    let mut out = try_with_capacity(file_size)?;
    out.extend_from_slice(&header.to_bytes());

    if geometry.pixel_count == 0 {
        // Zero width still has `rows` stored rows, each zero bytes long.
        return Ok(out);
    }

    let (w, size) = (geometry.width, geometry.pixel_count);
    for row in 0..geometry.rows {
        if row % 16 == 0 {
            stop.check()?;
        }
        let start = row * w;
        match layout {
            ChannelLayout::Interleaved => {
                let off = start * BYTES_PER_PIXEL;
                out.extend_from_slice(&pixels[off..off + geometry.row_bytes]);
            }
            ChannelLayout::Planar => {
                let blue = &pixels[start..start + w];
                let green = &pixels[size + start..size + start + w];
                let red = &pixels[2 * size + start..2 * size + start + w];
                for ((&b, &g), &r) in blue.iter().zip(green).zip(red) {
                    out.extend_from_slice(&[b, g, r]);
                }
            }
        }
        out.extend(core::iter::repeat_n(0u8, geometry.padding));
    }

    debug_assert_eq!(out.len(), file_size);
    Ok(out)
}
