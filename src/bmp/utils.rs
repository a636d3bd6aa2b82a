//! Row geometry and fallible allocation shared by the decoder and encoder.

use alloc::vec::Vec;

use crate::error::BitmapError;
use crate::pixel::BYTES_PER_PIXEL;

/// Sizes derived from a 24-bit image's dimensions. Computed once per call so
/// decode and encode can never disagree on padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RowGeometry {
    pub width: usize,
    pub rows: usize,
    /// Meaningful pixel bytes per row (`3 * width`).
    pub row_bytes: usize,
    /// Stored bytes per row, rounded up to a multiple of 4.
    pub row_size: usize,
    /// Zero bytes trailing each stored row.
    pub padding: usize,
    pub pixel_count: usize,
    /// Bytes of the in-memory buffer (`3 * pixel_count`).
    pub buffer_len: usize,
    /// Bytes of the on-disk pixel array (`row_size * rows`).
    pub pixel_array_size: usize,
}

impl RowGeometry {
    pub fn new(width: u32, rows: u32) -> Result<Self, BitmapError> {
        let too_large = || BitmapError::DimensionsTooLarge {
            width,
            height: rows,
        };
        let w = width as usize;
        let h = rows as usize;
        // ceil(24 * width / 32) * 4 == (3 * width + 3) & !3
        let row_bytes = w.checked_mul(BYTES_PER_PIXEL).ok_or_else(too_large)?;
        let row_size = row_bytes
            .checked_add(3)
            .map(|r| r & !3)
            .ok_or_else(too_large)?;
        let pixel_count = w.checked_mul(h).ok_or_else(too_large)?;
        let buffer_len = pixel_count
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or_else(too_large)?;
        let pixel_array_size = row_size.checked_mul(h).ok_or_else(too_large)?;
        Ok(Self {
            width: w,
            rows: h,
            row_bytes,
            row_size,
            padding: row_size - row_bytes,
            pixel_count,
            buffer_len,
            pixel_array_size,
        })
    }

    /// Smallest pixel array the decoder accepts: every row but the last must
    /// be complete including padding; the last may omit its padding.
    pub fn min_pixel_data(&self) -> usize {
        if self.rows == 0 {
            0
        } else {
            self.pixel_array_size - self.padding
        }
    }
}

/// Allocate a zeroed buffer, reporting failure instead of aborting.
pub(crate) fn try_zeroed(len: usize) -> Result<Vec<u8>, BitmapError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| BitmapError::Allocation { bytes: len })?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Allocate an empty buffer with room for `len` bytes.
pub(crate) fn try_with_capacity(len: usize) -> Result<Vec<u8>, BitmapError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| BitmapError::Allocation { bytes: len })?;
    Ok(buf)
}
