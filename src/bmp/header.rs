//! Byte-exact BITMAPFILEHEADER + BITMAPINFOHEADER record.

use crate::error::BitmapError;

use super::utils::RowGeometry;

/// The 54-byte header at the front of every file this codec reads or writes.
///
/// Only `width`, `height` and `bits_per_pixel` are interpreted. Every other
/// field is carried through decode and encode unchanged, so
/// `BmpHeader::from_bytes(&h.to_bytes()) == h` and
/// `h.to_bytes() == bytes` for any 54-byte input `bytes`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BmpHeader {
    /// Normally `b"BM"`. Not validated.
    pub signature: [u8; 2],
    /// Total file size as recorded by the writer. Not validated or rewritten.
    pub file_size: u32,
    pub reserved: [u8; 4],
    /// Offset of the pixel array as recorded in the file. Pixel data is always
    /// read from and written to [`BmpHeader::SIZE`].
    pub data_offset: u32,
    /// Size of the info header (40 for BITMAPINFOHEADER).
    pub info_size: u32,
    pub width: u32,
    /// Row count; negative means the rows are stored top-down.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl BmpHeader {
    /// On-disk size of the header in bytes.
    pub const SIZE: usize = 54;

    /// Build a header for a fresh 24-bit, uncompressed, bottom-up image.
    ///
    /// Size fields are computed from the dimensions; they saturate at
    /// `u32::MAX` for images too large to describe.
    pub fn new(width: u32, height: i32) -> Self {
        let image_size = RowGeometry::new(width, height.unsigned_abs())
            .ok()
            .and_then(|g| u32::try_from(g.pixel_array_size).ok())
            .unwrap_or(u32::MAX);
        Self {
            signature: *b"BM",
            file_size: image_size.saturating_add(Self::SIZE as u32),
            reserved: [0; 4],
            data_offset: Self::SIZE as u32,
            info_size: 40,
            width,
            height,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size,
            x_pixels_per_meter: 2835, // 72 DPI
            y_pixels_per_meter: 2835,
            colors_used: 0,
            colors_important: 0,
        }
    }

    /// Read the header from the first [`BmpHeader::SIZE`] bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, BitmapError> {
        let bytes: &[u8; Self::SIZE] = data
            .get(..Self::SIZE)
            .and_then(|b| b.try_into().ok())
            .ok_or(BitmapError::UnexpectedEof)?;
        Ok(Self::from_bytes(bytes))
    }

    /// Reinterpret 54 raw bytes as a header. Never fails.
    pub fn from_bytes(b: &[u8; Self::SIZE]) -> Self {
        let u16_at = |at: usize| u16::from_le_bytes([b[at], b[at + 1]]);
        let u32_at = |at: usize| u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]]);
        let i32_at = |at: usize| i32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]]);
        Self {
            signature: [b[0], b[1]],
            file_size: u32_at(2),
            reserved: [b[6], b[7], b[8], b[9]],
            data_offset: u32_at(10),
            info_size: u32_at(14),
            width: u32_at(18),
            height: i32_at(22),
            planes: u16_at(26),
            bits_per_pixel: u16_at(28),
            compression: u32_at(30),
            image_size: u32_at(34),
            x_pixels_per_meter: i32_at(38),
            y_pixels_per_meter: i32_at(42),
            colors_used: u32_at(46),
            colors_important: u32_at(50),
        }
    }

    /// Serialize the header back to its on-disk bytes.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..2].copy_from_slice(&self.signature);
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        out[6..10].copy_from_slice(&self.reserved);
        out[10..14].copy_from_slice(&self.data_offset.to_le_bytes());
        out[14..18].copy_from_slice(&self.info_size.to_le_bytes());
        out[18..22].copy_from_slice(&self.width.to_le_bytes());
        out[22..26].copy_from_slice(&self.height.to_le_bytes());
        out[26..28].copy_from_slice(&self.planes.to_le_bytes());
        out[28..30].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        out[30..34].copy_from_slice(&self.compression.to_le_bytes());
        out[34..38].copy_from_slice(&self.image_size.to_le_bytes());
        out[38..42].copy_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out[42..46].copy_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out[46..50].copy_from_slice(&self.colors_used.to_le_bytes());
        out[50..54].copy_from_slice(&self.colors_important.to_le_bytes());
        out
    }

    /// Number of pixel rows, regardless of storage direction.
    pub fn rows(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// Whether the first stored row is the top of the image.
    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }

    pub(crate) fn ensure_24bit(&self) -> Result<(), BitmapError> {
        if self.bits_per_pixel != 24 {
            return Err(BitmapError::UnsupportedBitDepth(self.bits_per_pixel));
        }
        Ok(())
    }
}
