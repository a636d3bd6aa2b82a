use alloc::vec::Vec;

use crate::bmp::utils::{RowGeometry, try_zeroed};
use crate::error::BitmapError;
use crate::pixel::{BYTES_PER_PIXEL, Channel, ChannelLayout};

/// Owned pixels of a 24-bit image, `3 * width * rows` bytes long.
///
/// Rows are kept in file order: the codec never flips bottom-up images.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    bytes: Vec<u8>,
    width: u32,
    rows: u32,
    layout: ChannelLayout,
}

impl PixelBuffer {
    /// Zero-filled buffer for `width * rows` pixels.
    pub fn new(width: u32, rows: u32, layout: ChannelLayout) -> Result<Self, BitmapError> {
        let geometry = RowGeometry::new(width, rows)?;
        Ok(Self {
            bytes: try_zeroed(geometry.buffer_len)?,
            width,
            rows,
            layout,
        })
    }

    /// Wrap existing bytes. The length must be exactly `3 * width * rows`.
    pub fn from_vec(
        bytes: Vec<u8>,
        width: u32,
        rows: u32,
        layout: ChannelLayout,
    ) -> Result<Self, BitmapError> {
        let expected = RowGeometry::new(width, rows)?.buffer_len;
        if bytes.len() != expected {
            return Err(BitmapError::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes,
            width,
            rows,
            layout,
        })
    }

    pub(crate) fn from_parts(bytes: Vec<u8>, width: u32, rows: u32, layout: ChannelLayout) -> Self {
        Self {
            bytes,
            width,
            rows,
            layout,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows (absolute value of the header height).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    fn pixel_count(&self) -> usize {
        self.bytes.len() / BYTES_PER_PIXEL
    }

    /// One channel's plane. Planar buffers only.
    pub fn plane(&self, channel: Channel) -> Result<&[u8], BitmapError> {
        self.require(ChannelLayout::Planar)?;
        let n = self.pixel_count();
        let start = channel.index() * n;
        Ok(&self.bytes[start..start + n])
    }

    /// Mutable access to one channel's plane. Planar buffers only.
    pub fn plane_mut(&mut self, channel: Channel) -> Result<&mut [u8], BitmapError> {
        self.require(ChannelLayout::Planar)?;
        let n = self.pixel_count();
        let start = channel.index() * n;
        Ok(&mut self.bytes[start..start + n])
    }

    /// All three planes at once, in blue, green, red order. Planar buffers only.
    pub fn planes_mut(&mut self) -> Result<[&mut [u8]; 3], BitmapError> {
        self.require(ChannelLayout::Planar)?;
        let n = self.pixel_count();
        let (blue, rest) = self.bytes.split_at_mut(n);
        let (green, red) = rest.split_at_mut(n);
        Ok([blue, green, red])
    }

    fn byte_index(&self, x: u32, y: u32, channel: Channel) -> Option<usize> {
        if x >= self.width || y >= self.rows {
            return None;
        }
        let i = y as usize * self.width as usize + x as usize;
        Some(match self.layout {
            ChannelLayout::Planar => channel.index() * self.pixel_count() + i,
            ChannelLayout::Interleaved => i * BYTES_PER_PIXEL + channel.index(),
        })
    }

    /// `[blue, green, red]` at column `x` of stored row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let [b, g, r] = Channel::ALL.map(|c| self.byte_index(x, y, c));
        Some([self.bytes[b?], self.bytes[g?], self.bytes[r?]])
    }

    /// Overwrite the pixel at column `x` of stored row `y` with `[blue, green, red]`.
    ///
    /// Returns `false` when the coordinates are out of range.
    pub fn set_pixel(&mut self, x: u32, y: u32, bgr: [u8; 3]) -> bool {
        for (channel, value) in Channel::ALL.into_iter().zip(bgr) {
            match self.byte_index(x, y, channel) {
                Some(i) => self.bytes[i] = value,
                None => return false,
            }
        }
        true
    }

    /// Rearrange into `layout`, copying only when it differs.
    pub fn into_layout(self, layout: ChannelLayout) -> Result<Self, BitmapError> {
        if self.layout == layout {
            return Ok(self);
        }
        let n = self.pixel_count();
        let mut out = try_zeroed(self.bytes.len())?;
        match layout {
            ChannelLayout::Interleaved => {
                for (i, px) in out.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                    px[0] = self.bytes[i];
                    px[1] = self.bytes[n + i];
                    px[2] = self.bytes[2 * n + i];
                }
            }
            ChannelLayout::Planar => {
                let (blue, rest) = out.split_at_mut(n);
                let (green, red) = rest.split_at_mut(n);
                for (i, px) in self.bytes.chunks_exact(BYTES_PER_PIXEL).enumerate() {
                    blue[i] = px[0];
                    green[i] = px[1];
                    red[i] = px[2];
                }
            }
        }
        Ok(Self {
            bytes: out,
            width: self.width,
            rows: self.rows,
            layout,
        })
    }

    fn require(&self, expected: ChannelLayout) -> Result<(), BitmapError> {
        if self.layout != expected {
            return Err(BitmapError::LayoutMismatch {
                expected,
                actual: self.layout,
            });
        }
        Ok(())
    }

    /// Interleaved RGB bytes (R, G, B per pixel), for handing to RGB-ordered APIs.
    pub fn to_rgb_bytes(&self) -> Result<Vec<u8>, BitmapError> {
        let mut out = match self.layout {
            ChannelLayout::Interleaved => {
                let mut out = try_zeroed(self.bytes.len())?;
                out.copy_from_slice(&self.bytes);
                out
            }
            _ => self.clone().into_layout(ChannelLayout::Interleaved)?.bytes,
        };
        swap_red_blue(&mut out);
        Ok(out)
    }

    /// Pixels as typed RGB values, row-major in stored row order.
    #[cfg(feature = "rgb")]
    pub fn to_rgb8(&self) -> Vec<rgb::RGB8> {
        let n = self.pixel_count();
        match self.layout {
            ChannelLayout::Planar => (0..n)
                .map(|i| rgb::RGB8::new(self.bytes[2 * n + i], self.bytes[n + i], self.bytes[i]))
                .collect(),
            ChannelLayout::Interleaved => self
                .bytes
                .chunks_exact(BYTES_PER_PIXEL)
                .map(|px| rgb::RGB8::new(px[2], px[1], px[0]))
                .collect(),
        }
    }

    /// Build a buffer from typed RGB values, stored in `layout`.
    #[cfg(feature = "rgb")]
    pub fn from_rgb8(
        pixels: &[rgb::RGB8],
        width: u32,
        rows: u32,
        layout: ChannelLayout,
    ) -> Result<Self, BitmapError> {
        let mut buf = Self::new(width, rows, layout)?;
        let n = buf.pixel_count();
        if pixels.len() != n {
            return Err(BitmapError::BufferSizeMismatch {
                expected: n * BYTES_PER_PIXEL,
                actual: pixels.len() * BYTES_PER_PIXEL,
            });
        }
        match layout {
            ChannelLayout::Planar => {
                let [blue, green, red] = buf.planes_mut()?;
                for (i, px) in pixels.iter().enumerate() {
                    blue[i] = px.b;
                    green[i] = px.g;
                    red[i] = px.r;
                }
            }
            ChannelLayout::Interleaved => {
                for (dst, px) in buf.bytes.chunks_exact_mut(BYTES_PER_PIXEL).zip(pixels) {
                    dst.copy_from_slice(&[px.b, px.g, px.r]);
                }
            }
        }
        Ok(buf)
    }

    /// Zero-copy 2D view of one channel plane. Planar buffers only.
    #[cfg(feature = "imgref")]
    pub fn plane_imgref(&self, channel: Channel) -> Result<imgref::ImgRef<'_, u8>, BitmapError> {
        let plane = self.plane(channel)?;
        Ok(imgref::ImgRef::new(
            plane,
            self.width as usize,
            self.rows as usize,
        ))
    }

    /// Copy into an [`imgref::ImgVec`] of typed RGB pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        imgref::ImgVec::new(self.to_rgb8(), self.width as usize, self.rows as usize)
    }
}

#[cfg(feature = "simd")]
fn swap_red_blue(buf: &mut [u8]) {
    if buf.is_empty() {
        return;
    }
    // Length is always a multiple of 3 here.
    if garb::bytes::rgb_to_bgr_inplace(buf).is_err() {
        swap_red_blue_scalar(buf);
    }
}

#[cfg(not(feature = "simd"))]
fn swap_red_blue(buf: &mut [u8]) {
    swap_red_blue_scalar(buf);
}

fn swap_red_blue_scalar(buf: &mut [u8]) {
    for px in buf.chunks_exact_mut(BYTES_PER_PIXEL) {
        px.swap(0, 2);
    }
}
