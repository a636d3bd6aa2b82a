//! # zenbmp24
//!
//! Decoder and encoder for uncompressed 24-bit BMP images, with pixels held
//! either as three channel planes or as interleaved BGR triples.
//!
//! ## Buffer layouts
//!
//! - **Planar** (default): `3 * width * rows` bytes split into a blue plane,
//!   a green plane and a red plane, each `width * rows` bytes, row-major.
//! - **Interleaved**: the file's B, G, R triples with row padding removed.
//!
//! Rows stay in file order; a bottom-up file decodes bottom row first.
//!
//! ## Round trips
//!
//! The 54-byte header is carried verbatim: only `width`, `height` and
//! `bits_per_pixel` are interpreted, everything else is written back exactly
//! as it was read. Row padding is dropped on decode and re-emitted as zeros on
//! encode, so decoding and re-encoding a conforming file reproduces it byte
//! for byte.
//!
//! Pixels are read from directly after the header and nothing past the pixel
//! array is kept. Trailing bytes after the last row, or a gap implied by a
//! larger `data_offset`, are not reproduced: the re-encoded file is the
//! header followed by the padded rows and may be shorter than the input.
//!
//! ## Errors
//!
//! The path functions ([`decode`], [`decode_with_layout`],
//! [`decode_with_limits`], [`encode`]) name the file in every error:
//! [`BitmapError::Io`] for read and write failures, [`BitmapError::AtPath`]
//! around any other cause. [`BitmapError::cause`] looks through the wrapper.
//!
//! ## Non-Goals
//!
//! - Compressed BMPs (RLE, bitfields, embedded JPEG/PNG)
//! - Bit depths other than 24, color palettes
//! - Any image processing beyond the layout transform
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp24::Channel;
//!
//! let (header, mut pixels) = zenbmp24::decode("input.bmp")?;
//! println!("{}x{}", header.width, header.rows());
//!
//! // Halve the red channel
//! for r in pixels.plane_mut(Channel::Red)? {
//!     *r /= 2;
//! }
//!
//! zenbmp24::encode("output.bmp", &header, pixels)?;
//! # Ok::<(), zenbmp24::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod buffer;
mod error;
mod limits;
mod pixel;

#[cfg(feature = "std")]
mod fs;

mod decode;
mod encode;

// Re-exports
pub use bmp::BmpHeader;
pub use buffer::PixelBuffer;
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BitmapError;
pub use limits::Limits;
pub use pixel::{Channel, ChannelLayout};

#[cfg(feature = "std")]
pub use fs::{decode, decode_with_layout, decode_with_limits, encode};

use alloc::vec::Vec;

/// Decode in-memory BMP bytes into a buffer arranged as `layout`.
pub fn decode_bytes(
    data: &[u8],
    layout: ChannelLayout,
) -> Result<(BmpHeader, PixelBuffer), BitmapError> {
    DecodeRequest::new(data).with_layout(layout).decode(Unstoppable)
}

/// Encode `header` and `pixels` to in-memory BMP bytes. `pixels` is consumed.
pub fn encode_bytes(header: &BmpHeader, pixels: PixelBuffer) -> Result<Vec<u8>, BitmapError> {
    EncodeRequest::new().encode(header, pixels, Unstoppable)
}
