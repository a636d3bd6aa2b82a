use alloc::vec::Vec;

use crate::bmp::{self, BmpHeader};
use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use crate::limits::Limits;
use enough::Stop;

/// Encode request producing in-memory BMP bytes.
///
/// The channel arrangement is taken from the [`PixelBuffer`] itself.
#[derive(Clone, Debug, Default)]
pub struct EncodeRequest<'a> {
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the dimensions and the size of the output file.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Serialize `header` verbatim followed by the padded pixel array.
    ///
    /// `pixels` is consumed; its dimensions must match `header`.
    pub fn encode(
        self,
        header: &BmpHeader,
        pixels: PixelBuffer,
        stop: impl Stop,
    ) -> Result<Vec<u8>, BitmapError> {
        bmp::encode(header, pixels, self.limits, &stop)
    }
}
