use crate::bmp::{self, BmpHeader};
use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::ChannelLayout;
use enough::Stop;

/// Decode request for in-memory BMP bytes.
///
/// ```
/// use zenbmp24::{BmpHeader, ChannelLayout, DecodeRequest, PixelBuffer, Unstoppable, encode_bytes};
///
/// let mut pixels = PixelBuffer::new(2, 1, ChannelLayout::Planar)?;
/// pixels.set_pixel(1, 0, [10, 20, 30]);
/// let file = encode_bytes(&BmpHeader::new(2, 1), pixels)?;
///
/// let (header, pixels) = DecodeRequest::new(&file)
///     .with_layout(ChannelLayout::Interleaved)
///     .decode(Unstoppable)?;
/// assert_eq!(header.width, 2);
/// assert_eq!(pixels.as_bytes(), &[0, 0, 0, 10, 20, 30]);
/// # Ok::<(), zenbmp24::BitmapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    layout: ChannelLayout,
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    /// Decode `data` into a planar buffer with no limits.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            layout: ChannelLayout::default(),
            limits: None,
        }
    }

    /// Channel arrangement of the returned buffer.
    pub fn with_layout(mut self, layout: ChannelLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run the decode. `stop` is polled before allocating and every 16 rows.
    pub fn decode(self, stop: impl Stop) -> Result<(BmpHeader, PixelBuffer), BitmapError> {
        bmp::decode(self.data, self.layout, self.limits, &stop)
    }
}
