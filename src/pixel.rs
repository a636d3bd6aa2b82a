/// How the three channels of a [`crate::PixelBuffer`] are arranged in memory.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// Three contiguous planes of `width * rows` bytes each: blue, then green,
    /// then red.
    #[default]
    Planar,
    /// One B, G, R triple per pixel, pixels in row-major order, no row padding.
    Interleaved,
}

/// A color channel, in the order BMP stores them on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Blue,
    Green,
    Red,
}

impl Channel {
    /// All channels in on-disk (and plane) order.
    pub const ALL: [Channel; 3] = [Channel::Blue, Channel::Green, Channel::Red];

    /// Position of this channel within a BGR triple, and index of its plane.
    pub fn index(self) -> usize {
        match self {
            Self::Blue => 0,
            Self::Green => 1,
            Self::Red => 2,
        }
    }
}

/// Bytes per pixel for every layout this crate handles.
pub(crate) const BYTES_PER_PIXEL: usize = 3;
