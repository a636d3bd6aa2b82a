use alloc::string::String;
use enough::StopReason;

use crate::pixel::ChannelLayout;

/// Errors from BMP decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    /// The file could not be opened, read, or written.
    #[cfg(feature = "std")]
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A decode or encode of `path` failed for a reason other than I/O.
    #[cfg(feature = "std")]
    #[error("{}: {source}", .path.display())]
    AtPath {
        path: std::path::PathBuf,
        #[source]
        source: alloc::boxed::Box<BitmapError>,
    },

    #[error("unsupported bit depth {0}: only 24-bit true color is handled")]
    UnsupportedBitDepth(u16),

    #[error("cannot allocate {bytes} bytes for pixel data")]
    Allocation { bytes: usize },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("channel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: ChannelLayout,
        actual: ChannelLayout,
    },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl BitmapError {
    /// The underlying cause, looking through [`BitmapError::AtPath`].
    pub fn cause(&self) -> &BitmapError {
        match self {
            #[cfg(feature = "std")]
            BitmapError::AtPath { source, .. } => source.cause(),
            other => other,
        }
    }

    /// Attach `path` unless the error already names it.
    #[cfg(feature = "std")]
    pub(crate) fn at_path(self, path: &std::path::Path) -> Self {
        match self {
            e @ (BitmapError::Io { .. } | BitmapError::AtPath { .. }) => e,
            e => BitmapError::AtPath {
                path: path.to_path_buf(),
                source: alloc::boxed::Box::new(e),
            },
        }
    }
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}
