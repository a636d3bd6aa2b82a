use crate::bmp::BmpHeader;
use crate::bmp::utils::RowGeometry;
use crate::error::BitmapError;

/// Resource limits for decode/encode operations.
///
/// All fields default to `None` (no limit). Heights are measured in rows, so a
/// top-down file counts the same as its bottom-up twin.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * rows).
    pub max_pixels: Option<u64>,
    /// Maximum bytes held at once: the encoded file plus the pixel buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    fn check_dimensions(&self, geometry: &RowGeometry) -> Result<(), BitmapError> {
        let width = geometry.width as u64;
        let rows = geometry.rows as u64;
        if let Some(max_w) = self.max_width.filter(|&max| width > max) {
            return Err(exceeded(alloc::format!("width {width} exceeds limit {max_w}")));
        }
        if let Some(max_h) = self.max_height.filter(|&max| rows > max) {
            return Err(exceeded(alloc::format!("{rows} rows exceeds limit {max_h}")));
        }
        let pixels = geometry.pixel_count as u64;
        if let Some(max_px) = self.max_pixels.filter(|&max| pixels > max) {
            return Err(exceeded(alloc::format!(
                "pixel count {pixels} exceeds limit {max_px}"
            )));
        }
        Ok(())
    }

    /// Decoding holds `input_len` bytes of encoded input while the pixel
    /// buffer is filled.
    pub(crate) fn check_decode(
        &self,
        input_len: usize,
        geometry: &RowGeometry,
    ) -> Result<(), BitmapError> {
        self.check_dimensions(geometry)?;
        self.check_resident(input_len, geometry.buffer_len)
    }

    /// Encoding holds the caller's pixel buffer while the file is built.
    pub(crate) fn check_encode(&self, geometry: &RowGeometry) -> Result<(), BitmapError> {
        self.check_dimensions(geometry)?;
        let file_len = geometry.pixel_array_size.saturating_add(BmpHeader::SIZE);
        self.check_resident(file_len, geometry.buffer_len)
    }

    /// A file about to be read whole must fit on its own.
    #[cfg(feature = "std")]
    pub(crate) fn check_file_len(&self, file_len: u64) -> Result<(), BitmapError> {
        match self.max_memory_bytes {
            Some(max_mem) if file_len > max_mem => Err(exceeded(alloc::format!(
                "file of {file_len} bytes exceeds memory limit {max_mem}"
            ))),
            _ => Ok(()),
        }
    }

    fn check_resident(&self, file_bytes: usize, pixel_bytes: usize) -> Result<(), BitmapError> {
        let Some(max_mem) = self.max_memory_bytes else {
            return Ok(());
        };
        let total = (file_bytes as u64).saturating_add(pixel_bytes as u64);
        if total > max_mem {
            return Err(exceeded(alloc::format!(
                "{file_bytes} file bytes + {pixel_bytes} pixel bytes exceeds memory limit {max_mem}"
            )));
        }
        Ok(())
    }
}

fn exceeded(message: alloc::string::String) -> BitmapError {
    BitmapError::LimitExceeded(message)
}
