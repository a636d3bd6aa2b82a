//! 24-bit BMP pixel array → planar or interleaved buffer.
//!
//! Stored rows are `row_size` bytes: `3 * width` bytes of B, G, R triples
//! followed by zero padding up to the next multiple of 4. Padding is skipped
//! by slicing each stored row to `row_bytes`, so the amount skipped depends
//! only on the byte offset within the row, never on the pixel index.

use enough::Stop;

use super::utils::RowGeometry;
use crate::error::BitmapError;
use crate::pixel::{BYTES_PER_PIXEL, ChannelLayout};

/// Stored rows of `data`, each trimmed to its meaningful pixel bytes.
///
/// `data` must hold at least `geometry.min_pixel_data()` bytes.
fn stored_rows(data: &[u8], g: RowGeometry) -> impl Iterator<Item = &[u8]> {
    let (row_size, row_bytes) = (g.row_size, g.row_bytes);
    (0..g.rows).map(move |row| {
        let start = row * row_size;
        &data[start..start + row_bytes]
    })
}

/// Copy the pixel array in `data` into `out` (`geometry.buffer_len` bytes).
pub(crate) fn decode_pixels(
    data: &[u8],
    geometry: &RowGeometry,
    layout: ChannelLayout,
    out: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), BitmapError> {
    if geometry.pixel_count == 0 {
        return Ok(());
    }
    if data.len() < geometry.min_pixel_data() {
        return Err(BitmapError::UnexpectedEof);
    }
    let out = &mut out[..geometry.buffer_len];

    match layout {
        ChannelLayout::Interleaved => {
            for (row_idx, (src, dst)) in stored_rows(data, *geometry)
                .zip(out.chunks_exact_mut(geometry.row_bytes))
                .enumerate()
            {
                if row_idx % 16 == 0 {
                    stop.check()?;
                }
                dst.copy_from_slice(src);
            }
        }
        ChannelLayout::Planar => {
            let (w, size) = (geometry.width, geometry.pixel_count);
            let (blue, rest) = out.split_at_mut(size);
            let (green, red) = rest.split_at_mut(size);
            for (row_idx, src) in stored_rows(data, *geometry).enumerate() {
                if row_idx % 16 == 0 {
                    stop.check()?;
                }
                let start = row_idx * w;
                let planes = blue[start..start + w]
                    .iter_mut()
                    .zip(&mut green[start..start + w])
                    .zip(&mut red[start..start + w]);
                for (((b, g), r), px) in planes.zip(src.chunks_exact(BYTES_PER_PIXEL)) {
                    *b = px[0];
                    *g = px[1];
                    *r = px[2];
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use enough::Unstoppable;

    /// Two rows of width 5: 15 pixel bytes + 1 padding byte each, padding set
    /// to 0xEE so a wrong skip shows up in the output.
    fn padded_5x2() -> Vec<u8> {
        let mut data = Vec::new();
        for row in 0..2u8 {
            for x in 0..5u8 {
                let v = row * 100 + x * 10;
                data.extend_from_slice(&[v, v + 1, v + 2]);
            }
            data.push(0xEE);
        }
        data
    }

    #[test]
    fn planar_skips_one_padding_byte() {
        let g = RowGeometry::new(5, 2).unwrap();
        let mut out = vec![0u8; g.buffer_len];
        decode_pixels(&padded_5x2(), &g, ChannelLayout::Planar, &mut out, &Unstoppable).unwrap();
        assert_eq!(&out[0..10], &[0, 10, 20, 30, 40, 100, 110, 120, 130, 140]);
        assert_eq!(&out[10..20], &[1, 11, 21, 31, 41, 101, 111, 121, 131, 141]);
        assert_eq!(&out[20..30], &[2, 12, 22, 32, 42, 102, 112, 122, 132, 142]);
        assert!(!out.contains(&0xEE));
    }

    #[test]
    fn interleaved_skips_one_padding_byte() {
        let g = RowGeometry::new(5, 2).unwrap();
        let mut out = vec![0u8; g.buffer_len];
        let data = padded_5x2();
        decode_pixels(&data, &g, ChannelLayout::Interleaved, &mut out, &Unstoppable).unwrap();
        assert_eq!(&out[..15], &data[..15]);
        assert_eq!(&out[15..], &data[16..31]);
    }

    #[test]
    fn width_ten_skips_two_bytes() {
        let g = RowGeometry::new(10, 3).unwrap();
        let mut data = Vec::new();
        for row in 0..3u8 {
            for x in 0..10u8 {
                data.extend_from_slice(&[row, x, 7]);
            }
            data.extend_from_slice(&[0xEE, 0xEE]);
        }
        let mut out = vec![0u8; g.buffer_len];
        decode_pixels(&data, &g, ChannelLayout::Planar, &mut out, &Unstoppable).unwrap();
        let (blue, rest) = out.split_at(30);
        let (green, red) = rest.split_at(30);
        assert_eq!(&blue[20..30], &[2; 10]);
        assert_eq!(&green[20..30], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(red.iter().all(|&r| r == 7));
    }

    #[test]
    fn last_row_padding_may_be_missing() {
        let g = RowGeometry::new(5, 2).unwrap();
        let mut data = padded_5x2();
        data.pop();
        let mut out = vec![0u8; g.buffer_len];
        decode_pixels(&data, &g, ChannelLayout::Planar, &mut out, &Unstoppable).unwrap();
        assert_eq!(out[9], 140);
    }

    #[test]
    fn truncated_pixel_data() {
        let g = RowGeometry::new(5, 2).unwrap();
        let data = padded_5x2();
        let mut out = vec![0u8; g.buffer_len];
        let err = decode_pixels(&data[..30], &g, ChannelLayout::Planar, &mut out, &Unstoppable);
        assert!(matches!(err, Err(BitmapError::UnexpectedEof)));
    }

    #[test]
    fn zero_width_reads_nothing() {
        let g = RowGeometry::new(0, 4).unwrap();
        let mut out = Vec::new();
        decode_pixels(&[], &g, ChannelLayout::Planar, &mut out, &Unstoppable).unwrap();
        assert!(out.is_empty());
    }
}
