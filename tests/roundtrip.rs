use std::path::PathBuf;

use zenbmp24::*;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("zenbmp24-{}-{name}.bmp", std::process::id()))
}

/// Build a 24-bit file by hand, independent of the encoder.
fn handmade_bmp(width: u32, height: i32, pixel_at: impl Fn(u32, u32) -> [u8; 3]) -> Vec<u8> {
    let rows = height.unsigned_abs();
    let row_size = (width as usize * 3).div_ceil(4) * 4;
    let mut file = BmpHeader::new(width, height).to_bytes().to_vec();
    for y in 0..rows {
        let start = file.len();
        for x in 0..width {
            file.extend_from_slice(&pixel_at(x, y));
        }
        file.resize(start + row_size, 0);
    }
    file
}

fn gradient(x: u32, y: u32) -> [u8; 3] {
    [(x * 7) as u8, (y * 13) as u8, (x + y) as u8]
}

#[test]
fn planar_roundtrip_through_files() {
    let w = 5;
    let h = 4;
    let original = handmade_bmp(w, h, gradient);
    let src = temp_path("planar-src");
    let dst = temp_path("planar-dst");
    std::fs::write(&src, &original).unwrap();

    let (header, pixels) = decode(&src).unwrap();
    assert_eq!(header.width, w);
    assert_eq!(header.height, h);
    assert_eq!(header.bits_per_pixel, 24);
    assert_eq!(pixels.layout(), ChannelLayout::Planar);
    assert_eq!(pixels.len(), 3 * 5 * 4);

    encode(&dst, &header, pixels).unwrap();
    let written = std::fs::read(&dst).unwrap();
    assert_eq!(written, original);

    let _ = std::fs::remove_file(&src);
    let _ = std::fs::remove_file(&dst);
}

#[test]
fn interleaved_roundtrip_through_files() {
    let original = handmade_bmp(10, 3, gradient);
    let src = temp_path("interleaved-src");
    let dst = temp_path("interleaved-dst");
    std::fs::write(&src, &original).unwrap();

    let (header, pixels) = decode_with_layout(&src, ChannelLayout::Interleaved).unwrap();
    assert_eq!(pixels.layout(), ChannelLayout::Interleaved);
    // First row, no padding in the buffer
    let expected_row0: Vec<u8> = (0..10).flat_map(|x| gradient(x, 0)).collect();
    assert_eq!(&pixels.as_bytes()[..30], &expected_row0[..]);

    encode(&dst, &header, pixels).unwrap();
    assert_eq!(std::fs::read(&dst).unwrap(), original);

    let _ = std::fs::remove_file(&src);
    let _ = std::fs::remove_file(&dst);
}

#[test]
fn missing_file_is_io_error() {
    let path = temp_path("does-not-exist");
    let err = decode(&path).unwrap_err();
    match err {
        BitmapError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn unwritable_path_is_io_error() {
    let dir = std::env::temp_dir().join(format!("zenbmp24-missing-dir-{}", std::process::id()));
    let path = dir.join("out.bmp");
    let pixels = PixelBuffer::new(1, 1, ChannelLayout::Planar).unwrap();
    let err = encode(&path, &BmpHeader::new(1, 1), pixels).unwrap_err();
    assert!(matches!(err, BitmapError::Io { .. }), "{err:?}");
    assert!(err.to_string().contains("out.bmp"));
}

#[test]
fn eight_bit_rejected_before_pixels() {
    let mut header = BmpHeader::new(4, 4);
    header.bits_per_pixel = 8;
    // Header only: a decoder that read pixel data would hit EOF instead.
    let file = header.to_bytes();
    let err = decode_bytes(&file, ChannelLayout::Planar).unwrap_err();
    assert!(matches!(err, BitmapError::UnsupportedBitDepth(8)), "{err:?}");
}

#[test]
fn four_by_three_buffer_size() {
    let file = handmade_bmp(4, 3, gradient);
    assert_eq!(file.len(), 54 + 36);
    let (_, pixels) = decode_bytes(&file, ChannelLayout::Planar).unwrap();
    assert_eq!(pixels.len(), 36);
}

#[test]
fn zero_dimensions() {
    for (w, h) in [(0u32, 5i32), (5, 0), (0, 0)] {
        let file = handmade_bmp(w, h, gradient);
        let (header, pixels) = decode_bytes(&file, ChannelLayout::Planar).unwrap();
        assert!(pixels.is_empty(), "{w}x{h}");
        let out = encode_bytes(&header, pixels).unwrap();
        assert_eq!(out.len(), BmpHeader::SIZE, "{w}x{h}");
        assert_eq!(out, file);
    }
}

#[test]
fn single_pixel_channel_order() {
    for layout in [ChannelLayout::Planar, ChannelLayout::Interleaved] {
        let mut pixels = PixelBuffer::new(1, 1, layout).unwrap();
        assert!(pixels.set_pixel(0, 0, [10, 20, 30]));
        let file = encode_bytes(&BmpHeader::new(1, 1), pixels).unwrap();
        // on disk: blue, green, red, one padding byte
        assert_eq!(&file[54..], &[10, 20, 30, 0]);

        let (_, decoded) = decode_bytes(&file, layout).unwrap();
        assert_eq!(decoded.as_bytes(), &[10, 20, 30]);
        assert_eq!(decoded.pixel(0, 0), Some([10, 20, 30]));
    }
}

#[test]
fn planar_plane_positions() {
    // 2x2: pixel i -> blue at i, green at size + i, red at 2 * size + i
    let file = handmade_bmp(2, 2, |x, y| {
        let i = (y * 2 + x) as u8;
        [i, 10 + i, 20 + i]
    });
    let (_, pixels) = decode_bytes(&file, ChannelLayout::Planar).unwrap();
    assert_eq!(pixels.as_bytes(), &[0, 1, 2, 3, 10, 11, 12, 13, 20, 21, 22, 23]);
    assert_eq!(pixels.plane(Channel::Red).unwrap(), &[20, 21, 22, 23]);
}

#[test]
fn top_down_rows_kept_in_file_order() {
    let file = handmade_bmp(3, -2, |x, y| [x as u8, y as u8, 0]);
    let (header, pixels) = decode_bytes(&file, ChannelLayout::Planar).unwrap();
    assert!(header.is_top_down());
    assert_eq!(pixels.rows(), 2);
    assert_eq!(pixels.pixel(2, 1), Some([2, 1, 0]));
    assert_eq!(encode_bytes(&header, pixels).unwrap(), file);
}

#[test]
fn header_fields_pass_through() {
    let mut file = handmade_bmp(3, 3, gradient);
    // Scribble over fields the codec does not interpret.
    file[2..6].copy_from_slice(&12345u32.to_le_bytes());
    file[6..10].copy_from_slice(b"zen!");
    file[38..42].copy_from_slice(&3780i32.to_le_bytes());
    file[46..50].copy_from_slice(&7u32.to_le_bytes());
    let (header, pixels) = decode_bytes(&file, ChannelLayout::Planar).unwrap();
    assert_eq!(header.reserved, *b"zen!");
    assert_eq!(encode_bytes(&header, pixels).unwrap(), file);
}

#[test]
fn encode_rejects_mismatched_buffer() {
    let pixels = PixelBuffer::new(4, 4, ChannelLayout::Planar).unwrap();
    let err = encode_bytes(&BmpHeader::new(4, 3), pixels).unwrap_err();
    assert!(matches!(err, BitmapError::BufferSizeMismatch { .. }), "{err:?}");
}

#[test]
fn encode_rejects_non_24bit_header() {
    let mut header = BmpHeader::new(2, 2);
    header.bits_per_pixel = 32;
    let pixels = PixelBuffer::new(2, 2, ChannelLayout::Planar).unwrap();
    let err = encode_bytes(&header, pixels).unwrap_err();
    assert!(matches!(err, BitmapError::UnsupportedBitDepth(32)));
}

#[test]
fn truncated_pixel_data_is_eof() {
    let file = handmade_bmp(5, 5, gradient);
    let err = decode_bytes(&file[..file.len() - 4], ChannelLayout::Planar).unwrap_err();
    assert!(matches!(err, BitmapError::UnexpectedEof));
    let err = decode_bytes(&file[..20], ChannelLayout::Planar).unwrap_err();
    assert!(matches!(err, BitmapError::UnexpectedEof));
}

#[test]
fn limits_reject_large() {
    let file = handmade_bmp(4, 4, gradient);
    let limits = Limits {
        max_pixels: Some(15),
        ..Default::default()
    };
    let result = DecodeRequest::new(&file).with_limits(&limits).decode(Unstoppable);
    match result.unwrap_err() {
        BitmapError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let limits = Limits {
        max_memory_bytes: Some(60),
        ..Default::default()
    };
    let pixels = PixelBuffer::new(4, 4, ChannelLayout::Planar).unwrap();
    let result = EncodeRequest::new()
        .with_limits(&limits)
        .encode(&BmpHeader::new(4, 4), pixels, Unstoppable);
    assert!(matches!(result, Err(BitmapError::LimitExceeded(_))));
}

#[test]
fn decode_error_names_the_file() {
    let mut header = BmpHeader::new(4, 4);
    header.bits_per_pixel = 8;
    let path = temp_path("eight-bit");
    std::fs::write(&path, header.to_bytes()).unwrap();

    let err = decode(&path).unwrap_err();
    match &err {
        BitmapError::AtPath { path: p, .. } => assert_eq!(p, &path),
        other => panic!("expected AtPath, got {other:?}"),
    }
    assert!(matches!(err.cause(), BitmapError::UnsupportedBitDepth(8)), "{err:?}");
    let message = err.to_string();
    assert!(message.contains(&path.display().to_string()), "{message}");
    assert!(message.contains("bit depth 8"), "{message}");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn encode_error_names_the_file() {
    let path = temp_path("mismatched-out");
    let pixels = PixelBuffer::new(2, 2, ChannelLayout::Interleaved).unwrap();
    let err = encode(&path, &BmpHeader::new(3, 2), pixels).unwrap_err();
    assert!(matches!(err, BitmapError::AtPath { .. }), "{err:?}");
    assert!(matches!(err.cause(), BitmapError::BufferSizeMismatch { .. }));
    assert!(err.to_string().contains("mismatched-out"));
    assert!(!path.exists());
}

#[test]
fn file_limits_count_read_buffer() {
    // 102-byte file, 48-byte pixel buffer.
    let path = temp_path("limited");
    std::fs::write(&path, handmade_bmp(4, 4, gradient)).unwrap();
    let with_memory = |bytes| Limits {
        max_memory_bytes: Some(bytes),
        ..Default::default()
    };

    let (_, pixels) = decode_with_limits(&path, ChannelLayout::Planar, &with_memory(150)).unwrap();
    assert_eq!(pixels.len(), 48);

    let err = decode_with_limits(&path, ChannelLayout::Planar, &with_memory(149)).unwrap_err();
    assert!(matches!(err.cause(), BitmapError::LimitExceeded(_)), "{err:?}");
    assert!(err.to_string().contains("limited"), "{err}");

    // Too large to read at all.
    let err = decode_with_limits(&path, ChannelLayout::Planar, &with_memory(101)).unwrap_err();
    assert!(err.to_string().contains("file of 102 bytes"), "{err}");

    let _ = std::fs::remove_file(&path);
}
