#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp24::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok((header, pixels)) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };
    let original = pixels.clone();

    let reencoded = encode_bytes(&header, pixels).expect("decoded image must re-encode");
    assert!(data.starts_with(&reencoded[..BmpHeader::SIZE]), "header not carried verbatim");

    let (header2, decoded2) = decode_bytes(&reencoded, ChannelLayout::Planar)
        .expect("re-encoded data failed to decode");
    assert_eq!(header, header2);
    assert_eq!(original, decoded2, "roundtrip pixel mismatch");
});
