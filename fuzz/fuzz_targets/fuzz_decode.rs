#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp24::{ChannelLayout, DecodeRequest, Limits};

fuzz_target!(|data: &[u8]| {
    // Keep hostile headers from allocating gigabytes.
    let limits = Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };
    // Must never panic, in either layout
    for layout in [ChannelLayout::Planar, ChannelLayout::Interleaved] {
        let _ = DecodeRequest::new(data)
            .with_layout(layout)
            .with_limits(&limits)
            .decode(enough::Unstoppable);
    }
});
