#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp24(width: u32, height: i32) -> Vec<u8> {
    let rows = height.unsigned_abs() as usize;
    let row_size = (width as usize * 3 + 3) & !3;
    let pixel_array = row_size * rows;
    let mut bmp = vec![0u8; 54 + pixel_array];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&((54 + pixel_array) as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[34..38].copy_from_slice(&(pixel_array as u32).to_le_bytes());
    for row in 0..rows {
        for x in 0..width as usize {
            let off = 54 + row * row_size + x * 3;
            bmp[off..off + 3].copy_from_slice(&[x as u8, row as u8, 0x80]);
        }
    }
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp24(1, 1)).unwrap();
    fs::write(format!("{dir}/bmp_4x3.bmp"), bmp24(4, 3)).unwrap();
    fs::write(format!("{dir}/bmp_5x2.bmp"), bmp24(5, 2)).unwrap();
    fs::write(format!("{dir}/bmp_10x3.bmp"), bmp24(10, 3)).unwrap();
    fs::write(format!("{dir}/bmp_top_down_3x2.bmp"), bmp24(3, -2)).unwrap();
    fs::write(format!("{dir}/bmp_0x4.bmp"), bmp24(0, 4)).unwrap();

    // 8-bit header: must be rejected
    let mut bmp8 = bmp24(2, 2);
    bmp8[28..30].copy_from_slice(&8u16.to_le_bytes());
    fs::write(format!("{dir}/bmp_8bit.bmp"), bmp8).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut truncated = bmp24(5, 5);
    truncated.truncate(truncated.len() - 5);
    fs::write(format!("{dir}/bmp_truncated.bmp"), truncated).unwrap();

    println!("Generated seed corpus in {dir}/");
}
