//! BC1 (DXT1) decoding implementation; based on etcpak
//! <https://github.com/wolfpld/etcpak> and MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d9/opaque-and-1-bit-alpha-textures>

use xnb_transcode_common::{
    color_565::Color565, color_8888::Color8888, decoded_4x4_block::Decoded4x4Block,
};

/// Size of a single BC1 block in bytes.
pub const BC1_BLOCK_SIZE: usize = 8;

/// Decodes a BC1 block into a structured representation of pixels
///
/// When `c0 > c1` the block uses four opaque colours; otherwise three colours plus
/// transparent black.
///
/// # Example
///
/// ```
/// use xnb_transcode_bcn::bc1::decode_bc1_block;
///
/// let bc1_block = [0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0]; // solid red
/// let decoded = decode_bc1_block(&bc1_block);
/// assert_eq!(decoded.get_pixel(0, 0).r, 255);
/// ```
#[inline]
pub fn decode_bc1_block(src: &[u8; BC1_BLOCK_SIZE]) -> Decoded4x4Block {
    // Extract color endpoints and index data
    let c0 = Color565::from_le_bytes([src[0], src[1]]);
    let c1 = Color565::from_le_bytes([src[2], src[3]]);
    let idx: u32 = u32::from_le_bytes([src[4], src[5], src[6], src[7]]);

    let r0 = c0.red();
    let g0 = c0.green();
    let b0 = c0.blue();

    let r1 = c1.red();
    let g1 = c1.green();
    let b1 = c1.blue();

    // Create color dictionary
    let mut dict = [Color8888::new(0, 0, 0, 0); 4];
    dict[0] = Color8888::new(r0, g0, b0, 255);
    dict[1] = Color8888::new(r1, g1, b1, 255);

    if c0.greater_than(&c1) {
        // Four-color block
        let r = (2 * r0 as u32 + r1 as u32) / 3;
        let g = (2 * g0 as u32 + g1 as u32) / 3;
        let b = (2 * b0 as u32 + b1 as u32) / 3;
        dict[2] = Color8888::new(r as u8, g as u8, b as u8, 255);

        let r = (r0 as u32 + 2 * r1 as u32) / 3;
        let g = (g0 as u32 + 2 * g1 as u32) / 3;
        let b = (b0 as u32 + 2 * b1 as u32) / 3;
        dict[3] = Color8888::new(r as u8, g as u8, b as u8, 255);
    } else {
        // Three-color block
        let r = (r0 as u32 + r1 as u32) / 2;
        let g = (g0 as u32 + g1 as u32) / 2;
        let b = (b0 as u32 + b1 as u32) / 2;
        dict[2] = Color8888::new(r as u8, g as u8, b as u8, 255);
        // dict[3] stays transparent black
    }

    let mut result = Decoded4x4Block::new(Color8888::new(0, 0, 0, 0));
    let mut index_pos = 0;
    for y in 0..4 {
        for x in 0..4 {
            let pixel_idx = (idx >> index_pos) & 0x3;
            result.set_pixel(x, y, dict[pixel_idx as usize]);
            index_pos += 2;
        }
    }

    result
}
