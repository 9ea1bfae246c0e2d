//! BC2 (DXT2/DXT3) decoding implementation; based on etcpak
//! <https://github.com/wolfpld/etcpak> and MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc2>
//!
//! Uses the 'ideal' rounding/computing method described in the DX9 docs, as opposed to DX10, AMD or Nvidia
//! method.

use xnb_transcode_common::{
    color_565::Color565, color_8888::Color8888, decoded_4x4_block::Decoded4x4Block,
};

/// Size of a single BC2 block in bytes.
pub const BC2_BLOCK_SIZE: usize = 16;

/// Decodes a BC2 block into a structured representation of pixels
///
/// The first 8 bytes hold explicit 4-bit alpha per pixel, the last 8 bytes
/// hold BC1-style colour data (always in 4-colour mode).
#[inline]
pub fn decode_bc2_block(src: &[u8; BC2_BLOCK_SIZE]) -> Decoded4x4Block {
    let color_src = &src[8..];

    let c0 = Color565::from_le_bytes([color_src[0], color_src[1]]);
    let c1 = Color565::from_le_bytes([color_src[2], color_src[3]]);
    let idx: u32 = u32::from_le_bytes([color_src[4], color_src[5], color_src[6], color_src[7]]);

    let r0 = c0.red();
    let g0 = c0.green();
    let b0 = c0.blue();

    let r1 = c1.red();
    let g1 = c1.green();
    let b1 = c1.blue();

    // BC2 always uses the 4-color mode (no transparency from color section)
    let mut dict = [Color8888::new(0, 0, 0, 0); 4];
    dict[0] = Color8888::new(r0, g0, b0, 255);
    dict[1] = Color8888::new(r1, g1, b1, 255);

    let r = ((2 * r0 as u32) + r1 as u32) / 3;
    let g = ((2 * g0 as u32) + g1 as u32) / 3;
    let b = ((2 * b0 as u32) + b1 as u32) / 3;
    dict[2] = Color8888::new(r as u8, g as u8, b as u8, 255);

    let r = (r0 as u32 + 2 * r1 as u32) / 3;
    let g = (g0 as u32 + 2 * g1 as u32) / 3;
    let b = (b0 as u32 + 2 * b1 as u32) / 3;
    dict[3] = Color8888::new(r as u8, g as u8, b as u8, 255);

    let mut result = Decoded4x4Block::new(Color8888::new(0, 0, 0, 0));
    let alpha_bytes = &src[..8];

    let mut index_pos = 0;
    let mut alpha_bit_pos = 0;
    for y in 0..4 {
        for x in 0..4 {
            let pixel_idx = (idx >> index_pos) & 0x3;
            let mut pixel = dict[pixel_idx as usize];

            // Low nibble first.
            let shift_amount = (alpha_bit_pos & 0x1) * 4;
            let alpha_value = (alpha_bytes[alpha_bit_pos >> 1] >> shift_amount) & 0x0F;

            // Scale 4-bit alpha (0-15) to 8-bit (0-255)
            pixel.a = alpha_value * 17;
            result.set_pixel(x, y, pixel);

            index_pos += 2;
            alpha_bit_pos += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_explicit_alpha_ramp() {
        let bc2_block = [
            // Alpha data (4 bits per pixel): 0x0 to 0xF across the 16 pixels
            0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE,
            // Color data (identical to BC1)
            0x00, 0xF8, // c0 = R:31 G:0 B:0
            0x00, 0xF8, // c1 = R:31 G:0 B:0
            0x00, 0x00, 0x00, 0x00, // All pixels use index 0
        ];

        let decoded = decode_bc2_block(&bc2_block);
        for (i, pixel) in decoded.pixels.iter().enumerate() {
            assert_eq!(*pixel, Color8888::new(255, 0, 0, (i * 17) as u8));
        }
    }

    #[test]
    fn ignores_three_colour_mode() {
        let bc2_block = [
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // fully opaque
            0x00, 0x00, // c0 = black
            0xFF, 0xFF, // c1 = white, c0 <= c1 would be 3-colour mode in BC1
            0xFF, 0x00, 0x00, 0x00, // first row uses index 3
        ];

        let decoded = decode_bc2_block(&bc2_block);
        assert_eq!(decoded.get_pixel(0, 0), Color8888::new(170, 170, 170, 255));
    }
}
