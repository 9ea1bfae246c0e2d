//! BC3 (DXT4/DXT5) decoding implementation; based on etcpak
//! <https://github.com/wolfpld/etcpak> and MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc3>
//!
//! Uses the 'ideal' rounding/computing method described in the DX9 docs, as opposed to DX10, AMD or Nvidia
//! method.

use xnb_transcode_common::{
    color_565::Color565, color_8888::Color8888, decoded_4x4_block::Decoded4x4Block,
};

/// Size of a single BC3 block in bytes.
pub const BC3_BLOCK_SIZE: usize = 16;

/// Decodes a BC3 block into a structured representation of pixels
///
/// The first 8 bytes hold BC4-compressed alpha (two endpoints and 3-bit indices),
/// the last 8 bytes hold BC1-style colour data (always in 4-colour mode).
#[inline]
#[allow(clippy::identity_op)]
pub fn decode_bc3_block(src: &[u8; BC3_BLOCK_SIZE]) -> Decoded4x4Block {
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

    // BC3 always uses the 4-color mode (no transparency from color section)
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

    let alpha0 = src[0];
    let alpha1 = src[1];

    let mut alpha_values = [0u8; 8];
    alpha_values[0] = alpha0; // bit code 000
    alpha_values[1] = alpha1; // bit code 001

    if alpha0 > alpha1 {
        // 8 interpolated alpha values
        alpha_values[2] = ((6 * alpha0 as u16 + 1 * alpha1 as u16) / 7) as u8;
        alpha_values[3] = ((5 * alpha0 as u16 + 2 * alpha1 as u16) / 7) as u8;
        alpha_values[4] = ((4 * alpha0 as u16 + 3 * alpha1 as u16) / 7) as u8;
        alpha_values[5] = ((3 * alpha0 as u16 + 4 * alpha1 as u16) / 7) as u8;
        alpha_values[6] = ((2 * alpha0 as u16 + 5 * alpha1 as u16) / 7) as u8;
        alpha_values[7] = ((1 * alpha0 as u16 + 6 * alpha1 as u16) / 7) as u8;
    } else {
        // 6 interpolated alpha values + transparent and opaque
        alpha_values[2] = ((4 * alpha0 as u16 + 1 * alpha1 as u16) / 5) as u8;
        alpha_values[3] = ((3 * alpha0 as u16 + 2 * alpha1 as u16) / 5) as u8;
        alpha_values[4] = ((2 * alpha0 as u16 + 3 * alpha1 as u16) / 5) as u8;
        alpha_values[5] = ((1 * alpha0 as u16 + 4 * alpha1 as u16) / 5) as u8;
        alpha_values[6] = 0;
        alpha_values[7] = 255;
    }

    // 3 bits per index, 48 bits total for 16 pixels
    let alpha_indices = &src[2..8];

    let mut result = Decoded4x4Block::new(Color8888::new(0, 0, 0, 0));
    let mut index_pos = 0;
    let mut alpha_bit_pos = 0;
    for y in 0..4 {
        for x in 0..4 {
            let pixel_idx = (idx >> index_pos) & 0x3;
            let mut pixel = dict[pixel_idx as usize];

            let byte_pos = alpha_bit_pos / 8;
            let bit_shift = alpha_bit_pos % 8;

            let alpha_idx = if bit_shift <= 5 {
                // Index contained within one byte
                (alpha_indices[byte_pos] >> bit_shift) & 0b111
            } else {
                // Index spans two bytes
                let bits_from_current = alpha_indices[byte_pos] >> bit_shift;
                let bits_from_next = alpha_indices[byte_pos + 1] << (8 - bit_shift);
                (bits_from_current | bits_from_next) & 0b111
            };

            pixel.a = alpha_values[alpha_idx as usize];
            result.set_pixel(x, y, pixel);

            index_pos += 2;
            alpha_bit_pos += 3;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_white_block_with_alpha_indices() {
        let bc3_block = [
            // Alpha data (BC4 compression)
            0, 0, 0, 255, 255, 255, 255, 255, // Color data (BC1-style format)
            255, 255, // c0 = R:31 G:63 B:31 (white)
            18, 0, // c1 = R:0 G:0 B:1
            0, 0, 0, 250, // Indices: mostly index 0, some index 2 and 3
        ];

        let decoded = decode_bc3_block(&bc3_block);

        let expected = Decoded4x4Block {
            pixels: [
                // Row 0
                Color8888::new(255, 255, 255, 0),
                Color8888::new(255, 255, 255, 0),
                Color8888::new(255, 255, 255, 0),
                Color8888::new(255, 255, 255, 255),
                // Row 1
                Color8888::new(255, 255, 255, 255),
                Color8888::new(255, 255, 255, 255),
                Color8888::new(255, 255, 255, 255),
                Color8888::new(255, 255, 255, 255),
                // Row 2
                Color8888::new(255, 255, 255, 255),
                Color8888::new(255, 255, 255, 255),
                Color8888::new(255, 255, 255, 255),
                Color8888::new(255, 255, 255, 255),
                // Row 3
                Color8888::new(170, 170, 219, 255),
                Color8888::new(170, 170, 219, 255),
                Color8888::new(85, 85, 183, 255),
                Color8888::new(85, 85, 183, 255),
            ],
        };

        assert_eq!(decoded, expected);
    }

    #[test]
    fn decodes_constant_alpha() {
        let bc3_block = [
            221, 0, 0, 0, 0, 0, 0, 0, // Alpha: every index selects alpha0
            10, 0, 0, 0, 0, 0, 212, 0, // Colour data
        ];

        let decoded = decode_bc3_block(&bc3_block);
        assert!(decoded.pixels.iter().all(|pixel| pixel.a == 221));
        assert_eq!(decoded.get_pixel(0, 0), Color8888::new(0, 0, 82, 221));
        assert_eq!(decoded.get_pixel(1, 2), Color8888::new(0, 0, 0, 221));
        assert_eq!(decoded.get_pixel(3, 2), Color8888::new(0, 0, 27, 221));
    }
}
