//! Byte layouts of a 4 byte pixel.
//!
//! A surface only ever exists in one of two layouts:
//!
//! | Order | Layout | Bytes per pixel |
//! |---|---|---|
//! | [`ChannelOrder::Native`] | [`NATIVE_LAYOUT`] | `B, G, R, A` |
//! | [`ChannelOrder::Canonical`] | [`CANONICAL_LAYOUT`] | `R, G, B, A` |
//!
//! The native layout is what container readers hand out: 32-bit `A8R8G8B8` words
//! (alpha in the most significant byte) stored little-endian, the same arrangement
//! Direct3D and the XNA runtime use for 32bpp surfaces.
//!
//! The canonical layout is what the raster encoder consumes (PNG `RGBA8`).
//!
//! Both are fixed by the formats on either side of the pipeline; they are not
//! discovered or configured at runtime.

use crate::color_8888::Color8888;

/// Positions of each channel within a 4 byte pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelLayout {
    /// Byte index of the alpha channel.
    pub alpha: usize,
    /// Byte index of the red channel.
    pub red: usize,
    /// Byte index of the green channel.
    pub green: usize,
    /// Byte index of the blue channel.
    pub blue: usize,
}

/// Layout produced by container readers: little-endian `A8R8G8B8`.
pub const NATIVE_LAYOUT: ChannelLayout = ChannelLayout {
    blue: 0,
    green: 1,
    red: 2,
    alpha: 3,
};

/// Layout required by the raster encoder: `R8G8B8A8`.
pub const CANONICAL_LAYOUT: ChannelLayout = ChannelLayout {
    red: 0,
    green: 1,
    blue: 2,
    alpha: 3,
};

// Both layouts must be permutations of 0..4.
const _: () = assert!(NATIVE_LAYOUT.is_permutation());
const _: () = assert!(CANONICAL_LAYOUT.is_permutation());

impl ChannelLayout {
    /// Returns true if every byte index in 0..4 is used exactly once.
    pub const fn is_permutation(&self) -> bool {
        let indices = [self.alpha, self.red, self.green, self.blue];
        let mut seen = [false; 4];
        let mut i = 0;
        while i < 4 {
            let index = indices[i];
            if index >= 4 || seen[index] {
                return false;
            }
            seen[index] = true;
            i += 1;
        }
        true
    }

    /// Reads the colour stored in `pixel` according to this layout.
    #[inline(always)]
    pub fn unpack(&self, pixel: [u8; 4]) -> Color8888 {
        Color8888::new(
            pixel[self.red],
            pixel[self.green],
            pixel[self.blue],
            pixel[self.alpha],
        )
    }

    /// Stores `color` into a 4 byte pixel according to this layout.
    #[inline(always)]
    pub fn pack(&self, color: Color8888) -> [u8; 4] {
        let mut pixel = [0u8; 4];
        pixel[self.red] = color.r;
        pixel[self.green] = color.g;
        pixel[self.blue] = color.b;
        pixel[self.alpha] = color.a;
        pixel
    }
}

/// Which of the two fixed layouts a surface's bytes are in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    /// As produced by the container reader.
    Native,
    /// As consumed by the raster encoder.
    Canonical,
}

impl ChannelOrder {
    /// The byte layout for this order.
    #[inline]
    pub const fn layout(self) -> ChannelLayout {
        match self {
            ChannelOrder::Native => NATIVE_LAYOUT,
            ChannelOrder::Canonical => CANONICAL_LAYOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_layout_matches_little_endian_argb_word() {
        let color = Color8888::new(0x11, 0x22, 0x33, 0x44);
        let word = u32::from_le_bytes(NATIVE_LAYOUT.pack(color));
        assert_eq!(word, 0x44112233);
    }

    #[test]
    fn canonical_layout_is_rgba() {
        let color = Color8888::new(1, 2, 3, 4);
        assert_eq!(CANONICAL_LAYOUT.pack(color), [1, 2, 3, 4]);
    }

    #[test]
    fn unpack_inverts_pack() {
        let color = Color8888::new(9, 8, 7, 6);
        for order in [ChannelOrder::Native, ChannelOrder::Canonical] {
            let layout = order.layout();
            assert_eq!(layout.unpack(layout.pack(color)), color);
        }
    }

    #[test]
    fn duplicate_indices_are_not_a_permutation() {
        let layout = ChannelLayout {
            alpha: 0,
            red: 0,
            green: 1,
            blue: 2,
        };
        assert!(!layout.is_permutation());
    }
}
