/// Represents a single RGBA8888 pixel colour, independent of any byte layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use xnb_transcode_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Expands a 16-bit `Bgra5551` value (1 bit alpha, 5 bits per colour channel).
    ///
    /// Bit layout, most significant first: `A RRRRR GGGGG BBBBB`.
    #[inline]
    pub fn from_bgra5551(value: u16) -> Self {
        let r = (value >> 10) & 0x1F;
        let g = (value >> 5) & 0x1F;
        let b = value & 0x1F;
        let a = if value & 0x8000 != 0 { 255 } else { 0 };
        Self::new(expand_5(r), expand_5(g), expand_5(b), a)
    }

    /// Expands a 16-bit `Bgra4444` value (4 bits per channel).
    ///
    /// Bit layout, most significant first: `AAAA RRRR GGGG BBBB`.
    #[inline]
    pub fn from_bgra4444(value: u16) -> Self {
        let a = (value >> 12) & 0xF;
        let r = (value >> 8) & 0xF;
        let g = (value >> 4) & 0xF;
        let b = value & 0xF;
        // 4 to 8 bits: replicate the nibble, i.e. multiply by 17.
        Self::new(
            (r * 17) as u8,
            (g * 17) as u8,
            (b * 17) as u8,
            (a * 17) as u8,
        )
    }
}

/// Expands a 5-bit channel to 8 bits by replicating the top bits.
#[inline(always)]
fn expand_5(value: u16) -> u8 {
    ((value << 3) | (value >> 2)) as u8
}
