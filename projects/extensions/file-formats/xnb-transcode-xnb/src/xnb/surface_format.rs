use super::constants::VERSION_XNA_4_0;
use core::fmt;
use xnb_transcode_bcn::BlockFormat;

/// Pixel formats of a `Texture2D` that can be converted.
///
/// Names follow XNA 4.0. The raw numbering differs between XNA 3.x and 4.0;
/// see [`SurfaceFormat::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceFormat {
    /// XNA 4.0 `Color`: bytes `R, G, B, A`.
    Color,
    /// XNA 3.x `Color`: packed `A8R8G8B8`, i.e. bytes `B, G, R, A`.
    LegacyColor,
    Bgr565,
    Bgra5551,
    Bgra4444,
    /// a.k.a. BC1
    Dxt1,
    /// a.k.a. BC2. XNA 3.x `Dxt2` (premultiplied) is decoded as this.
    Dxt3,
    /// a.k.a. BC3. XNA 3.x `Dxt4` (premultiplied) is decoded as this.
    Dxt5,
}

impl SurfaceFormat {
    /// Maps the raw `SurfaceFormat` value stored in a container of the given version.
    ///
    /// Returns [`None`] for formats that cannot be converted.
    pub fn from_raw(version: u8, raw: i32) -> Option<Self> {
        if version >= VERSION_XNA_4_0 {
            return match raw {
                0 => Some(SurfaceFormat::Color),
                1 => Some(SurfaceFormat::Bgr565),
                2 => Some(SurfaceFormat::Bgra5551),
                3 => Some(SurfaceFormat::Bgra4444),
                4 => Some(SurfaceFormat::Dxt1),
                5 => Some(SurfaceFormat::Dxt3),
                6 => Some(SurfaceFormat::Dxt5),
                _ => None,
            };
        }

        match raw {
            1 => Some(SurfaceFormat::LegacyColor),
            9 => Some(SurfaceFormat::Bgr565),
            10 => Some(SurfaceFormat::Bgra5551),
            12 => Some(SurfaceFormat::Bgra4444),
            28 => Some(SurfaceFormat::Dxt1),
            29 | 30 => Some(SurfaceFormat::Dxt3),
            31 | 32 => Some(SurfaceFormat::Dxt5),
            _ => None,
        }
    }

    /// The block decoder for block-compressed formats.
    pub fn block_format(self) -> Option<BlockFormat> {
        match self {
            SurfaceFormat::Dxt1 => Some(BlockFormat::Bc1),
            SurfaceFormat::Dxt3 => Some(BlockFormat::Bc2),
            SurfaceFormat::Dxt5 => Some(BlockFormat::Bc3),
            _ => None,
        }
    }

    /// Bytes per pixel of uncompressed formats.
    pub fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            SurfaceFormat::Color | SurfaceFormat::LegacyColor => Some(4),
            SurfaceFormat::Bgr565 | SurfaceFormat::Bgra5551 | SurfaceFormat::Bgra4444 => Some(2),
            SurfaceFormat::Dxt1 | SurfaceFormat::Dxt3 | SurfaceFormat::Dxt5 => None,
        }
    }

    /// Size in bytes of one `width` x `height` mip level.
    ///
    /// Returns [`None`] on overflow.
    pub fn level_len(self, width: u32, height: u32) -> Option<usize> {
        match (self.block_format(), self.bytes_per_pixel()) {
            (Some(block), _) => block.required_len(width, height),
            (None, Some(bpp)) => (width as usize)
                .checked_mul(height as usize)
                .and_then(|pixels| pixels.checked_mul(bpp)),
            (None, None) => None,
        }
    }
}

impl fmt::Display for SurfaceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
