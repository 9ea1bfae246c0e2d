//! Decoded texture surface.

use crate::channel_order::ChannelOrder;
use crate::color_8888::Color8888;
use thiserror::Error;

/// Every surface is stored with 4 bytes per pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Errors raised when a surface's dimensions and buffer disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// Width or height is zero.
    #[error("Surface dimensions must be non-zero, got {width}x{height}")]
    ZeroDimensions { width: u32, height: u32 },

    /// `width * height * 4` does not fit in memory.
    #[error("Surface of {width}x{height} pixels is too large")]
    TooLarge { width: u32, height: u32 },

    /// Buffer length does not match `width * height * 4`.
    #[error("Pixel buffer length mismatch: expected {expected} bytes, got {actual} bytes")]
    LengthMismatch { expected: usize, actual: usize },
}

/// A rectangular grid of 4 byte pixels in a known [`ChannelOrder`].
///
/// Rows are tightly packed; the stride is always `width * 4`.
/// The buffer length is checked on construction and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSurface {
    width: u32,
    height: u32,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl TextureSurface {
    /// Wraps an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// [`SurfaceError`] if either dimension is zero or `data.len()` is not
    /// exactly `width * height * 4`.
    pub fn new(
        width: u32,
        height: u32,
        order: ChannelOrder,
        data: Vec<u8>,
    ) -> Result<Self, SurfaceError> {
        let expected = Self::required_len(width, height)?;
        if data.len() != expected {
            return Err(SurfaceError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            order,
            data,
        })
    }

    /// Creates a zero-filled surface.
    pub fn zeroed(width: u32, height: u32, order: ChannelOrder) -> Result<Self, SurfaceError> {
        let len = Self::required_len(width, height)?;
        Self::new(width, height, order, vec![0u8; len])
    }

    /// Number of bytes a `width` x `height` surface occupies.
    pub fn required_len(width: u32, height: u32) -> Result<usize, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::ZeroDimensions { width, height });
        }

        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .ok_or(SurfaceError::TooLarge { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    #[inline]
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the pixel bytes. The length stays fixed.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Writes `color` at (`x`, `y`) using this surface's current layout.
    ///
    /// # Panics
    ///
    /// If the coordinates are outside the surface.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color8888) {
        assert!(x < self.width && y < self.height);
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let packed = self.order.layout().pack(color);
        self.data[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&packed);
    }

    /// Reads the colour at (`x`, `y`) using this surface's current layout.
    ///
    /// # Panics
    ///
    /// If the coordinates are outside the surface.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color8888 {
        assert!(x < self.width && y < self.height);
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let mut pixel = [0u8; BYTES_PER_PIXEL];
        pixel.copy_from_slice(&self.data[offset..offset + BYTES_PER_PIXEL]);
        self.order.layout().unpack(pixel)
    }

    /// Records that the bytes are now in `order`. Only the normalizer should call this.
    pub(crate) fn set_order(&mut self, order: ChannelOrder) {
        self.order = order;
    }
}
