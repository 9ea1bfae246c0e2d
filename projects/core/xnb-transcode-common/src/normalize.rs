//! Channel normalization.
//!
//! Rewrites the byte order of every pixel between [`NATIVE_LAYOUT`] and
//! [`CANONICAL_LAYOUT`], in place. Width, height and buffer length never change.
//!
//! [`NATIVE_LAYOUT`]: crate::channel_order::NATIVE_LAYOUT
//! [`CANONICAL_LAYOUT`]: crate::channel_order::CANONICAL_LAYOUT

use crate::channel_order::{ChannelLayout, ChannelOrder};
use crate::surface::{TextureSurface, BYTES_PER_PIXEL};
use thiserror::Error;

/// Errors from the channel normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Buffer length is not `width * height * 4`.
    /// This means whatever decoded the surface broke its contract.
    #[error("Pixel buffer of {actual} bytes does not match {width}x{height} pixels ({expected} bytes)")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Converts a surface into [`ChannelOrder::Canonical`].
///
/// A surface that is already canonical is left untouched.
///
/// ```
/// use xnb_transcode_common::{normalize, ChannelOrder, TextureSurface};
///
/// // One pixel: B=1, G=2, R=3, A=4
/// let mut surface = TextureSurface::new(1, 1, ChannelOrder::Native, vec![1, 2, 3, 4]).unwrap();
/// normalize(&mut surface).unwrap();
///
/// assert_eq!(surface.data(), &[3, 2, 1, 4]);
/// assert_eq!(surface.order(), ChannelOrder::Canonical);
/// ```
pub fn normalize(surface: &mut TextureSurface) -> Result<(), NormalizeError> {
    convert_surface(surface, ChannelOrder::Canonical)
}

/// Converts a surface back into [`ChannelOrder::Native`]; the inverse of [`normalize`].
pub fn denormalize(surface: &mut TextureSurface) -> Result<(), NormalizeError> {
    convert_surface(surface, ChannelOrder::Native)
}

fn convert_surface(surface: &mut TextureSurface, target: ChannelOrder) -> Result<(), NormalizeError> {
    let from = surface.order();
    let (width, height) = (surface.width(), surface.height());
    reorder_channels(surface.data_mut(), width, height, from.layout(), target.layout())?;
    surface.set_order(target);
    Ok(())
}

/// Permutes the bytes of every pixel in `data` from layout `from` to layout `to`.
///
/// # Errors
///
/// [`NormalizeError::LengthMismatch`] if `data.len()` is not exactly `width * height * 4`.
/// The buffer is left untouched in that case.
pub fn reorder_channels(
    data: &mut [u8],
    width: u32,
    height: u32,
    from: ChannelLayout,
    to: ChannelLayout,
) -> Result<(), NormalizeError> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL));

    if expected != Some(data.len()) {
        return Err(NormalizeError::LengthMismatch {
            width,
            height,
            expected: expected.unwrap_or(usize::MAX),
            actual: data.len(),
        });
    }

    if from == to {
        return Ok(());
    }

    for chunk in data.chunks_exact_mut(BYTES_PER_PIXEL) {
        let pixel = [chunk[0], chunk[1], chunk[2], chunk[3]];
        chunk.copy_from_slice(&to.pack(from.unpack(pixel)));
    }

    Ok(())
}
