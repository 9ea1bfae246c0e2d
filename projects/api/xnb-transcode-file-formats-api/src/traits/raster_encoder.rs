//! Trait for raster image encoders.

use crate::error::EncodeResult;
use std::io::{Seek, Write};
use xnb_transcode_common::TextureSurface;

/// Serializes a canonical [`TextureSurface`] into an image file format.
pub trait RasterEncoder: Send + Sync {
    /// Extension (without the leading dot) given to output files.
    fn extension(&self) -> &'static str;

    /// Encode `surface` into `writer`.
    ///
    /// Implementations must reject surfaces that are not in
    /// [`ChannelOrder::Canonical`] with [`EncodeError::NotCanonical`].
    ///
    /// [`ChannelOrder::Canonical`]: xnb_transcode_common::ChannelOrder::Canonical
    /// [`EncodeError::NotCanonical`]: crate::EncodeError::NotCanonical
    fn encode<W: Write + Seek>(&self, surface: &TextureSurface, writer: &mut W) -> EncodeResult<()>;
}
