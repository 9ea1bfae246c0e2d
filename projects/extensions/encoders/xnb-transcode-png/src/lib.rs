//! PNG output for xnb-transcode, backed by the `image` crate.
//!
//! [`PngEncoder`] writes canonical (`R, G, B, A`) surfaces as 8-bit RGBA PNGs.

use image::{ColorType, ImageFormat};
use std::io::{Seek, Write};
use xnb_transcode_common::{ChannelOrder, TextureSurface};
use xnb_transcode_file_formats_api::{EncodeError, EncodeResult, RasterEncoder};

/// Encodes surfaces as RGBA8 PNG images.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl RasterEncoder for PngEncoder {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn encode<W: Write + Seek>(&self, surface: &TextureSurface, writer: &mut W) -> EncodeResult<()> {
        if surface.order() != ChannelOrder::Canonical {
            return Err(EncodeError::NotCanonical(surface.order()));
        }

        image::write_buffer_with_format(
            writer,
            surface.data(),
            surface.width(),
            surface.height(),
            ColorType::Rgba8,
            ImageFormat::Png,
        )
        .map_err(|e| match e {
            image::ImageError::IoError(io) => EncodeError::Io(io),
            other => EncodeError::Image(other.to_string()),
        })
    }
}
