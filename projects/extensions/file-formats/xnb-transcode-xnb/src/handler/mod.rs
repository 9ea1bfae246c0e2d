//! XNB container reader implementation.

mod decode;
pub use decode::decode_texture;

use crate::xnb::{likely_xnb, parse_xnb};
use tracing::debug;
use xnb_transcode_common::TextureSurface;
use xnb_transcode_file_formats_api::{ContainerReader, DecodeResult};

/// Reader for XNB `Texture2D` containers.
///
/// Supports XNA 3.0, 3.1 and 4.0 (MonoGame) files with uncompressed payloads
/// in the `Color`, `Bgr565`, `Bgra5551`, `Bgra4444`, `Dxt1`, `Dxt3` and `Dxt5`
/// surface formats. Only the first mip level is decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct XnbHandler;

impl ContainerReader for XnbHandler {
    fn can_handle(&self, input: &[u8]) -> bool {
        likely_xnb(input)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["xnb"]
    }

    fn read(&self, input: &[u8]) -> DecodeResult<TextureSurface> {
        let texture = parse_xnb(input)?;
        debug!(
            platform = %texture.contents.header.platform,
            format = %texture.format,
            width = texture.width,
            height = texture.height,
            mips = texture.mip_count,
            "Parsed XNB texture"
        );
        decode_texture(&texture)
    }
}
