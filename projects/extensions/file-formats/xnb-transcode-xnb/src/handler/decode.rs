//! Expansion of mip level 0 into a native-order surface.

use crate::xnb::{SurfaceFormat, XnbTexture};
use xnb_transcode_bcn::decode_image;
use xnb_transcode_common::color_565::Color565;
use xnb_transcode_common::color_8888::Color8888;
use xnb_transcode_common::{ChannelOrder, TextureSurface, BYTES_PER_PIXEL, NATIVE_LAYOUT};
use xnb_transcode_file_formats_api::DecodeResult;

/// Decode the first mip level of `texture` into a [`ChannelOrder::Native`] surface.
pub fn decode_texture(texture: &XnbTexture<'_>) -> DecodeResult<TextureSurface> {
    let (width, height) = (texture.width, texture.height);

    if let Some(block_format) = texture.format.block_format() {
        let mut surface = TextureSurface::zeroed(width, height, ChannelOrder::Native)?;
        decode_image(block_format, texture.mip0, width, height, &mut surface)?;
        return Ok(surface);
    }

    let data = match texture.format {
        // Already in native layout.
        SurfaceFormat::LegacyColor => texture.mip0.to_vec(),
        SurfaceFormat::Color => expand_pixels::<4>(texture.mip0, |[r, g, b, a]| {
            Color8888::new(r, g, b, a)
        }),
        SurfaceFormat::Bgr565 => {
            expand_pixels::<2>(texture.mip0, |raw| Color565::from_le_bytes(raw).to_color_8888())
        }
        SurfaceFormat::Bgra5551 => expand_pixels::<2>(texture.mip0, |raw| {
            Color8888::from_bgra5551(u16::from_le_bytes(raw))
        }),
        SurfaceFormat::Bgra4444 => expand_pixels::<2>(texture.mip0, |raw| {
            Color8888::from_bgra4444(u16::from_le_bytes(raw))
        }),
        SurfaceFormat::Dxt1 | SurfaceFormat::Dxt3 | SurfaceFormat::Dxt5 => Vec::new(),
    };

    Ok(TextureSurface::new(
        width,
        height,
        ChannelOrder::Native,
        data,
    )?)
}

/// Convert every `N` byte source pixel and pack it in [`NATIVE_LAYOUT`].
fn expand_pixels<const N: usize>(src: &[u8], convert: impl Fn([u8; N]) -> Color8888) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len() / N * BYTES_PER_PIXEL);
    for chunk in src.chunks_exact(N) {
        let mut pixel = [0u8; N];
        pixel.copy_from_slice(chunk);
        out.extend_from_slice(&NATIVE_LAYOUT.pack(convert(pixel)));
    }
    out
}
