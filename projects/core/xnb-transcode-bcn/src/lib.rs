//! Block-compressed texture decoding (DXT1, DXT3, DXT5).
//!
//! XNA calls these `Dxt1`, `Dxt3` and `Dxt5`; Direct3D 10+ calls them BC1, BC2 and BC3.
//! Each decoder turns one block into a [`Decoded4x4Block`]; [`decode_image`] walks a
//! whole mip level and writes the pixels into a [`TextureSurface`].
//!
//! [`Decoded4x4Block`]: xnb_transcode_common::decoded_4x4_block::Decoded4x4Block
//! [`TextureSurface`]: xnb_transcode_common::TextureSurface

pub mod bc1;
pub mod bc2;
pub mod bc3;
mod image;

pub use image::*;
