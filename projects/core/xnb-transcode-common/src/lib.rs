//! Code shared between the container readers, block decoders and raster encoders.
//!
//! - [`surface::TextureSurface`]: a decoded, 4 bytes per pixel texture.
//! - [`channel_order`]: the fixed byte layouts a surface can be in.
//! - [`normalize`]: the in-place channel permutation between those layouts.
//! - [`color_565`] / [`color_8888`]: colour primitives used while decoding.

pub mod channel_order;
pub mod color_565;
pub mod color_8888;
pub mod decoded_4x4_block;
pub mod normalize;
pub mod surface;

pub use channel_order::{ChannelLayout, ChannelOrder, CANONICAL_LAYOUT, NATIVE_LAYOUT};
pub use normalize::{denormalize, normalize, reorder_channels, NormalizeError};
pub use surface::{SurfaceError, TextureSurface, BYTES_PER_PIXEL};
