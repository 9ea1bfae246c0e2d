//! Error types for reading containers and encoding rasters.

use std::io;
use thiserror::Error;
use xnb_transcode_bcn::BlockDecodeError;
use xnb_transcode_common::{ChannelOrder, SurfaceError};

/// Result type for container reads
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for raster encodes
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors raised while turning a container file into a [`TextureSurface`].
///
/// [`TextureSurface`]: xnb_transcode_common::TextureSurface
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Memory mapping failed: {0}")]
    Mmap(String),

    /// No registered reader accepted the file (by extension and content).
    #[error("No container reader can handle this file")]
    NoReaderForFile,

    #[error("Invalid container magic")]
    InvalidMagic,

    #[error("Unsupported container version {0}")]
    UnsupportedVersion(u8),

    /// The size stored in the header disagrees with the number of bytes on disk.
    #[error("Header declares {declared} bytes but the file is {actual} bytes")]
    FileSizeMismatch { declared: u32, actual: usize },

    #[error("Compressed containers are not supported (flags {flags:#04x})")]
    UnsupportedCompression { flags: u8 },

    #[error("Unexpected end of data at offset {offset}: needed {needed} more bytes")]
    UnexpectedEof { offset: usize, needed: usize },

    #[error("Malformed 7-bit encoded integer at offset {offset}")]
    Malformed7BitInt { offset: usize },

    #[error("Invalid UTF-8 string at offset {offset}")]
    InvalidString { offset: usize },

    /// Primary object type id is 0.
    #[error("Container holds a null primary object")]
    NullPrimaryObject,

    #[error("Type id {id} is out of range for {reader_count} type readers")]
    InvalidTypeId { id: u32, reader_count: usize },

    /// The primary object is read by something other than a texture reader.
    #[error("Primary asset is not a 2D texture (reader `{0}`)")]
    NotATexture(String),

    #[error("Unsupported surface format {0}")]
    UnsupportedSurfaceFormat(i32),

    #[error("Texture has no mip levels")]
    NoMipLevels,

    #[error("Mip level 0 holds {actual} bytes, expected {expected}")]
    MipSizeMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    BlockDecode(#[from] BlockDecodeError),
}

/// Errors raised while writing a surface out as a raster image.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Error reported by the underlying image codec.
    #[error("Image encoding failed: {0}")]
    Image(String),

    /// The surface must be normalized before encoding.
    #[error("Surface is in {0:?} channel order; encoders only accept canonical surfaces")]
    NotCanonical(ChannelOrder),
}
