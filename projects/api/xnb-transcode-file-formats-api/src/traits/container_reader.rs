//! Trait for container formats that hold a texture.

use crate::error::DecodeResult;
use xnb_transcode_common::TextureSurface;

/// Reads a texture out of a container file.
///
/// Readers are stateless; one instance is shared by every file in a batch
/// (and across threads when the batch runs in parallel).
///
/// ***Important***: Inputs come straight from disk. Validate every offset and length
/// before reading; a malformed file must produce an error, never a panic.
pub trait ContainerReader: Send + Sync {
    /// Check if this reader can process the input data.
    ///
    /// This only looks at the magic/header bytes; a `true` here does not mean
    /// [`read`](ContainerReader::read) will succeed.
    fn can_handle(&self, input: &[u8]) -> bool;

    /// File extensions (lowercase, without the leading dot) this reader accepts.
    ///
    /// Used to filter readers before content detection.
    fn supported_extensions(&self) -> &[&str];

    /// Decode the container's primary texture.
    ///
    /// The returned surface is always in [`ChannelOrder::Native`].
    ///
    /// [`ChannelOrder::Native`]: xnb_transcode_common::ChannelOrder::Native
    fn read(&self, input: &[u8]) -> DecodeResult<TextureSurface>;
}
