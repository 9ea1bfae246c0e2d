//! XNB container constants and definitions

/// Magic header for XNB files
pub(crate) const XNB_MAGIC: [u8; 3] = *b"XNB";

/// Offset of the target platform identifier.
pub(crate) const PLATFORM_OFFSET: usize = 0x03;
/// Offset of the format version.
pub(crate) const VERSION_OFFSET: usize = 0x04;
/// Offset of the flag bits.
pub(crate) const FLAGS_OFFSET: usize = 0x05;
/// Offset of the total (on disk) file size.
pub(crate) const FILE_SIZE_OFFSET: usize = 0x06;

/// Size of the fixed header of an uncompressed XNB file.
pub(crate) const XNB_HEADER_SIZE: usize = 10;

/// XNA Game Studio 4.0, MonoGame
pub const VERSION_XNA_4_0: u8 = 5;
/// XNA Game Studio 3.1
pub const VERSION_XNA_3_1: u8 = 4;
/// XNA Game Studio 3.0
pub const VERSION_XNA_3_0: u8 = 3;

// Header flags
pub const FLAG_HIDEF: u8 = 0x01;
pub const FLAG_COMPRESSED_LZ4: u8 = 0x40;
pub const FLAG_COMPRESSED_LZX: u8 = 0x80;

/// Type reader for `Texture2D` assets.
pub(crate) const TEXTURE2D_READER: &str = "Microsoft.Xna.Framework.Content.Texture2DReader";
