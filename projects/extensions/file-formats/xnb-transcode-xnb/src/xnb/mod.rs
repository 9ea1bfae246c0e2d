/// Shared constants between modules.
pub mod constants;

/// Determine if a file is an XNB file.
pub mod likely_xnb;

/// Parse the XNB header, type reader manifest and `Texture2D` payload.
pub mod parse_xnb;

/// `SurfaceFormat` numbering across XNA versions.
pub mod surface_format;

mod cursor;

pub use likely_xnb::*;
pub use parse_xnb::*;
pub use surface_format::*;
