//! File-level helpers: memory-mapped container input and buffered raster output.

mod read;
mod write;

pub use read::*;
pub use write::*;
