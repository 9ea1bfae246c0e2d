//! Contracts implemented by the format extensions.

mod container_reader;
mod raster_encoder;

pub use container_reader::*;
pub use raster_encoder::*;
