//! Reader and encoder contracts for xnb-transcode.
//!
//! This crate sits between the container formats (see `xnb-transcode-xnb`) and the
//! raster encoders (see `xnb-transcode-png`). It defines:
//!
//! - [`ContainerReader`]: decodes a container into a native-order [`TextureSurface`]
//! - [`RasterEncoder`]: writes a canonical-order [`TextureSurface`] out as an image
//! - [`pipeline::transcode_file`]: the read, normalize, encode chain for one file
//!
//! # Example
//!
//! ```no_run
//! use xnb_transcode_file_formats_api::pipeline::{transcode_file, PipelineError};
//! use xnb_transcode_file_formats_api::{ContainerReader, RasterEncoder};
//! use std::path::Path;
//!
//! fn convert<E: RasterEncoder>(reader: &dyn ContainerReader, encoder: &E) -> Result<(), PipelineError> {
//!     transcode_file(
//!         &[reader],
//!         encoder,
//!         Path::new("Content/hero.xnb"),
//!         Path::new("Content/hero.png"),
//!     )
//! }
//! ```
//!
//! [`TextureSurface`]: xnb_transcode_common::TextureSurface

pub mod api;
pub mod error;
pub mod traits;

#[cfg(feature = "file-io")]
pub mod file_io;
#[cfg(feature = "file-io")]
pub mod pipeline;

#[cfg(test)]
pub(crate) mod test_prelude;

// Re-export key types
pub use api::{encode_surface, read_surface};
pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
pub use traits::{ContainerReader, RasterEncoder};
