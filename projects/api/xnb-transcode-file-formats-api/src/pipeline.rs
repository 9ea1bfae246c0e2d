//! The per-file transcode pipeline: read, normalize, encode.

use crate::error::{DecodeError, EncodeError};
use crate::file_io::{encode_surface_to_file, read_surface_from_file};
use crate::traits::{ContainerReader, RasterEncoder};
use core::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use xnb_transcode_common::{normalize, NormalizeError};

/// The pipeline stage a file failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureStage {
    /// The file disappeared between scanning and processing.
    Missing,
    Read,
    Normalize,
    Encode,
    /// Another input in the same batch already targets the destination.
    Conflict,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureStage::Missing => "missing",
            FailureStage::Read => "read",
            FailureStage::Normalize => "normalize",
            FailureStage::Encode => "encode",
            FailureStage::Conflict => "conflict",
        };
        f.write_str(name)
    }
}

/// A failure while transcoding a single file, tagged by stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("File no longer exists: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to read container: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to normalize channels: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] EncodeError),
}

impl PipelineError {
    /// The stage this error was raised in.
    pub fn stage(&self) -> FailureStage {
        match self {
            PipelineError::Missing(_) => FailureStage::Missing,
            PipelineError::Decode(_) => FailureStage::Read,
            PipelineError::Normalize(_) => FailureStage::Normalize,
            PipelineError::Encode(_) => FailureStage::Encode,
        }
    }
}

/// Transcode the container at `source` into a raster image at `destination`.
///
/// The decoded surface lives only for the duration of this call.
pub fn transcode_file<E: RasterEncoder>(
    readers: &[&dyn ContainerReader],
    encoder: &E,
    source: &Path,
    destination: &Path,
) -> Result<(), PipelineError> {
    if !source.is_file() {
        return Err(PipelineError::Missing(source.to_path_buf()));
    }

    debug!(path = %source.display(), "Reading");
    let mut surface = read_surface_from_file(readers, source)?;

    debug!(
        width = surface.width(),
        height = surface.height(),
        "Normalizing"
    );
    normalize(&mut surface)?;

    debug!(path = %destination.display(), "Encoding");
    encode_surface_to_file(encoder, &surface, destination)?;
    Ok(())
}
