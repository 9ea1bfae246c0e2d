use crate::api::encode_surface;
use crate::error::EncodeResult;
use crate::traits::RasterEncoder;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use xnb_transcode_common::TextureSurface;

/// Encode `surface` into a new file at `path`.
///
/// Missing parent directories are created and an existing file is truncated.
/// The writer is flushed and the file closed before returning. When encoding fails
/// the partially written file is removed. A destination that cannot be opened is
/// left as it was.
pub fn encode_surface_to_file<E: RasterEncoder>(
    encoder: &E,
    surface: &TextureSurface,
    path: &Path,
) -> EncodeResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Only a file this call created may be removed again.
    let file = File::create(path)?;
    let result = write_file(encoder, surface, file);
    if result.is_err() {
        let _ = fs::remove_file(path);
    }
    result
}

fn write_file<E: RasterEncoder>(
    encoder: &E,
    surface: &TextureSurface,
    file: File,
) -> EncodeResult<()> {
    let mut writer = BufWriter::new(file);
    encode_surface(encoder, surface, &mut writer)?;

    // `into_inner` flushes; surface the error instead of losing it in `Drop`.
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}
