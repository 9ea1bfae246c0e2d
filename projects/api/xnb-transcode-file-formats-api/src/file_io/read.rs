use crate::api::read_surface;
use crate::error::{DecodeError, DecodeResult};
use crate::traits::ContainerReader;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;
use xnb_transcode_common::TextureSurface;

/// Memory-map the file at `path` and hand its bytes to `operation`.
///
/// The mapping and the file handle are released before this function returns.
/// Empty files are passed through as an empty slice without mapping.
pub fn with_mapped_file<T>(
    path: &Path,
    operation: impl FnOnce(&[u8]) -> DecodeResult<T>,
) -> DecodeResult<T> {
    let handle = ReadOnlyFileHandle::open(path).map_err(|e| DecodeError::Mmap(e.to_string()))?;
    let size = handle
        .size()
        .map_err(|e| DecodeError::Mmap(e.to_string()))? as usize;

    if size == 0 {
        return operation(&[]);
    }

    let mapping =
        ReadOnlyMmap::new(&handle, 0, size).map_err(|e| DecodeError::Mmap(e.to_string()))?;
    operation(mapping.as_slice())
}

/// Read a container file into a surface using the first matching reader.
///
/// Readers are filtered by the file's extension, then by content.
///
/// # Example
///
/// ```no_run
/// use xnb_transcode_file_formats_api::file_io::read_surface_from_file;
/// use xnb_transcode_file_formats_api::{ContainerReader, DecodeResult};
/// use xnb_transcode_common::TextureSurface;
/// use std::path::Path;
///
/// fn load(reader: &dyn ContainerReader) -> DecodeResult<TextureSurface> {
///     read_surface_from_file(&[reader], Path::new("Content/hero.xnb"))
/// }
/// ```
pub fn read_surface_from_file(
    readers: &[&dyn ContainerReader],
    path: &Path,
) -> DecodeResult<TextureSurface> {
    let extension = path.extension().and_then(|ext| ext.to_str());
    with_mapped_file(path, |input| read_surface(readers, input, extension))
}
