//! Common test imports and mock implementations for the crate's unit tests.

pub use std::path::Path;
pub use std::vec::Vec;
pub use tempfile::{Builder, NamedTempFile};

use crate::error::{DecodeError, DecodeResult, EncodeResult};
use crate::traits::{ContainerReader, RasterEncoder};
use std::io::{Seek, Write};
use xnb_transcode_common::{ChannelOrder, TextureSurface};

/// Magic accepted by [`MockReader`].
pub const MOCK_MAGIC: &[u8] = b"MOCK";

/// Reader that accepts [`MOCK_MAGIC`] and returns a 1x1 native surface with bytes `1, 2, 3, 4`.
pub struct MockReader {
    extensions: [&'static str; 1],
}

impl MockReader {
    pub fn accepting(extension: &'static str) -> Self {
        Self {
            extensions: [extension],
        }
    }
}

impl ContainerReader for MockReader {
    fn can_handle(&self, input: &[u8]) -> bool {
        input.starts_with(MOCK_MAGIC)
    }

    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn read(&self, input: &[u8]) -> DecodeResult<TextureSurface> {
        if !self.can_handle(input) {
            return Err(DecodeError::InvalidMagic);
        }
        Ok(TextureSurface::new(
            1,
            1,
            ChannelOrder::Native,
            vec![1, 2, 3, 4],
        )?)
    }
}

/// Encoder that writes the raw pixel bytes.
pub struct MockEncoder;

impl RasterEncoder for MockEncoder {
    fn extension(&self) -> &'static str {
        "raw"
    }

    fn encode<W: Write + Seek>(&self, surface: &TextureSurface, writer: &mut W) -> EncodeResult<()> {
        writer.write_all(surface.data())?;
        Ok(())
    }
}

/// A `width` x `height` surface filled with a repeating pattern.
pub fn solid_surface(width: u32, height: u32, order: ChannelOrder) -> TextureSurface {
    let data = (0..width * height * 4).map(|x| x as u8).collect();
    TextureSurface::new(width, height, order, data).expect("valid surface")
}

/// Helper to create a temporary input file with test data and an extension.
pub fn create_input_file(data: &[u8], extension: &str) -> NamedTempFile {
    let input_file = Builder::new()
        .suffix(&format!(".{extension}"))
        .tempfile()
        .expect("Failed to create temp file");

    std::fs::write(input_file.path(), data).expect("Failed to write input data");
    input_file
}

/// Helper function to read file contents.
pub fn read_file_contents(path: &Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(path)
}
