//! In-memory entry points: pick a reader for a buffer, encode a surface into a writer.

use crate::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
use crate::traits::{ContainerReader, RasterEncoder};
use std::io::{Seek, Write};
use xnb_transcode_common::{ChannelOrder, TextureSurface};

/// Decode `input` with the first reader that accepts it.
///
/// When `extension` is provided, readers whose [`supported_extensions`] do not contain it
/// (ASCII case-insensitive) are skipped before content detection runs.
///
/// # Errors
///
/// [`DecodeError::NoReaderForFile`] if no reader accepts the input, otherwise whatever
/// the chosen reader returns.
///
/// [`supported_extensions`]: ContainerReader::supported_extensions
pub fn read_surface(
    readers: &[&dyn ContainerReader],
    input: &[u8],
    extension: Option<&str>,
) -> DecodeResult<TextureSurface> {
    let reader = readers
        .iter()
        .filter(|reader| match extension {
            Some(ext) => reader
                .supported_extensions()
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext)),
            None => true,
        })
        .find(|reader| reader.can_handle(input))
        .ok_or(DecodeError::NoReaderForFile)?;

    reader.read(input)
}

/// Encode a canonical surface into `writer`.
///
/// # Errors
///
/// [`EncodeError::NotCanonical`] if the surface has not been normalized; no bytes are
/// written in that case.
pub fn encode_surface<E: RasterEncoder, W: Write + Seek>(
    encoder: &E,
    surface: &TextureSurface,
    writer: &mut W,
) -> EncodeResult<()> {
    if surface.order() != ChannelOrder::Canonical {
        return Err(EncodeError::NotCanonical(surface.order()));
    }

    encoder.encode(surface, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use rstest::rstest;
    use std::io::Cursor;

    #[rstest]
    #[case(Some("mock"))]
    #[case(Some("MOCK"))]
    #[case(None)]
    fn read_surface_uses_matching_reader(#[case] extension: Option<&str>) {
        let reader = MockReader::accepting("mock");
        let surface = read_surface(&[&reader], MOCK_MAGIC, extension).unwrap();

        assert_eq!(surface.order(), ChannelOrder::Native);
        assert_eq!(surface.width(), 1);
    }

    #[test]
    fn read_surface_skips_readers_for_other_extensions() {
        let reader = MockReader::accepting("mock");
        let result = read_surface(&[&reader], MOCK_MAGIC, Some("png"));
        assert!(matches!(result, Err(DecodeError::NoReaderForFile)));
    }

    #[test]
    fn read_surface_skips_readers_rejecting_content() {
        let reader = MockReader::accepting("mock");
        let result = read_surface(&[&reader], b"nope", Some("mock"));
        assert!(matches!(result, Err(DecodeError::NoReaderForFile)));
    }

    #[test]
    fn read_surface_falls_through_to_next_reader() {
        let first = MockReader::accepting("other");
        let second = MockReader::accepting("mock");
        let surface = read_surface(&[&first, &second], MOCK_MAGIC, Some("mock"));
        assert!(surface.is_ok());
    }

    #[test]
    fn encode_surface_rejects_native_order() {
        let surface = solid_surface(2, 2, ChannelOrder::Native);
        let mut output = Cursor::new(Vec::new());

        let result = encode_surface(&MockEncoder, &surface, &mut output);

        assert!(matches!(
            result,
            Err(EncodeError::NotCanonical(ChannelOrder::Native))
        ));
        assert!(output.get_ref().is_empty());
    }

    #[test]
    fn encode_surface_passes_canonical_surface_through() {
        let surface = solid_surface(2, 2, ChannelOrder::Canonical);
        let mut output = Cursor::new(Vec::new());

        encode_surface(&MockEncoder, &surface, &mut output).unwrap();
        assert_eq!(output.get_ref().as_slice(), surface.data());
    }
}
