use super::constants::*;
use super::cursor::ByteCursor;
use super::surface_format::SurfaceFormat;
use core::fmt;
use endian_writer::{EndianReader, LittleEndianReader};
use xnb_transcode_common::TextureSurface;
use xnb_transcode_file_formats_api::{DecodeError, DecodeResult};

/// Platform an XNB file was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPlatform {
    Windows,
    WindowsPhone7,
    Xbox360,
    Ios,
    Android,
    DesktopGl,
    MacOsx,
    WindowsStoreApp,
    NativeClient,
    WindowsPhone8,
    RaspberryPi,
    PlayStation4,
    PlayStation5,
    XboxOne,
    NintendoSwitch,
    GoogleStadia,
    WebAssembly,
    /// Identifier not known to this reader. The platform does not affect decoding.
    Unknown(u8),
}

impl TargetPlatform {
    pub fn from_byte(value: u8) -> Self {
        match value {
            b'w' => TargetPlatform::Windows,
            b'm' => TargetPlatform::WindowsPhone7,
            b'x' => TargetPlatform::Xbox360,
            b'i' => TargetPlatform::Ios,
            b'a' => TargetPlatform::Android,
            b'd' => TargetPlatform::DesktopGl,
            b'X' => TargetPlatform::MacOsx,
            b'W' => TargetPlatform::WindowsStoreApp,
            b'n' => TargetPlatform::NativeClient,
            b'M' => TargetPlatform::WindowsPhone8,
            b'r' => TargetPlatform::RaspberryPi,
            b'p' => TargetPlatform::PlayStation4,
            b'5' => TargetPlatform::PlayStation5,
            b'O' => TargetPlatform::XboxOne,
            b'S' => TargetPlatform::NintendoSwitch,
            b'G' => TargetPlatform::GoogleStadia,
            b'b' => TargetPlatform::WebAssembly,
            other => TargetPlatform::Unknown(other),
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetPlatform::Unknown(value) => write!(f, "Unknown ({value:#04x})"),
            known => fmt::Debug::fmt(known, f),
        }
    }
}

/// The fixed header at the start of every XNB file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XnbHeader {
    pub platform: TargetPlatform,
    pub version: u8,
    pub flags: u8,
    /// Total size of the file, header included.
    pub file_size: u32,
}

impl XnbHeader {
    /// Built for the HiDef graphics profile.
    #[inline]
    pub fn is_hidef(&self) -> bool {
        self.flags & FLAG_HIDEF != 0
    }

    /// Payload is LZX or LZ4 compressed.
    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.flags & (FLAG_COMPRESSED_LZX | FLAG_COMPRESSED_LZ4) != 0
    }

    /// Human readable XNA release for the version byte.
    pub fn version_name(&self) -> &'static str {
        match self.version {
            VERSION_XNA_4_0 => "XNA 4.0",
            VERSION_XNA_3_1 => "XNA 3.1",
            VERSION_XNA_3_0 => "XNA 3.0",
            _ => "unknown",
        }
    }
}

/// A type reader entry from the XNB manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReaderInfo {
    /// Assembly qualified reader name.
    pub name: String,
    pub version: i32,
}

impl TypeReaderInfo {
    /// The reader's type name without the assembly qualifier.
    pub fn type_name(&self) -> &str {
        match self.name.split_once(',') {
            Some((type_name, _)) => type_name.trim(),
            None => self.name.trim(),
        }
    }
}

/// Header plus type reader manifest of an uncompressed XNB file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XnbContents {
    pub header: XnbHeader,
    pub readers: Vec<TypeReaderInfo>,
    pub shared_resource_count: u32,
    /// Reader of the primary asset.
    pub primary_reader: usize,
    /// Offset of the primary asset's payload.
    pub payload_offset: usize,
}

impl XnbContents {
    pub fn primary_reader(&self) -> &TypeReaderInfo {
        &self.readers[self.primary_reader]
    }
}

/// A parsed `Texture2D` asset. Only the first mip level is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XnbTexture<'a> {
    pub contents: XnbContents,
    pub format: SurfaceFormat,
    pub width: u32,
    pub height: u32,
    pub mip_count: u32,
    /// Raw bytes of mip level 0, exactly [`SurfaceFormat::level_len`] long.
    pub mip0: &'a [u8],
}

/// Parses and validates the fixed XNB header.
///
/// # Errors
///
/// - [`DecodeError::UnexpectedEof`] if the header does not fit
/// - [`DecodeError::InvalidMagic`] if the file does not start with `XNB`
/// - [`DecodeError::UnsupportedVersion`] for versions other than XNA 3.0, 3.1 and 4.0
/// - [`DecodeError::FileSizeMismatch`] if the stored size is not `data.len()`
/// - [`DecodeError::UnsupportedCompression`] for LZX/LZ4 compressed files
pub fn parse_xnb_header(data: &[u8]) -> DecodeResult<XnbHeader> {
    if data.len() < XNB_HEADER_SIZE {
        if data.len() >= 3 && data[..3] != XNB_MAGIC {
            return Err(DecodeError::InvalidMagic);
        }
        return Err(DecodeError::UnexpectedEof {
            offset: data.len(),
            needed: XNB_HEADER_SIZE - data.len(),
        });
    }

    if data[..3] != XNB_MAGIC {
        return Err(DecodeError::InvalidMagic);
    }

    let version = data[VERSION_OFFSET];
    if !matches!(version, VERSION_XNA_3_0 | VERSION_XNA_3_1 | VERSION_XNA_4_0) {
        return Err(DecodeError::UnsupportedVersion(version));
    }

    // SAFETY: We checked data.len() >= XNB_HEADER_SIZE (10), so FILE_SIZE_OFFSET (6) + 4 is in bounds.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let file_size = unsafe { reader.read_u32_at(FILE_SIZE_OFFSET as isize) };

    if file_size as usize != data.len() {
        return Err(DecodeError::FileSizeMismatch {
            declared: file_size,
            actual: data.len(),
        });
    }

    let header = XnbHeader {
        platform: TargetPlatform::from_byte(data[PLATFORM_OFFSET]),
        version,
        flags: data[FLAGS_OFFSET],
        file_size,
    };

    if header.is_compressed() {
        return Err(DecodeError::UnsupportedCompression {
            flags: header.flags,
        });
    }

    Ok(header)
}

/// Parses the header and type reader manifest, stopping at the primary asset's payload.
///
/// # Errors
///
/// Everything [`parse_xnb_header`] returns, plus [`DecodeError::UnexpectedEof`],
/// [`DecodeError::Malformed7BitInt`] and [`DecodeError::InvalidString`] for a damaged
/// manifest, [`DecodeError::NullPrimaryObject`] and [`DecodeError::InvalidTypeId`].
pub fn parse_xnb_contents(data: &[u8]) -> DecodeResult<XnbContents> {
    let header = parse_xnb_header(data)?;
    let mut cursor = ByteCursor::new(data, XNB_HEADER_SIZE);

    let reader_count = cursor.read_7bit_u32()?;
    let mut readers = Vec::new();
    for _ in 0..reader_count {
        let name = cursor.read_string()?.to_owned();
        let version = cursor.read_i32()?;
        readers.push(TypeReaderInfo { name, version });
    }

    let shared_resource_count = cursor.read_7bit_u32()?;

    let type_id = cursor.read_7bit_u32()?;
    if type_id == 0 {
        return Err(DecodeError::NullPrimaryObject);
    }
    if type_id as usize > readers.len() {
        return Err(DecodeError::InvalidTypeId {
            id: type_id,
            reader_count: readers.len(),
        });
    }

    Ok(XnbContents {
        header,
        readers,
        shared_resource_count,
        primary_reader: type_id as usize - 1,
        payload_offset: cursor.position(),
    })
}

/// Parses an XNB file whose primary asset is a `Texture2D`.
///
/// # Errors
///
/// Everything [`parse_xnb_contents`] returns, plus:
/// - [`DecodeError::NotATexture`] if the primary reader is not a `Texture2DReader`
/// - [`DecodeError::UnsupportedSurfaceFormat`]
/// - [`DecodeError::Surface`] for zero or oversized dimensions
/// - [`DecodeError::NoMipLevels`]
/// - [`DecodeError::MipSizeMismatch`] if mip 0 is not the size its format and dimensions require
pub fn parse_xnb(data: &[u8]) -> DecodeResult<XnbTexture<'_>> {
    let contents = parse_xnb_contents(data)?;

    let reader = contents.primary_reader();
    if reader.type_name() != TEXTURE2D_READER {
        return Err(DecodeError::NotATexture(reader.type_name().to_owned()));
    }

    let mut cursor = ByteCursor::new(data, contents.payload_offset);
    let raw_format = cursor.read_i32()?;
    let format = SurfaceFormat::from_raw(contents.header.version, raw_format)
        .ok_or(DecodeError::UnsupportedSurfaceFormat(raw_format))?;

    let width = cursor.read_u32()?;
    let height = cursor.read_u32()?;
    TextureSurface::required_len(width, height)?;

    let mip_count = cursor.read_u32()?;
    if mip_count == 0 {
        return Err(DecodeError::NoMipLevels);
    }

    let expected = format
        .level_len(width, height)
        .ok_or(xnb_transcode_common::SurfaceError::TooLarge { width, height })?;
    let actual = cursor.read_u32()? as usize;
    if actual != expected {
        return Err(DecodeError::MipSizeMismatch { expected, actual });
    }
    let mip0 = cursor.read_bytes(actual)?;

    Ok(XnbTexture {
        contents,
        format,
        width,
        height,
        mip_count,
        mip0,
    })
}
