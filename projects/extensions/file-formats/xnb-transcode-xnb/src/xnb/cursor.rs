//! Bounds-checked forward reader over an XNB payload.

use xnb_transcode_file_formats_api::{DecodeError, DecodeResult};

pub(crate) struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub(crate) fn new(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn read_bytes(&mut self, len: usize) -> DecodeResult<&'a [u8]> {
        let available = self.data.len().saturating_sub(self.pos);
        if len > available {
            return Err(DecodeError::UnexpectedEof {
                offset: self.pos,
                needed: len - available,
            });
        }

        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let mut result = [0u8; N];
        result.copy_from_slice(self.read_bytes(N)?);
        Ok(result)
    }

    pub(crate) fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub(crate) fn read_u32(&mut self) -> DecodeResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub(crate) fn read_i32(&mut self) -> DecodeResult<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// .NET `BinaryReader.Read7BitEncodedInt`: 7 bits per byte, low bits first,
    /// high bit set on every byte but the last. At most 5 bytes.
    pub(crate) fn read_7bit_u32(&mut self) -> DecodeResult<u32> {
        let start = self.pos;
        let mut result = 0u32;
        for shift in (0..35).step_by(7) {
            let byte = self.read_u8()?;

            // The fifth byte may only carry the top 4 bits.
            if shift == 28 && byte & 0xF0 != 0 {
                return Err(DecodeError::Malformed7BitInt { offset: start });
            }

            result |= ((byte & 0x7F) as u32) << shift;
            if byte & 0x80 == 0 {
                return Ok(result);
            }
        }

        Err(DecodeError::Malformed7BitInt { offset: start })
    }

    /// .NET `BinaryReader.ReadString`: a 7-bit encoded byte length, then UTF-8.
    pub(crate) fn read_string(&mut self) -> DecodeResult<&'a str> {
        let start = self.pos;
        let len = self.read_7bit_u32()? as usize;
        let bytes = self.read_bytes(len)?;
        core::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidString { offset: start })
    }
}
