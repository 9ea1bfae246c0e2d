//! Common test imports and utilities for XNB extension tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

pub use std::{format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

use crate::xnb::constants::*;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Appends a .NET 7-bit encoded integer.
pub fn write_7bit(out: &mut Vec<u8>, mut value: u32) {
    while value >= 0x80 {
        out.push((value as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Appends a .NET length-prefixed string.
pub fn write_string(out: &mut Vec<u8>, value: &str) {
    write_7bit(out, value.len() as u32);
    out.extend_from_slice(value.as_bytes());
}

/// Builds synthetic single-reader XNB files.
///
/// Every field defaults to a valid XNA 4.0 `Texture2D`; setters override one field
/// at a time so each test can break exactly one thing.
#[derive(Clone)]
pub struct XnbBuilder {
    platform: u8,
    version: u8,
    flags: u8,
    reader: String,
    reader_count: Option<u32>,
    type_id: u32,
    raw_format: i32,
    width: u32,
    height: u32,
    mip_count: u32,
    mip0: Vec<u8>,
    declared_mip0_len: Option<u32>,
    extra_mips: u32,
}

impl XnbBuilder {
    /// A texture with the given raw XNA 4.0 surface format and mip 0 bytes.
    pub fn new(raw_format: i32, width: u32, height: u32, mip0: Vec<u8>) -> Self {
        Self {
            platform: b'w',
            version: VERSION_XNA_4_0,
            flags: 0,
            reader: TEXTURE2D_READER.into(),
            reader_count: None,
            type_id: 1,
            raw_format,
            width,
            height,
            mip_count: 1,
            mip0,
            declared_mip0_len: None,
            extra_mips: 0,
        }
    }

    /// A `Color` texture filled with a byte pattern.
    pub fn color(width: u32, height: u32) -> Self {
        let len = (width * height * 4) as usize;
        Self::new(0, width, height, (0..len).map(|x| x as u8).collect())
    }

    pub fn platform(mut self, platform: u8) -> Self {
        self.platform = platform;
        self
    }

    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    pub fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    pub fn reader(mut self, reader: &str) -> Self {
        self.reader = reader.into();
        self
    }

    /// Overrides the reader count without adding readers.
    pub fn reader_count(mut self, count: u32) -> Self {
        self.reader_count = Some(count);
        self
    }

    pub fn type_id(mut self, type_id: u32) -> Self {
        self.type_id = type_id;
        self
    }

    pub fn raw_format(mut self, raw_format: i32) -> Self {
        self.raw_format = raw_format;
        self
    }

    pub fn mip_count(mut self, mip_count: u32) -> Self {
        self.mip_count = mip_count;
        self
    }

    pub fn mip0(mut self, mip0: Vec<u8>) -> Self {
        self.mip0 = mip0;
        self
    }

    /// Overrides the byte count stored before mip 0.
    pub fn declared_mip0_len(mut self, len: u32) -> Self {
        self.declared_mip0_len = Some(len);
        self
    }

    /// Appends `count` additional (dummy) mip levels.
    pub fn extra_mips(mut self, count: u32) -> Self {
        self.extra_mips = count;
        self.mip_count = 1 + count;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut payload = Vec::new();
        write_7bit(&mut payload, self.reader_count.unwrap_or(1));
        write_string(&mut payload, &self.reader);
        payload.extend_from_slice(&0i32.to_le_bytes());
        write_7bit(&mut payload, 0); // shared resources
        write_7bit(&mut payload, self.type_id);

        payload.extend_from_slice(&self.raw_format.to_le_bytes());
        payload.extend_from_slice(&self.width.to_le_bytes());
        payload.extend_from_slice(&self.height.to_le_bytes());
        payload.extend_from_slice(&self.mip_count.to_le_bytes());
        let declared = self
            .declared_mip0_len
            .unwrap_or(self.mip0.len() as u32);
        payload.extend_from_slice(&declared.to_le_bytes());
        payload.extend_from_slice(&self.mip0);

        for level in 1..=self.extra_mips {
            let len = (self.mip0.len() >> (2 * level)).max(1) as u32;
            payload.extend_from_slice(&len.to_le_bytes());
            payload.extend(core::iter::repeat_n(0xEE, len as usize));
        }

        with_header(self.platform, self.version, self.flags, &payload)
    }

    /// A valid XNA 4.0 header followed by arbitrary payload bytes.
    pub fn raw_payload(payload: &[u8]) -> Vec<u8> {
        with_header(b'w', VERSION_XNA_4_0, 0, payload)
    }
}

fn with_header(platform: u8, version: u8, flags: u8, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; XNB_HEADER_SIZE];
    data[..3].copy_from_slice(&XNB_MAGIC);
    data[PLATFORM_OFFSET] = platform;
    data[VERSION_OFFSET] = version;
    data[FLAGS_OFFSET] = flags;
    data.extend_from_slice(payload);

    let total = data.len() as u32;
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe { writer.write_u32_at(total, FILE_SIZE_OFFSET as isize) };
    data
}
