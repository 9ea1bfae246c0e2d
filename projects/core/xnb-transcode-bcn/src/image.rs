use crate::bc1::{decode_bc1_block, BC1_BLOCK_SIZE};
use crate::bc2::{decode_bc2_block, BC2_BLOCK_SIZE};
use crate::bc3::{decode_bc3_block, BC3_BLOCK_SIZE};
use thiserror::Error;
use xnb_transcode_common::decoded_4x4_block::Decoded4x4Block;
use xnb_transcode_common::TextureSurface;

/// Block compression schemes understood by [`decode_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFormat {
    /// DXT1
    Bc1,
    /// DXT2 / DXT3
    Bc2,
    /// DXT4 / DXT5
    Bc3,
}

impl BlockFormat {
    /// Size in bytes of one 4x4 block.
    #[inline]
    pub const fn block_size(self) -> usize {
        match self {
            BlockFormat::Bc1 => BC1_BLOCK_SIZE,
            BlockFormat::Bc2 => BC2_BLOCK_SIZE,
            BlockFormat::Bc3 => BC3_BLOCK_SIZE,
        }
    }

    /// Number of bytes needed to store a `width` x `height` image.
    /// Partial blocks at the right and bottom edges are rounded up.
    ///
    /// Returns [`None`] on overflow.
    pub fn required_len(self, width: u32, height: u32) -> Option<usize> {
        let blocks_x = width.div_ceil(4) as usize;
        let blocks_y = height.div_ceil(4) as usize;
        blocks_x
            .checked_mul(blocks_y)
            .and_then(|blocks| blocks.checked_mul(self.block_size()))
    }

    fn decode_block(self, block: &[u8]) -> Option<Decoded4x4Block> {
        Some(match self {
            BlockFormat::Bc1 => decode_bc1_block(block.try_into().ok()?),
            BlockFormat::Bc2 => decode_bc2_block(block.try_into().ok()?),
            BlockFormat::Bc3 => decode_bc3_block(block.try_into().ok()?),
        })
    }
}

/// Errors from [`decode_image`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockDecodeError {
    #[error("Block data too short for {format:?}: need {required} bytes, got {actual}")]
    DataTooShort {
        format: BlockFormat,
        required: usize,
        actual: usize,
    },

    #[error("{width}x{height} image is too large to decode as {format:?}")]
    TooLarge {
        format: BlockFormat,
        width: u32,
        height: u32,
    },

    #[error("Target surface is {actual_width}x{actual_height}, expected {width}x{height}")]
    SurfaceSizeMismatch {
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

/// Decodes a block-compressed image into `target`.
///
/// Blocks are read left to right, top to bottom. Pixels of edge blocks that fall
/// outside the image are discarded. Trailing bytes after the last block are ignored.
///
/// # Errors
///
/// - [`BlockDecodeError::SurfaceSizeMismatch`] if `target` is not `width` x `height`.
/// - [`BlockDecodeError::DataTooShort`] if `src` holds fewer bytes than
///   [`BlockFormat::required_len`].
pub fn decode_image(
    format: BlockFormat,
    src: &[u8],
    width: u32,
    height: u32,
    target: &mut TextureSurface,
) -> Result<(), BlockDecodeError> {
    if target.width() != width || target.height() != height {
        return Err(BlockDecodeError::SurfaceSizeMismatch {
            width,
            height,
            actual_width: target.width(),
            actual_height: target.height(),
        });
    }

    let required = format
        .required_len(width, height)
        .ok_or(BlockDecodeError::TooLarge {
            format,
            width,
            height,
        })?;
    if src.len() < required {
        return Err(BlockDecodeError::DataTooShort {
            format,
            required,
            actual: src.len(),
        });
    }

    let blocks_x = width.div_ceil(4);
    let mut blocks = src[..required].chunks_exact(format.block_size());
    for block_y in 0..height.div_ceil(4) {
        for block_x in 0..blocks_x {
            let block = blocks
                .next()
                .and_then(|block| format.decode_block(block))
                .ok_or(BlockDecodeError::DataTooShort {
                    format,
                    required,
                    actual: src.len(),
                })?;

            write_block(&block, block_x * 4, block_y * 4, target);
        }
    }

    Ok(())
}

fn write_block(block: &Decoded4x4Block, origin_x: u32, origin_y: u32, target: &mut TextureSurface) {
    let max_y = (target.height() - origin_y).min(4);
    let max_x = (target.width() - origin_x).min(4);
    for y in 0..max_y {
        for x in 0..max_x {
            target.set_pixel(
                origin_x + x,
                origin_y + y,
                block.get_pixel(x as usize, y as usize),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use xnb_transcode_common::color_8888::Color8888;
    use xnb_transcode_common::ChannelOrder;

    const RED_BC1: [u8; 8] = [0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0];
    const BLUE_BC1: [u8; 8] = [0x1F, 0x00, 0x1F, 0x00, 0, 0, 0, 0];

    #[rstest]
    #[case(BlockFormat::Bc1, 4, 4, 8)]
    #[case(BlockFormat::Bc1, 1, 1, 8)]
    #[case(BlockFormat::Bc1, 5, 4, 16)]
    #[case(BlockFormat::Bc2, 8, 8, 64)]
    #[case(BlockFormat::Bc3, 6, 6, 64)]
    fn required_len_rounds_up_to_whole_blocks(
        #[case] format: BlockFormat,
        #[case] width: u32,
        #[case] height: u32,
        #[case] expected: usize,
    ) {
        assert_eq!(format.required_len(width, height), Some(expected));
    }

    #[test]
    fn decodes_blocks_in_raster_order() {
        let mut src = Vec::new();
        src.extend_from_slice(&RED_BC1);
        src.extend_from_slice(&BLUE_BC1);

        let mut surface = TextureSurface::zeroed(8, 4, ChannelOrder::Native).unwrap();
        decode_image(BlockFormat::Bc1, &src, 8, 4, &mut surface).unwrap();

        assert_eq!(surface.get_pixel(0, 0), Color8888::new(255, 0, 0, 255));
        assert_eq!(surface.get_pixel(3, 3), Color8888::new(255, 0, 0, 255));
        assert_eq!(surface.get_pixel(4, 0), Color8888::new(0, 0, 255, 255));
        assert_eq!(surface.get_pixel(7, 3), Color8888::new(0, 0, 255, 255));
    }

    #[test]
    fn clips_partial_edge_blocks() {
        let mut surface = TextureSurface::zeroed(2, 3, ChannelOrder::Native).unwrap();
        decode_image(BlockFormat::Bc1, &RED_BC1, 2, 3, &mut surface).unwrap();

        for y in 0..3 {
            for x in 0..2 {
                assert_eq!(surface.get_pixel(x, y), Color8888::new(255, 0, 0, 255));
            }
        }
    }

    #[test]
    fn rejects_truncated_data() {
        let mut surface = TextureSurface::zeroed(8, 4, ChannelOrder::Native).unwrap();
        let result = decode_image(BlockFormat::Bc1, &RED_BC1, 8, 4, &mut surface);

        assert_eq!(
            result,
            Err(BlockDecodeError::DataTooShort {
                format: BlockFormat::Bc1,
                required: 16,
                actual: 8
            })
        );
    }

    #[test]
    fn rejects_mismatched_surface() {
        let mut surface = TextureSurface::zeroed(4, 4, ChannelOrder::Native).unwrap();
        let result = decode_image(BlockFormat::Bc1, &RED_BC1, 8, 4, &mut surface);
        assert!(matches!(
            result,
            Err(BlockDecodeError::SurfaceSizeMismatch { .. })
        ));
    }
}
