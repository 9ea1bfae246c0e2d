use super::constants::*;

/// Determines if the given data likely represents an XNB container.
/// This is done by checking the 'XNB' magic at offset 0 and the minimum header size.
/// For full validation, use [`parse_xnb_header`].
///
/// [`parse_xnb_header`]: crate::xnb::parse_xnb::parse_xnb_header
#[inline(always)]
pub fn likely_xnb(data: &[u8]) -> bool {
    data.len() >= XNB_HEADER_SIZE && data[..3] == XNB_MAGIC
}
