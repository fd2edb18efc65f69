//! Message padding and length encoding applied during finalization.
//!
//! An MD5 message is extended with a `0x80` marker and zero bytes until its
//! length is 56 modulo 64, then the original length in bits is appended as a
//! 64-bit little-endian integer. The padded stream is therefore always a
//! whole number of 64-byte blocks.

use crate::constants::{BLOCK_LEN, LENGTH_OFFSET, LENGTH_SUFFIX_LEN};

/// Number of padding bytes (marker included) required when `buffered`
/// message bytes are pending in the current block.
///
/// The result is always in `1..=64`. A message that already ends exactly at
/// offset 56 still receives a full block of padding.
///
/// ```
/// use libmd5::padding::padding_len;
///
/// assert_eq!(padding_len(0), 56);
/// assert_eq!(padding_len(55), 1);
/// assert_eq!(padding_len(56), 64);
/// assert_eq!(padding_len(63), 57);
/// ```
#[must_use]
pub const fn padding_len(buffered: usize) -> usize {
    let index = buffered % BLOCK_LEN;
    if index < LENGTH_OFFSET {
        LENGTH_OFFSET - index
    } else {
        BLOCK_LEN + LENGTH_OFFSET - index
    }
}

/// Encodes a two-word bit counter (`[low, high]`) as the trailing 8 bytes of
/// the padded message: the low word little-endian, then the high word
/// little-endian.
#[must_use]
pub fn length_suffix(bit_count: [u32; 2]) -> [u8; LENGTH_SUFFIX_LEN] {
    let mut suffix = [0u8; LENGTH_SUFFIX_LEN];
    suffix[..4].copy_from_slice(&bit_count[0].to_le_bytes());
    suffix[4..].copy_from_slice(&bit_count[1].to_le_bytes());
    suffix
}
