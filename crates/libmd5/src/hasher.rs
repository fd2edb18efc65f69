use std::fmt;

use zeroize::Zeroize;

use crate::Digest;
use crate::constants::{BLOCK_LEN, DIGEST_LEN, INIT_STATE, PADDING};
use crate::padding::{length_suffix, padding_len};
use crate::trace::trace_finalize;
use crate::transform::transform;

/// Streaming MD5 hasher.
///
/// The hasher keeps four state words, a 64-bit message length in bits
/// (stored as `[low, high]` and wrapping modulo 2^64), and up to 63 bytes of
/// input that have not yet filled a block. At all times
/// [`buffered_len`](Self::buffered_len) equals `(bit_len / 8) % 64`.
///
/// [`finalize`](Self::finalize) consumes the hasher and wipes every field to
/// zero once the digest has been copied out. Dropping an unfinished hasher
/// wipes it as well.
///
/// # Examples
///
/// ```
/// use libmd5::{Md5, to_hex};
///
/// let mut hasher = Md5::new();
/// hasher.update(b"message ");
/// hasher.update(b"digest");
/// assert_eq!(to_hex(&hasher.finalize()), "f96b697d7cb7938d525a2f31aaf161d0");
/// ```
#[derive(Clone)]
pub struct Md5 {
    state: [u32; 4],
    count: [u32; 2],
    buffer: [u8; BLOCK_LEN],
}

impl Md5 {
    /// Creates a hasher loaded with the MD5 initialization constants and a
    /// zero bit counter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: INIT_STATE,
            count: [0, 0],
            buffer: [0u8; BLOCK_LEN],
        }
    }

    /// Convenience helper that computes the MD5 digest for `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Number of message bits absorbed so far, modulo 2^64.
    #[inline]
    #[must_use]
    pub const fn bit_len(&self) -> u64 {
        ((self.count[1] as u64) << 32) | self.count[0] as u64
    }

    /// Number of absorbed bytes still waiting for a complete block.
    #[inline]
    #[must_use]
    pub const fn buffered_len(&self) -> usize {
        ((self.count[0] >> 3) & 0x3f) as usize
    }

    /// Feeds additional bytes into the digest state.
    ///
    /// Bytes are appended to the pending partial block; every time 64 bytes
    /// are available the block is compressed. May be called any number of
    /// times; the split of the message across calls never affects the digest.
    pub fn update(&mut self, input: &[u8]) {
        let index = self.buffered_len();
        self.add_bits(input.len());

        let part_len = BLOCK_LEN - index;
        if input.len() < part_len {
            self.buffer[index..index + input.len()].copy_from_slice(input);
            return;
        }

        let (head, rest) = input.split_at(part_len);
        self.buffer[index..].copy_from_slice(head);
        transform(&mut self.state, &self.buffer);

        let (blocks, tail) = rest.as_chunks::<BLOCK_LEN>();
        for block in blocks {
            transform(&mut self.state, block);
        }

        self.buffer[..tail.len()].copy_from_slice(tail);
    }

    /// Finalises the digest and returns the 128-bit MD5 output.
    ///
    /// The hasher is wiped to zero before it is released.
    #[must_use]
    pub fn finalize(mut self) -> Digest {
        self.finish()
    }

    /// Pads the message, extracts the digest, and wipes every field.
    pub(crate) fn finish(&mut self) -> Digest {
        let bit_count = self.count;
        let padding = padding_len(self.buffered_len());
        trace_finalize(self.bit_len(), padding);

        self.update(&PADDING[..padding]);
        self.update(&length_suffix(bit_count));
        debug_assert_eq!(self.buffered_len(), 0);

        let mut digest = [0u8; DIGEST_LEN];
        for (out, word) in digest.chunks_exact_mut(4).zip(&self.state) {
            out.copy_from_slice(&word.to_le_bytes());
        }

        self.wipe();
        digest
    }

    /// Overwrites state, counter and pending input with zeros.
    pub(crate) fn wipe(&mut self) {
        self.state.zeroize();
        self.count.zeroize();
        self.buffer.zeroize();
    }

    #[inline]
    fn add_bits(&mut self, len: usize) {
        let len = len as u64;
        let (low, carry) = self.count[0].overflowing_add((len << 3) as u32);
        self.count[0] = low;
        self.count[1] = self.count[1]
            .wrapping_add(u32::from(carry))
            .wrapping_add((len >> 29) as u32);
    }

    #[cfg(test)]
    pub(crate) const fn raw_parts(&self) -> (&[u32; 4], &[u32; 2], &[u8; BLOCK_LEN]) {
        (&self.state, &self.count, &self.buffer)
    }

    #[cfg(test)]
    pub(crate) fn set_count(&mut self, count: [u32; 2]) {
        self.count = count;
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Md5 {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl fmt::Debug for Md5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Md5")
            .field("bit_len", &self.bit_len())
            .field("buffered_len", &self.buffered_len())
            .finish_non_exhaustive()
    }
}
