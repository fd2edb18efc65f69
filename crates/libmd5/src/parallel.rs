//! Rayon integration for hashing many independent inputs.
//!
//! Each input gets its own [`Md5`] hasher; nothing is shared between
//! threads besides the read-only constant tables.

use rayon::prelude::*;

use crate::{Digest, Md5};

/// Compute MD5 digests for multiple inputs in parallel.
///
/// Returns digests in the same order as inputs.
///
/// # Example
///
/// ```
/// use libmd5::{Md5, parallel::digest_batch};
///
/// let inputs = [b"input1".as_slice(), b"input2", b"input3"];
/// let digests = digest_batch(&inputs);
/// assert_eq!(digests[1], Md5::digest(b"input2"));
/// ```
pub fn digest_batch<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<Digest> {
    inputs
        .par_iter()
        .map(|input| Md5::digest(input.as_ref()))
        .collect()
}

/// Extension trait for parallel MD5 hashing.
///
/// # Example
///
/// ```
/// use rayon::prelude::*;
/// use libmd5::parallel::ParallelMd5;
///
/// let data: Vec<Vec<u8>> = vec![
///     b"hello".to_vec(),
///     b"world".to_vec(),
///     b"test".to_vec(),
/// ];
///
/// let digests = data.par_iter().md5_digest();
/// assert_eq!(digests.len(), 3);
/// ```
pub trait ParallelMd5<T> {
    /// Compute MD5 digests in parallel, preserving iteration order.
    fn md5_digest(self) -> Vec<Digest>;
}

impl<I, T> ParallelMd5<T> for I
where
    I: IndexedParallelIterator<Item = T>,
    T: AsRef<[u8]> + Send,
{
    fn md5_digest(self) -> Vec<Digest> {
        self.map(|item| Md5::digest(item.as_ref())).collect()
    }
}
