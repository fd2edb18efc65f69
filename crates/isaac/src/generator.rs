use std::fmt;

use zeroize::Zeroize;

use crate::constants::{HALF, MASK, RAND_SIZE, RAND_SIZE_LEN};
use crate::seed::fill_pool;
use crate::trace::{trace_generate, trace_seed};

/// Pool word addressed by bits 2..10 of `x`.
#[inline(always)]
const fn ind(x: u32) -> usize {
    (x >> 2) as usize & MASK
}

/// ISAAC generator state.
///
/// Holds the current batch of 256 results, the 256-word pool, the three
/// accumulators carried between batches, and the number of results of the
/// current batch not yet handed out. Results are consumed from the highest
/// index down; when none remain the next extraction first regenerates the
/// whole batch.
#[derive(Clone)]
pub struct Isaac {
    results: [u32; RAND_SIZE],
    memory: [u32; RAND_SIZE],
    a: u32,
    b: u32,
    c: u32,
    count: usize,
    generations: u64,
}

impl Isaac {
    /// Creates a generator from the fixed default state (no external seed).
    ///
    /// Equivalent to the reference `randinit` with `flag == FALSE`.
    #[must_use]
    pub fn new() -> Self {
        let mut isaac = Self::zeroed();
        isaac.init(None);
        isaac
    }

    /// Creates a generator seeded with 256 words.
    ///
    /// Equivalent to the reference `randinit` with `flag == TRUE` and the
    /// seed placed in `randrsl`.
    #[must_use]
    pub fn with_seed(seed: &[u32; RAND_SIZE]) -> Self {
        let mut isaac = Self::zeroed();
        isaac.init(Some(seed));
        isaac
    }

    /// Discards all state and reseeds from `seed`.
    ///
    /// The result is indistinguishable from [`Isaac::with_seed`].
    pub fn reseed(&mut self, seed: &[u32; RAND_SIZE]) {
        self.init(Some(seed));
    }

    const fn zeroed() -> Self {
        Self {
            results: [0; RAND_SIZE],
            memory: [0; RAND_SIZE],
            a: 0,
            b: 0,
            c: 0,
            count: 0,
            generations: 0,
        }
    }

    fn init(&mut self, seed: Option<&[u32; RAND_SIZE]>) {
        self.a = 0;
        self.b = 0;
        self.c = 0;
        self.generations = 0;

        fill_pool(&mut self.memory, seed);
        trace_seed(seed.is_some());

        self.step();
        self.count = RAND_SIZE;
    }

    /// Produces the next batch of 256 results.
    ///
    /// Normally invoked implicitly by [`next_u32`](Self::next_u32) once the
    /// current batch is exhausted. Calling it directly discards whatever is
    /// left of the current batch; the remaining count is not reset, so the
    /// next extraction continues at the same index of the new batch.
    pub fn step(&mut self) {
        self.c = self.c.wrapping_add(1);
        let mut a = self.a;
        let mut b = self.b.wrapping_add(self.c);

        for i in 0..RAND_SIZE {
            let x = self.memory[i];
            a ^= match i & 3 {
                0 => a << 13,
                1 => a >> 6,
                2 => a << 2,
                _ => a >> 16,
            };
            a = self.memory[(i + HALF) & MASK].wrapping_add(a);

            let y = self.memory[ind(x)].wrapping_add(a).wrapping_add(b);
            self.memory[i] = y;
            b = self.memory[ind(y >> RAND_SIZE_LEN)].wrapping_add(x);
            self.results[i] = b;
        }

        self.a = a;
        self.b = b;
        self.generations += 1;
        trace_generate(self.generations);
    }

    /// Returns the next 32-bit value.
    ///
    /// Values of a batch are handed out from index 255 down to index 0. When
    /// the batch is exhausted a new one is generated first and its value at
    /// index 255 is returned.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.count == 0 {
            self.step();
            self.count = RAND_SIZE;
        }
        self.count -= 1;
        self.results[self.count]
    }

    /// Returns the next value reinterpreted as a signed 32-bit integer.
    #[inline]
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    /// Fills `dest` with random bytes.
    ///
    /// Each successive word is written in little-endian byte order. A
    /// trailing partial word contributes only its low bytes, so exactly
    /// `dest.len()` bytes are written and `dest.len().div_ceil(4)` words are
    /// consumed.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    /// The current batch in index order.
    #[must_use]
    pub const fn results(&self) -> &[u32; RAND_SIZE] {
        &self.results
    }

    /// Number of values of the current batch not yet handed out.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.count
    }

    /// Number of batches generated since the generator was last seeded,
    /// including the batch produced during seeding.
    #[must_use]
    pub const fn generations(&self) -> u64 {
        self.generations
    }

    /// Overwrites every field with zeros.
    pub(crate) fn wipe(&mut self) {
        self.results.zeroize();
        self.memory.zeroize();
        self.a.zeroize();
        self.b.zeroize();
        self.c.zeroize();
        self.count = 0;
        self.generations = 0;
    }
}

impl Default for Isaac {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Isaac {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl fmt::Debug for Isaac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Isaac")
            .field("remaining", &self.count)
            .field("generations", &self.generations)
            .finish_non_exhaustive()
    }
}
