/// Log2 of the generator size.
pub const RAND_SIZE_LEN: u32 = 8;

/// Number of 32-bit words in the pool and in each generation batch.
pub const RAND_SIZE: usize = 1 << RAND_SIZE_LEN;

/// Golden ratio constant loaded into the mixing registers during seeding.
pub const GOLDEN_RATIO: u32 = 0x9e3779b9;

/// Mask for pool indexing (`RAND_SIZE - 1`).
pub(crate) const MASK: usize = RAND_SIZE - 1;

/// Distance between a pool word and the word it is paired with in a batch.
pub(crate) const HALF: usize = RAND_SIZE / 2;
