//! `rand_core` integration.

use rand_core::{Error, RngCore, SeedableRng, impls, le};

use crate::constants::RAND_SIZE;
use crate::generator::Isaac;

impl RngCore for Isaac {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Isaac::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Isaac::fill_bytes(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        Isaac::fill_bytes(self, dest);
        Ok(())
    }
}

impl SeedableRng for Isaac {
    type Seed = [u8; 32];

    /// Reads the seed as eight little-endian words and zero-extends it to a
    /// full pool seed.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u32; RAND_SIZE];
        le::read_u32_into(&seed, &mut words[..8]);
        Self::with_seed(&words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_matches_reference_stream() {
        let mut rng = Isaac::from_seed([0u8; 32]);
        assert_eq!(RngCore::next_u32(&mut rng), 0x182600f3);
    }

    #[test]
    fn next_u64_joins_low_word_first() {
        let mut rng = Isaac::from_seed([0u8; 32]);
        assert_eq!(rng.next_u64(), (0x300b4a8d_u64 << 32) | 0x182600f3);
    }

    #[test]
    fn seed_bytes_are_little_endian_words() {
        let mut seed = [0u8; 32];
        seed[0] = 1;
        seed[4] = 23;
        let mut from_bytes = Isaac::from_seed(seed);

        let mut words = [0u32; RAND_SIZE];
        words[0] = 1;
        words[1] = 23;
        let mut from_words = Isaac::with_seed(&words);

        for _ in 0..300 {
            assert_eq!(RngCore::next_u32(&mut from_bytes), from_words.next_u32());
        }
    }

    #[test]
    fn try_fill_bytes_matches_inherent_fill() {
        let mut via_trait = Isaac::new();
        let mut inherent = Isaac::new();
        let mut a = [0u8; 37];
        let mut b = [0u8; 37];
        via_trait.try_fill_bytes(&mut a).unwrap();
        inherent.fill_bytes(&mut b);
        assert_eq!(a, b);
    }
}
