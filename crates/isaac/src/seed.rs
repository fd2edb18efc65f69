//! Pool initialization.
//!
//! Eight registers start at the golden ratio and are scrambled four times.
//! With a seed, two dispersion passes follow: the first folds the seed into
//! the registers eight words at a time, the second folds the pool produced by
//! the first. Without a seed, a single pass fills the pool with successive
//! register states.

use crate::constants::{GOLDEN_RATIO, RAND_SIZE};

const SCRAMBLE_ROUNDS: usize = 4;

/// Mix function for ISAAC initialization.
#[inline]
fn mix(registers: &mut [u32; 8]) {
    let [a, b, c, d, e, f, g, h] = registers;

    *a ^= *b << 11;
    *d = d.wrapping_add(*a);
    *b = b.wrapping_add(*c);

    *b ^= *c >> 2;
    *e = e.wrapping_add(*b);
    *c = c.wrapping_add(*d);

    *c ^= *d << 8;
    *f = f.wrapping_add(*c);
    *d = d.wrapping_add(*e);

    *d ^= *e >> 16;
    *g = g.wrapping_add(*d);
    *e = e.wrapping_add(*f);

    *e ^= *f << 10;
    *h = h.wrapping_add(*e);
    *f = f.wrapping_add(*g);

    *f ^= *g >> 4;
    *a = a.wrapping_add(*f);
    *g = g.wrapping_add(*h);

    *g ^= *h << 8;
    *b = b.wrapping_add(*g);
    *h = h.wrapping_add(*a);

    *h ^= *a >> 9;
    *c = c.wrapping_add(*h);
    *a = a.wrapping_add(*b);
}

/// Adds `source` into the registers eight words at a time, mixing after
/// each group and storing the registers into the matching pool words.
fn disperse(registers: &mut [u32; 8], memory: &mut [u32; RAND_SIZE], source: &[u32; RAND_SIZE]) {
    let (targets, _) = memory.as_chunks_mut::<8>();
    let (groups, _) = source.as_chunks::<8>();
    for (target, group) in targets.iter_mut().zip(groups) {
        for (register, word) in registers.iter_mut().zip(group) {
            *register = register.wrapping_add(*word);
        }
        mix(registers);
        *target = *registers;
    }
}

/// Fills `memory` from `seed`, or from the golden ratio alone when `seed`
/// is `None`.
pub(crate) fn fill_pool(memory: &mut [u32; RAND_SIZE], seed: Option<&[u32; RAND_SIZE]>) {
    let mut registers = [GOLDEN_RATIO; 8];
    for _ in 0..SCRAMBLE_ROUNDS {
        mix(&mut registers);
    }

    match seed {
        Some(seed) => {
            disperse(&mut registers, memory, seed);
            let first_pass = *memory;
            disperse(&mut registers, memory, &first_pass);
        }
        None => {
            for target in memory.as_chunks_mut::<8>().0 {
                mix(&mut registers);
                *target = registers;
            }
        }
    }
}
