use zeroize::Zeroize;

use crate::constants::{BLOCK_LEN, ROUND_CONSTANTS, SHIFTS};

#[inline(always)]
const fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
const fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

#[inline(always)]
const fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
const fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// Applies the MD5 compression function to one 64-byte block.
///
/// The block is read as sixteen little-endian 32-bit words. Working
/// variables start from `state`, run through four rounds of sixteen steps
/// (functions F, G, H and I), and are added back into `state` with wrapping
/// arithmetic.
///
/// Callers normally never invoke this directly; [`Md5::update`](crate::Md5::update)
/// calls it once per complete block.
///
/// # Examples
///
/// ```
/// use libmd5::constants::{INIT_STATE, PADDING};
/// use libmd5::transform;
///
/// // The padded empty message is a single block: 0x80 followed by zeros.
/// let mut state = INIT_STATE;
/// transform(&mut state, &PADDING);
/// assert_eq!(state[0].to_le_bytes(), [0xd4, 0x1d, 0x8c, 0xd9]);
/// ```
pub fn transform(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    let mut x = [0u32; 16];
    for (word, bytes) in x.iter_mut().zip(block.as_chunks::<4>().0) {
        *word = u32::from_le_bytes(*bytes);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    macro_rules! step {
        ($func:ident, $a:ident, $b:ident, $c:ident, $d:ident, $k:expr, $s:expr) => {{
            $a = $a
                .wrapping_add($func($b, $c, $d))
                .wrapping_add(x[$k])
                .wrapping_add(ROUND_CONSTANTS[$s])
                .rotate_left(SHIFTS[$s])
                .wrapping_add($b);
        }};
    }

    // Round 1
    step!(f, a, b, c, d,  0,  0); step!(f, d, a, b, c,  1,  1);
    step!(f, c, d, a, b,  2,  2); step!(f, b, c, d, a,  3,  3);
    step!(f, a, b, c, d,  4,  4); step!(f, d, a, b, c,  5,  5);
    step!(f, c, d, a, b,  6,  6); step!(f, b, c, d, a,  7,  7);
    step!(f, a, b, c, d,  8,  8); step!(f, d, a, b, c,  9,  9);
    step!(f, c, d, a, b, 10, 10); step!(f, b, c, d, a, 11, 11);
    step!(f, a, b, c, d, 12, 12); step!(f, d, a, b, c, 13, 13);
    step!(f, c, d, a, b, 14, 14); step!(f, b, c, d, a, 15, 15);

    // Round 2
    step!(g, a, b, c, d,  1, 16); step!(g, d, a, b, c,  6, 17);
    step!(g, c, d, a, b, 11, 18); step!(g, b, c, d, a,  0, 19);
    step!(g, a, b, c, d,  5, 20); step!(g, d, a, b, c, 10, 21);
    step!(g, c, d, a, b, 15, 22); step!(g, b, c, d, a,  4, 23);
    step!(g, a, b, c, d,  9, 24); step!(g, d, a, b, c, 14, 25);
    step!(g, c, d, a, b,  3, 26); step!(g, b, c, d, a,  8, 27);
    step!(g, a, b, c, d, 13, 28); step!(g, d, a, b, c,  2, 29);
    step!(g, c, d, a, b,  7, 30); step!(g, b, c, d, a, 12, 31);

    // Round 3
    step!(h, a, b, c, d,  5, 32); step!(h, d, a, b, c,  8, 33);
    step!(h, c, d, a, b, 11, 34); step!(h, b, c, d, a, 14, 35);
    step!(h, a, b, c, d,  1, 36); step!(h, d, a, b, c,  4, 37);
    step!(h, c, d, a, b,  7, 38); step!(h, b, c, d, a, 10, 39);
    step!(h, a, b, c, d, 13, 40); step!(h, d, a, b, c,  0, 41);
    step!(h, c, d, a, b,  3, 42); step!(h, b, c, d, a,  6, 43);
    step!(h, a, b, c, d,  9, 44); step!(h, d, a, b, c, 12, 45);
    step!(h, c, d, a, b, 15, 46); step!(h, b, c, d, a,  2, 47);

    // Round 4
    step!(i, a, b, c, d,  0, 48); step!(i, d, a, b, c,  7, 49);
    step!(i, c, d, a, b, 14, 50); step!(i, b, c, d, a,  5, 51);
    step!(i, a, b, c, d, 12, 52); step!(i, d, a, b, c,  3, 53);
    step!(i, c, d, a, b, 10, 54); step!(i, b, c, d, a,  1, 55);
    step!(i, a, b, c, d,  8, 56); step!(i, d, a, b, c, 15, 57);
    step!(i, c, d, a, b,  6, 58); step!(i, b, c, d, a, 13, 59);
    step!(i, a, b, c, d,  4, 60); step!(i, d, a, b, c, 11, 61);
    step!(i, c, d, a, b,  2, 62); step!(i, b, c, d, a,  9, 63);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);

    x.zeroize();
}
