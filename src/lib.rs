//! MD5 message digest and ISAAC pseudo-random generator engines.
//!
//! This crate re-exports the two engine crates of the workspace:
//!
//! - [`md5`] (the `libmd5` crate): streaming RFC 1321 digests through
//!   [`md5::Md5`] and the checked [`md5::Md5Context`] call contract.
//! - [`isaac`]: the ISAAC generator [`isaac::Isaac`], bit-compatible with the
//!   reference `rand.c`, and the checked [`isaac::IsaacContext`].
//!
//! Cargo features forward to the member crates: `tracing` enables structured
//! events in both engines, `parallel` enables rayon batch hashing, and
//! `rand_core` implements the `rand_core` traits for the generator.
//!
//! # Examples
//!
//! ```
//! use memlib::isaac::{Isaac, RAND_SIZE};
//! use memlib::md5::{Md5, to_hex};
//!
//! let mut rng = Isaac::with_seed(&[0u32; RAND_SIZE]);
//! let mut block = [0u8; 32];
//! rng.fill_bytes(&mut block);
//!
//! let digest = Md5::digest(&block);
//! assert_eq!(to_hex(&digest).len(), 32);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub use isaac;
pub use libmd5 as md5;
