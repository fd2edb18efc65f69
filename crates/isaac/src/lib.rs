//! ISAAC pseudo-random number generator.
//!
//! ISAAC ("Indirection, Shift, Accumulate, Add, and Count") was designed by
//! Bob Jenkins in 1996. This crate reproduces the reference `rand.c` output
//! sequence bit for bit, including its descending extraction order, so the
//! published `randvect` test vectors hold.
//!
//! Two layers are provided:
//!
//! - [`Isaac`], the generator itself. Infallible, `Clone`, and wiped on drop.
//! - [`IsaacContext`], the call-based contract used by host code that keeps a
//!   long-lived handle. Seeds of the wrong size, fill counts larger than the
//!   destination, and any call after [`IsaacContext::free`] are rejected with
//!   a typed [`IsaacError`].
//!
//! ISAAC is fast and statistically strong but has not been stringently
//! cryptanalysed; it is not a substitute for a vetted CSPRNG.
//!
//! # Examples
//!
//! ```
//! use isaac::{Isaac, RAND_SIZE};
//!
//! let mut rng = Isaac::with_seed(&[0u32; RAND_SIZE]);
//! assert_eq!(rng.next_u32(), 0x182600f3);
//!
//! let mut bytes = [0u8; 6];
//! rng.fill_bytes(&mut bytes);
//! ```
//!
//! ```
//! use isaac::{ErrorKind, IsaacContext};
//!
//! let mut ctx = IsaacContext::init(None).unwrap();
//! let _value = ctx.next_value().unwrap();
//! ctx.free().unwrap();
//! assert_eq!(ctx.next_value().unwrap_err().kind(), ErrorKind::Misuse);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod constants;
mod context;
mod error;
mod generator;
mod seed;
mod trace;

#[cfg(feature = "rand_core")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
mod rng;

pub use constants::{GOLDEN_RATIO, RAND_SIZE, RAND_SIZE_LEN};
pub use context::IsaacContext;
pub use error::{ErrorKind, IsaacError};
pub use generator::Isaac;
