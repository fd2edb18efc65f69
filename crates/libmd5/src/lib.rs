//! Streaming MD5 message digest (RFC 1321).
//!
//! The crate exposes two layers over the same engine:
//!
//! - [`Md5`], an owned streaming hasher with the classic
//!   `new` / `update` / `finalize` lifecycle. Finalization consumes the
//!   hasher, so reuse after finalize cannot compile.
//! - [`Md5Context`], the call-based contract used by host code that keeps a
//!   long-lived context object. Misuse (a short output buffer, a length larger
//!   than the supplied input, any call after finalize) is rejected with a
//!   typed [`Md5Error`] instead of touching memory it does not own.
//!
//! Both layers wipe the intermediate hash state with [`zeroize`] as soon as
//! the digest has been extracted.
//!
//! # Examples
//!
//! ```
//! use libmd5::{Md5, to_hex};
//!
//! let mut hasher = Md5::new();
//! hasher.update(b"a");
//! hasher.update(b"bc");
//! assert_eq!(to_hex(&hasher.finalize()), "900150983cd24fb0d6963f7d28e17f72");
//! ```
//!
//! The context form reports misuse instead of producing a digest:
//!
//! ```
//! use libmd5::{ErrorKind, Md5Context};
//!
//! let mut ctx = Md5Context::init();
//! ctx.update(b"abc", 3).unwrap();
//!
//! let mut digest = [0u8; 16];
//! ctx.finalize(&mut digest).unwrap();
//!
//! let err = ctx.update(b"more", 4).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Misuse);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod constants;
mod context;
mod error;
mod hasher;
pub mod padding;
mod trace;
mod transform;

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub mod parallel;

pub use constants::{BLOCK_LEN, DIGEST_LEN};
pub use context::Md5Context;
pub use error::{ErrorKind, Md5Error};
pub use hasher::Md5;
pub use transform::transform;

/// MD5 digest type (16 bytes / 128 bits).
pub type Digest = [u8; DIGEST_LEN];

/// Renders `bytes` as lowercase hexadecimal, two characters per byte.
///
/// Printing a [`Digest`] this way yields the canonical MD5 hex string.
///
/// ```
/// assert_eq!(libmd5::to_hex(&[0x00, 0xab, 0x7f]), "00ab7f");
/// ```
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write as _;

    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(&mut out, "{byte:02x}");
    }
    out
}
