use thiserror::Error;

/// Classification of an [`Md5Error`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The arguments of the call were inconsistent (a length larger than the
    /// supplied input, an output buffer too small for a digest).
    InvalidArgument,
    /// The context was used after it had been finalized and wiped.
    Misuse,
}

/// Errors reported by [`Md5Context`](crate::Md5Context).
///
/// The digest computation itself cannot fail; every variant describes a call
/// that was rejected before any state was read or written.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Md5Error {
    /// The requested number of bytes exceeds the length of the input slice.
    #[error("requested {requested} input bytes but only {available} were supplied")]
    LengthExceedsInput {
        /// Number of bytes the caller asked to absorb.
        requested: usize,
        /// Length of the slice actually supplied.
        available: usize,
    },
    /// The digest output buffer cannot hold a full digest.
    #[error("digest output requires {required} bytes, received {actual}")]
    OutputTooSmall {
        /// Number of bytes a digest occupies.
        required: usize,
        /// Length of the buffer the caller supplied.
        actual: usize,
    },
    /// The context has already been finalized and wiped.
    #[error("MD5 context was already finalized")]
    Finalized,
}

impl Md5Error {
    /// Returns the classification describing why the call was rejected.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::LengthExceedsInput { .. } | Self::OutputTooSmall { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::Finalized => ErrorKind::Misuse,
        }
    }
}
