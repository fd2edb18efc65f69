use thiserror::Error;

/// Classification of an [`IsaacError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The arguments of the call were inconsistent (wrong seed size, a fill
    /// count larger than the destination buffer).
    InvalidArgument,
    /// The context was used after it had been released.
    Misuse,
}

/// Errors reported by [`IsaacContext`](crate::IsaacContext).
///
/// Generation itself cannot fail; every variant describes a call that was
/// rejected before the generator was touched.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum IsaacError {
    /// The seed did not contain exactly one word per pool entry.
    #[error("ISAAC seed requires {expected} words, received {actual}")]
    SeedLength {
        /// Number of words a seed must contain.
        expected: usize,
        /// Number of words supplied.
        actual: usize,
    },
    /// The requested number of bytes exceeds the destination buffer.
    #[error("requested {requested} random bytes but the buffer holds {available}")]
    LengthExceedsBuffer {
        /// Number of bytes the caller asked for.
        requested: usize,
        /// Length of the destination buffer.
        available: usize,
    },
    /// The context has already been released.
    #[error("ISAAC context was already released")]
    Released,
}

impl IsaacError {
    /// Returns the classification describing why the call was rejected.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::SeedLength { .. } | Self::LengthExceedsBuffer { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::Released => ErrorKind::Misuse,
        }
    }
}
