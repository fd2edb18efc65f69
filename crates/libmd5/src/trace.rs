//! Digest tracing: finalization and rejected context calls.
//!
//! Every helper has a no-op twin compiled when the `tracing` feature is
//! disabled, so call sites never need their own `cfg` guards. Events carry
//! lengths and counters only.

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// Trace a digest finalization.
///
/// # Arguments
///
/// * `bit_len` - Message length in bits before padding
/// * `padding` - Number of padding bytes appended before the length suffix
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_finalize(bit_len: u64, padding: usize) {
    debug!(
        target: "libmd5::digest",
        operation = "finalize",
        bit_len = bit_len,
        padding = padding,
        "finalize {} bits (+{} padding bytes)",
        bit_len,
        padding
    );
}

/// Trace a digest finalization - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_finalize(_bit_len: u64, _padding: usize) {}

/// Trace a context call rejected with an error.
///
/// # Arguments
///
/// * `operation` - Name of the rejected call
/// * `error` - Reason for the rejection
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_rejected(operation: &'static str, error: &crate::Md5Error) {
    warn!(
        target: "libmd5::context",
        operation = operation,
        kind = ?error.kind(),
        "rejected {}: {}",
        operation,
        error
    );
}

/// Trace a context call rejected with an error - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_rejected(_operation: &'static str, _error: &crate::Md5Error) {}
