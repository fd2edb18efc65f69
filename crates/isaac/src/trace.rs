//! Generator tracing: seeding, batch regeneration, release and rejected calls.
//!
//! Events carry counters only, never pool contents or generated values.

#[cfg(feature = "tracing")]
use tracing::{debug, trace, warn};

/// Trace generator (re)seeding.
///
/// # Arguments
///
/// * `seeded` - Whether an explicit seed array was supplied
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_seed(seeded: bool) {
    debug!(
        target: "isaac::rng",
        operation = "seed",
        seeded = seeded,
        "seed ({})",
        if seeded { "explicit" } else { "default" }
    );
}

/// Trace generator (re)seeding - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_seed(_seeded: bool) {}

/// Trace one generation batch.
///
/// # Arguments
///
/// * `generation` - Number of batches produced since the last seeding
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_generate(generation: u64) {
    trace!(
        target: "isaac::rng",
        operation = "generate",
        generation = generation,
        "generate batch {}",
        generation
    );
}

/// Trace one generation batch - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_generate(_generation: u64) {}

/// Trace the release of a context.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_release() {
    debug!(target: "isaac::context", operation = "free", "context released");
}

/// Trace the release of a context - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_release() {}

/// Trace a context call rejected with an error.
///
/// # Arguments
///
/// * `operation` - Name of the rejected call
/// * `error` - Reason for the rejection
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_rejected(operation: &'static str, error: &crate::IsaacError) {
    warn!(
        target: "isaac::context",
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
pub(crate) fn trace_rejected(_operation: &'static str, _error: &crate::IsaacError) {}
