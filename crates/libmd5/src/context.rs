use crate::constants::DIGEST_LEN;
use crate::error::Md5Error;
use crate::hasher::Md5;
use crate::trace::trace_rejected;

/// Long-lived MD5 context following the `init` / `update` / `finalize`
/// call contract.
///
/// A context moves from *fresh* to *absorbing* through [`update`](Self::update)
/// and to *finalized* through a single successful
/// [`finalize`](Self::finalize). Finalization wipes the context to zero;
/// every later call is rejected with [`Md5Error::Finalized`]. Rejected calls
/// never write to the output buffer and never change the context.
///
/// Use [`Md5`] directly when ownership can express the lifecycle instead.
#[derive(Debug, Default)]
pub struct Md5Context {
    hasher: Md5,
    finalized: bool,
}

impl Md5Context {
    /// Creates a fresh context: magic constants loaded, bit counter zero.
    #[must_use]
    pub const fn init() -> Self {
        Self {
            hasher: Md5::new(),
            finalized: false,
        }
    }

    /// Absorbs the first `length` bytes of `input`.
    ///
    /// Fails with [`Md5Error::LengthExceedsInput`] when `length` is larger
    /// than `input`, and with [`Md5Error::Finalized`] after finalization.
    pub fn update(&mut self, input: &[u8], length: usize) -> Result<(), Md5Error> {
        self.ensure_live("update")?;
        let Some(data) = input.get(..length) else {
            return Err(Self::reject(
                "update",
                Md5Error::LengthExceedsInput {
                    requested: length,
                    available: input.len(),
                },
            ));
        };
        self.hasher.update(data);
        Ok(())
    }

    /// Pads the message, writes the 16-byte digest to the start of
    /// `digest_out`, and wipes the context.
    ///
    /// Bytes of `digest_out` beyond the first 16 are left untouched.
    pub fn finalize(&mut self, digest_out: &mut [u8]) -> Result<(), Md5Error> {
        self.ensure_live("finalize")?;
        let Some(out) = digest_out.get_mut(..DIGEST_LEN) else {
            return Err(Self::reject(
                "finalize",
                Md5Error::OutputTooSmall {
                    required: DIGEST_LEN,
                    actual: digest_out.len(),
                },
            ));
        };
        out.copy_from_slice(&self.hasher.finish());
        self.finalized = true;
        Ok(())
    }

    /// Reports whether the context has been finalized and wiped.
    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Number of message bits absorbed so far; zero once finalized.
    #[must_use]
    pub const fn bit_len(&self) -> u64 {
        self.hasher.bit_len()
    }

    fn ensure_live(&self, operation: &'static str) -> Result<(), Md5Error> {
        if self.finalized {
            Err(Self::reject(operation, Md5Error::Finalized))
        } else {
            Ok(())
        }
    }

    fn reject(operation: &'static str, error: Md5Error) -> Md5Error {
        trace_rejected(operation, &error);
        error
    }
}
