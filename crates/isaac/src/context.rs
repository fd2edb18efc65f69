use crate::constants::RAND_SIZE;
use crate::error::IsaacError;
use crate::generator::Isaac;
use crate::trace::{trace_rejected, trace_release};

/// Long-lived ISAAC handle following the `init` / `seed` / `step` /
/// `next_value` / `fill_buffer` / `free` call contract.
///
/// The generator lives on the heap until [`free`](Self::free) wipes and
/// releases it. Every call on a released context, a second `free` included,
/// fails with [`IsaacError::Released`]. Rejected calls leave the generator
/// untouched.
#[derive(Debug)]
pub struct IsaacContext {
    generator: Option<Box<Isaac>>,
}

impl IsaacContext {
    /// Allocates and seeds a context.
    ///
    /// With `None` the generator starts from the fixed default state; with
    /// `Some(words)` the slice must hold exactly [`RAND_SIZE`] words.
    pub fn init(seed: Option<&[u32]>) -> Result<Self, IsaacError> {
        let generator = match seed {
            Some(words) => Isaac::with_seed(Self::seed_array("init", words)?),
            None => Isaac::new(),
        };
        Ok(Self {
            generator: Some(Box::new(generator)),
        })
    }

    /// Reseeds the generator from exactly [`RAND_SIZE`] words.
    pub fn seed(&mut self, words: &[u32]) -> Result<(), IsaacError> {
        let generator = self.live_mut("seed")?;
        let seed = Self::seed_array("seed", words)?;
        generator.reseed(seed);
        Ok(())
    }

    /// Forces one generation batch.
    pub fn step(&mut self) -> Result<(), IsaacError> {
        self.live_mut("step")?.step();
        Ok(())
    }

    /// Returns the next value as a signed 32-bit integer, regenerating the
    /// batch first when it is exhausted.
    pub fn next_value(&mut self) -> Result<i32, IsaacError> {
        Ok(self.live_mut("next_value")?.next_i32())
    }

    /// Writes exactly `count` random bytes to the start of `out`.
    ///
    /// Fails with [`IsaacError::LengthExceedsBuffer`] when `count` is larger
    /// than `out`; bytes beyond `count` are never written.
    pub fn fill_buffer(&mut self, out: &mut [u8], count: usize) -> Result<(), IsaacError> {
        let generator = self.live_mut("fill_buffer")?;
        let available = out.len();
        let Some(dest) = out.get_mut(..count) else {
            return Err(Self::reject(
                "fill_buffer",
                IsaacError::LengthExceedsBuffer {
                    requested: count,
                    available,
                },
            ));
        };
        generator.fill_bytes(dest);
        Ok(())
    }

    /// Wipes and releases the generator.
    pub fn free(&mut self) -> Result<(), IsaacError> {
        match self.generator.take() {
            Some(generator) => {
                drop(generator);
                trace_release();
                Ok(())
            }
            None => Err(Self::reject("free", IsaacError::Released)),
        }
    }

    /// Reports whether [`free`](Self::free) has been called.
    #[must_use]
    pub const fn is_released(&self) -> bool {
        self.generator.is_none()
    }

    /// Borrows the underlying generator.
    ///
    /// Fails with [`IsaacError::Released`] after [`free`](Self::free). As a
    /// read-only observer it is not traced as a rejected call.
    pub fn generator(&self) -> Result<&Isaac, IsaacError> {
        self.generator.as_deref().ok_or(IsaacError::Released)
    }

    fn live_mut(&mut self, operation: &'static str) -> Result<&mut Isaac, IsaacError> {
        self.generator
            .as_deref_mut()
            .ok_or_else(|| Self::reject(operation, IsaacError::Released))
    }

    fn seed_array<'a>(
        operation: &'static str,
        words: &'a [u32],
    ) -> Result<&'a [u32; RAND_SIZE], IsaacError> {
        words.try_into().map_err(|_| {
            Self::reject(
                operation,
                IsaacError::SeedLength {
                    expected: RAND_SIZE,
                    actual: words.len(),
                },
            )
        })
    }

    fn reject(operation: &'static str, error: IsaacError) -> IsaacError {
        trace_rejected(operation, &error);
        error
    }
}
