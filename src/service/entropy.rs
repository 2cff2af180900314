//! Uniform index sampling over a fallible secure random source.
//!
//! Any [`TryRngCore`] works here: `OsRng` reports OS entropy failures as
//! errors, and infallible generators such as `StdRng` get a `TryRngCore` impl
//! from `rand_core` for free.

use rand::TryRngCore;

use crate::error::{CodeError, Result};

/// Draw an index uniformly distributed over `[0, bound)`.
///
/// Uses rejection sampling on 64-bit draws, so there is no modulo bias. Each
/// attempt consumes one `u64` from the source; rejections are rare unless
/// `bound` is close to `u64::MAX`.
///
/// # Errors
///
/// Returns [`CodeError::EmptyCharset`] when `bound` is zero and
/// [`CodeError::Entropy`] when the source fails. Entropy errors carry position
/// `0`; callers re-tag them with [`CodeError::at_position`].
pub fn sample_index<R>(rng: &mut R, bound: usize) -> Result<usize>
where
    R: TryRngCore + ?Sized,
{
    if bound == 0 {
        return Err(CodeError::EmptyCharset);
    }

    let bound = bound as u64;
    // Largest multiple of `bound` that fits; draws at or above it are rejected.
    let zone = u64::MAX - u64::MAX % bound;

    loop {
        let value = rng
            .try_next_u64()
            .map_err(|err| CodeError::entropy(0, err))?;
        if value < zone {
            // Remainder is below `bound`, which came from a usize.
            #[allow(clippy::cast_possible_truncation)]
            let index = (value % bound) as usize;
            return Ok(index);
        }
    }
}
