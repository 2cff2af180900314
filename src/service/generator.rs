//! Code generator.
//!
//! Draws one character per output position from the effective character set.
//! The default source is the operating system CSPRNG (`OsRng`).
//!
//! ## Degraded draws
//!
//! [`CodeGenerator::generate`] never fails. When the secure source errors for a
//! position, that position gets `charset[position % charset.len()]` and
//! generation continues. A code built mostly from fallback characters is
//! predictable, so degraded positions are counted on the result, logged at
//! `warn`, and added to the `random_code_degraded_draws_total` counter.
//! Callers issuing security-sensitive codes (OTPs, reset tokens) should use
//! [`CodeGenerator::try_generate`] or reject results where
//! [`GeneratedCode::is_degraded`] is true.

use metrics::counter;
use rand::TryCryptoRng;
use rand::rngs::OsRng;
use tracing::{debug, warn};

use crate::domain::{Charset, CodeOptions};
use crate::error::{CodeError, Result};
use crate::service::entropy::sample_index;

/// Counter of generation calls.
pub const GENERATED_METRIC: &str = "random_code_generated_total";

/// Counter of positions filled by the deterministic fallback.
pub const DEGRADED_METRIC: &str = "random_code_degraded_draws_total";

/// A generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    /// The code string.
    value: String,
    /// Positions filled by the deterministic fallback.
    degraded_positions: usize,
}

impl GeneratedCode {
    /// The code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume into the code string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Check if the code is empty. Generated codes never are.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of positions that used the deterministic fallback.
    #[must_use]
    pub const fn degraded_positions(&self) -> usize {
        self.degraded_positions
    }

    /// Check if any position used the deterministic fallback.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded_positions > 0
    }
}

impl std::fmt::Display for GeneratedCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for GeneratedCode {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<GeneratedCode> for String {
    fn from(code: GeneratedCode) -> Self {
        code.value
    }
}

/// Random code generator over a secure random source.
#[derive(Debug, Clone)]
pub struct CodeGenerator<R = OsRng> {
    /// Secure random source.
    rng: R,
}

impl CodeGenerator<OsRng> {
    /// Create a generator backed by the operating system CSPRNG.
    #[must_use]
    pub const fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for CodeGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TryCryptoRng> CodeGenerator<R> {
    /// Create a generator over a custom secure source.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Consume the generator and return its source.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Generate a code, falling back per position if the source fails.
    ///
    /// The result always has exactly `options.normalized_length()` characters,
    /// each drawn from the effective character set.
    pub fn generate(&mut self, options: &CodeOptions) -> GeneratedCode {
        let length = options.normalized_length();
        let charset = Charset::effective(options);

        debug!(length, charset_size = charset.len(), "Generating code");

        let mut value = String::with_capacity(length);
        let mut degraded_positions = 0;
        let mut first_error = None;

        for position in 0..length {
            match self.draw(&charset, position) {
                Ok(c) => value.push(c),
                Err(err) => {
                    degraded_positions += 1;
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                    value.push(charset.fallback_at(position));
                }
            }
        }

        counter!(GENERATED_METRIC).increment(1);

        if let Some(err) = first_error {
            counter!(DEGRADED_METRIC).increment(degraded_positions as u64);
            warn!(
                degraded_positions,
                length,
                error = %err,
                "Secure random source failed, used deterministic fallback characters"
            );
        }

        GeneratedCode {
            value,
            degraded_positions,
        }
    }

    /// Generate a code, failing on the first source error instead of falling back.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::Entropy`] with the failing position if the secure
    /// source errors.
    pub fn try_generate(&mut self, options: &CodeOptions) -> Result<GeneratedCode> {
        let length = options.normalized_length();
        let charset = Charset::effective(options);

        debug!(length, charset_size = charset.len(), "Generating code (strict)");

        let value = (0..length)
            .map(|position| self.draw(&charset, position))
            .collect::<Result<String>>()
            .inspect_err(|err| {
                warn!(error = %err, "Secure random source failed, no code generated");
            })?;

        counter!(GENERATED_METRIC).increment(1);

        Ok(GeneratedCode {
            value,
            degraded_positions: 0,
        })
    }

    /// Draw the character for one output position.
    fn draw(&mut self, charset: &Charset, position: usize) -> Result<char> {
        let index = sample_index(&mut self.rng, charset.len())
            .map_err(|err: CodeError| err.at_position(position))?;
        Ok(charset[index])
    }
}
