//! # Random Code
//!
//! Random code generation from a configurable character set, drawing from the
//! operating system CSPRNG.
//!
//! - **Groups**: digits, lowercase, uppercase, symbols (default `!@#$%^&*?` or a custom set)
//! - **Exclusions**: characters stripped from the assembled set, whatever group they came from
//! - **Fallbacks**: an empty set becomes `0123456789`; a length of zero or less becomes 6
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐   ┌────────────────┐   ┌──────────────────┐
//! │  CodeOptions  │ → │    Charset     │ → │  CodeGenerator   │ → GeneratedCode
//! │  (domain)     │   │ build + filter │   │ sample per char  │
//! └───────────────┘   └────────────────┘   └──────────────────┘
//! ```
//!
//! ## Entropy failures
//!
//! [`code`] and the wrappers never fail. If the OS source errors for a position,
//! that position takes `charset[position % charset.len()]`, which is
//! predictable. Degraded positions are logged and counted (see
//! [`service::generator`]). Use [`CodeGenerator::try_generate`] where a
//! predictable code is worse than no code.
//!
//! ```
//! let pin = random_code::number(6);
//! assert_eq!(pin.len(), 6);
//! assert!(pin.chars().all(|c| c.is_ascii_digit()));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod service;

pub use domain::{Charset, CodeOptions, DEFAULT_LENGTH, DEFAULT_SYMBOLS};
pub use error::{CodeError, Result};
pub use service::{CodeGenerator, GeneratedCode};

/// Generate a code for the given options.
///
/// Always returns exactly `options.normalized_length()` characters.
#[must_use]
pub fn code(options: &CodeOptions) -> String {
    CodeGenerator::new().generate(options).into_string()
}

/// Generate a digits-only code.
#[must_use]
pub fn number(length: i64) -> String {
    code(&CodeOptions::numeric(length))
}

/// Generate a letters-only code.
///
/// With both flags off the set is empty and the digit fallback applies.
#[must_use]
pub fn alpha(length: i64, use_lower: bool, use_upper: bool) -> String {
    code(&CodeOptions::alpha(length, use_lower, use_upper))
}

/// Generate a code from exactly the selected groups with the default symbols.
#[must_use]
#[allow(clippy::fn_params_excessive_bools)]
pub fn mixed(
    length: i64,
    use_numbers: bool,
    use_lower: bool,
    use_upper: bool,
    use_symbols: bool,
) -> String {
    code(&CodeOptions::mixed(
        length,
        use_numbers,
        use_lower,
        use_upper,
        use_symbols,
    ))
}
