//! Code generation options.
//!
//! `CodeOptions` is a plain value object. It is built per call, consumed by the
//! generator, and discarded. It deserializes with per-field defaults so host
//! applications can embed it in their own configuration.

use serde::{Deserialize, Serialize};

/// Length used when the requested length is zero or negative.
pub const DEFAULT_LENGTH: usize = 6;

/// Options controlling the character set and length of a generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CodeOptions {
    /// Requested output length in characters.
    ///
    /// Zero or negative values fall back to [`DEFAULT_LENGTH`].
    pub length: i64,

    /// Include the digits `0-9`.
    pub use_numbers: bool,

    /// Include the lowercase letters `a-z`.
    pub use_lowercase: bool,

    /// Include the uppercase letters `A-Z`.
    pub use_uppercase: bool,

    /// Include symbols (custom symbols when set, otherwise the defaults).
    pub use_symbols: bool,

    /// Replacement for the default symbol set. Empty means unset.
    pub custom_symbols: String,

    /// Characters stripped from the assembled set, whatever group they came from.
    pub exclude_chars: String,
}

impl CodeOptions {
    /// Create options with the given length and no groups enabled.
    #[must_use]
    pub fn new(length: i64) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Digits only.
    #[must_use]
    pub fn numeric(length: i64) -> Self {
        Self {
            use_numbers: true,
            ..Self::new(length)
        }
    }

    /// Letters only, with each case selected independently.
    #[must_use]
    pub fn alpha(length: i64, use_lower: bool, use_upper: bool) -> Self {
        Self {
            use_lowercase: use_lower,
            use_uppercase: use_upper,
            ..Self::new(length)
        }
    }

    /// Exactly the selected groups, default symbols, no exclusions.
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn mixed(
        length: i64,
        use_numbers: bool,
        use_lower: bool,
        use_upper: bool,
        use_symbols: bool,
    ) -> Self {
        Self {
            use_numbers,
            use_lowercase: use_lower,
            use_uppercase: use_upper,
            use_symbols,
            ..Self::new(length)
        }
    }

    /// Set the custom symbol set.
    #[must_use]
    pub fn with_custom_symbols(mut self, symbols: impl Into<String>) -> Self {
        self.custom_symbols = symbols.into();
        self
    }

    /// Set the characters to exclude.
    #[must_use]
    pub fn with_exclude_chars(mut self, chars: impl Into<String>) -> Self {
        self.exclude_chars = chars.into();
        self
    }

    /// Output length after normalization.
    ///
    /// Lengths that are zero, negative, or not addressable on this platform
    /// become [`DEFAULT_LENGTH`].
    #[must_use]
    pub fn normalized_length(&self) -> usize {
        usize::try_from(self.length)
            .ok()
            .filter(|&len| len > 0)
            .unwrap_or(DEFAULT_LENGTH)
    }

    /// Check whether any character group is enabled.
    #[must_use]
    pub const fn has_groups(&self) -> bool {
        self.use_numbers || self.use_lowercase || self.use_uppercase || self.use_symbols
    }
}

impl Default for CodeOptions {
    fn default() -> Self {
        Self {
            length: default_length(),
            use_numbers: false,
            use_lowercase: false,
            use_uppercase: false,
            use_symbols: false,
            custom_symbols: String::new(),
            exclude_chars: String::new(),
        }
    }
}

#[allow(clippy::cast_possible_wrap)]
const fn default_length() -> i64 {
    DEFAULT_LENGTH as i64
}
