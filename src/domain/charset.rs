//! Character set construction.
//!
//! Groups are concatenated in a fixed order (digits, lowercase, uppercase,
//! symbols) and then filtered against the exclusion list. Duplicates are kept,
//! so a character contributed by two groups is twice as likely to be drawn.

use std::collections::HashSet;
use std::ops::Index;

use super::options::CodeOptions;

/// Digit block.
pub const DIGITS: &str = "0123456789";

/// Lowercase letter block.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase letter block.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Symbols used when symbols are enabled and no custom set is given.
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*?";

/// Pool substituted when the built set is empty.
pub const FALLBACK_CHARSET: &str = DIGITS;

/// Ordered pool of characters eligible for sampling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Build the filtered pool for the given options.
    ///
    /// The result is empty when no group is enabled or the exclusion list
    /// removes everything.
    #[must_use]
    pub fn build(options: &CodeOptions) -> Self {
        let mut pool = String::new();

        if options.use_numbers {
            pool.push_str(DIGITS);
        }
        if options.use_lowercase {
            pool.push_str(LOWERCASE);
        }
        if options.use_uppercase {
            pool.push_str(UPPERCASE);
        }
        if options.use_symbols {
            if options.custom_symbols.is_empty() {
                pool.push_str(DEFAULT_SYMBOLS);
            } else {
                pool.push_str(&options.custom_symbols);
            }
        }

        let excluded: HashSet<char> = options.exclude_chars.chars().collect();
        Self {
            chars: pool.chars().filter(|c| !excluded.contains(c)).collect(),
        }
    }

    /// Build the pool, substituting [`FALLBACK_CHARSET`] when it comes out empty.
    #[must_use]
    pub fn effective(options: &CodeOptions) -> Self {
        let charset = Self::build(options);
        if charset.is_empty() {
            Self::from(FALLBACK_CHARSET)
        } else {
            charset
        }
    }

    /// Number of characters in the pool, counting duplicates.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if the pool contains a character.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Character at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Deterministic substitute for a failed draw at `position`.
    ///
    /// # Panics
    ///
    /// Panics if the pool is empty. Pools from [`Charset::effective`] never are.
    #[must_use]
    pub fn fallback_at(&self, position: usize) -> char {
        self.chars[position % self.len()]
    }

    /// Characters in pool order.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl Index<usize> for Charset {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.chars[index]
    }
}

impl From<&str> for Charset {
    fn from(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
        }
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
