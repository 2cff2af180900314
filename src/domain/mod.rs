//! Domain models for code generation.
//!
//! This module contains the generation options and the character set they
//! resolve to.

pub mod charset;
pub mod options;

pub use charset::{
    Charset, DEFAULT_SYMBOLS, DIGITS, FALLBACK_CHARSET, LOWERCASE, UPPERCASE,
};
pub use options::{CodeOptions, DEFAULT_LENGTH};
