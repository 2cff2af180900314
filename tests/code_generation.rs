//! Integration tests for code generation.
//!
//! These exercise the public API end to end against the OS random source, plus
//! injected sources for the degraded paths.

use std::collections::HashSet;
use std::io;

use rand::{TryCryptoRng, TryRngCore};
use regex::Regex;
use tracing_subscriber::EnvFilter;

use random_code::domain::{DIGITS, LOWERCASE, UPPERCASE};
use random_code::{
    CodeError, CodeGenerator, CodeOptions, DEFAULT_LENGTH, DEFAULT_SYMBOLS, alpha, code, mixed,
    number,
};

// ============================================================================
// Test Harness
// ============================================================================

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn assert_matches(pattern: &str, value: &str) {
    let re = Regex::new(pattern).expect("valid test regex");
    assert!(re.is_match(value), "{value:?} does not match {pattern}");
}

/// Source whose entropy device is always unavailable.
struct BrokenRng;

impl TryRngCore for BrokenRng {
    type Error = io::Error;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Err(io::Error::other("no entropy device"))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Err(io::Error::other("no entropy device"))
    }

    fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> Result<(), Self::Error> {
        Err(io::Error::other("no entropy device"))
    }
}

impl TryCryptoRng for BrokenRng {}

// ============================================================================
// Length
// ============================================================================

#[test]
fn test_positive_length_is_exact() {
    for length in [1, 2, 6, 13, 100, 1024] {
        let options = CodeOptions::mixed(length, true, true, true, true);
        assert_eq!(code(&options).chars().count() as i64, length);
    }
}

#[test]
fn test_non_positive_length_defaults_to_six() {
    for length in [0, -1, -100, i64::MIN] {
        let options = CodeOptions::mixed(length, true, true, false, false);
        assert_eq!(code(&options).chars().count(), DEFAULT_LENGTH);
    }
}

// ============================================================================
// Character Sets
// ============================================================================

#[test]
fn test_number() {
    assert_matches(r"^[0-9]{8}$", &number(8));
}

#[test]
fn test_alpha() {
    assert_matches(r"^[A-Za-z]{10}$", &alpha(10, true, true));
    assert_matches(r"^[a-z]{10}$", &alpha(10, true, false));
    assert_matches(r"^[A-Z]{10}$", &alpha(10, false, true));
}

#[test]
fn test_alpha_without_cases_falls_back_to_digits() {
    assert_matches(r"^[0-9]{7}$", &alpha(7, false, false));
}

#[test]
fn test_mixed_without_symbols() {
    assert_matches(r"^[0-9A-Za-z]{12}$", &mixed(12, true, true, true, false));
}

#[test]
fn test_mixed_with_symbols() {
    let allowed: HashSet<char> = format!("{DIGITS}{LOWERCASE}{UPPERCASE}{DEFAULT_SYMBOLS}")
        .chars()
        .collect();
    let value = mixed(500, true, true, true, true);
    assert_eq!(value.len(), 500);
    assert!(value.chars().all(|c| allowed.contains(&c)));
}

#[test]
fn test_symbols_only_uses_default_set() {
    let value = mixed(300, false, false, false, true);
    assert!(value.chars().all(|c| DEFAULT_SYMBOLS.contains(c)));
}

#[test]
fn test_no_groups_yields_digits() {
    assert_matches(r"^[0-9]{9}$", &code(&CodeOptions::new(9)));
    assert_matches(r"^[0-9]{6}$", &code(&CodeOptions::default()));
}

#[test]
fn test_custom_symbols_with_exclusion() {
    let mut options = CodeOptions::new(5)
        .with_custom_symbols("XY")
        .with_exclude_chars("X");
    options.use_symbols = true;
    assert_eq!(code(&options), "YYYYY");
}

#[test]
fn test_multibyte_custom_symbols() {
    let mut options = CodeOptions::new(40).with_custom_symbols("äöü");
    options.use_symbols = true;
    let value = code(&options);
    assert_eq!(value.chars().count(), 40);
    assert!(value.chars().all(|c| "äöü".contains(c)));
}

// ============================================================================
// Exclusion
// ============================================================================

#[test]
fn test_exclusion_is_exact() {
    let excluded = "0O1lIo";
    let options = CodeOptions::mixed(2000, true, true, true, false).with_exclude_chars(excluded);
    let value = code(&options);
    assert_eq!(value.len(), 2000);
    assert!(value.chars().all(|c| !excluded.contains(c)));
    assert_matches(r"^[0-9A-Za-z]+$", &value);
}

#[test]
fn test_exclusion_removing_everything_yields_digits() {
    let options = CodeOptions::alpha(12, true, false).with_exclude_chars(LOWERCASE);
    assert_matches(r"^[0-9]{12}$", &code(&options));
}

#[test]
fn test_excluding_all_digits_still_falls_back_to_digits() {
    let options = CodeOptions::numeric(6).with_exclude_chars(DIGITS);
    assert_matches(r"^[0-9]{6}$", &code(&options));
}

// ============================================================================
// Randomness
// ============================================================================

#[test]
fn test_repeated_calls_differ() {
    let options = CodeOptions::mixed(32, true, true, true, false);
    let codes: HashSet<String> = (0..50).map(|_| code(&options)).collect();
    assert_eq!(codes.len(), 50);
}

#[test]
fn test_every_digit_appears() {
    let value = number(2000);
    for digit in DIGITS.chars() {
        assert!(value.contains(digit), "digit {digit} never drawn");
    }
}

// ============================================================================
// Degraded Source
// ============================================================================

#[test]
fn test_broken_source_still_returns_full_code() {
    init_tracing();

    let mut generator = CodeGenerator::with_rng(BrokenRng);
    let generated = generator.generate(&CodeOptions::alpha(30, true, false));

    assert_eq!(generated.len(), 30);
    assert_eq!(generated.degraded_positions(), 30);
    assert_eq!(generated.as_str(), "abcdefghijklmnopqrstuvwxyzabcd");
}

#[test]
fn test_broken_source_strict_mode_fails() {
    init_tracing();

    let mut generator = CodeGenerator::with_rng(BrokenRng);
    let err = generator
        .try_generate(&CodeOptions::numeric(6))
        .unwrap_err();

    assert_eq!(
        err,
        CodeError::Entropy {
            position: 0,
            message: "no entropy device".to_string(),
        }
    );
}

#[test]
fn test_os_source_is_not_degraded() {
    let generated = CodeGenerator::new().generate(&CodeOptions::numeric(16));
    assert!(!generated.is_degraded());
    assert!(
        CodeGenerator::new()
            .try_generate(&CodeOptions::numeric(16))
            .is_ok()
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_options_deserialize_with_defaults() {
    let options: CodeOptions = serde_json::from_str("{}").expect("empty object is valid");
    assert_eq!(options, CodeOptions::default());

    let options: CodeOptions = serde_json::from_str(
        r#"{"length": 5, "use_symbols": true, "custom_symbols": "XY", "exclude_chars": "X"}"#,
    )
    .expect("valid options");
    assert_eq!(code(&options), "YYYYY");
}

#[test]
fn test_options_serialize_round_trip_fields() {
    let options = CodeOptions::mixed(10, true, false, true, false).with_exclude_chars("O0");
    let json = serde_json::to_value(&options).expect("serializable");
    assert_eq!(json["length"], 10);
    assert_eq!(json["use_numbers"], true);
    assert_eq!(json["use_lowercase"], false);
    assert_eq!(json["exclude_chars"], "O0");
}
