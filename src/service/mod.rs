//! Service layer module.
//!
//! Contains the code generator and the sampling it is built on.

pub mod entropy;
pub mod generator;

pub use generator::{CodeGenerator, DEGRADED_METRIC, GENERATED_METRIC, GeneratedCode};
