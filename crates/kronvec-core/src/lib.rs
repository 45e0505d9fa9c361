//! # kronvec-core
//!
//! Core data model and seeded problem generation for KronVec.
//!
//! This crate defines the vocabulary shared by the KronVec workspace:
//!
//! - [`KronProblem`] - a validated instance: N square factor matrices plus
//!   the input vector of length `L = prod(sizes)`
//! - [`ModeSizes`] / [`checked_vector_len`] - per-mode sizes and the
//!   overflow-checked product that sizes every buffer
//! - [`generate`] / [`generate_with`] - deterministic seeded generation of
//!   random problems, configured through [`ProblemConfig`]
//! - [`KronError`] / [`KronResult`] - the error taxonomy shared with the
//!   apply kernels in `kronvec-kernels`
//!
//! ## Quick Start
//!
//! ```
//! use kronvec_core::{generate_with, ProblemConfig, SizePolicy};
//!
//! let config = ProblemConfig::new(3).with_size_policy(SizePolicy::Uniform);
//! let problem = generate_with::<f64>(42, &config).unwrap();
//!
//! assert_eq!(problem.modes(), 3);
//! assert_eq!(problem.vector_len(), 64);
//! // Reruns with the same seed and config are bit-identical.
//! assert_eq!(problem, generate_with::<f64>(42, &config).unwrap());
//! ```
//!
//! ## SciRS2 Integration
//!
//! This crate uses `scirs2-core` for all array operations and random number
//! generation. Direct use of `ndarray` or `rand` is not permitted.

#![deny(warnings)]

pub mod error;
pub mod generate;
pub mod problem;
pub mod types;

#[cfg(test)]
mod property_tests;

// Re-exports
pub use error::{KronError, KronResult};
pub use generate::{generate, generate_with, ProblemConfig, SizePolicy};
pub use problem::KronProblem;
pub use types::{checked_vector_len, ModeSizes};
