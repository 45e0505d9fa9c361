//! # kronvec-kernels
//!
//! Matrix-free Kronecker-product apply kernels for KronVec.
//!
//! ## Overview
//!
//! Given N square factor matrices `A_0, …, A_{N-1}` and a vector `x` of
//! length `L = prod(sizes)`, the core kernel computes the action of the
//! Kronecker product `A_0 ⊗ A_1 ⊗ … ⊗ A_{N-1}` on `x` in
//! `O(sum_s L * sizes[s])` time and `O(L)` extra space, without ever
//! building the `L × L` product matrix.
//!
//! **Key pieces:**
//! - [`kron_apply`] / [`kron_apply_inplace`] - the mode-major contraction
//!   sweep, over an owned result or a reusable [`PingPong`] arena
//! - [`PingPong`] / [`Slot`] - the two-slot buffer arena and the tagged
//!   handle naming the slot that holds the result
//! - [`kronecker`] / [`kron_full`] / [`kron_apply_dense`] - explicit dense
//!   products, the correctness oracle for the sweep
//! - [`time_operation`] / [`sweep_element_ops`] - timing and throughput
//!   helpers for examples and benches
//!
//! ## Convention
//!
//! The sweep applies every factor from the right (row-vector convention):
//! it computes `y = x^T (A_0 ⊗ … ⊗ A_{N-1})`, reading each factor
//! transposed in the inner loop. The dense oracle uses the same convention,
//! so for symmetric factors both conventions coincide. See [`apply`] for
//! details.
//!
//! ## Quick Start
//!
//! ```rust
//! use kronvec_kernels::{kron_apply, kron_apply_dense};
//! use scirs2_core::ndarray_ext::{array, Array1};
//!
//! let a0 = array![[1.0, 0.0], [0.0, 2.0]];
//! let a1 = array![[0.0, 1.0], [1.0, 0.0]];
//! let x = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
//!
//! let y = kron_apply(&[a0.view(), a1.view()], &x.view()).unwrap();
//! assert_eq!(y, Array1::from_vec(vec![2.0, 1.0, 8.0, 6.0]));
//!
//! // The sweep matches the explicit Kronecker product.
//! let reference = kron_apply_dense(&[a0.view(), a1.view()], &x.view()).unwrap();
//! assert_eq!(y, reference);
//! ```
//!
//! ## Examples
//!
//! The `examples/` directory contains demonstrations:
//! - `kron_apply.rs` - generate a random problem and run repeated timed
//!   sweeps on a reused arena
//! - `oracle_check.rs` - verify the sweep against the dense oracle
//!
//! Run with:
//! ```bash
//! cargo run --example kron_apply
//! cargo run --example oracle_check
//! ```
//!
//! ## SciRS2 Integration
//!
//! This crate uses `scirs2-core` for all array operations and numerical
//! computations. Direct use of `ndarray` or `num-traits` is not permitted.

#![deny(warnings)]

pub mod apply;
pub mod dense;
pub mod utils;


// Re-exports
pub use apply::{kron_apply, kron_apply_inplace, PingPong, Slot};
pub use dense::{kron_apply_dense, kron_full, kronecker};
pub use utils::{approx_equal_vec, max_abs_diff, sweep_element_ops, time_operation, TimingResult};
