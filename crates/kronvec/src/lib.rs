//! # KronVec - Matrix-Free Kronecker-Product Apply
//!
//! Computes the action of a Kronecker product of small square matrices on a
//! vector without ever materializing the full product matrix, paired with a
//! seeded generator for reproducible random problem instances.
//!
//! This is the **meta crate** that re-exports the KronVec components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use kronvec::prelude::*;
//!
//! // Generate a reproducible random problem: 3 modes, sizes in {4, 8}.
//! let problem = generate::<f64>(42, 3)?;
//!
//! // Apply the implicit Kronecker product to the input vector.
//! let result = kron_apply(&problem.factor_views(), &problem.input_view())?;
//! assert_eq!(result.len(), problem.vector_len());
//! # Ok::<(), kronvec::core::KronError>(())
//! ```
//!
//! ## Components
//!
//! ### Problem Model and Generation ([`core`])
//!
//! Validated problem instances, mode-size bookkeeping with overflow checks,
//! and the deterministic seeded generator.
//!
//! ```
//! use kronvec::core::{generate_with, ProblemConfig, SizePolicy};
//!
//! let config = ProblemConfig::new(4).with_size_policy(SizePolicy::Uniform);
//! let problem = generate_with::<f64>(7, &config).unwrap();
//! assert_eq!(problem.sizes().as_slice(), &[4, 4, 4, 4]);
//! ```
//!
//! ### Apply Kernels ([`kernels`])
//!
//! The mode-major contraction sweep over a two-slot ping-pong arena, plus
//! the dense Kronecker oracle and timing helpers.
//!
//! ```
//! use kronvec::kernels::{kron_apply_inplace, PingPong, Slot};
//! use scirs2_core::ndarray_ext::{array, Array1};
//!
//! let a0 = array![[1.0, 0.0], [0.0, 2.0]];
//! let a1 = array![[0.0, 1.0], [1.0, 0.0]];
//! let input = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
//!
//! let mut buffers = PingPong::for_input(&input.view()).unwrap();
//! let slot = kron_apply_inplace(&[a0.view(), a1.view()], &mut buffers).unwrap();
//! assert_eq!(slot, Slot::A);
//! assert_eq!(buffers.slot(slot), &[2.0, 1.0, 8.0, 6.0]);
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization of generator configurations
//!
//! ## Examples
//!
//! See the per-crate `examples/` directories for problem-generation,
//! timed-sweep, and oracle-check demonstrations.

#![deny(warnings)]

// Re-export all components
pub use kronvec_core as core;
pub use kronvec_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use kronvec::prelude::*;
    //!
    //! let problem = generate::<f64>(42, 2).unwrap();
    //! let result = kron_apply(&problem.factor_views(), &problem.input_view()).unwrap();
    //! assert_eq!(result.len(), problem.vector_len());
    //! ```

    // Core types
    pub use crate::core::{
        checked_vector_len, generate, generate_with, KronError, KronProblem, KronResult,
        ModeSizes, ProblemConfig, SizePolicy,
    };

    // Apply kernels
    pub use crate::kernels::{
        kron_apply, kron_apply_dense, kron_apply_inplace, kron_full, kronecker, PingPong, Slot,
    };
}
