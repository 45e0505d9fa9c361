//! Core type definitions for KronVec problems.
//!
//! This module defines the small shared vocabulary of the crate:
//!
//! - [`ModeSizes`] - per-mode factor sizes, slowest mode first
//! - [`checked_vector_len`] - overflow-checked product of mode sizes
//!
//! The full vector length of a Kronecker apply is the product of all mode
//! sizes, which overflows quickly (ten modes of size 8 already reach 2^30
//! elements). Every length computation in the crate therefore goes through
//! [`checked_vector_len`] so overflow is reported before any allocation.

use smallvec::SmallVec;

use crate::error::{KronError, KronResult};

/// Per-mode factor sizes, slowest (leftmost Kronecker operand) first.
///
/// Stored inline for up to 8 modes, which covers realistic problem shapes
/// without heap allocation.
///
/// # Examples
///
/// ```
/// use kronvec_core::ModeSizes;
///
/// let sizes = ModeSizes::from_slice(&[4, 8, 4]);
/// assert_eq!(sizes.len(), 3);
/// assert_eq!(sizes[1], 8);
/// ```
pub type ModeSizes = SmallVec<[usize; 8]>;

/// Compute the full vector length `L = prod(sizes)` with overflow checking.
///
/// Every mode size must be at least 1, and the running product must fit in
/// `usize`. Both checks run before any buffer is sized from the result.
///
/// # Arguments
///
/// * `operation` - Name of the calling operation, used in error messages
/// * `sizes` - Mode sizes, one entry per mode
///
/// # Returns
///
/// The product of all sizes. An empty slice yields 1 (empty product).
///
/// # Errors
///
/// * [`KronError::InvalidDimension`] if any size is 0
/// * [`KronError::Overflow`] if the product exceeds `usize::MAX`
///
/// # Examples
///
/// ```
/// use kronvec_core::checked_vector_len;
///
/// let len = checked_vector_len("demo", &[4, 8, 4]).unwrap();
/// assert_eq!(len, 128);
///
/// assert!(checked_vector_len("demo", &[4, 0]).is_err());
/// assert!(checked_vector_len("demo", &[usize::MAX, 2]).is_err());
/// ```
pub fn checked_vector_len(operation: &str, sizes: &[usize]) -> KronResult<usize> {
    let mut len: usize = 1;
    for (s, &n) in sizes.iter().enumerate() {
        if n == 0 {
            return Err(KronError::invalid_dimension(
                operation,
                vec![1],
                vec![0],
                format!("mode {} has size 0; every mode size must be at least 1", s),
            ));
        }
        len = len
            .checked_mul(n)
            .ok_or_else(|| KronError::overflow(operation, sizes.to_vec()))?;
    }
    Ok(len)
}
