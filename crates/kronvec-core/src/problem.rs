//! Owned Kronecker apply problem instances.
//!
//! A [`KronProblem`] bundles the N square factor matrices with the input
//! vector they act on. Construction validates the whole instance once, so
//! downstream kernels can trust the shapes: every factor is square and
//! nonempty, the product of the mode sizes fits in `usize`, and the input
//! vector has exactly that length.

use scirs2_core::ndarray_ext::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{KronError, KronResult};
use crate::types::{checked_vector_len, ModeSizes};

/// A validated Kronecker apply problem: N square factors plus the input
/// vector of length `prod(sizes)`.
///
/// Factors are stored slowest mode first, matching the Kronecker operand
/// order `A_0 ⊗ A_1 ⊗ … ⊗ A_{N-1}`. Each factor is row-major contiguous.
///
/// # Examples
///
/// ```
/// use kronvec_core::KronProblem;
/// use scirs2_core::ndarray_ext::{array, Array1};
///
/// let factors = vec![
///     array![[1.0, 0.0], [0.0, 2.0]],
///     array![[0.0, 1.0], [1.0, 0.0]],
/// ];
/// let input = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
///
/// let problem = KronProblem::new(factors, input).unwrap();
/// assert_eq!(problem.modes(), 2);
/// assert_eq!(problem.sizes().as_slice(), &[2, 2]);
/// assert_eq!(problem.vector_len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KronProblem<T> {
    factors: Vec<Array2<T>>,
    input: Array1<T>,
}

impl<T> KronProblem<T> {
    /// Build a problem from its parts, validating every shape.
    ///
    /// # Errors
    ///
    /// * [`KronError::InvalidDimension`] if the factor list is empty, any
    ///   factor is empty or non-square, or the input length does not equal
    ///   the product of the mode sizes
    /// * [`KronError::Overflow`] if the product of the mode sizes overflows
    pub fn new(factors: Vec<Array2<T>>, input: Array1<T>) -> KronResult<Self> {
        if factors.is_empty() {
            return Err(KronError::invalid_dimension(
                "kron_problem",
                vec![1],
                vec![0],
                "at least one factor is required",
            ));
        }

        for (s, factor) in factors.iter().enumerate() {
            let rows = factor.shape()[0];
            let cols = factor.shape()[1];
            if rows == 0 || rows != cols {
                return Err(KronError::invalid_dimension(
                    "kron_problem",
                    vec![rows.max(1), rows.max(1)],
                    vec![rows, cols],
                    format!("factor {} must be square and nonempty", s),
                ));
            }
        }

        let sizes: Vec<usize> = factors.iter().map(|f| f.shape()[0]).collect();
        let len = checked_vector_len("kron_problem", &sizes)?;

        if input.len() != len {
            return Err(KronError::invalid_dimension(
                "kron_problem",
                vec![len],
                vec![input.len()],
                "input vector length must equal the product of the mode sizes",
            ));
        }

        Ok(Self { factors, input })
    }

    /// Number of modes N.
    pub fn modes(&self) -> usize {
        self.factors.len()
    }

    /// Per-mode sizes, slowest mode first.
    pub fn sizes(&self) -> ModeSizes {
        self.factors.iter().map(|f| f.shape()[0]).collect()
    }

    /// Largest mode size. Zero only for the (unconstructible) empty problem.
    pub fn max_size(&self) -> usize {
        self.factors
            .iter()
            .map(|f| f.shape()[0])
            .max()
            .unwrap_or(0)
    }

    /// Full vector length `L = prod(sizes)`.
    pub fn vector_len(&self) -> usize {
        self.input.len()
    }

    /// The factor matrices, slowest mode first.
    pub fn factors(&self) -> &[Array2<T>] {
        &self.factors
    }

    /// Borrowed views of all factors, in mode order. This is the shape the
    /// apply kernels consume.
    pub fn factor_views(&self) -> Vec<ArrayView2<'_, T>> {
        self.factors.iter().map(|f| f.view()).collect()
    }

    /// The input vector.
    pub fn input(&self) -> &Array1<T> {
        &self.input
    }

    /// Borrowed view of the input vector.
    pub fn input_view(&self) -> ArrayView1<'_, T> {
        self.input.view()
    }

    /// Decompose into the owned factor list and input vector.
    pub fn into_parts(self) -> (Vec<Array2<T>>, Array1<T>) {
        (self.factors, self.input)
    }
}
