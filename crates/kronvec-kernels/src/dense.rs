//! Dense Kronecker products: the explicit reference for the sweep.
//!
//! These kernels materialize the Kronecker product the sweep in
//! [`crate::apply`] avoids. They are exponential in the number of modes and
//! exist as the correctness oracle (tests, demos) and for callers who
//! genuinely need the full matrix of a small problem.

use scirs2_core::ndarray_ext::{Array1, Array2, ArrayView1, ArrayView2};
use scirs2_core::numeric::Num;

use kronvec_core::{checked_vector_len, KronError, KronResult};

/// Compute the Kronecker product of two matrices.
///
/// For A (m×n) and B (p×q) the result C = A ⊗ B has shape (mp, nq): each
/// entry `a_ij` of A scales a (p, q) block of the result.
///
/// # Complexity
///
/// Time and space: O(m * n * p * q)
///
/// # Examples
///
/// ```
/// use kronvec_kernels::kronecker;
/// use scirs2_core::ndarray_ext::array;
///
/// let a = array![[1.0, 2.0], [3.0, 4.0]];
/// let b = array![[0.0, 1.0], [1.0, 0.0]];
/// let c = kronecker(&a.view(), &b.view());
///
/// assert_eq!(c.shape(), &[4, 4]);
/// assert_eq!(c[[0, 1]], 1.0); // 1 * b[0][1]
/// assert_eq!(c[[3, 2]], 4.0); // 4 * b[1][0]
/// ```
pub fn kronecker<T>(a: &ArrayView2<T>, b: &ArrayView2<T>) -> Array2<T>
where
    T: Clone + Num,
{
    let (m, n) = (a.shape()[0], a.shape()[1]);
    let (p, q) = (b.shape()[0], b.shape()[1]);

    let mut result = Array2::<T>::zeros((m * p, n * q));

    for (i, row_a) in a.rows().into_iter().enumerate() {
        for (j, a_val) in row_a.iter().enumerate() {
            let block_row = i * p;
            let block_col = j * q;

            for (bi, row_b) in b.rows().into_iter().enumerate() {
                for (bj, b_val) in row_b.iter().enumerate() {
                    result[[block_row + bi, block_col + bj]] = a_val.clone() * b_val.clone();
                }
            }
        }
    }

    result
}

/// Fold a factor list into the full Kronecker product
/// `A_0 ⊗ A_1 ⊗ … ⊗ A_{N-1}`.
///
/// The empty product is the 1×1 identity. The result has
/// `prod(rows) × prod(cols)` entries, so this is only viable for small
/// problems; the row and column products are overflow-checked first.
///
/// # Errors
///
/// * [`KronError::InvalidDimension`] if any factor has a zero dimension
/// * [`KronError::Overflow`] if the result shape overflows `usize`
pub fn kron_full<T>(factors: &[ArrayView2<T>]) -> KronResult<Array2<T>>
where
    T: Clone + Num,
{
    let rows: Vec<usize> = factors.iter().map(|f| f.shape()[0]).collect();
    let cols: Vec<usize> = factors.iter().map(|f| f.shape()[1]).collect();
    checked_vector_len("kron_full", &rows)?;
    checked_vector_len("kron_full", &cols)?;

    let mut result = Array2::from_elem((1, 1), T::one());
    for factor in factors {
        result = kronecker(&result.view(), factor);
    }
    Ok(result)
}

/// Apply the explicit Kronecker product of `factors` to `input`, as the
/// reference for [`crate::apply::kron_apply`].
///
/// Uses the same right-application convention as the sweep:
/// `y[j] = sum_i x[i] * K[[i, j]]` with `K` the full Kronecker product.
/// Exponential in the number of modes; intended for tests and demos with
/// small `L` only.
///
/// # Errors
///
/// * [`KronError::InvalidDimension`] if any factor is empty or non-square,
///   or `input.len()` differs from the product of the factor sizes
/// * [`KronError::Overflow`] if the product of the factor sizes overflows
///
/// # Examples
///
/// ```
/// use kronvec_kernels::{kron_apply, kron_apply_dense};
/// use scirs2_core::ndarray_ext::{array, Array1};
///
/// let a0 = array![[1.0, 0.0], [0.0, 2.0]];
/// let a1 = array![[0.0, 1.0], [1.0, 0.0]];
/// let x = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
///
/// let dense = kron_apply_dense(&[a0.view(), a1.view()], &x.view()).unwrap();
/// let sweep = kron_apply(&[a0.view(), a1.view()], &x.view()).unwrap();
/// assert_eq!(dense, sweep);
/// ```
pub fn kron_apply_dense<T>(
    factors: &[ArrayView2<T>],
    input: &ArrayView1<T>,
) -> KronResult<Array1<T>>
where
    T: Clone + Num,
{
    let mut sizes = Vec::with_capacity(factors.len());
    for (s, factor) in factors.iter().enumerate() {
        let rows = factor.shape()[0];
        let cols = factor.shape()[1];
        if rows == 0 || rows != cols {
            return Err(KronError::invalid_dimension(
                "kron_apply_dense",
                vec![rows.max(1), rows.max(1)],
                vec![rows, cols],
                format!("factor {} must be square and nonempty", s),
            ));
        }
        sizes.push(rows);
    }

    let len = checked_vector_len("kron_apply_dense", &sizes)?;
    if input.len() != len {
        return Err(KronError::invalid_dimension(
            "kron_apply_dense",
            vec![len],
            vec![input.len()],
            "input vector length must equal the product of the factor sizes",
        ));
    }

    let full = kron_full(factors)?;
    let mut result = Array1::<T>::zeros(len);
    for j in 0..len {
        let mut acc = T::zero();
        for i in 0..len {
            acc = acc + input[i].clone() * full[[i, j]].clone();
        }
        result[j] = acc;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::{array, Array1, Array2};

    #[test]
    fn test_kronecker_blocks() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[5.0, 6.0], [7.0, 8.0]];
        let c = kronecker(&a.view(), &b.view());

        assert_eq!(c.shape(), &[4, 4]);
        // Top-left block: 1*B
        assert_eq!(c[[0, 0]], 5.0);
        assert_eq!(c[[1, 1]], 8.0);
        // Bottom-right block: 4*B
        assert_eq!(c[[2, 2]], 20.0);
        assert_eq!(c[[3, 3]], 32.0);
    }

    #[test]
    fn test_kronecker_identity_is_block_diagonal() {
        let eye = Array2::<f64>::eye(2);
        let b = array![[2.0, 3.0], [4.0, 5.0]];
        let c = kronecker(&eye.view(), &b.view());

        assert_eq!(c[[0, 0]], 2.0);
        assert_eq!(c[[1, 1]], 5.0);
        assert_eq!(c[[0, 2]], 0.0);
        assert_eq!(c[[2, 0]], 0.0);
        assert_eq!(c[[2, 2]], 2.0);
        assert_eq!(c[[3, 3]], 5.0);
    }

    #[test]
    fn test_kron_full_empty_is_identity() {
        let full = kron_full::<f64>(&[]).unwrap();
        assert_eq!(full.shape(), &[1, 1]);
        assert_eq!(full[[0, 0]], 1.0);
    }

    #[test]
    fn test_kron_full_three_factors() {
        let a = array![[2.0]];
        let b = array![[1.0, 0.0], [0.0, 1.0]];
        let c = array![[0.0, 1.0], [1.0, 0.0]];

        let full = kron_full(&[a.view(), b.view(), c.view()]).unwrap();

        assert_eq!(full.shape(), &[4, 4]);
        // 2 * (I ⊗ swap): each diagonal block is 2*swap.
        assert_eq!(full[[0, 1]], 2.0);
        assert_eq!(full[[1, 0]], 2.0);
        assert_eq!(full[[2, 3]], 2.0);
        assert_eq!(full[[3, 2]], 2.0);
        assert_eq!(full[[0, 0]], 0.0);
        assert_eq!(full[[0, 2]], 0.0);
    }

    #[test]
    fn test_kron_apply_dense_concrete() {
        let a0 = array![[1.0, 0.0], [0.0, 2.0]];
        let a1 = array![[0.0, 1.0], [1.0, 0.0]];
        let x = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);

        let result = kron_apply_dense(&[a0.view(), a1.view()], &x.view()).unwrap();

        assert_eq!(result, Array1::from_vec(vec![2.0, 1.0, 8.0, 6.0]));
    }

    #[test]
    fn test_kron_apply_dense_wrong_length() {
        let a = Array2::<f64>::eye(2);
        let x = Array1::from_vec(vec![1.0, 2.0, 3.0]);

        let err = kron_apply_dense(&[a.view()], &x.view()).unwrap_err();
        assert!(matches!(err, KronError::InvalidDimension { .. }));
    }
}
