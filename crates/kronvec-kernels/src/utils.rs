//! Utility functions and helpers for the apply kernels
//!
//! Timing and comparison helpers used by the examples and benches. The
//! kernels themselves are pure computation; wall-clock measurement lives
//! here, outside the sweep.

use scirs2_core::ndarray_ext::ArrayView1;
use scirs2_core::numeric::{Float, Num};
use std::time::Instant;

/// Performance timing result for kernel operations
#[derive(Debug, Clone)]
pub struct TimingResult {
    /// Operation name
    pub operation: String,
    /// Elapsed time in milliseconds
    pub elapsed_ms: f64,
    /// Throughput in Gelem/s (if applicable)
    pub throughput_gelem_s: Option<f64>,
    /// Number of elements processed
    pub elements: usize,
}

impl TimingResult {
    /// Create a new timing result
    pub fn new(operation: impl Into<String>, elapsed_ms: f64, elements: usize) -> Self {
        let throughput_gelem_s = if elapsed_ms > 0.0 {
            Some((elements as f64) / (elapsed_ms * 1e6))
        } else {
            None
        };

        TimingResult {
            operation: operation.into(),
            elapsed_ms,
            throughput_gelem_s,
            elements,
        }
    }

    /// Print timing result in a human-readable format
    pub fn print(&self) {
        print!("{}: {:.3} ms", self.operation, self.elapsed_ms);
        if let Some(throughput) = self.throughput_gelem_s {
            print!(" ({:.2} Gelem/s)", throughput);
        }
        println!();
    }
}

/// Time a kernel operation and return the result with timing information
///
/// # Examples
///
/// ```
/// use kronvec_kernels::{kron_apply, time_operation};
/// use scirs2_core::ndarray_ext::{Array1, Array2};
///
/// let factor = Array2::<f64>::eye(4);
/// let input = Array1::from_vec(vec![1.0; 4]);
///
/// let (result, timing) = time_operation("kron_apply", || {
///     kron_apply(&[factor.view()], &input.view()).unwrap()
/// });
///
/// assert_eq!(result.len(), 4);
/// assert!(timing.elapsed_ms >= 0.0);
/// ```
pub fn time_operation<F, T>(name: impl Into<String>, op: F) -> (T, TimingResult)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = op();
    let elapsed = start.elapsed();
    let elapsed_ms = elapsed.as_secs_f64() * 1000.0;

    let timing = TimingResult {
        operation: name.into(),
        elapsed_ms,
        throughput_gelem_s: None,
        elements: 0,
    };

    (result, timing)
}

/// Multiply-accumulate count of one contraction sweep:
/// `sum_s L * sizes[s]` with `L = prod(sizes)`.
///
/// Returns `None` if any intermediate product overflows. Feeds throughput
/// reporting in [`TimingResult::new`] and criterion benches.
///
/// # Examples
///
/// ```
/// use kronvec_kernels::sweep_element_ops;
///
/// // L = 16, two modes of size 4: 16*4 + 16*4 = 128
/// assert_eq!(sweep_element_ops(&[4, 4]), Some(128));
/// assert_eq!(sweep_element_ops(&[]), Some(0));
/// ```
pub fn sweep_element_ops(sizes: &[usize]) -> Option<usize> {
    let mut len = 1usize;
    for &n in sizes {
        len = len.checked_mul(n)?;
    }

    let mut ops = 0usize;
    for &n in sizes {
        ops = ops.checked_add(len.checked_mul(n)?)?;
    }
    Some(ops)
}

/// Largest absolute elementwise difference between two vectors.
///
/// Returns infinity if the lengths differ.
///
/// # Examples
///
/// ```
/// use kronvec_kernels::max_abs_diff;
/// use scirs2_core::ndarray_ext::Array1;
///
/// let a = Array1::from_vec(vec![1.0f64, 2.0, 3.0]);
/// let b = Array1::from_vec(vec![1.0, 2.5, 3.0]);
/// assert!((max_abs_diff(&a.view(), &b.view()) - 0.5).abs() < 1e-12);
/// ```
pub fn max_abs_diff<T>(a: &ArrayView1<T>, b: &ArrayView1<T>) -> T
where
    T: Clone + Num + Float,
{
    if a.len() != b.len() {
        return T::infinity();
    }

    let mut max = T::zero();
    for (a_val, b_val) in a.iter().zip(b.iter()) {
        let diff = (*a_val - *b_val).abs();
        if diff > max {
            max = diff;
        }
    }
    max
}

/// Check if two vectors are approximately equal within a tolerance
///
/// # Examples
///
/// ```
/// use kronvec_kernels::approx_equal_vec;
/// use scirs2_core::ndarray_ext::Array1;
///
/// let a = Array1::from_vec(vec![1.0, 2.0]);
/// let b = Array1::from_vec(vec![1.0 + 1e-11, 2.0]);
/// assert!(approx_equal_vec(&a.view(), &b.view(), 1e-10));
/// assert!(!approx_equal_vec(&a.view(), &b.view(), 1e-12));
/// ```
pub fn approx_equal_vec<T>(a: &ArrayView1<T>, b: &ArrayView1<T>, tol: T) -> bool
where
    T: Clone + Num + Float,
{
    a.len() == b.len() && max_abs_diff(a, b) <= tol
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::Array1;

    #[test]
    fn test_timing_result_new() {
        let result = TimingResult::new("sweep", 100.0, 1_000_000);
        assert_eq!(result.operation, "sweep");
        assert_eq!(result.elapsed_ms, 100.0);
        assert_eq!(result.elements, 1_000_000);
        assert!(result.throughput_gelem_s.is_some());
    }

    #[test]
    fn test_time_operation() {
        let (result, timing) = time_operation("add", || 2 + 2);
        assert_eq!(result, 4);
        assert!(timing.elapsed_ms >= 0.0);
    }

    #[test]
    fn test_sweep_element_ops() {
        // L = 32: 32*4 + 32*8 = 384
        assert_eq!(sweep_element_ops(&[4, 8]), Some(384));
        assert_eq!(sweep_element_ops(&[2]), Some(4));
    }

    #[test]
    fn test_sweep_element_ops_overflow() {
        assert_eq!(sweep_element_ops(&[usize::MAX, 2]), None);
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Array1::from_vec(vec![1.0, 2.0, 3.0]);
        let b = Array1::from_vec(vec![1.5, 2.0, 2.0]);
        assert!((max_abs_diff(&a.view(), &b.view()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_max_abs_diff_length_mismatch() {
        let a = Array1::from_vec(vec![1.0, 2.0]);
        let b = Array1::from_vec(vec![1.0]);
        assert!(max_abs_diff(&a.view(), &b.view()).is_infinite());
    }

    #[test]
    fn test_approx_equal_vec() {
        let a = Array1::from_vec(vec![1.0, 2.0]);
        let b = Array1::from_vec(vec![1.0 + 1e-11, 2.0]);
        assert!(approx_equal_vec(&a.view(), &b.view(), 1e-10));
        assert!(!approx_equal_vec(&a.view(), &b.view(), 1e-12));
    }
}
