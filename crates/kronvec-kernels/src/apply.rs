//! Kronecker-product apply: the mode-major contraction sweep.
//!
//! Computes `y = x^T (A_0 ⊗ A_1 ⊗ … ⊗ A_{N-1})` for square factors `A_s`
//! without ever materializing the Kronecker product. The flat index of the
//! length-`L` vector (`L = prod(sizes)`) is treated as a mixed-radix number
//! with digits `sizes[0], …, sizes[N-1]`; the sweep contracts one digit per
//! step, from mode `N-1` down to mode `0`, holding the other digits as batch
//! dimensions. Time is `O(sum_s L * sizes[s])` and extra space `O(L)`,
//! against `O(L^2)` for the dense product.
//!
//! # Convention
//!
//! Each mode reads its factor transposed: the accumulation is
//! `v[k] += factors[s][[i, j]] * u[..]` with `j` the output position and `i`
//! the summation index, so every factor is applied from the right
//! (row-vector convention). Equivalently, in column convention the sweep
//! computes `(A_0 ⊗ … ⊗ A_{N-1})^T x`. The dense oracle in
//! [`crate::dense`] uses the same convention.
//!
//! # Buffers
//!
//! The sweep ping-pongs between the two slots of a [`PingPong`] arena
//! instead of swapping raw pointers: each mode reads one slot and writes the
//! other, and the returned [`Slot`] tag names the slot holding the result.
//! The number of role exchanges equals the number of modes, so the result
//! lands in [`Slot::A`] (the input slot) for even N and [`Slot::B`] for
//! odd N. The non-returned slot is scratch and holds no meaningful data.

use scirs2_core::ndarray_ext::{Array1, ArrayView1, ArrayView2};
use scirs2_core::numeric::Num;

use kronvec_core::{checked_vector_len, KronError, KronResult};

/// Tag naming which arena slot holds valid data after a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The slot loaded with the input vector.
    A,
    /// The scratch slot.
    B,
}

impl Slot {
    /// The opposite slot.
    pub fn other(self) -> Slot {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }
}

/// Two equal-length buffers whose roles alternate during a sweep.
///
/// Owns both slots outright; they never alias. Construction is fallible so
/// an oversized problem surfaces as [`KronError::OutOfMemory`] instead of
/// aborting.
///
/// # Examples
///
/// ```
/// use kronvec_kernels::{PingPong, Slot};
/// use scirs2_core::ndarray_ext::Array1;
///
/// let input = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
/// let buffers = PingPong::for_input(&input.view()).unwrap();
/// assert_eq!(buffers.len(), 4);
/// assert_eq!(buffers.slot(Slot::A), &[1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone)]
pub struct PingPong<T> {
    a: Vec<T>,
    b: Vec<T>,
}

impl<T> PingPong<T>
where
    T: Clone + Num,
{
    /// Arena with both slots zeroed, each of length `len`.
    ///
    /// # Errors
    ///
    /// [`KronError::OutOfMemory`] if either allocation fails.
    pub fn with_len(len: usize) -> KronResult<Self> {
        Ok(Self {
            a: alloc_zeroed(len)?,
            b: alloc_zeroed(len)?,
        })
    }

    /// Arena with slot A holding a copy of `input` and slot B zeroed.
    ///
    /// # Errors
    ///
    /// [`KronError::OutOfMemory`] if either allocation fails.
    pub fn for_input(input: &ArrayView1<T>) -> KronResult<Self> {
        let mut buffers = Self::with_len(input.len())?;
        buffers.load(input)?;
        Ok(buffers)
    }

    /// Length of each slot.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Borrow one slot.
    pub fn slot(&self, slot: Slot) -> &[T] {
        match slot {
            Slot::A => &self.a,
            Slot::B => &self.b,
        }
    }

    /// Copy `input` into slot A, reusing the arena for another sweep.
    ///
    /// # Errors
    ///
    /// [`KronError::InvalidDimension`] if `input.len()` differs from the
    /// arena length.
    pub fn load(&mut self, input: &ArrayView1<T>) -> KronResult<()> {
        if input.len() != self.a.len() {
            return Err(KronError::invalid_dimension(
                "ping_pong",
                vec![self.a.len()],
                vec![input.len()],
                "input vector length must equal the arena length",
            ));
        }
        for (dst, src) in self.a.iter_mut().zip(input.iter()) {
            *dst = src.clone();
        }
        Ok(())
    }

    /// Consume the arena and take one slot as an owned vector.
    pub fn take(self, slot: Slot) -> Vec<T> {
        match slot {
            Slot::A => self.a,
            Slot::B => self.b,
        }
    }
}

fn alloc_zeroed<T>(len: usize) -> KronResult<Vec<T>>
where
    T: Clone + Num,
{
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| KronError::out_of_memory("ping_pong", len))?;
    buf.resize(len, T::zero());
    Ok(buf)
}

/// Run the contraction sweep over a preloaded arena.
///
/// On entry slot A must hold the input vector (see [`PingPong::for_input`]
/// and [`PingPong::load`]). The sweep allocates nothing and returns the tag
/// of the slot holding the result: [`Slot::A`] for an even number of modes,
/// [`Slot::B`] for an odd number. An empty factor list is the identity and
/// returns [`Slot::A`] with the arena untouched.
///
/// # Errors
///
/// * [`KronError::InvalidDimension`] if any factor is empty or non-square,
///   or the arena length differs from the product of the factor sizes
/// * [`KronError::Overflow`] if the product of the factor sizes overflows
///
/// # Examples
///
/// ```
/// use kronvec_kernels::{kron_apply_inplace, PingPong, Slot};
/// use scirs2_core::ndarray_ext::{array, Array1};
///
/// let a0 = array![[1.0, 0.0], [0.0, 2.0]];
/// let a1 = array![[0.0, 1.0], [1.0, 0.0]];
/// let input = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
///
/// let mut buffers = PingPong::for_input(&input.view()).unwrap();
/// let slot = kron_apply_inplace(&[a0.view(), a1.view()], &mut buffers).unwrap();
///
/// assert_eq!(slot, Slot::A); // two modes: even
/// assert_eq!(buffers.slot(slot), &[2.0, 1.0, 8.0, 6.0]);
/// ```
pub fn kron_apply_inplace<T>(
    factors: &[ArrayView2<T>],
    buffers: &mut PingPong<T>,
) -> KronResult<Slot>
where
    T: Clone + Num,
{
    if factors.is_empty() {
        return Ok(Slot::A);
    }

    let mut sizes = Vec::with_capacity(factors.len());
    for (s, factor) in factors.iter().enumerate() {
        let rows = factor.shape()[0];
        let cols = factor.shape()[1];
        if rows == 0 || rows != cols {
            return Err(KronError::invalid_dimension(
                "kron_apply",
                vec![rows.max(1), rows.max(1)],
                vec![rows, cols],
                format!("factor {} must be square and nonempty", s),
            ));
        }
        sizes.push(rows);
    }

    let len = checked_vector_len("kron_apply", &sizes)?;
    if buffers.len() != len {
        return Err(KronError::invalid_dimension(
            "kron_apply",
            vec![len],
            vec![buffers.len()],
            "arena length must equal the product of the factor sizes",
        ));
    }

    // r is the stride of the modes contracted so far, rem the number of
    // outer blocks still carrying uncontracted digits. The invariant
    // rem * sizes[s] * r == len holds at the top of every iteration.
    // src names the slot read by the current mode; it flips once per mode,
    // so after the loop it names the slot the last mode wrote.
    let mut src = Slot::A;
    let mut r = 1usize;
    let mut rem = len;

    for s in (0..factors.len()).rev() {
        let n = sizes[s];
        let factor = &factors[s];
        rem /= n;

        let (u, v) = match src {
            Slot::A => (&buffers.a[..], &mut buffers.b[..]),
            Slot::B => (&buffers.b[..], &mut buffers.a[..]),
        };

        for block in 0..rem {
            let t = block * n * r;
            for j in 0..n {
                for offset in 0..r {
                    let k = t + j * r + offset;
                    let mut acc = T::zero();
                    for i in 0..n {
                        // Transposed factor access: j is the output
                        // position, i the summation index.
                        acc = acc + factor[[i, j]].clone() * u[t + i * r + offset].clone();
                    }
                    v[k] = acc;
                }
            }
        }

        src = src.other();
        r *= n;
    }

    Ok(src)
}

/// Apply the Kronecker product of `factors` to `input`, returning an owned
/// result vector.
///
/// Convenience wrapper around [`kron_apply_inplace`]: builds the arena,
/// runs the sweep once, and takes the live slot. For repeated sweeps over
/// the same shapes, reuse an arena with [`PingPong::load`] instead.
///
/// # Errors
///
/// Same as [`kron_apply_inplace`], plus [`KronError::OutOfMemory`] if the
/// arena allocation fails.
///
/// # Examples
///
/// ```
/// use kronvec_kernels::kron_apply;
/// use scirs2_core::ndarray_ext::{array, Array1};
///
/// let a0 = array![[1.0, 0.0], [0.0, 2.0]];
/// let a1 = array![[0.0, 1.0], [1.0, 0.0]];
/// let input = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
///
/// let result = kron_apply(&[a0.view(), a1.view()], &input.view()).unwrap();
/// assert_eq!(result, Array1::from_vec(vec![2.0, 1.0, 8.0, 6.0]));
/// ```
pub fn kron_apply<T>(factors: &[ArrayView2<T>], input: &ArrayView1<T>) -> KronResult<Array1<T>>
where
    T: Clone + Num,
{
    let mut buffers = PingPong::for_input(input)?;
    let slot = kron_apply_inplace(factors, &mut buffers)?;
    Ok(Array1::from_vec(buffers.take(slot)))
}
