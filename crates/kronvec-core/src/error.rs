//! Error types for KronVec operations
//!
//! This module provides the structured error taxonomy shared by the problem
//! generator and the contraction engine. Every fallible operation in the
//! workspace returns [`KronResult`].

use std::fmt;

/// Error type for problem generation and Kronecker apply operations
#[derive(Debug, Clone, PartialEq)]
pub enum KronError {
    /// A dimension is structurally invalid: a mode size of 0, a non-square
    /// factor, a missing mode, or a vector whose length does not match the
    /// product of the mode sizes.
    InvalidDimension {
        operation: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
        context: String,
    },

    /// The product of the mode sizes exceeds the addressable index range.
    /// Detected with checked multiplication before any buffer is allocated.
    Overflow {
        operation: String,
        sizes: Vec<usize>,
    },

    /// A buffer allocation failed. Surfaced as an error instead of aborting
    /// so callers can shrink the problem and retry.
    OutOfMemory {
        operation: String,
        elements: usize,
    },
}

impl fmt::Display for KronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KronError::InvalidDimension {
                operation,
                expected,
                actual,
                context,
            } => write!(
                f,
                "{}: invalid dimension - expected {:?}, got {:?}. {}",
                operation, expected, actual, context
            ),

            KronError::Overflow { operation, sizes } => write!(
                f,
                "{}: product of mode sizes {:?} overflows usize",
                operation, sizes
            ),

            KronError::OutOfMemory {
                operation,
                elements,
            } => write!(
                f,
                "{}: failed to allocate a buffer of {} elements",
                operation, elements
            ),
        }
    }
}

impl std::error::Error for KronError {}

/// Result type for KronVec operations
pub type KronResult<T> = Result<T, KronError>;

impl KronError {
    /// Create an invalid dimension error
    pub fn invalid_dimension(
        operation: impl Into<String>,
        expected: Vec<usize>,
        actual: Vec<usize>,
        context: impl Into<String>,
    ) -> Self {
        KronError::InvalidDimension {
            operation: operation.into(),
            expected,
            actual,
            context: context.into(),
        }
    }

    /// Create an overflow error for a list of mode sizes
    pub fn overflow(operation: impl Into<String>, sizes: Vec<usize>) -> Self {
        KronError::Overflow {
            operation: operation.into(),
            sizes,
        }
    }

    /// Create an out-of-memory error for an allocation of `elements` elements
    pub fn out_of_memory(operation: impl Into<String>, elements: usize) -> Self {
        KronError::OutOfMemory {
            operation: operation.into(),
            elements,
        }
    }
}
