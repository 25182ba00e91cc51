//! Error types for fixed-point comb multiplication.

use core::fmt;

/// Errors that can occur while multiplying by a fixed point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombError {
    /// The scalar's bit length exceeds the comb capacity.
    ///
    /// The comb has no mechanism to fold overflow bits back in, so this
    /// is never silently truncated. Callers needing larger scalars must
    /// reduce them modulo the group order first.
    UnsupportedScalarRange {
        /// Bit length of the rejected scalar.
        bits: u64,
        /// Supported capacity in bits, derived from the group order.
        capacity: usize,
    },
    /// The precomputed table violates the contract the multiplier depends
    /// on, e.g. it reports a window width outside the supported range.
    ///
    /// This is a programming-contract violation in the table builder, not
    /// a recoverable condition; it is never retried.
    InvalidTableState(String),
}

impl fmt::Display for CombError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombError::UnsupportedScalarRange { bits, capacity } => write!(
                f,
                "scalar of {bits} bits exceeds the comb capacity of {capacity} bits"
            ),
            CombError::InvalidTableState(reason) => {
                write!(f, "invalid precomputed table state: {reason}")
            }
        }
    }
}

impl std::error::Error for CombError {}
