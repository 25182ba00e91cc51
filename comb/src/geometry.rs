//! Comb geometry: how a scalar's bits are split into rounds and teeth.

use curve::CurveParams;
use serde::{Deserialize, Serialize};

/// Geometry of a fixed-point comb for a given capacity and window width.
///
/// A comb of `width` teeth splits a `size`-bit scalar into `rounds`
/// rounds; each round reads one bit from each tooth, and teeth of the
/// same round are spaced `rounds` bits apart. The padded bit length is
/// `full_comb = rounds * width >= size`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombGeometry {
    /// Supported scalar bit length (the comb capacity).
    pub size: usize,
    /// Window width: teeth per round.
    pub width: usize,
    /// Number of comb rounds, `ceil(size / width)`.
    pub rounds: usize,
    /// Padded bit length, `rounds * width`.
    pub full_comb: usize,
}

impl CombGeometry {
    /// Derive the geometry for a capacity and window width.
    pub fn new(size: usize, width: usize) -> Self {
        debug_assert!(width >= 1, "window width must be at least 1");
        let rounds = size.div_ceil(width);
        CombGeometry {
            size,
            width,
            rounds,
            full_comb: rounds * width,
        }
    }
}

/// The scalar bit length supported by a comb over this curve, derived
/// from the bit length of the group order.
#[inline]
pub fn comb_capacity(curve: &CurveParams) -> usize {
    curve.order_bits()
}
