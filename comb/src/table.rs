//! The precomputed-table contract and its construction.

use curve::Affine;
use num_bigint::BigUint;
use num_traits::One;

use crate::errors::CombError;
use crate::geometry::{comb_capacity, CombGeometry};

/// Largest supported window width. Table size doubles per width step.
pub const MAX_WIDTH: usize = 8;

/// The lookup/offset capability the comb multiplier consumes.
///
/// Implementations must keep `lookup` a pure function and must satisfy,
/// together with `offset`, the accumulation identity: after `rounds`
/// double-then-add steps over the comb indices of any in-range scalar
/// `k`, adding `offset` once yields exactly `k * P`.
pub trait CombTable {
    /// Window width the table was built for.
    fn width(&self) -> usize;

    /// The precombined point for a `width`-bit index.
    fn lookup(&self, index: usize) -> Affine;

    /// Fixed correction point, added exactly once after all rounds.
    fn offset(&self) -> Affine;
}

/// Precomputed comb table for one fixed base point.
///
/// Entries are recentered signed-digit combinations: every padded scalar
/// bit `b` is treated as the digit `2b - 1`, so each tooth always
/// contributes either `+B_s` or `-B_s` where `B_s = 2^(rounds*s) * H`
/// and `H` is the halved base point. The offset restores the recentering
/// bias, `(2^full_comb - 1) * H`, making the accumulated value equal the
/// true scalar product for every scalar in range. Per-round work is the
/// same for every index value; there is no zero-index special case.
///
/// Expensive to build; intended to be cached and shared (it is never
/// mutated after construction).
pub struct PrecomputedCombTable {
    entries: Vec<Affine>,
    width: usize,
    offset: Affine,
}

impl PrecomputedCombTable {
    /// Build the table for a fixed point with the given window width.
    pub fn build(point: &Affine, width: usize) -> Result<Self, CombError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(CombError::InvalidTableState(format!(
                "window width {width} outside 1..={MAX_WIDTH}"
            )));
        }

        let curve = point.curve();
        let geometry = CombGeometry::new(comb_capacity(curve), width);

        // Halved base: H = ((order + 1) / 2) * P, so that 2H = P.
        let half = (&curve.order + BigUint::one()) >> 1;
        let base = point.scalar_mul(&half);

        // B_s = 2^(rounds * s) * H for index bit s, plus the doubled
        // points used to flip a digit from -B_s to +B_s.
        let mut pow2 = Vec::with_capacity(width);
        let mut acc = base.clone();
        for s in 0..width {
            pow2.push(acc.clone());
            if s + 1 < width {
                for _ in 0..geometry.rounds {
                    acc = acc.double();
                }
            }
        }
        let twice: Vec<Affine> = pow2.iter().map(|b| b.double()).collect();

        // Entry 0 has every digit -1; each further entry flips the lowest
        // set bit of its index relative to an already-computed entry.
        let count = 1usize << width;
        let mut entries = Vec::with_capacity(count);
        let mut all_negative = Affine::infinity(curve);
        for b in &pow2 {
            all_negative = all_negative + b.clone();
        }
        entries.push(all_negative.negate());
        for index in 1..count {
            let s = index.trailing_zeros() as usize;
            let previous = index & (index - 1);
            entries.push(&entries[previous] + &twice[s]);
        }

        // Offset: (2^full_comb - 1) * H.
        let bias = (BigUint::one() << geometry.full_comb) - BigUint::one();
        let offset = base.scalar_mul(&bias);

        Ok(PrecomputedCombTable {
            entries,
            width,
            offset,
        })
    }
}

impl CombTable for PrecomputedCombTable {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn lookup(&self, index: usize) -> Affine {
        debug_assert!(index < self.entries.len());
        self.entries[index].clone()
    }

    #[inline]
    fn offset(&self) -> Affine {
        self.offset.clone()
    }
}
