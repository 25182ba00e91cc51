//! The fixed-point comb multiplier.

use curve::Affine;
use num_bigint::BigUint;

use crate::cache::CombTableCache;
use crate::encoder::EncodedScalar;
use crate::errors::CombError;
use crate::geometry::{comb_capacity, CombGeometry};
use crate::indexer::comb_index;
use crate::table::{CombTable, MAX_WIDTH};

/// Scalar multiplier for fixed base points, using a cached comb table.
///
/// The cost of one multiplication is exactly `rounds` double-then-add
/// steps plus one final offset addition, independent of the scalar's
/// value: round count and per-round work never branch on secret bits.
/// The lookup index itself is still secret-dependent, so a hardened
/// deployment must pair this with a constant-time table lookup; that is
/// the table implementation's concern, not the multiplier's.
pub struct FixedPointCombMultiplier {
    cache: CombTableCache,
    width: Option<usize>,
}

impl FixedPointCombMultiplier {
    /// Create a multiplier using the default width policy: 6 for
    /// capacities above 250 bits, otherwise 5.
    pub fn new() -> Self {
        FixedPointCombMultiplier {
            cache: CombTableCache::new(),
            width: None,
        }
    }

    /// Create a multiplier with an explicit window width.
    pub fn with_width(width: usize) -> Self {
        FixedPointCombMultiplier {
            cache: CombTableCache::new(),
            width: Some(width),
        }
    }

    fn window_width(&self, capacity: usize) -> usize {
        self.width.unwrap_or(if capacity > 250 { 6 } else { 5 })
    }

    /// Multiply a fixed point by a scalar: `k * P`.
    ///
    /// The table for `P` is fetched from the cache, or built and cached
    /// on first use. Fails with [`CombError::UnsupportedScalarRange`]
    /// when `k` has more bits than the comb capacity
    /// ([`comb_capacity`]); callers must reduce such scalars modulo the
    /// group order before retrying.
    pub fn multiply(&self, k: &BigUint, point: &Affine) -> Result<Affine, CombError> {
        let capacity = comb_capacity(point.curve());
        if k.bits() > capacity as u64 {
            return Err(CombError::UnsupportedScalarRange {
                bits: k.bits(),
                capacity,
            });
        }

        let width = self.window_width(capacity);
        let table = self.cache.get_or_build(point, width)?;
        multiply_with_table(k, point, table.as_ref())
    }

    /// Number of distinct fixed points with a cached table.
    pub fn cached_tables(&self) -> usize {
        self.cache.len()
    }

    /// Total number of table builds performed by this multiplier.
    pub fn builds(&self) -> usize {
        self.cache.builds()
    }
}

impl Default for FixedPointCombMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

/// Multiply using a caller-supplied table for `point`.
///
/// The accumulator starts at infinity, performs one double-then-add per
/// round with the table entry selected by that round's comb index, and
/// finishes with a single offset addition.
pub fn multiply_with_table(
    k: &BigUint,
    point: &Affine,
    table: &dyn CombTable,
) -> Result<Affine, CombError> {
    let curve = point.curve();
    let width = table.width();
    if width == 0 || width > MAX_WIDTH {
        return Err(CombError::InvalidTableState(format!(
            "table reports window width {width} outside 1..={MAX_WIDTH}"
        )));
    }

    let geometry = CombGeometry::new(comb_capacity(curve), width);
    let encoded = EncodedScalar::encode(k, &geometry)?;

    let mut r = Affine::infinity(curve);
    for round in 1..=geometry.rounds {
        let index = comb_index(&encoded, round, &geometry);
        let add = table.lookup(index);
        r = r.twice_add(&add);
    }

    Ok(r + table.offset())
}
