//! Per-round table index derivation.

use crate::encoder::EncodedScalar;
use crate::geometry::CombGeometry;

/// Derive the lookup index for a comb round (1-indexed).
///
/// Tooth `t` of round `i` reads the encoded-scalar bit at position
/// `full_comb - i - t * rounds`; tooth 0 contributes the most significant
/// index bit. The stride of `rounds` bits between teeth is load-bearing:
/// it is what lets one small table cover the whole scalar range, and the
/// precomputed entries are combined for exactly this layout.
pub fn comb_index(encoded: &EncodedScalar, round: usize, geometry: &CombGeometry) -> usize {
    debug_assert!(round >= 1 && round <= geometry.rounds);
    debug_assert_eq!(encoded.full_comb(), geometry.full_comb);

    let mut index = 0usize;
    for tooth in 0..geometry.width {
        let pos = geometry.full_comb - round - tooth * geometry.rounds;
        index = (index << 1) | encoded.bit(pos) as usize;
    }
    index
}
