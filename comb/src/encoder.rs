//! Scalar encoding: a zero-extended, bit-addressable view sized to the comb.

use num_bigint::BigUint;

use crate::errors::CombError;
use crate::geometry::CombGeometry;

/// A scalar encoded as a fixed-width bit vector of length `full_comb`.
///
/// Bits below the scalar's bit length are its binary digits; all higher
/// bits up to `full_comb` are zero padding. Bits are packed into `u64`
/// words, least significant first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedScalar {
    words: Vec<u64>,
    full_comb: usize,
}

impl EncodedScalar {
    /// Encode a non-negative scalar for the given geometry.
    ///
    /// Fails with [`CombError::UnsupportedScalarRange`] when the scalar's
    /// bit length exceeds the comb capacity.
    pub fn encode(k: &BigUint, geometry: &CombGeometry) -> Result<Self, CombError> {
        let bits = k.bits();
        if bits > geometry.size as u64 {
            return Err(CombError::UnsupportedScalarRange {
                bits,
                capacity: geometry.size,
            });
        }

        let mut words = vec![0u64; geometry.full_comb.div_ceil(64)];
        let digits = k.to_u64_digits();
        words[..digits.len()].copy_from_slice(&digits);

        Ok(EncodedScalar {
            words,
            full_comb: geometry.full_comb,
        })
    }

    /// The padded bit length.
    #[inline]
    pub fn full_comb(&self) -> usize {
        self.full_comb
    }

    /// Bit at position `j`, as 0 or 1.
    #[inline]
    pub fn bit(&self, j: usize) -> u64 {
        debug_assert!(j < self.full_comb);
        (self.words[j >> 6] >> (j & 63)) & 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_scalar_bits() {
        let geometry = CombGeometry::new(256, 5);
        let k = BigUint::parse_bytes(b"0123456789abcdef0123456789abcdef", 16).unwrap();
        let encoded = EncodedScalar::encode(&k, &geometry).unwrap();

        assert_eq!(encoded.full_comb(), 260);
        for j in 0..encoded.full_comb() {
            assert_eq!(encoded.bit(j), u64::from(k.bit(j as u64)), "bit {j}");
        }
    }

    #[test]
    fn test_encode_zero() {
        let geometry = CombGeometry::new(16, 3);
        let encoded = EncodedScalar::encode(&BigUint::from(0u32), &geometry).unwrap();
        for j in 0..encoded.full_comb() {
            assert_eq!(encoded.bit(j), 0);
        }
    }

    #[test]
    fn test_encode_rejects_oversized_scalar() {
        let geometry = CombGeometry::new(16, 4);
        let k = BigUint::from(1u32) << 16usize;
        let err = EncodedScalar::encode(&k, &geometry).unwrap_err();
        assert_eq!(
            err,
            CombError::UnsupportedScalarRange {
                bits: 17,
                capacity: 16,
            }
        );
    }

    #[test]
    fn test_encode_accepts_full_capacity() {
        let geometry = CombGeometry::new(16, 4);
        let k = (BigUint::from(1u32) << 16usize) - BigUint::from(1u32);
        let encoded = EncodedScalar::encode(&k, &geometry).unwrap();
        for j in 0..16 {
            assert_eq!(encoded.bit(j), 1);
        }
    }
}
