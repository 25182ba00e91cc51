//! Random scalar sampling.

use num_bigint::BigUint;
use rand::Rng;

use crate::params::CurveParams;

/// Sample a uniform scalar in `[0, order)` by rejection sampling.
///
/// The top byte is masked down to the order's bit length, so the expected
/// number of rounds is below two.
pub fn random_scalar<R: Rng + ?Sized>(curve: &CurveParams, rng: &mut R) -> BigUint {
    let bits = curve.order_bits();
    let bytes = bits.div_ceil(8);
    let excess = bytes * 8 - bits;

    loop {
        let mut buf = vec![0u8; bytes];
        rng.fill_bytes(&mut buf);
        buf[0] &= 0xff >> excess;

        let k = BigUint::from_bytes_be(&buf);
        if k < curve.order {
            return k;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{secp256k1, secp256r1};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_scalar_below_order() {
        let mut rng = StdRng::seed_from_u64(42);
        for curve in [secp256r1(), secp256k1()] {
            for _ in 0..32 {
                let k = random_scalar(curve, &mut rng);
                assert!(k < curve.order);
            }
        }
    }

    #[test]
    fn test_random_scalar_varies() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = random_scalar(secp256r1(), &mut rng);
        let b = random_scalar(secp256r1(), &mut rng);
        assert_ne!(a, b);
    }
}
