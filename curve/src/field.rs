//! Modular arithmetic helpers over an odd prime modulus.
//!
//! All inputs and outputs are reduced residues in `[0, m)`.

use num_bigint::BigUint;
use num_traits::Zero;

/// Add two residues mod `m`.
#[inline]
pub fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let sum = a + b;
    if sum >= *m {
        sum - m
    } else {
        sum
    }
}

/// Subtract two residues mod `m`.
#[inline]
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// Multiply two residues mod `m`.
#[inline]
pub fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// Invert a residue mod `m`. Returns `None` for zero.
#[inline]
pub fn inv_mod(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if a.is_zero() {
        return None;
    }
    a.modinv(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn n(v: u32) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_add_mod_wraps() {
        let m = n(97);
        assert_eq!(add_mod(&n(50), &n(60), &m), n(13));
        assert_eq!(add_mod(&n(10), &n(20), &m), n(30));
    }

    #[test]
    fn test_sub_mod_wraps() {
        let m = n(97);
        assert_eq!(sub_mod(&n(10), &n(20), &m), n(87));
        assert_eq!(sub_mod(&n(20), &n(10), &m), n(10));
        assert_eq!(sub_mod(&n(0), &n(0), &m), n(0));
    }

    #[test]
    fn test_mul_mod() {
        let m = n(97);
        assert_eq!(mul_mod(&n(12), &n(50), &m), n(600 % 97));
    }

    #[test]
    fn test_inv_mod() {
        let m = n(97);
        for v in 1u32..97 {
            let inv = inv_mod(&n(v), &m).expect("nonzero residue");
            assert_eq!(mul_mod(&n(v), &inv, &m), BigUint::one());
        }
        assert_eq!(inv_mod(&n(0), &m), None);
    }
}
