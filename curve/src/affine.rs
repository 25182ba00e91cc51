//! Affine points on a short Weierstrass curve.

use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;
use num_traits::Zero;

use crate::field::{add_mod, inv_mod, mul_mod, sub_mod};
use crate::params::CurveParams;

/// Affine point on a short Weierstrass curve.
///
/// Represents a point in affine coordinates `(x, y)` or the point at
/// infinity (the group identity). The curve is carried as a `&'static`
/// parameter set; points on different curves never compare equal and
/// must not be mixed in group operations.
#[derive(Clone)]
pub struct Affine {
    curve: &'static CurveParams,
    /// `None` encodes the point at infinity.
    coords: Option<(BigUint, BigUint)>,
}

impl Affine {
    /// Create a point from reduced coordinates.
    pub fn new(curve: &'static CurveParams, x: BigUint, y: BigUint) -> Self {
        Affine {
            curve,
            coords: Some((x, y)),
        }
    }

    /// The point at infinity (identity element).
    pub fn infinity(curve: &'static CurveParams) -> Self {
        Affine {
            curve,
            coords: None,
        }
    }

    /// The curve generator.
    pub fn generator(curve: &'static CurveParams) -> Self {
        Affine::new(curve, curve.gx.clone(), curve.gy.clone())
    }

    /// The curve this point belongs to.
    #[inline]
    pub fn curve(&self) -> &'static CurveParams {
        self.curve
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.coords.is_none()
    }

    /// Affine coordinates, or `None` for the point at infinity.
    #[inline]
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        self.coords.as_ref().map(|(x, y)| (x, y))
    }

    /// Check if the point satisfies `y^2 = x^3 + a*x + b`.
    pub fn is_on_curve(&self) -> bool {
        let Some((x, y)) = &self.coords else {
            return true;
        };
        let p = &self.curve.p;

        let y2 = mul_mod(y, y, p);
        let x2 = mul_mod(x, x, p);
        let x3 = mul_mod(&x2, x, p);
        let ax = mul_mod(&self.curve.a, x, p);
        let rhs = add_mod(&add_mod(&x3, &ax, p), &self.curve.b, p);

        y2 == rhs
    }

    /// Point doubling: `2*P`.
    pub fn double(&self) -> Self {
        let Some((x, y)) = &self.coords else {
            return self.clone();
        };

        // If y = 0, then 2P = O
        if y.is_zero() {
            return Self::infinity(self.curve);
        }

        let p = &self.curve.p;

        // λ = (3x^2 + a) / (2y)
        let x2 = mul_mod(x, x, p);
        let three_x2 = add_mod(&add_mod(&x2, &x2, p), &x2, p);
        let numerator = add_mod(&three_x2, &self.curve.a, p);
        let denominator = add_mod(y, y, p);
        let inv = inv_mod(&denominator, p).expect("nonzero denominator");
        let lambda = mul_mod(&numerator, &inv, p);

        // x_r = λ^2 - 2x
        let lambda2 = mul_mod(&lambda, &lambda, p);
        let x_r = sub_mod(&sub_mod(&lambda2, x, p), x, p);

        // y_r = λ(x - x_r) - y
        let y_r = sub_mod(&mul_mod(&lambda, &sub_mod(x, &x_r, p), p), y, p);

        Affine::new(self.curve, x_r, y_r)
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        let Some((x, y)) = &self.coords else {
            return self.clone();
        };
        let neg_y = sub_mod(&BigUint::zero(), y, &self.curve.p);
        Affine::new(self.curve, x.clone(), neg_y)
    }

    /// Combined "double then add" step: `2*P + addend`.
    pub fn twice_add(&self, addend: &Affine) -> Self {
        self.double().add_point(addend)
    }

    /// Naive double-and-add scalar multiplication.
    ///
    /// Reference multiplier: accepts any non-negative scalar, with no
    /// capacity bound and no precomputation.
    pub fn scalar_mul(&self, k: &BigUint) -> Self {
        let mut result = Self::infinity(self.curve);
        let mut temp = self.clone();

        for j in 0..k.bits() {
            if k.bit(j) {
                result = result.add_point(&temp);
            }
            temp = temp.double();
        }

        result
    }

    /// Multiply by a small scalar.
    pub fn mul_u64(&self, n: u64) -> Self {
        self.scalar_mul(&BigUint::from(n))
    }

    fn add_point(&self, other: &Affine) -> Self {
        assert!(
            std::ptr::eq(self.curve, other.curve),
            "points on different curves"
        );

        let Some((x1, y1)) = &self.coords else {
            return other.clone();
        };
        let Some((x2, y2)) = &other.coords else {
            return self.clone();
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double();
            }
            // Points are inverses
            return Self::infinity(self.curve);
        }

        let p = &self.curve.p;

        // λ = (y2 - y1) / (x2 - x1)
        let numerator = sub_mod(y2, y1, p);
        let denominator = sub_mod(x2, x1, p);
        let inv = inv_mod(&denominator, p).expect("nonzero denominator");
        let lambda = mul_mod(&numerator, &inv, p);

        // x_r = λ^2 - x1 - x2
        let lambda2 = mul_mod(&lambda, &lambda, p);
        let x_r = sub_mod(&sub_mod(&lambda2, x1, p), x2, p);

        // y_r = λ(x1 - x_r) - y1
        let y_r = sub_mod(&mul_mod(&lambda, &sub_mod(x1, &x_r, p), p), y1, p);

        Affine::new(self.curve, x_r, y_r)
    }
}

impl PartialEq for Affine {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.curve, other.curve) && self.coords == other.coords
    }
}

impl Eq for Affine {}

impl fmt::Debug for Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coords {
            None => write!(f, "Affine({}, infinity)", self.curve.name),
            Some((x, y)) => write!(f, "Affine({}, x={:x}, y={:x})", self.curve.name, x, y),
        }
    }
}

impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.add_point(&other)
    }
}

impl Add<&Affine> for &Affine {
    type Output = Affine;

    fn add(self, other: &Affine) -> Affine {
        self.add_point(other)
    }
}

impl AddAssign for Affine {
    fn add_assign(&mut self, other: Self) {
        *self = self.add_point(&other);
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.add_point(&other.negate())
    }
}

impl SubAssign for Affine {
    fn sub_assign(&mut self, other: Self) {
        *self = self.add_point(&other.negate());
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{secp256k1, secp256r1};

    #[test]
    fn test_infinity() {
        let inf = Affine::infinity(secp256r1());
        assert!(inf.is_infinity());
        assert!(inf.is_on_curve());
    }

    #[test]
    fn test_generator_on_curve() {
        for curve in [secp256r1(), secp256k1()] {
            let g = Affine::generator(curve);
            assert!(g.is_on_curve(), "generator of {} not on curve", curve.name);
            assert!(!g.is_infinity());
        }
    }

    #[test]
    fn test_point_addition_with_infinity() {
        let g = Affine::generator(secp256r1());
        let inf = Affine::infinity(secp256r1());

        assert_eq!(g.clone() + inf.clone(), g);
        assert_eq!(inf.clone() + g.clone(), g);
        assert_eq!(inf.clone() + inf.clone(), inf);
    }

    #[test]
    fn test_point_doubling() {
        let g = Affine::generator(secp256r1());
        let g2 = g.double();

        assert!(g2.is_on_curve());
        assert_eq!(&g + &g, g2);
    }

    #[test]
    fn test_point_negation() {
        let g = Affine::generator(secp256k1());
        let neg_g = g.negate();

        assert!(neg_g.is_on_curve());
        assert_eq!(g + neg_g, Affine::infinity(secp256k1()));
    }

    #[test]
    fn test_scalar_mul_small() {
        let g = Affine::generator(secp256r1());
        let result = g.scalar_mul(&BigUint::from(5u32));

        let expected = &(&(&(&g + &g) + &g) + &g) + &g;
        assert_eq!(result, expected);
        assert!(result.is_on_curve());
    }

    #[test]
    fn test_scalar_mul_zero_and_one() {
        let g = Affine::generator(secp256r1());
        assert_eq!(
            g.scalar_mul(&BigUint::from(0u32)),
            Affine::infinity(secp256r1())
        );
        assert_eq!(g.scalar_mul(&BigUint::from(1u32)), g);
    }

    #[test]
    fn test_scalar_mul_distributes_over_addition() {
        let g = Affine::generator(secp256k1());
        let a = BigUint::from(123456u32);
        let b = BigUint::from(654321u32);

        // (a + b) * G = a*G + b*G
        let left = g.scalar_mul(&(&a + &b));
        let right = g.scalar_mul(&a) + g.scalar_mul(&b);
        assert_eq!(left, right);
    }

    #[test]
    fn test_order_times_generator_is_infinity() {
        for curve in [secp256r1(), secp256k1()] {
            let g = Affine::generator(curve);
            let result = g.scalar_mul(&curve.order);
            assert_eq!(result, Affine::infinity(curve), "on {}", curve.name);
        }
    }

    #[test]
    fn test_twice_add() {
        let g = Affine::generator(secp256r1());
        let h = g.mul_u64(7);

        assert_eq!(g.twice_add(&h), g.double() + h.clone());
        assert_eq!(g.twice_add(&h), g.mul_u64(9));
    }

    #[test]
    fn test_mul_u64_matches_scalar_mul() {
        let g = Affine::generator(secp256k1());
        assert_eq!(g.mul_u64(42), g.scalar_mul(&BigUint::from(42u32)));
    }

    #[test]
    #[should_panic(expected = "points on different curves")]
    fn test_mixed_curve_addition_panics() {
        let g = Affine::generator(secp256r1());
        let h = Affine::generator(secp256k1());
        let _ = g + h;
    }
}
