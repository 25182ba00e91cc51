//! Domain parameters for the supported curves.
//!
//! Each parameter set is built once on first use and handed out as a
//! `&'static` reference; points compare their curve by that identity.

use std::sync::OnceLock;

use num_bigint::BigUint;

/// Parameters of a short Weierstrass curve `y^2 = x^3 + a*x + b` over the
/// prime field `GF(p)`, together with a generator of prime order.
#[derive(Debug)]
pub struct CurveParams {
    /// Human-readable curve name.
    pub name: &'static str,
    /// Field modulus.
    pub p: BigUint,
    /// Coefficient `a`.
    pub a: BigUint,
    /// Coefficient `b`.
    pub b: BigUint,
    /// Generator x-coordinate.
    pub gx: BigUint,
    /// Generator y-coordinate.
    pub gy: BigUint,
    /// Order of the generator.
    pub order: BigUint,
}

impl CurveParams {
    /// Bit length of the group order.
    #[inline]
    pub fn order_bits(&self) -> usize {
        self.order.bits() as usize
    }
}

fn hex(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 16).expect("valid hex constant")
}

/// NIST P-256 (secp256r1) parameters.
pub fn secp256r1() -> &'static CurveParams {
    static PARAMS: OnceLock<CurveParams> = OnceLock::new();
    PARAMS.get_or_init(|| CurveParams {
        name: "secp256r1",
        p: hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
        a: hex("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
        b: hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        gx: hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        gy: hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        order: hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
    })
}

/// secp256k1 parameters.
pub fn secp256k1() -> &'static CurveParams {
    static PARAMS: OnceLock<CurveParams> = OnceLock::new();
    PARAMS.get_or_init(|| CurveParams {
        name: "secp256k1",
        p: hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
        a: hex("0"),
        b: hex("7"),
        gx: hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        gy: hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        order: hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
    })
}
