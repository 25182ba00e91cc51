//! Short Weierstrass elliptic curve groups over named prime fields.
//!
//! This crate provides affine curve points with arbitrary-precision
//! coordinates, domain parameters for secp256r1 and secp256k1, a naive
//! double-and-add reference multiplier, and helpers for random scalar
//! sampling. Points are immutable values; the curve they belong to is a
//! `&'static` parameter set compared by identity.

mod affine;
mod field;
mod params;
mod random;

pub use affine::Affine;
pub use params::{secp256k1, secp256r1, CurveParams};
pub use random::random_scalar;
