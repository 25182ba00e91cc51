//! Fixed-point comb scalar multiplication.
//!
//! This crate computes `k * P` for a fixed base point `P` (typically a
//! curve generator reused across many operations) using a once-computed
//! lookup table of precombined points:
//! - [`CombGeometry`] splits the scalar's bits into rounds of evenly
//!   spaced teeth,
//! - [`EncodedScalar`] zero-extends the scalar to the padded comb length,
//! - [`comb_index`] derives one table index per round,
//! - [`PrecomputedCombTable`] holds the precombined points and the fixed
//!   offset that corrects the indexing scheme's structural bias,
//! - [`FixedPointCombMultiplier`] runs the double-and-accumulate loop and
//!   caches tables per fixed point.
//!
//! # Example
//!
//! ```
//! use comb::FixedPointCombMultiplier;
//! use curve::{secp256r1, Affine};
//! use num_bigint::BigUint;
//!
//! let g = Affine::generator(secp256r1());
//! let multiplier = FixedPointCombMultiplier::new();
//!
//! let doubled = multiplier
//!     .multiply(&BigUint::from(2u32), &g)
//!     .expect("scalar within comb capacity");
//! assert_eq!(doubled, g.double());
//! ```

mod cache;
mod encoder;
mod errors;
mod geometry;
mod indexer;
mod multiplier;
mod table;


pub use cache::CombTableCache;
pub use encoder::EncodedScalar;
pub use errors::CombError;
pub use geometry::{comb_capacity, CombGeometry};
pub use indexer::comb_index;
pub use multiplier::{multiply_with_table, FixedPointCombMultiplier};
pub use table::{CombTable, PrecomputedCombTable, MAX_WIDTH};
