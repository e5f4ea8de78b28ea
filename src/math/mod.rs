//! Numeric primitives backing the pair arithmetic.
//!
//! Everything here operates on unbounded integers: the integer square
//! root used by the protocol-fee growth adjustment and the
//! decimal-scale normalization used by swap quoting.

mod isqrt;
mod rescale;

pub use isqrt::isqrt;
pub use rescale::{pow10, rescale};
