//! Vector-length-agnostic index-of-maximum-magnitude kernel.
//!
//! This crate provides the `i?amax`-style reduction for complex vectors stored
//! as interleaved `(re, im)` pairs with an arbitrary positive element stride.
//! Magnitude is the L1 norm `|re| + |im|`; the returned index is 1-based and
//! the first occurrence of the maximum wins.
//!
//! Chunk widths are not fixed at compile time. A [`VectorLength`] is derived
//! from the register width detected at runtime (see [`register_bytes`]) and
//! each chunk asks it for `setvl(remaining)` lanes.
//!
//! # Example
//!
//! ```rust
//! use num_complex::Complex64;
//! use strided_amax::argmax_mag1_complex;
//!
//! let x = [Complex64::new(1.0, 1.0), Complex64::new(-3.0, 0.5), Complex64::new(0.0, 2.0)];
//! assert_eq!(argmax_mag1_complex(&x), 2);
//! ```

pub mod iamax;
mod simd;
pub mod vl;

pub use iamax::{argmax_mag1, argmax_mag1_complex, argmax_mag1_with};
pub use simd::{register_bytes, VLEN_ENV};
pub use vl::{VectorLength, MAX_LANES, REGISTER_GROUP};
