//! Shared element traits for the strided-blas kernels.
//!
//! This crate provides the trait bounds shared by `strided-amax` and the
//! `strided-blas` facade.

pub mod real;
pub mod scalar;

pub use real::AmaxReal;
pub use scalar::PackScalar;
