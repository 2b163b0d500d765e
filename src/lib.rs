//! Vector-length-agnostic BLAS kernels.
//!
//! This crate is the facade over two independent leaf kernels:
//!
//! - [`strided_amax`]: index of the maximum L1 magnitude `|re| + |im|` over a
//!   strided complex vector stored as interleaved `(re, im)` pairs
//!   (`i?amax` semantics: 1-based, first occurrence wins, 0 for empty input).
//! - [`strided_pack`]: register-blocked transpose/copy that repacks a
//!   column-major matrix into the panel-major layout a GEMM micro-kernel
//!   streams from.
//!
//! # Entry points
//!
//! - [`blas`]: BLAS-shaped raw-pointer calls with signed dimensions and
//!   sentinel returns. Geometry is the caller's contract.
//! - [`checked`]: slice-based calls that validate geometry first and return
//!   [`BlasError`] instead of reaching a kernel with bad input.
//!
//! # Example
//!
//! ```rust
//! use num_complex::Complex64;
//! use strided_blas::{checked, PackProfile, PanelLayout};
//!
//! let x = [Complex64::new(0.5, 0.5), Complex64::new(2.0, -1.0), Complex64::new(-3.0, 0.0)];
//! assert_eq!(checked::argmax_mag1_complex(&x, 3, 1).unwrap(), 2);
//!
//! // 3 × 2 column-major matrix packed into one 2-wide panel.
//! let a = [1.0, 2.0, 3.0, 10.0, 20.0, 30.0];
//! let mut b = [0.0; 6];
//! checked::pack_panels(PackProfile::Wide16, 3, 2, &a, 3, &mut b).unwrap();
//! assert_eq!(b, [1.0, 10.0, 2.0, 20.0, 3.0, 30.0]);
//! assert_eq!(PanelLayout::new(PackProfile::Wide16, 3, 2).offset_of(2, 1), 5);
//! ```
//!
//! # Configuration
//!
//! - Cargo feature `simd` (default): runtime SIMD dispatch and register-width
//!   detection through `pulp`.
//! - Environment variable [`VLEN_ENV`] (`STRIDED_VLEN_BITS`): overrides the
//!   detected register width in bits.

pub mod blas;
pub mod checked;

pub use strided_amax::{VectorLength, MAX_LANES, VLEN_ENV};
pub use strided_pack::{PackProfile, Panel, PanelLayout, PanelStep, RowBlocking, RowPlan, RowTail};
pub use strided_traits::{AmaxReal, PackScalar};

// ============================================================================
// Error types
// ============================================================================

/// Errors reported by the validating [`checked`] layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlasError {
    /// Vector increment of zero.
    #[error("vector increment must be positive")]
    ZeroIncrement,

    /// Leading dimension smaller than the row count.
    #[error("leading dimension {lda} is smaller than row count {rows}")]
    LeadingDimension { lda: usize, rows: usize },

    /// A slice is too short for the requested geometry.
    #[error("buffer `{what}` too small: need {required} elements, got {actual}")]
    BufferTooSmall {
        what: &'static str,
        required: usize,
        actual: usize,
    },

    /// Integer overflow while computing the extent of a buffer.
    #[error("offset overflow while computing buffer extent")]
    OffsetOverflow,
}

/// Result type for validated kernel calls.
pub type Result<T> = std::result::Result<T, BlasError>;
