//! BLAS-shaped raw entry points.
//!
//! Dimensions and increments are signed, as in the reference BLAS interface,
//! and degenerate values produce sentinel results instead of errors. Nothing
//! here validates geometry: an inconsistent `lda`/`m` or a short buffer is
//! undefined behaviour. Use [`crate::checked`] for validated calls.

use strided_pack::{pack_panels, PackProfile};

pub use strided_amax::argmax_mag1;

/// `icamax`: [`argmax_mag1`] over single-precision complex pairs.
///
/// # Safety
/// See [`argmax_mag1`].
pub unsafe fn icamax(n: isize, x: *const f32, inc_x: isize) -> usize {
    argmax_mag1(n, x, inc_x)
}

/// `izamax`: [`argmax_mag1`] over double-precision complex pairs.
///
/// # Safety
/// See [`argmax_mag1`].
pub unsafe fn izamax(n: isize, x: *const f64, inc_x: isize) -> usize {
    argmax_mag1(n, x, inc_x)
}

/// Repack the column-major `m × n` matrix `a` into panels in `b` with the
/// default [`PackProfile`]. Always returns 0.
///
/// # Safety
/// See [`transpose_panels_with`].
pub unsafe fn transpose_panels<T: Copy>(
    m: isize,
    n: isize,
    a: *const T,
    lda: isize,
    b: *mut T,
) -> i32 {
    transpose_panels_with(PackProfile::default(), m, n, a, lda, b)
}

/// Repack the column-major `m × n` matrix `a` into panels in `b`.
///
/// Non-positive `m` or `n` writes nothing. Always returns 0.
///
/// # Safety
/// For `m > 0` and `n > 0`:
/// - `lda >= m`
/// - `a` must be readable at `i + j*lda` for all `i < m`, `j < n`
/// - `b` must be writable for `m * n` elements and must not overlap `a`
pub unsafe fn transpose_panels_with<T: Copy>(
    profile: PackProfile,
    m: isize,
    n: isize,
    a: *const T,
    lda: isize,
    b: *mut T,
) -> i32 {
    if m > 0 && n > 0 {
        debug_assert!(lda >= m);
        pack_panels(profile, m as usize, n as usize, a, lda as usize, b);
    }
    0
}
