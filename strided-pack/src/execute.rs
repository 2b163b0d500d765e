//! Outer drivers: walk the column-width cascade and hand each column group to
//! the macro-kernel (packing) or scatter it back (unpacking).

use crate::layout::PanelLayout;
use crate::macro_kernel::{pack_panel, transpose_block};
use crate::micro_kernel::{MicroKernel, ScalarKernel};
use crate::profile::PackProfile;

/// Repack the column-major `m × n` matrix `a` (leading dimension `lda`) into
/// the panel-major buffer `b`.
///
/// Exactly `m * n` elements of `b` are written, in the order described by
/// [`PanelLayout`]. Nothing is read or written when `m == 0` or `n == 0`.
///
/// # Safety
/// - `lda >= m`
/// - `a` must be readable at `i + j*lda` for all `i < m`, `j < n`
/// - `b` must be writable for `m * n` elements
/// - `a` and `b` must not overlap
pub unsafe fn pack_panels<T: Copy>(
    profile: PackProfile,
    m: usize,
    n: usize,
    a: *const T,
    lda: usize,
    b: *mut T,
) {
    pack_panels_with::<T, ScalarKernel>(profile, m, n, a, lda, b)
}

/// [`pack_panels`] with an explicit micro-kernel.
///
/// # Safety
/// Same requirements as [`pack_panels`].
pub unsafe fn pack_panels_with<T: Copy, K: MicroKernel<T>>(
    profile: PackProfile,
    m: usize,
    n: usize,
    a: *const T,
    lda: usize,
    b: *mut T,
) {
    if m == 0 || n == 0 {
        return;
    }
    debug_assert!(lda >= m);

    for panel in PanelLayout::new(profile, m, n).panels() {
        pack_panel::<T, K>(
            panel.step,
            m,
            a.add(panel.col_start * lda),
            lda,
            b.add(panel.offset),
        );
    }
}

/// Inverse of [`pack_panels`]: scatter the panel-major buffer `b` back into the
/// column-major `m × n` matrix `a` (leading dimension `lda`).
///
/// Rows `m..lda` of each column of `a` are left untouched.
///
/// # Safety
/// - `lda >= m`
/// - `b` must be readable for `m * n` elements
/// - `a` must be writable at `i + j*lda` for all `i < m`, `j < n`
/// - `a` and `b` must not overlap
pub unsafe fn unpack_panels<T: Copy>(
    profile: PackProfile,
    m: usize,
    n: usize,
    b: *const T,
    a: *mut T,
    lda: usize,
) {
    if m == 0 || n == 0 {
        return;
    }
    debug_assert!(lda >= m);

    for panel in PanelLayout::new(profile, m, n).panels() {
        let w = panel.width();
        // The panel is a column-major `w × m` matrix with leading dimension `w`;
        // its transpose is the `m × w` slice of `a`.
        transpose_block::<T, ScalarKernel>(
            b.add(panel.offset),
            w,
            w,
            m,
            a.add(panel.col_start * lda),
            lda,
        );
    }
}
