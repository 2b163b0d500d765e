//! Macro-kernels: pack one column group by walking its rows in tiles.
//!
//! Each column group of width `W` is consumed in row blocks of `R` through the
//! fixed-size micro-kernel. Leftover rows go through the runtime-row-count
//! micro-kernel, and (for even-only tails) one odd last row is copied by the
//! scalar path. [`transpose_block`] is the general blocked transpose used to
//! scatter panels back.

use crate::micro_kernel::MicroKernel;
use crate::profile::{PanelStep, RowBlocking};

/// Pack `m` rows of the column group starting at `src` into `dst`.
///
/// Writes exactly `m * step.width()` elements.
///
/// # Safety
/// - `src` must be readable for `m` rows of `step.width()` columns of stride `lda`
/// - `dst` must be writable for `m * step.width()` elements
/// - src and dst must not overlap
#[inline]
pub unsafe fn pack_panel<T: Copy, K: MicroKernel<T>>(
    step: PanelStep,
    m: usize,
    src: *const T,
    lda: usize,
    dst: *mut T,
) {
    match (step.width(), step.rows()) {
        (_, RowBlocking::Column) => {
            debug_assert_eq!(step.width(), 1);
            std::ptr::copy_nonoverlapping(src, dst, m);
        }
        (16, RowBlocking::Tiled { block: 8, .. }) => {
            pack_tiled::<T, K, 16, 8>(step, m, src, lda, dst)
        }
        (8, RowBlocking::Tiled { block: 8, .. }) => {
            pack_tiled::<T, K, 8, 8>(step, m, src, lda, dst)
        }
        (4, RowBlocking::Tiled { block: 8, .. }) => {
            pack_tiled::<T, K, 4, 8>(step, m, src, lda, dst)
        }
        (2, RowBlocking::Tiled { block: 8, .. }) => {
            pack_tiled::<T, K, 2, 8>(step, m, src, lda, dst)
        }
        (4, RowBlocking::Tiled { block: 4, .. }) => {
            pack_tiled::<T, K, 4, 4>(step, m, src, lda, dst)
        }
        (2, RowBlocking::Tiled { block: 2, .. }) => {
            pack_tiled::<T, K, 2, 2>(step, m, src, lda, dst)
        }
        (w, rows) => unreachable!("no tile kernel for width {w} with {rows:?}"),
    }
}

/// Row-tiled packing of a `W`-wide group with `R`-row tiles.
#[inline(always)]
unsafe fn pack_tiled<T: Copy, K: MicroKernel<T>, const W: usize, const R: usize>(
    step: PanelStep,
    m: usize,
    mut src: *const T,
    lda: usize,
    mut dst: *mut T,
) {
    let plan = step.row_plan(m);

    for _ in 0..plan.full_blocks {
        K::transpose_tile::<W, R>(src, lda, dst, W);
        src = src.add(R);
        dst = dst.add(R * W);
    }

    if plan.tail_rows > 0 {
        K::transpose_rows::<W>(plan.tail_rows, src, lda, dst, W);
        src = src.add(plan.tail_rows);
        dst = dst.add(plan.tail_rows * W);
    }

    if plan.single_row {
        copy_single_row::<T, W>(src, lda, dst);
    }
}

/// Copy one source row of `W` strided elements to `W` contiguous elements.
#[inline(always)]
unsafe fn copy_single_row<T: Copy, const W: usize>(src: *const T, lda: usize, dst: *mut T) {
    for c in 0..W {
        *dst.add(c) = *src.add(c * lda);
    }
}

/// Blocked 2D transpose with runtime extents:
/// `dst[r*ldb + c] = src[r + c*lda]` for `r` in `0..rows`, `c` in `0..cols`.
///
/// Full 4×4 tiles go through the micro-kernel; the right and bottom edges use
/// the runtime-row-count micro-kernel and scalar loops.
///
/// # Safety
/// src/dst must be valid for the given extents and strides, and must not
/// overlap.
#[inline]
pub unsafe fn transpose_block<T: Copy, K: MicroKernel<T>>(
    src: *const T,
    lda: usize,
    rows: usize,
    cols: usize,
    dst: *mut T,
    ldb: usize,
) {
    const MICRO: usize = 4;

    let full_r = rows / MICRO;
    let rem_r = rows % MICRO;
    let full_c = cols / MICRO;
    let rem_c = cols % MICRO;

    for cb in 0..full_c {
        let c = cb * MICRO;
        for rb in 0..full_r {
            let r = rb * MICRO;
            let s = src.add(r + c * lda);
            K::transpose_tile::<MICRO, MICRO>(s, lda, dst.add(r * ldb + c), ldb);
        }
        if rem_r > 0 {
            let r = full_r * MICRO;
            let s = src.add(r + c * lda);
            K::transpose_rows::<MICRO>(rem_r, s, lda, dst.add(r * ldb + c), ldb);
        }
    }

    // Right edge: the last `rem_c` columns, all rows.
    if rem_c > 0 {
        let c = full_c * MICRO;
        for cc in 0..rem_c {
            let col = src.add((c + cc) * lda);
            for r in 0..rows {
                *dst.add(r * ldb + c + cc) = *col.add(r);
            }
        }
    }
}
