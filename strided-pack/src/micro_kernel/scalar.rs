//! Portable micro-kernel implementation, generic over any `Copy` element.

use super::{MicroKernel, ScalarKernel};

impl<T: Copy> MicroKernel<T> for ScalarKernel {
    #[inline(always)]
    unsafe fn transpose_tile<const W: usize, const R: usize>(
        src: *const T,
        lda: usize,
        dst: *mut T,
        ldb: usize,
    ) {
        for c in 0..W {
            let col = src.add(c * lda);
            for r in 0..R {
                *dst.add(r * ldb + c) = *col.add(r);
            }
        }
    }

    #[inline(always)]
    unsafe fn transpose_rows<const W: usize>(
        rows: usize,
        src: *const T,
        lda: usize,
        dst: *mut T,
        ldb: usize,
    ) {
        for c in 0..W {
            let col = src.add(c * lda);
            for r in 0..rows {
                *dst.add(r * ldb + c) = *col.add(r);
            }
        }
    }
}
