//! Tile transpose micro-kernels.
//!
//! A micro-kernel transposes one register tile: `R` source rows of `W`
//! adjacent columns of a column-major matrix are written out as `R`
//! row-major rows of `W` contiguous elements.

pub mod scalar;

/// Register-tile transpose micro-kernel.
///
/// For a tile at `src` with column stride `lda`, and a destination with row
/// stride `ldb`:
///   `dst[r*ldb + c] = src[r + c*lda]` for `r` in `0..rows`, `c` in `0..W`.
pub trait MicroKernel<T: Copy> {
    /// Transpose a full `R × W` tile.
    ///
    /// # Safety
    /// - `src` must be readable for `R` elements along stride-1 in each of `W`
    ///   columns of stride `lda`
    /// - `dst` must be writable for `W` elements along stride-1 in each of `R`
    ///   rows of stride `ldb`
    unsafe fn transpose_tile<const W: usize, const R: usize>(
        src: *const T,
        lda: usize,
        dst: *mut T,
        ldb: usize,
    );

    /// Transpose a `rows × W` tile with a runtime row count.
    ///
    /// Writes exactly `rows * W` destination elements; nothing past row
    /// `rows - 1` is touched.
    ///
    /// # Safety
    /// Same as [`MicroKernel::transpose_tile`] with `R = rows`.
    unsafe fn transpose_rows<const W: usize>(
        rows: usize,
        src: *const T,
        lda: usize,
        dst: *mut T,
        ldb: usize,
    );
}

/// Marker type for the portable micro-kernels.
///
/// The loops have compile-time trip counts, which LLVM unrolls and vectorizes
/// for the target's registers.
pub struct ScalarKernel;
