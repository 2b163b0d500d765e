//! Validated slice-based entry points.
//!
//! Every call checks increments, leading dimensions and slice lengths before
//! handing raw pointers to a kernel, and reports the first violated
//! requirement as a [`BlasError`].

use crate::{BlasError, Result};
use num_complex::Complex;
use strided_pack::PackProfile;
use strided_traits::{AmaxReal, PackScalar};

/// Log and return a rejection.
fn reject<T>(op: &str, err: BlasError) -> Result<T> {
    log::debug!("{op}: rejected: {err}");
    Err(err)
}

/// Reals needed to hold `n` interleaved pairs `inc_x` pairs apart.
fn interleaved_extent(n: usize, inc_x: usize) -> Result<usize> {
    (n - 1)
        .checked_mul(inc_x)
        .and_then(|k| k.checked_mul(2))
        .and_then(|k| k.checked_add(2))
        .ok_or(BlasError::OffsetOverflow)
}

/// Elements a column-major `m × n` matrix with leading dimension `lda` spans.
fn matrix_extent(m: usize, n: usize, lda: usize) -> Result<usize> {
    (n - 1)
        .checked_mul(lda)
        .and_then(|k| k.checked_add(m))
        .ok_or(BlasError::OffsetOverflow)
}

fn ensure_len(what: &'static str, required: usize, actual: usize) -> Result<()> {
    if actual < required {
        return Err(BlasError::BufferTooSmall {
            what,
            required,
            actual,
        });
    }
    Ok(())
}

/// Number of elements a packed `m × n` matrix occupies.
pub fn packed_len(m: usize, n: usize) -> Result<usize> {
    m.checked_mul(n).ok_or(BlasError::OffsetOverflow)
}

/// 1-based index of the maximum `|re| + |im|` among `n` interleaved pairs of
/// `x`, `inc_x` pairs apart. Returns `Ok(0)` for `n == 0`.
pub fn argmax_mag1<T: AmaxReal>(x: &[T], n: usize, inc_x: usize) -> Result<usize> {
    const OP: &str = "argmax_mag1";
    if inc_x == 0 {
        return reject(OP, BlasError::ZeroIncrement);
    }
    if inc_x > isize::MAX as usize {
        return reject(OP, BlasError::OffsetOverflow);
    }
    if n == 0 {
        return Ok(0);
    }
    let required = match interleaved_extent(n, inc_x) {
        Ok(r) => r,
        Err(e) => return reject(OP, e),
    };
    if let Err(e) = ensure_len("x", required, x.len()) {
        return reject(OP, e);
    }

    log::trace!("{OP}: {} n={n} inc_x={inc_x}", T::NAME);
    // SAFETY: `x` holds at least `2*(n-1)*inc_x + 2` reals, so `n` fits in
    // `isize`; `inc_x` was checked above.
    Ok(unsafe { strided_amax::argmax_mag1(n as isize, x.as_ptr(), inc_x as isize) })
}

/// [`argmax_mag1`] over a complex slice, `inc_x` elements apart.
pub fn argmax_mag1_complex<T: AmaxReal>(
    x: &[Complex<T>],
    n: usize,
    inc_x: usize,
) -> Result<usize> {
    argmax_mag1(bytemuck::cast_slice::<Complex<T>, T>(x), n, inc_x)
}

/// Repack the column-major `m × n` matrix `a` (leading dimension `lda`) into
/// the first `m * n` elements of `b`, panel-major.
pub fn pack_panels<T: PackScalar>(
    profile: PackProfile,
    m: usize,
    n: usize,
    a: &[T],
    lda: usize,
    b: &mut [T],
) -> Result<()> {
    const OP: &str = "pack_panels";
    if let Err(e) = validate_matrix(m, n, lda, a.len(), "a").and_then(|_| {
        let len = packed_len(m, n)?;
        ensure_len("b", len, b.len())
    }) {
        return reject(OP, e);
    }
    if m == 0 || n == 0 {
        return Ok(());
    }

    log::trace!("{OP}: profile={} m={m} n={n} lda={lda}", profile.name());
    // SAFETY: geometry validated above; `a` and `b` are distinct borrows.
    unsafe { strided_pack::pack_panels(profile, m, n, a.as_ptr(), lda, b.as_mut_ptr()) };
    Ok(())
}

/// Scatter the panel-major buffer `b` back into the column-major `m × n`
/// matrix `a` (leading dimension `lda`).
pub fn unpack_panels<T: PackScalar>(
    profile: PackProfile,
    m: usize,
    n: usize,
    b: &[T],
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    const OP: &str = "unpack_panels";
    if let Err(e) = validate_matrix(m, n, lda, a.len(), "a").and_then(|_| {
        let len = packed_len(m, n)?;
        ensure_len("b", len, b.len())
    }) {
        return reject(OP, e);
    }
    if m == 0 || n == 0 {
        return Ok(());
    }

    log::trace!("{OP}: profile={} m={m} n={n} lda={lda}", profile.name());
    // SAFETY: geometry validated above; `a` and `b` are distinct borrows.
    unsafe { strided_pack::unpack_panels(profile, m, n, b.as_ptr(), a.as_mut_ptr(), lda) };
    Ok(())
}

fn validate_matrix(m: usize, n: usize, lda: usize, len: usize, what: &'static str) -> Result<()> {
    if lda < m {
        return Err(BlasError::LeadingDimension { lda, rows: m });
    }
    if m == 0 || n == 0 {
        return Ok(());
    }
    ensure_len(what, matrix_extent(m, n, lda)?, len)
}
