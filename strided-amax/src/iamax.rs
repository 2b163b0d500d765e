//! Index of maximum L1 magnitude over a strided, interleaved complex vector.
//!
//! The scan keeps one running maximum and one running best index per lane.
//! Full chunks of `setvl(n)` elements update the lane state; a single narrower
//! pass then covers the tail. Ties resolve to the lowest element index.

use crate::simd;
use crate::vl::{VectorLength, MAX_LANES};
use num_complex::Complex;
use strided_traits::AmaxReal;

/// 1-based index of the element of `x` with the largest `|re| + |im|`.
///
/// `x` points at `n` complex elements stored as interleaved `(re, im)` pairs,
/// `inc_x` complex elements apart. Returns 0 without reading memory when
/// `n <= 0` or `inc_x <= 0`.
///
/// # Safety
/// For `n > 0` and `inc_x > 0`, `x` must be readable at real offsets
/// `2*k*inc_x` and `2*k*inc_x + 1` for every `k` in `0..n`.
pub unsafe fn argmax_mag1<T: AmaxReal>(n: isize, x: *const T, inc_x: isize) -> usize {
    if n <= 0 || inc_x <= 0 {
        return 0;
    }
    let n = n as usize;
    let inc_x = inc_x as usize;
    let vl = VectorLength::detect::<T>();
    simd::dispatch_if_large(n, || unsafe { argmax_mag1_with(vl, n, x, inc_x) })
}

/// [`argmax_mag1`] over a contiguous complex slice.
///
/// Returns 0 for an empty slice.
pub fn argmax_mag1_complex<T: AmaxReal>(x: &[Complex<T>]) -> usize {
    let flat: &[T] = bytemuck::cast_slice(x);
    let vl = VectorLength::detect::<T>();
    // SAFETY: `flat` holds exactly `2 * x.len()` reals.
    simd::dispatch_if_large(x.len(), || unsafe {
        argmax_mag1_with(vl, x.len(), flat.as_ptr(), 1)
    })
}

/// Kernel body with an explicit vector length.
///
/// Returns the 1-based index, or 0 when `n == 0`.
///
/// # Safety
/// Same requirements as [`argmax_mag1`]; `inc_x` must be non-zero.
#[inline(always)]
pub unsafe fn argmax_mag1_with<T: AmaxReal>(
    vl: VectorLength,
    n: usize,
    x: *const T,
    inc_x: usize,
) -> usize {
    if n == 0 {
        return 0;
    }
    debug_assert!(inc_x > 0);

    let stride = inc_x * 2;
    let floor = T::min_value();

    let mut v_max = [floor; MAX_LANES];
    let mut v_idx = [0usize; MAX_LANES];
    let mut mags = [floor; MAX_LANES];

    let gvl = vl.setvl(n);
    let chunks = n / gvl;
    let mut j = 0usize;

    for _ in 0..chunks {
        load_mag1(x.wrapping_add(j * stride), stride, &mut mags[..gvl]);
        let max = &mut v_max[..gvl];
        let idx = &mut v_idx[..gvl];
        for lane in 0..gvl {
            let v = mags[lane];
            if max[lane] < v {
                idx[lane] = j + lane;
            }
            max[lane] = max[lane].max(v);
        }
        j += gvl;
    }

    let maxf = reduce_max(&v_max[..gvl], floor);
    let mut best = lowest_index_at(&v_max[..gvl], &v_idx[..gvl], maxf);

    if j < n {
        let tail = vl.setvl(n - j);
        load_mag1(x.wrapping_add(j * stride), stride, &mut mags[..tail]);
        let cur = reduce_max(&mags[..tail], maxf);
        if cur > maxf {
            // Tail lanes are in index order.
            if let Some(lane) = mags[..tail].iter().position(|&v| v >= cur) {
                best = j + lane;
            }
        }
    }

    best + 1
}

/// Strided gather of `out.len()` pairs, reduced to L1 magnitudes.
#[inline(always)]
unsafe fn load_mag1<T: AmaxReal>(x: *const T, stride: usize, out: &mut [T]) {
    for (lane, dst) in out.iter_mut().enumerate() {
        let p = x.add(lane * stride);
        *dst = T::mag1(*p, *p.add(1));
    }
}

/// Lanewise max reduction seeded with `init`. NaN lanes are skipped.
#[inline(always)]
fn reduce_max<T: AmaxReal>(lanes: &[T], init: T) -> T {
    lanes.iter().fold(init, |acc, &v| acc.max(v))
}

/// Lowest running index among lanes whose running max reaches `maxf`.
#[inline(always)]
fn lowest_index_at<T: AmaxReal>(v_max: &[T], v_idx: &[usize], maxf: T) -> usize {
    v_max
        .iter()
        .zip(v_idx)
        .filter(|&(&m, _)| m >= maxf)
        .map(|(_, &i)| i)
        .min()
        .unwrap_or(0)
}
