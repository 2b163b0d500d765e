use approx::assert_relative_eq;
use num_complex::{Complex32, Complex64};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;
use strided_amax::{argmax_mag1, argmax_mag1_complex, argmax_mag1_with, VectorLength, MAX_LANES};

/// Lowest 0-based index attaining the maximum `|re| + |im|`, by plain scan.
fn naive_argmax(x: &[f64], n: usize, inc: usize) -> usize {
    let mut best = 0;
    let mut best_mag = f64::NEG_INFINITY;
    for k in 0..n {
        let mag = x[2 * k * inc].abs() + x[2 * k * inc + 1].abs();
        if mag > best_mag {
            best_mag = mag;
            best = k;
        }
    }
    best
}

fn make_random_pairs(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..2 * len).map(|_| rng.sample(StandardNormal)).collect()
}

#[test]
fn test_matches_naive_scan_random() {
    for (seed, &n) in [1usize, 2, 7, 31, 64, 65, 200, 1000, 4097].iter().enumerate() {
        for inc in 1..=3 {
            let x = make_random_pairs(n * inc, seed as u64);
            let got = unsafe { argmax_mag1(n as isize, x.as_ptr(), inc as isize) };
            assert_eq!(got, naive_argmax(&x, n, inc) + 1, "n={n}, inc={inc}");
        }
    }
}

#[test]
fn test_every_lane_count_agrees() {
    let x = make_random_pairs(97, 7);
    let expected = naive_argmax(&x, 97, 1) + 1;
    for lanes in [1, 2, 3, 4, 5, 8, 16, 31, 32, 96, 97, 98, MAX_LANES] {
        let got = unsafe { argmax_mag1_with(VectorLength::fixed(lanes), 97, x.as_ptr(), 1) };
        assert_eq!(got, expected, "lanes={lanes}");
    }
}

#[test]
fn test_identical_magnitudes_return_one() {
    let pattern = [
        Complex64::new(1.0, 0.0),
        Complex64::new(0.0, -1.0),
        Complex64::new(-0.5, 0.5),
        Complex64::new(0.25, -0.75),
    ];
    let x: Vec<Complex64> = (0..300).map(|k| pattern[k % 4]).collect();
    assert_eq!(argmax_mag1_complex(&x), 1);
}

#[test]
fn test_max_in_last_position_of_tail() {
    let n = 1000;
    let mut x = vec![Complex32::new(0.25, -0.25); n];
    x[n - 1] = Complex32::new(0.0, 0.75);
    assert_eq!(argmax_mag1_complex(&x), n);
}

#[test]
fn test_reported_element_has_max_magnitude() {
    let raw = make_random_pairs(513, 99);
    let x: &[Complex64] = bytemuck::cast_slice(&raw);
    let idx = argmax_mag1_complex(x);
    let picked = x[idx - 1].re.abs() + x[idx - 1].im.abs();
    let max = x
        .iter()
        .map(|c| c.re.abs() + c.im.abs())
        .fold(f64::NEG_INFINITY, f64::max);
    assert_relative_eq!(picked, max);
}

#[test]
fn test_zero_length_and_zero_stride() {
    let x = make_random_pairs(5, 3);
    unsafe {
        assert_eq!(argmax_mag1(0, x.as_ptr(), 1), 0);
        assert_eq!(argmax_mag1(5, x.as_ptr(), 0), 0);
    }
}

proptest! {
    #[test]
    fn prop_lowest_index_of_max(
        vals in prop::collection::vec(-4i8..=4, 2..400),
        inc in 1usize..4,
        lanes in 1usize..40,
    ) {
        // Small integer values force many ties.
        let x: Vec<f64> = vals.iter().map(|&v| v as f64 * 0.5).collect();
        let n = (x.len() - 2) / (2 * inc) + 1;
        let got = unsafe { argmax_mag1_with(VectorLength::fixed(lanes), n, x.as_ptr(), inc) };
        prop_assert_eq!(got, naive_argmax(&x, n, inc) + 1);
    }

    #[test]
    fn prop_detected_length_matches_naive(
        vals in prop::collection::vec(-1.0e3f64..1.0e3, 2..2000),
    ) {
        let n = vals.len() / 2;
        let got = unsafe { argmax_mag1(n as isize, vals.as_ptr(), 1) };
        prop_assert_eq!(got, naive_argmax(&vals, n, 1) + 1);
    }
}
