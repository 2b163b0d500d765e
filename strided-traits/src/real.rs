//! Real component types for the interleaved complex argmax kernel.

use bytemuck::Pod;
use num_traits::Float;

/// Real scalar type whose interleaved `(re, im)` pairs can be scanned by the
/// index-of-max-magnitude kernel.
///
/// `Pod` lets `Complex<Self>` slices be reinterpreted as interleaved real
/// slices without copying (num-complex implements `Pod` for `Complex<T: Pod>`).
pub trait AmaxReal: Float + Pod + Send + Sync + core::fmt::Debug + 'static {
    /// Name used in log records.
    const NAME: &'static str;

    /// L1 magnitude `|re| + |im|` of one interleaved pair.
    #[inline(always)]
    fn mag1(re: Self, im: Self) -> Self {
        re.abs() + im.abs()
    }
}

impl AmaxReal for f32 {
    const NAME: &'static str = "f32";
}

impl AmaxReal for f64 {
    const NAME: &'static str = "f64";
}
