//! Vector-length-agnostic chunking.
//!
//! Instead of a compile-time SIMD width, the argmax kernel asks a
//! [`VectorLength`] how many lanes it may process for the elements that
//! remain, the way a `vsetvl` instruction does on a scalable vector ISA.

use crate::simd::register_bytes;

/// Number of native registers grouped into one logical vector (an `m8` group).
pub const REGISTER_GROUP: usize = 8;

/// Upper bound on lanes per chunk. Lane state lives in stack arrays of this
/// length, so the kernel never allocates.
pub const MAX_LANES: usize = 256;

/// Maximum number of lanes one vector operation may process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorLength {
    lanes: usize,
}

impl VectorLength {
    /// Lanes available for elements of type `T` on this machine.
    pub fn detect<T>() -> Self {
        let elem = core::mem::size_of::<T>().max(1);
        let per_register = (register_bytes() / elem).max(1);
        Self::fixed(per_register * REGISTER_GROUP)
    }

    /// A fixed lane count, clamped to `1..=MAX_LANES`.
    pub fn fixed(lanes: usize) -> Self {
        Self {
            lanes: lanes.clamp(1, MAX_LANES),
        }
    }

    /// Maximum lanes per chunk.
    #[inline(always)]
    pub fn max_lanes(self) -> usize {
        self.lanes
    }

    /// Lanes granted for `remaining` elements: `min(max_lanes, remaining)`.
    #[inline(always)]
    pub fn setvl(self, remaining: usize) -> usize {
        remaining.min(self.lanes)
    }
}
