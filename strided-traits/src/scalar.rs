//! Element bounds for the panel copy kernels.

/// Trait bounds for elements that can be repacked into GEMM panels.
///
/// Packing only moves values around, so no arithmetic is required. `Default`
/// is used by callers that need to size and prefill destination buffers.
pub trait PackScalar: Copy + Send + Sync + Default + PartialEq + 'static {}

impl<T> PackScalar for T where T: Copy + Send + Sync + Default + PartialEq + 'static {}
