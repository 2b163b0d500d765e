//! Register-blocked panel transpose/copy kernels.
//!
//! This crate repacks a column-major matrix into the panel-major layout a GEMM
//! micro-kernel streams from: column groups of width 16 (or 8), 8, 4, 2 and 1
//! laid out one after another, each stored row-major so that one row of a
//! panel is contiguous.
//!
//! # Structure
//!
//! ```text
//! profile  (which widths / row tiles / tails)
//!    -> layout        (where each column group lands)
//!    -> execute       (outer cascade over column groups)
//!    -> macro_kernel  (row tiles inside one group)
//!    -> micro_kernel  (one register tile)
//! ```
//!
//! # Example
//!
//! ```rust
//! use strided_pack::{pack_panels, PackProfile, PanelLayout};
//!
//! // 2 × 3 column-major matrix: [[1, 2, 3], [4, 5, 6]]
//! let a = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
//! let mut b = [0.0; 6];
//! unsafe { pack_panels(PackProfile::Wide16, 2, 3, a.as_ptr(), 2, b.as_mut_ptr()) };
//!
//! // A 2-wide panel (rows [1, 2] and [4, 5]) followed by the last column.
//! assert_eq!(b, [1.0, 2.0, 4.0, 5.0, 3.0, 6.0]);
//! let layout = PanelLayout::new(PackProfile::Wide16, 2, 3);
//! assert_eq!(b[layout.offset_of(1, 2)], 6.0);
//! ```

pub mod execute;
pub mod layout;
pub mod macro_kernel;
pub mod micro_kernel;
pub mod profile;

pub use execute::{pack_panels, pack_panels_with, unpack_panels};
pub use layout::{Panel, PanelLayout, Panels};
pub use micro_kernel::{MicroKernel, ScalarKernel};
pub use profile::{PackProfile, PanelStep, RowBlocking, RowPlan, RowTail};
