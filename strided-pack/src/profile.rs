//! Tiling policy: which column widths, row blocks and row tails a packing
//! routine uses.

/// How the rows left over after the last full row block are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTail {
    /// The runtime-row-count tile takes the even part of the remainder; a
    /// single odd row is copied element by element.
    Even,
    /// The runtime-row-count tile takes the whole remainder.
    Any,
}

/// Row handling inside one column group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowBlocking {
    /// Fixed-size tiles of `block` rows, then a tail.
    Tiled { block: usize, tail: RowTail },
    /// Straight copy of a single column.
    Column,
}

/// One width of the descending column-width cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStep {
    width: usize,
    rows: RowBlocking,
}

/// How the rows of one column group split across kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowPlan {
    /// Number of fixed-size tile calls.
    pub full_blocks: usize,
    /// Rows handed to the runtime-row-count tile (0 = not called).
    pub tail_rows: usize,
    /// Whether one last row is copied by the scalar path.
    pub single_row: bool,
}

impl PanelStep {
    const fn tiled(width: usize, block: usize, tail: RowTail) -> Self {
        Self {
            width,
            rows: RowBlocking::Tiled { block, tail },
        }
    }

    const fn column() -> Self {
        Self {
            width: 1,
            rows: RowBlocking::Column,
        }
    }

    /// Number of columns in the group.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row handling for the group.
    #[inline]
    pub fn rows(&self) -> RowBlocking {
        self.rows
    }

    /// Split `m` rows into full tiles, a tile tail and an optional single row.
    ///
    /// A column copy has no row split and returns the default plan.
    pub fn row_plan(&self, m: usize) -> RowPlan {
        match self.rows {
            RowBlocking::Column => RowPlan::default(),
            RowBlocking::Tiled { block, tail } => {
                let rem = m % block;
                let (tail_rows, single_row) = match tail {
                    RowTail::Even => (rem & !1, rem & 1 == 1),
                    RowTail::Any => (rem, false),
                };
                RowPlan {
                    full_blocks: m / block,
                    tail_rows,
                    single_row,
                }
            }
        }
    }
}

const WIDE16_STEPS: [PanelStep; 5] = [
    PanelStep::tiled(16, 8, RowTail::Even),
    PanelStep::tiled(8, 8, RowTail::Even),
    PanelStep::tiled(4, 8, RowTail::Even),
    PanelStep::tiled(2, 8, RowTail::Even),
    PanelStep::column(),
];

const WIDE8_STEPS: [PanelStep; 4] = [
    PanelStep::tiled(8, 8, RowTail::Any),
    PanelStep::tiled(4, 4, RowTail::Any),
    PanelStep::tiled(2, 2, RowTail::Even),
    PanelStep::column(),
];

/// Packing routine for a given GEMM `NR` (widest panel).
///
/// Both profiles write panels as row-major `m × width` blocks; they differ in
/// the widest panel and in how rows are tiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackProfile {
    /// Panels 16, 8, 4, 2, 1 wide; 8-row tiles with an even-row tail.
    #[default]
    Wide16,
    /// Panels 8, 4, 2, 1 wide; square 8×8 and 4×4 tiles with any-row tails.
    Wide8,
}

impl PackProfile {
    /// Column widths in descending order, ending with the single-column copy.
    pub fn steps(self) -> &'static [PanelStep] {
        match self {
            PackProfile::Wide16 => &WIDE16_STEPS,
            PackProfile::Wide8 => &WIDE8_STEPS,
        }
    }

    /// Widest panel.
    pub fn max_width(self) -> usize {
        self.steps()[0].width
    }

    /// Short name used in logs and benchmark labels.
    pub fn name(self) -> &'static str {
        match self {
            PackProfile::Wide16 => "wide16",
            PackProfile::Wide8 => "wide8",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_descend_by_halves() {
        for profile in [PackProfile::Wide16, PackProfile::Wide8] {
            let widths: Vec<usize> = profile.steps().iter().map(|s| s.width()).collect();
            assert_eq!(*widths.last().unwrap(), 1);
            for pair in widths.windows(2) {
                assert_eq!(pair[0], pair[1] * 2, "{profile:?}");
            }
            assert_eq!(profile.max_width(), widths[0]);
        }
    }

    #[test]
    fn test_even_tail_plan() {
        let step = PackProfile::Wide16.steps()[0];
        assert_eq!(
            step.row_plan(23),
            RowPlan { full_blocks: 2, tail_rows: 6, single_row: true }
        );
        assert_eq!(
            step.row_plan(5),
            RowPlan { full_blocks: 0, tail_rows: 4, single_row: true }
        );
        assert_eq!(
            step.row_plan(1),
            RowPlan { full_blocks: 0, tail_rows: 0, single_row: true }
        );
        assert_eq!(
            step.row_plan(0),
            RowPlan { full_blocks: 0, tail_rows: 0, single_row: false }
        );
    }

    #[test]
    fn test_any_tail_plan() {
        let steps = PackProfile::Wide8.steps();
        assert_eq!(
            steps[0].row_plan(15),
            RowPlan { full_blocks: 1, tail_rows: 7, single_row: false }
        );
        assert_eq!(
            steps[1].row_plan(7),
            RowPlan { full_blocks: 1, tail_rows: 3, single_row: false }
        );
        // The 2-wide step pairs rows and copies an odd last row.
        assert_eq!(
            steps[2].row_plan(7),
            RowPlan { full_blocks: 3, tail_rows: 0, single_row: true }
        );
    }

    #[test]
    fn test_exact_multiples_use_full_tiles_only() {
        for profile in [PackProfile::Wide16, PackProfile::Wide8] {
            for step in profile.steps() {
                if let RowBlocking::Tiled { block, .. } = step.rows() {
                    for k in 1..4 {
                        let plan = step.row_plan(block * k);
                        assert_eq!(plan.full_blocks, k);
                        assert_eq!(plan.tail_rows, 0);
                        assert!(!plan.single_row);
                    }
                }
            }
        }
    }

    #[test]
    fn test_column_step_has_no_row_split() {
        let step = PackProfile::Wide8.steps()[3];
        assert_eq!(step.rows(), RowBlocking::Column);
        assert_eq!(step.row_plan(9), RowPlan::default());
    }
}
