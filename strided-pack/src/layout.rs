//! Panel-major destination layout.
//!
//! The packed buffer holds the column groups one after another. Group `g`
//! covers columns `col_start..col_start + width` and stores its `m × width`
//! sub-matrix row-major, so element `(i, j)` of the source lands at
//! `offset + i * width + (j - col_start)`.

use crate::profile::{PackProfile, PanelStep};

/// One column group of the packed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    /// First source column of the group.
    pub col_start: usize,
    /// Tiling policy of the group; `step.width()` is its column count.
    pub step: PanelStep,
    /// Offset of the group's first element in the packed buffer.
    pub offset: usize,
}

impl Panel {
    /// Number of columns in the group.
    #[inline]
    pub fn width(&self) -> usize {
        self.step.width()
    }
}

/// Geometry of a packed `m × n` matrix under a [`PackProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    profile: PackProfile,
    m: usize,
    n: usize,
}

impl PanelLayout {
    pub fn new(profile: PackProfile, m: usize, n: usize) -> Self {
        Self { profile, m, n }
    }

    pub fn profile(&self) -> PackProfile {
        self.profile
    }

    pub fn rows(&self) -> usize {
        self.m
    }

    pub fn cols(&self) -> usize {
        self.n
    }

    /// Number of packed elements; the buffer has no padding.
    pub fn len(&self) -> usize {
        self.m * self.n
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column groups in buffer order.
    pub fn panels(&self) -> Panels {
        Panels {
            steps: self.profile.steps(),
            m: self.m,
            n: self.n,
            step: 0,
            col: 0,
        }
    }

    /// Offset of source element `(i, j)` in the packed buffer.
    ///
    /// # Panics
    /// Panics if `i >= m` or `j >= n`.
    pub fn offset_of(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.m && j < self.n,
            "({i}, {j}) out of bounds for {}x{} layout",
            self.m,
            self.n
        );
        let wide = self.profile.max_width();
        let full_cols = self.n / wide * wide;
        if j < full_cols {
            let group = j / wide;
            return group * wide * self.m + i * wide + (j - group * wide);
        }
        let mut col = full_cols;
        for step in &self.profile.steps()[1..] {
            let w = step.width();
            if self.n - col >= w {
                if j < col + w {
                    return col * self.m + i * w + (j - col);
                }
                col += w;
            }
        }
        unreachable!("column {j} not covered by the {} cascade", self.profile.name())
    }
}

/// Iterator over the column groups of a [`PanelLayout`].
///
/// The widest step repeats while it fits; every narrower step then fires at
/// most once, exactly when its bit is set in `n mod max_width`.
#[derive(Debug, Clone)]
pub struct Panels {
    steps: &'static [PanelStep],
    m: usize,
    n: usize,
    step: usize,
    col: usize,
}

impl Iterator for Panels {
    type Item = Panel;

    fn next(&mut self) -> Option<Panel> {
        while self.step < self.steps.len() {
            let step = self.steps[self.step];
            let w = step.width();
            if self.n - self.col >= w {
                let panel = Panel {
                    col_start: self.col,
                    step,
                    offset: self.col * self.m,
                };
                self.col += w;
                return Some(panel);
            }
            self.step += 1;
        }
        None
    }
}
