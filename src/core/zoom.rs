use serde::{Deserialize, Serialize};

/// Percentage-based sub-range of a dataset, supplied by the data-zoom collaborator.
///
/// The window is owned and mutated by the embedding application; axis code
/// only reads it. `start_percent`/`end_percent` select a fraction of the full
/// index range, `visible = false` disables windowing entirely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomWindow {
    pub visible: bool,
    pub start_percent: f64,
    pub end_percent: f64,
}

impl Default for ZoomWindow {
    fn default() -> Self {
        Self {
            visible: false,
            start_percent: 0.0,
            end_percent: 100.0,
        }
    }
}

impl ZoomWindow {
    #[must_use]
    pub const fn new(visible: bool, start_percent: f64, end_percent: f64) -> Self {
        Self {
            visible,
            start_percent,
            end_percent,
        }
    }

    /// Returns the window with percents forced into `[0, 100]`.
    ///
    /// A non-finite start degrades to `0`, a non-finite end to `100`, and an
    /// inverted pair is reordered. The data-zoom contract promises in-range
    /// values; this defines the behavior the contract leaves open.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut start = if self.start_percent.is_finite() {
            self.start_percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        let mut end = if self.end_percent.is_finite() {
            self.end_percent.clamp(0.0, 100.0)
        } else {
            100.0
        };
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }

        Self {
            visible: self.visible,
            start_percent: start,
            end_percent: end,
        }
    }

    /// Resolves the inclusive `(start_index, end_index)` pair this window
    /// selects over a dataset of `len` entries.
    ///
    /// Both indices follow `floor((len - 1) * percent / 100)` after
    /// normalization, so they always land in `[0, len - 1]`. An empty dataset
    /// resolves to `(0, 0)`.
    #[must_use]
    pub fn resolved_bounds(self, len: usize) -> (usize, usize) {
        if len == 0 {
            return (0, 0);
        }

        let window = self.normalized();
        let last = (len - 1) as f64;
        let start = (last * window.start_percent / 100.0) as usize;
        let end = (last * window.end_percent / 100.0) as usize;
        (start, end)
    }
}
