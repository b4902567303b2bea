use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::zoom::ZoomWindow;
use crate::error::{ChartError, ChartResult};

/// Numeric range of a value axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Creates a range from explicit bounds. `min == max` is allowed and
    /// renders every scale label at that value.
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidConfig(
                "value axis bounds must be finite".to_owned(),
            ));
        }

        Ok(Self { min, max })
    }
}

/// Axis domain: a numeric range or an ordered category list.
///
/// Time and logarithmic domains are reserved and currently unimplemented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisDomain {
    Value(ValueRange),
    Category(Vec<String>),
}

/// Dash pattern of grid split lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SplitLineKind {
    None,
    Solid,
    #[default]
    Dashed,
    Dotted,
}

/// Split-line settings, read by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SplitLineStyle {
    pub show: bool,
    pub kind: SplitLineKind,
}

/// Tick mark settings, read by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickStyle {
    pub show: bool,
    pub align_with_label: bool,
    pub inside: bool,
    pub length: f64,
}

impl Default for TickStyle {
    fn default() -> Self {
        Self {
            show: true,
            align_with_label: false,
            inside: false,
            length: 5.0,
        }
    }
}

/// Presentation settings of one axis, read by the rendering layer.
///
/// The core carries these for the configuration surface but never branches
/// on them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub show: bool,
    pub text_rotation: i32,
    pub split_line: SplitLineStyle,
    pub tick: TickStyle,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            show: true,
            text_rotation: 0,
            split_line: SplitLineStyle::default(),
            tick: TickStyle::default(),
        }
    }
}

/// Memoized visible-window state, keyed by the resolved index pair.
#[derive(Debug, Clone, Default)]
struct WindowCache {
    bounds: Option<(usize, usize)>,
    slice: Vec<String>,
    recomputations: u64,
}

/// One chart axis: domain data plus the derived visible-window state.
///
/// Category axes answer every tick/scale query against the currently zoomed
/// slice of their label list; value axes ignore the window. The visible slice
/// is memoized on the resolved `(start_index, end_index)` pair, so repeated
/// reads under an unchanged window are cheap. The read path is a
/// read-modify-write over that cache and needs external serialization if the
/// axis is shared across threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisModel {
    domain: AxisDomain,
    tick_count: usize,
    boundary_gap: bool,
    style: AxisStyle,
    #[serde(skip)]
    cache: WindowCache,
}

impl AxisModel {
    const DEFAULT_TICK_COUNT: usize = 5;

    /// Creates a category axis with boundary gaps enabled.
    #[must_use]
    pub fn category(labels: Vec<String>) -> Self {
        Self {
            domain: AxisDomain::Category(labels),
            tick_count: Self::DEFAULT_TICK_COUNT,
            boundary_gap: true,
            style: AxisStyle::default(),
            cache: WindowCache::default(),
        }
    }

    /// Creates a value axis over `[min, max]` with boundary gaps disabled.
    pub fn value(min: f64, max: f64) -> ChartResult<Self> {
        let range = ValueRange::new(min, max)?;
        Ok(Self {
            domain: AxisDomain::Value(range),
            tick_count: Self::DEFAULT_TICK_COUNT,
            boundary_gap: false,
            style: AxisStyle::default(),
            cache: WindowCache::default(),
        })
    }

    /// Stock horizontal axis: five placeholder categories, boundary gap on.
    #[must_use]
    pub fn default_x() -> Self {
        Self::category(vec![
            "x1".to_owned(),
            "x2".to_owned(),
            "x3".to_owned(),
            "x4".to_owned(),
            "x5".to_owned(),
        ])
    }

    /// Stock vertical axis: value domain collapsed at zero, boundary gap off.
    #[must_use]
    pub fn default_y() -> Self {
        Self {
            domain: AxisDomain::Value(ValueRange::default()),
            tick_count: Self::DEFAULT_TICK_COUNT,
            boundary_gap: false,
            style: AxisStyle::default(),
            cache: WindowCache::default(),
        }
    }

    #[must_use]
    pub fn domain(&self) -> &AxisDomain {
        &self.domain
    }

    /// Full, unwindowed category list. Empty for value axes.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        match &self.domain {
            AxisDomain::Category(labels) => labels,
            AxisDomain::Value(_) => &[],
        }
    }

    #[must_use]
    pub fn value_range(&self) -> Option<ValueRange> {
        match self.domain {
            AxisDomain::Value(range) => Some(range),
            AxisDomain::Category(_) => None,
        }
    }

    /// Nominal split count configured for the axis.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    pub fn set_tick_count(&mut self, tick_count: usize) {
        self.tick_count = tick_count;
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Whether ticks sit between categories (`true`) or on them (`false`).
    #[must_use]
    pub fn boundary_gap(&self) -> bool {
        self.boundary_gap
    }

    pub fn set_boundary_gap(&mut self, boundary_gap: bool) {
        self.boundary_gap = boundary_gap;
    }

    #[must_use]
    pub fn with_boundary_gap(mut self, boundary_gap: bool) -> Self {
        self.boundary_gap = boundary_gap;
        self
    }

    #[must_use]
    pub fn style(&self) -> AxisStyle {
        self.style
    }

    pub fn set_style(&mut self, style: AxisStyle) {
        self.style = style;
    }

    #[must_use]
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Number of visible-window recomputations performed so far.
    ///
    /// Reads that hit the memoized slice leave the counter unchanged.
    #[must_use]
    pub fn window_recomputations(&self) -> u64 {
        self.cache.recomputations
    }

    /// Appends one category label, evicting from the front when `max_count`
    /// is exceeded. `max_count == 0` means unbounded. Ignored on value axes.
    pub fn add_category(&mut self, label: impl Into<String>, max_count: usize) {
        let AxisDomain::Category(labels) = &mut self.domain else {
            return;
        };

        if max_count > 0 {
            while labels.len() > max_count {
                labels.remove(0);
            }
        }
        labels.push(label.into());
        trace!(count = labels.len(), "appended axis category");
        self.cache.bounds = None;
    }

    /// Drops all category labels. Ignored on value axes.
    pub fn clear_categories(&mut self) {
        let AxisDomain::Category(labels) = &mut self.domain else {
            return;
        };

        labels.clear();
        self.cache.bounds = None;
    }

    /// Category labels inside the current zoom window.
    ///
    /// A hidden window yields the full list; an empty list stays empty rather
    /// than being sliced. Value axes yield an empty slice.
    pub fn visible_categories(&mut self, window: &ZoomWindow) -> &[String] {
        self.refresh_window_cache(window);
        match (&self.domain, window.visible) {
            (AxisDomain::Category(labels), false) => labels.as_slice(),
            (AxisDomain::Category(_), true) => self.cache.slice.as_slice(),
            (AxisDomain::Value(_), _) => &[],
        }
    }

    /// Visible label at `index`, or an empty string when out of range or on a
    /// value axis.
    pub fn category_label(&mut self, index: usize, window: &ZoomWindow) -> &str {
        self.visible_categories(window)
            .get(index)
            .map_or("", String::as_str)
    }

    /// Number of categories inside the current zoom window.
    pub fn data_count(&mut self, window: &ZoomWindow) -> usize {
        self.visible_categories(window).len()
    }

    /// Number of axis splits for the current window.
    ///
    /// Value axes use the configured tick count unconditionally. Category
    /// axes adapt to sparse data: a visible count in `1..=2 * tick_count`
    /// becomes the split count itself.
    pub fn split_count(&mut self, window: &ZoomWindow) -> usize {
        if matches!(self.domain, AxisDomain::Value(_)) {
            return self.tick_count;
        }

        let data_count = self.data_count(window);
        if data_count > 2 * self.tick_count || data_count == 0 {
            self.tick_count
        } else {
            data_count
        }
    }

    /// Number of labeled scale slots for the current window.
    pub fn scale_count(&mut self, window: &ZoomWindow) -> usize {
        let adjusted = |count: usize, boundary_gap: bool| {
            if boundary_gap { count + 1 } else { count }
        };

        if matches!(self.domain, AxisDomain::Value(_)) {
            return adjusted(self.tick_count, self.boundary_gap);
        }

        let data_count = self.data_count(window);
        if data_count > 2 * self.tick_count || data_count == 0 {
            adjusted(self.tick_count, self.boundary_gap)
        } else {
            adjusted(data_count, self.boundary_gap)
        }
    }

    /// Pixel distance between adjacent splits on an axis of `axis_width`.
    pub fn split_width(&mut self, axis_width: f64, window: &ZoomWindow) -> f64 {
        let split_count = self.split_count(window) as f64;
        let sections = if self.boundary_gap {
            split_count
        } else {
            split_count - 1.0
        };
        axis_width / sections
    }

    /// Pixel distance between adjacent scale labels on an axis of
    /// `axis_width`. The divisor is floored at one section.
    pub fn scale_width(&mut self, axis_width: f64, window: &ZoomWindow) -> f64 {
        let sections = self.scale_count(window).saturating_sub(1).max(1);
        axis_width / sections as f64
    }

    /// Pixel distance between adjacent data points on an axis of `axis_width`.
    pub fn data_width(&mut self, axis_width: f64, window: &ZoomWindow) -> f64 {
        let data_count = self.data_count(window) as f64;
        let sections = if self.boundary_gap {
            data_count
        } else {
            data_count - 1.0
        };
        axis_width / sections
    }

    /// Label text for the scale slot at `index`.
    ///
    /// Value axes interpolate linearly across the range and format whole
    /// values without a fraction, everything else with one decimal. Category
    /// axes pick a representative label by deterministic downsampling of the
    /// visible slice; an empty slice yields an empty string.
    pub fn scale_label(&mut self, index: usize, window: &ZoomWindow) -> String {
        let split_count = self.split_count(window);
        if let AxisDomain::Value(range) = &self.domain {
            let value =
                range.min + (range.max - range.min) * index as f64 / (split_count as f64 - 1.0);
            return format_value_label(value);
        }

        let boundary_gap = self.boundary_gap;
        let visible = self.visible_categories(window);
        let data_count = visible.len();
        if data_count == 0 {
            return String::new();
        }

        // The divisor is floored at one split so a zero tick-count
        // configuration degrades instead of dividing by zero.
        let split_count = split_count.max(1);
        if index == split_count - 1 && !boundary_gap {
            return visible[data_count - 1].clone();
        }

        let rate = (data_count / split_count).max(1);
        let offset = if boundary_gap { rate / 2 } else { 0 };
        let picked = if index * rate >= data_count - 1 {
            data_count - 1
        } else {
            // The half-rate offset can step past the end for data sizes just
            // above the adaptive threshold; such ticks read the last label.
            (offset + index * rate).min(data_count - 1)
        };
        visible[picked].clone()
    }

    fn refresh_window_cache(&mut self, window: &ZoomWindow) {
        if !window.visible {
            return;
        }
        let AxisDomain::Category(labels) = &self.domain else {
            return;
        };

        let bounds = window.resolved_bounds(labels.len());
        if self.cache.bounds != Some(bounds) {
            let (start, end) = bounds;
            self.cache.slice = if labels.is_empty() {
                Vec::new()
            } else {
                let count = if start == end { 1 } else { end - start + 1 };
                labels[start..start + count].to_vec()
            };
            self.cache.bounds = Some(bounds);
            self.cache.recomputations += 1;
            debug!(
                start,
                end,
                count = self.cache.slice.len(),
                "recomputed visible category window"
            );
        } else if bounds.1 == 0 {
            // A repeated (0, 0) window pins the cached slice empty; this is
            // the single-category edge of the windowing contract.
            self.cache.slice.clear();
        }
    }
}

fn format_value_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value}")
    } else {
        format!("{value:.1}")
    }
}
