use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::types::{Color, Offset};
use crate::error::{ChartError, ChartResult};

/// Stacking direction of legend slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendOrient {
    #[default]
    Horizontal,
    Vertical,
}

/// Anchor alignment of the legend block relative to its pivot point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendAnchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    #[default]
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl LegendAnchor {
    #[must_use]
    fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopCenter | Self::TopRight)
    }

    #[must_use]
    fn is_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomCenter | Self::BottomRight)
    }

    #[must_use]
    fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::CenterLeft | Self::BottomLeft)
    }

    #[must_use]
    fn is_right(self) -> bool {
        matches!(self, Self::TopRight | Self::CenterRight | Self::BottomRight)
    }
}

/// Pixel geometry of one legend slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendGeometry {
    pub item_width: f64,
    pub item_height: f64,
    pub item_gap: f64,
    pub item_font_size: u32,
}

impl Default for LegendGeometry {
    fn default() -> Self {
        Self {
            item_width: 50.0,
            item_height: 20.0,
            item_gap: 5.0,
            item_font_size: 18,
        }
    }
}

impl LegendGeometry {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.item_width.is_finite()
            || !self.item_height.is_finite()
            || !self.item_gap.is_finite()
            || self.item_width < 0.0
            || self.item_height < 0.0
            || self.item_gap < 0.0
        {
            return Err(ChartError::InvalidConfig(
                "legend item geometry must be finite and >= 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Visual configuration of the legend block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    pub show: bool,
    pub orient: LegendOrient,
    pub anchor: LegendAnchor,
    pub geometry: LegendGeometry,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            show: true,
            orient: LegendOrient::default(),
            anchor: LegendAnchor::default(),
            geometry: LegendGeometry::default(),
        }
    }
}

/// Mutation surface of one legend slot widget.
///
/// The legend never constructs widgets; the embedding UI registers a handle
/// per slot through [`LegendModel::bind_slot`] and the legend repositions and
/// restyles it from then on.
pub trait SlotWidget {
    fn set_offset(&mut self, offset: Offset);
    fn set_visible(&mut self, visible: bool);
    fn set_label(&mut self, text: &str);
    fn set_fill(&mut self, color: Color);
}

/// One named series reference with its toggle state and bound slot widget.
#[derive(Debug, Clone)]
pub struct LegendEntry<H> {
    name: String,
    active: bool,
    slot: Option<H>,
}

impl<H> LegendEntry<H> {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn slot(&self) -> Option<&H> {
        self.slot.as_ref()
    }
}

/// Legend model: ordered unique entries, their visibility toggles, and the
/// slot layout algebra.
///
/// Entries keep name, toggle flag, and widget handle in one struct, so the
/// three stay index-aligned by construction. Missing state always reads as
/// visible: lookups past the known entries or flags resolve to `true`, and
/// slot operations on unbound indices are ignored.
#[derive(Debug, Clone)]
pub struct LegendModel<H> {
    config: LegendConfig,
    entries: Vec<LegendEntry<H>>,
}

impl<H> Default for LegendModel<H> {
    fn default() -> Self {
        Self {
            config: LegendConfig::default(),
            entries: Vec::new(),
        }
    }
}

impl<H> LegendModel<H> {
    pub fn new(config: LegendConfig) -> ChartResult<Self> {
        config.geometry.validate()?;
        Ok(Self {
            config,
            entries: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> LegendConfig {
        self.config
    }

    pub fn set_config(&mut self, config: LegendConfig) -> ChartResult<()> {
        config.geometry.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[LegendEntry<H>] {
        &self.entries
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Appends a new entry unless the name is already present.
    pub fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.contains(&name) {
            return;
        }

        trace!(name = %name, "added legend entry");
        self.entries.push(LegendEntry {
            name,
            active: true,
            slot: None,
        });
    }

    /// Removes the entry with the given name, if present.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|entry| entry.name != name);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether the named series should be rendered.
    ///
    /// An empty or unknown name reads as active.
    #[must_use]
    pub fn is_active(&self, name: &str) -> bool {
        if name.is_empty() {
            return true;
        }
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .is_none_or(|entry| entry.active)
    }

    /// Whether the series at `index` should be rendered.
    ///
    /// An out-of-range index is coerced to the first entry; if no entry
    /// exists there either, the answer is active.
    #[must_use]
    pub fn is_active_at(&self, index: usize) -> bool {
        let index = if index < self.entries.len() { index } else { 0 };
        self.entries.get(index).is_none_or(|entry| entry.active)
    }

    pub fn set_active(&mut self, name: &str, active: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) {
            entry.active = active;
        }
    }

    /// Sets the toggle flag at `index`; out-of-range indices are ignored.
    pub fn set_active_at(&mut self, index: usize, active: bool) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.active = active;
        }
    }

    /// Displacement of the slot at `index` from the legend pivot.
    #[must_use]
    pub fn slot_offset(&self, index: usize) -> Offset {
        slot_offset(
            self.config.orient,
            self.config.anchor,
            self.config.geometry,
            index,
            self.entries.len(),
        )
    }
}

impl<H: SlotWidget> LegendModel<H> {
    /// Registers the widget handle for the slot at `index`.
    ///
    /// The handle is positioned via the layout function, shown or hidden per
    /// the legend's `show` flag, and labeled with the entry name; a handle
    /// bound earlier at the same index is replaced. Binding past the known
    /// entries is ignored.
    pub fn bind_slot(&mut self, index: usize, mut handle: H) {
        let size = self.entries.len();
        if index >= size {
            warn!(index, size, "ignoring slot bind outside legend entries");
            return;
        }

        handle.set_offset(slot_offset(
            self.config.orient,
            self.config.anchor,
            self.config.geometry,
            index,
            size,
        ));
        handle.set_visible(self.config.show);
        handle.set_label(&self.entries[index].name);
        self.entries[index].slot = Some(handle);
    }

    /// Recolors the slot at `index` with the active or inactive color
    /// depending on its toggle state. Unbound slots are ignored.
    pub fn update_slot_color(&mut self, index: usize, active_color: Color, inactive_color: Color) {
        let active = self.is_active_at(index);
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        let Some(slot) = entry.slot.as_mut() else {
            return;
        };

        slot.set_fill(if active { active_color } else { inactive_color });
    }
}

/// Computes one slot's displacement from the legend pivot.
///
/// Pure function of orientation, anchor, and item geometry; `size` is the
/// total slot count. Vertical legends stack along y with x pinned to zero,
/// horizontal legends mirror that along x. Top/left anchors grow away from
/// the pivot, bottom/right anchors end at it, center anchors straddle it.
/// Arithmetic stays in `f64`, so an index outside `0..size` lands outside
/// the block instead of panicking.
#[must_use]
pub fn slot_offset(
    orient: LegendOrient,
    anchor: LegendAnchor,
    geometry: LegendGeometry,
    index: usize,
    size: usize,
) -> Offset {
    let index = index as f64;
    let size = size as f64;

    match orient {
        LegendOrient::Vertical => {
            let step = geometry.item_height + geometry.item_gap;
            let y = if anchor.is_top() {
                -index * step
            } else if anchor.is_bottom() {
                (size - index - 1.0) * step
            } else {
                let total_height = size * geometry.item_height + (size - 1.0) * geometry.item_gap;
                total_height / 2.0 - index * step
            };
            Offset::new(0.0, y)
        }
        LegendOrient::Horizontal => {
            let step = geometry.item_width + geometry.item_gap;
            let x = if anchor.is_left() {
                index * step
            } else if anchor.is_right() {
                -(size - index - 1.0) * step
            } else {
                let total_width = size * geometry.item_width + (size - 1.0) * geometry.item_gap;
                -total_width / 2.0 + geometry.item_width / 2.0 + index * step
            };
            Offset::new(x, 0.0)
        }
    }
}
