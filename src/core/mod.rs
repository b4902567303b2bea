pub mod axis;
pub mod legend;
pub mod types;
pub mod zoom;

pub use axis::{
    AxisDomain, AxisModel, AxisStyle, SplitLineKind, SplitLineStyle, TickStyle, ValueRange,
};
pub use legend::{
    LegendAnchor, LegendConfig, LegendEntry, LegendGeometry, LegendModel, LegendOrient,
    SlotWidget, slot_offset,
};
pub use types::{Color, Offset};
pub use zoom::ZoomWindow;
