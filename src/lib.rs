//! chart-coords: coordinate and legend model core for chart components.
//!
//! This crate owns the data-facing half of a chart's layout pass: mapping a
//! zoomed category window onto a fixed-width axis (tick counts, spacings,
//! label downsampling) and placing legend slots around an anchor point.
//! Rendering, widget construction, and configuration persistence stay with
//! the embedding application.

pub mod core;
pub mod error;
pub mod telemetry;

pub use self::core::{AxisModel, LegendModel, ZoomWindow};
pub use error::{ChartError, ChartResult};
