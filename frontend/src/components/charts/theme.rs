//! Static presentation constants shared by the chart components.
//!
//! Purely visual state with no lifecycle: the data-shaping layer in
//! `common::viewmodel` never sees any of this.

/// Series palette, cycled by group index.
pub const SERIES_COLORS: [&str; 5] = ["#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6"];

/// Grid line color.
pub const GRID_COLOR: &str = "#334155";

/// Axis tick and label color.
pub const TICK_COLOR: &str = "#94a3b8";

/// Primary-axis series color (flow on the trend chart).
pub const PRIMARY_COLOR: &str = "#3b82f6";

/// Secondary-axis series color (pressure on the trend chart).
pub const SECONDARY_COLOR: &str = "#ef4444";

pub fn series_color(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}
