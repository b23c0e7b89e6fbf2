//! Inline SVG chart components.
//!
//! Each component takes a chart-ready series value from `common::viewmodel`
//! and renders it into a fixed-viewBox SVG scaled by CSS. The builders pass
//! raw cells through; coordinates that do not read as finite numbers are
//! dropped here, at the presentation layer.

use yew::{html, Html};

mod bar;
mod distribution;
mod line;
mod pie;
mod scale;
mod scatter;
mod theme;

pub use bar::BarChart;
pub use distribution::DistributionChart;
pub use line::LineChart;
pub use pie::PieChart;
pub use scatter::ScatterChart;

/// Logical drawing area shared by the cartesian charts.
pub(crate) const VIEW_WIDTH: f64 = 640.0;
pub(crate) const VIEW_HEIGHT: f64 = 280.0;
pub(crate) const MARGIN: f64 = 42.0;

/// Placeholder for a chart with nothing to draw.
pub(crate) fn empty_note() -> Html {
    html! { <p class="chart-empty">{"No data"}</p> }
}
