//! Chart-ready series types produced by the view-model builders.
//!
//! These are chart-library agnostic: labels, aligned value sequences and
//! named point groups, nothing about colors or layout. Everything derives
//! `PartialEq` so builder idempotence is checkable by structural equality
//! and so the frontend can use them as component properties.

use serde::Serialize;
use std::fmt;

use crate::model::record::CellValue;

/// X-axis label for the trend chart: the raw timestamp cell when present,
/// the zero-based row index otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisLabel {
    Text(String),
    Index(usize),
}

impl fmt::Display for AxisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisLabel::Text(s) => f.write_str(s),
            AxisLabel::Index(i) => write!(f, "{}", i),
        }
    }
}

/// Dual-axis, row-aligned projection for the trend chart.
///
/// `labels`, `flow` and `pressure` always have the same length; values are
/// the raw cells so a missing reading stays a gap instead of becoming a
/// fabricated zero.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TrendSeries {
    pub labels: Vec<AxisLabel>,
    pub flow: Vec<CellValue>,
    pub pressure: Vec<CellValue>,
}

/// Per-category aggregate, labels and values aligned by index, categories in
/// first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct CategorySeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// One plotted point. Coordinates keep the raw cell values; consumers drop
/// points that do not read as finite numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: CellValue,
    pub y: CellValue,
}

/// Named point cloud, one per category, in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointGroup {
    pub label: String,
    pub points: Vec<ScatterPoint>,
}

/// Jittered per-category spread plus the category ordering it was built
/// from.
///
/// The ordering is computed once per dataset and carried here so the point
/// groups and the axis tick labels can never disagree about which index
/// means which category.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct DistributionSeries {
    pub categories: Vec<String>,
    pub groups: Vec<PointGroup>,
}

impl DistributionSeries {
    /// Maps a numeric axis tick back to the category it indexes.
    ///
    /// Ticks arrive as arbitrary numbers between integer positions, so the
    /// value is rounded first; anything outside the category range is
    /// `None` and renders as an empty label.
    pub fn tick_label(&self, tick: f64) -> Option<&str> {
        if !tick.is_finite() {
            return None;
        }
        let index = tick.round();
        if index < 0.0 {
            return None;
        }
        self.categories.get(index as usize).map(String::as_str)
    }
}

/// Aligned label/value pairs for the equipment share chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

/// One formatted stat box for the summary sidebar. Display-ready: the value
/// is already a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}
