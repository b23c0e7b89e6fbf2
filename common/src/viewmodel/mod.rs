//! Dataset view-model builder: turns the loosely schematized rows of an
//! upload into the derived series the five chart views render.
//!
//! This is the one layer of the dashboard with real decision logic: column
//! alias resolution, lossy type coercion, grouping and aggregation, and
//! consistent category labelling across independently computed charts. Each
//! builder is a pure function of the current dataset snapshot; the host UI
//! calls them on every render and nothing is retained between calls.
//!
//! Two numeric-coercion policies coexist on purpose and must stay distinct:
//! aggregate averages coerce unreadable values to zero (the bad cell still
//! counts toward the denominator, diluting the mean), while plotted points
//! keep the raw cell and leave non-numeric coordinates for the chart layer
//! to drop.

pub mod builders;
pub mod columns;
pub mod summary;

pub use builders::{
    build_category_averages, build_correlation_series, build_distribution_series,
    build_trend_series, distribution_categories,
};
pub use columns::{resolve_column, resolve_key};
pub use summary::{share_series, stat_tiles};
