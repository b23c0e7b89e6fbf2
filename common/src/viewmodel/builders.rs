//! The five chart-series builders.
//!
//! Column keys are resolved once against the first row (see `columns`) and
//! reused for the whole dataset. Grouped builders enumerate categories in
//! first-seen order; the correlation and distribution builders apply the
//! same fallback rules so their category sequences are always identical for
//! the same dataset, which keeps legends and axis labels in agreement.

use rand::Rng;

use crate::model::record::{CellValue, Dataset, Record};
use crate::model::series::{
    AxisLabel, CategorySeries, DistributionSeries, PointGroup, ScatterPoint, TrendSeries,
};

use super::columns::{
    FLOW_ALIASES, PRESSURE_ALIASES, TEMPERATURE_ALIASES, TIMESTAMP_ALIASES, TYPE_ALIASES,
    resolve_column,
};

/// Category label for rows with no usable equipment type in the grouped
/// point charts.
const OTHER_CATEGORY: &str = "Other";
/// Category label for rows with no usable equipment type in the bar
/// aggregate.
const UNKNOWN_CATEGORY: &str = "Unknown";
/// Half-width of the uniform jitter band around a category index.
pub const JITTER: f64 = 0.15;

/// Reads a resolved column from a row, treating failed resolution and absent
/// keys uniformly as a missing cell.
fn cell<'a>(record: &'a Record, key: Option<&str>) -> &'a CellValue {
    key.and_then(|k| record.get(k)).unwrap_or(&CellValue::Null)
}

/// Per-row category under the grouped-chart fallback rules: empty, zero and
/// missing type cells all collapse to `fallback`.
fn category_of(record: &Record, key: Option<&str>, fallback: &str) -> String {
    let value = cell(record, key);
    if value.is_truthy() {
        value.to_string()
    } else {
        fallback.to_string()
    }
}

fn push_point(groups: &mut Vec<PointGroup>, label: String, point: ScatterPoint) {
    match groups.iter_mut().find(|g| g.label == label) {
        Some(group) => group.points.push(point),
        None => groups.push(PointGroup {
            label,
            points: vec![point],
        }),
    }
}

/// Row-order projection of timestamp, flow and pressure for the trend chart.
///
/// One label per record: the timestamp cell when it resolves and is
/// non-empty, the row index otherwise. Values pass through raw and
/// index-aligned; a missing reading is a gap for the consumer, never a
/// crash here.
pub fn build_trend_series(data: &Dataset) -> TrendSeries {
    let Some(first) = data.first() else {
        return TrendSeries::default();
    };
    let time_key = resolve_column(first, TIMESTAMP_ALIASES);
    let flow_key = resolve_column(first, FLOW_ALIASES);
    let pressure_key = resolve_column(first, PRESSURE_ALIASES);

    let mut series = TrendSeries::default();
    for (i, record) in data.iter().enumerate() {
        let stamp = cell(record, time_key);
        series.labels.push(if stamp.is_truthy() {
            AxisLabel::Text(stamp.to_string())
        } else {
            AxisLabel::Index(i)
        });
        series.flow.push(cell(record, flow_key).clone());
        series.pressure.push(cell(record, pressure_key).clone());
    }
    series
}

/// Mean flow per equipment type, categories in first-seen order.
///
/// Flow cells that do not read as numbers contribute zero to the sum while
/// still counting toward the denominator, so bad data dilutes the mean
/// rather than being excluded. Changing this would silently change what
/// every historical average means.
pub fn build_category_averages(data: &Dataset) -> CategorySeries {
    let Some(first) = data.first() else {
        return CategorySeries::default();
    };
    let type_key = resolve_column(first, TYPE_ALIASES);
    let flow_key = resolve_column(first, FLOW_ALIASES);

    let mut labels: Vec<String> = Vec::new();
    let mut sums: Vec<(f64, u64)> = Vec::new();
    for record in data {
        let category = category_of(record, type_key, UNKNOWN_CATEGORY);
        let flow = cell(record, flow_key).number_or_zero();
        match labels.iter().position(|l| *l == category) {
            Some(i) => {
                sums[i].0 += flow;
                sums[i].1 += 1;
            }
            None => {
                labels.push(category);
                sums.push((flow, 1));
            }
        }
    }
    let values = sums
        .iter()
        .map(|(sum, count)| sum / *count as f64)
        .collect();
    CategorySeries { labels, values }
}

/// Flow vs. pressure point clouds grouped by equipment type.
///
/// Coordinates are the raw cells, uncoerced: a non-numeric reading still
/// produces a point and the chart layer decides what to drop.
pub fn build_correlation_series(data: &Dataset) -> Vec<PointGroup> {
    let Some(first) = data.first() else {
        return Vec::new();
    };
    let flow_key = resolve_column(first, FLOW_ALIASES);
    let pressure_key = resolve_column(first, PRESSURE_ALIASES);
    let type_key = resolve_column(first, TYPE_ALIASES);

    let mut groups: Vec<PointGroup> = Vec::new();
    for record in data {
        let category = category_of(record, type_key, OTHER_CATEGORY);
        let point = ScatterPoint {
            x: cell(record, flow_key).clone(),
            y: cell(record, pressure_key).clone(),
        };
        push_point(&mut groups, category, point);
    }
    groups
}

/// Distinct equipment types in first-seen order over the dataset.
///
/// This is the single ordering shared by the distribution point groups and
/// the x-axis tick labels. It is computed once and embedded in the
/// `DistributionSeries`; both consumers must read that one artifact or the
/// legend and the axis drift apart.
pub fn distribution_categories(data: &Dataset) -> Vec<String> {
    let type_key = data
        .first()
        .and_then(|first| resolve_column(first, TYPE_ALIASES));
    let mut categories: Vec<String> = Vec::new();
    for record in data {
        let category = category_of(record, type_key, OTHER_CATEGORY);
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

/// Temperature spread per equipment type, jittered around the category
/// index.
///
/// x = category index plus a uniform offset in `[-JITTER, +JITTER]` drawn
/// from `rng`; the offset exists purely to de-overlap points and carries no
/// meaning. The random source is injected so deterministic tests can pin
/// it. y is the raw temperature cell, untouched.
pub fn build_distribution_series<R: Rng>(data: &Dataset, rng: &mut R) -> DistributionSeries {
    let Some(first) = data.first() else {
        return DistributionSeries::default();
    };
    let temp_key = resolve_column(first, TEMPERATURE_ALIASES);
    let type_key = resolve_column(first, TYPE_ALIASES);
    let categories = distribution_categories(data);

    let mut groups: Vec<PointGroup> = Vec::new();
    for record in data {
        let category = category_of(record, type_key, OTHER_CATEGORY);
        let index = categories
            .iter()
            .position(|c| *c == category)
            .unwrap_or_default();
        let point = ScatterPoint {
            x: CellValue::Number(index as f64 + rng.gen_range(-JITTER..=JITTER)),
            y: cell(record, temp_key).clone(),
        };
        push_point(&mut groups, category, point);
    }
    DistributionSeries { categories, groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn num(v: f64) -> CellValue {
        CellValue::Number(v)
    }

    fn text(v: &str) -> CellValue {
        CellValue::Text(v.to_string())
    }

    fn record(cells: &[(&str, CellValue)]) -> Record {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn sensor_rows() -> Dataset {
        vec![
            record(&[
                ("Timestamp", text("08:00")),
                ("FlowRate", num(10.0)),
                ("Pressure", num(2.0)),
                ("Temperature", num(40.0)),
                ("Type", text("Pump")),
            ]),
            record(&[
                ("Timestamp", text("08:05")),
                ("FlowRate", num(20.0)),
                ("Pressure", num(3.0)),
                ("Temperature", num(45.0)),
                ("Type", text("Pump")),
            ]),
            record(&[
                ("Timestamp", text("08:10")),
                ("FlowRate", num(5.0)),
                ("Pressure", num(1.5)),
                ("Temperature", num(38.0)),
                ("Type", text("Valve")),
            ]),
        ]
    }

    #[test]
    fn trend_series_is_row_aligned() {
        let data = sensor_rows();
        let series = build_trend_series(&data);
        assert_eq!(series.labels.len(), data.len());
        assert_eq!(series.flow.len(), series.labels.len());
        assert_eq!(series.pressure.len(), series.labels.len());
        assert_eq!(series.labels[0], AxisLabel::Text("08:00".into()));
        assert_eq!(series.flow[1], num(20.0));
        assert_eq!(series.pressure[2], num(1.5));
    }

    #[test]
    fn trend_labels_fall_back_to_row_index() {
        let data = vec![
            record(&[("FlowRate", num(1.0))]),
            record(&[("FlowRate", num(2.0))]),
        ];
        let series = build_trend_series(&data);
        assert_eq!(series.labels, vec![AxisLabel::Index(0), AxisLabel::Index(1)]);
    }

    #[test]
    fn trend_empty_timestamp_uses_index() {
        let data = vec![
            record(&[("Timestamp", text("08:00")), ("FlowRate", num(1.0))]),
            record(&[("Timestamp", text("")), ("FlowRate", num(2.0))]),
        ];
        let series = build_trend_series(&data);
        assert_eq!(series.labels[1], AxisLabel::Index(1));
    }

    #[test]
    fn trend_missing_column_yields_gaps() {
        let data = vec![record(&[("Timestamp", text("08:00"))])];
        let series = build_trend_series(&data);
        assert_eq!(series.flow, vec![CellValue::Null]);
        assert_eq!(series.pressure, vec![CellValue::Null]);
    }

    #[test]
    fn category_averages_group_in_first_seen_order() {
        let series = build_category_averages(&sensor_rows());
        assert_eq!(series.labels, vec!["Pump".to_string(), "Valve".to_string()]);
        assert_eq!(series.values, vec![15.0, 5.0]);
    }

    #[test]
    fn non_numeric_flow_dilutes_the_mean() {
        let data = vec![
            record(&[("Type", text("Pump")), ("FlowRate", num(10.0))]),
            record(&[("Type", text("Pump")), ("FlowRate", text("N/A"))]),
        ];
        let series = build_category_averages(&data);
        assert_eq!(series.values, vec![5.0]);
    }

    #[test]
    fn rows_without_type_aggregate_under_unknown() {
        let data = vec![
            record(&[("FlowRate", num(4.0))]),
            record(&[("FlowRate", num(6.0))]),
        ];
        let series = build_category_averages(&data);
        assert_eq!(series.labels, vec!["Unknown".to_string()]);
        assert_eq!(series.values, vec![5.0]);
    }

    #[test]
    fn correlation_keeps_raw_cells() {
        let data = vec![record(&[
            ("FlowRate", text("off")),
            ("Pressure", num(2.0)),
            ("Type", text("Pump")),
        ])];
        let groups = build_correlation_series(&data);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].points[0].x, text("off"));
        assert_eq!(groups[0].points[0].y, num(2.0));
    }

    #[test]
    fn correlation_falls_back_to_other() {
        let data = vec![
            record(&[("FlowRate", num(1.0)), ("Pressure", num(1.0))]),
            record(&[
                ("FlowRate", num(2.0)),
                ("Pressure", num(2.0)),
                ("Type", text("Pump")),
            ]),
        ];
        let groups = build_correlation_series(&data);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Other", "Pump"]);
    }

    #[test]
    fn correlation_and_distribution_agree_on_category_order() {
        let data = vec![
            record(&[("Type", text("Valve")), ("FlowRate", num(1.0))]),
            record(&[("FlowRate", num(2.0))]),
            record(&[("Type", text("Pump")), ("FlowRate", num(3.0))]),
            record(&[("Type", text("Valve")), ("FlowRate", num(4.0))]),
        ];
        let mut rng = SmallRng::seed_from_u64(7);
        let correlation: Vec<String> = build_correlation_series(&data)
            .into_iter()
            .map(|g| g.label)
            .collect();
        let distribution = build_distribution_series(&data, &mut rng);
        let groups: Vec<String> = distribution.groups.iter().map(|g| g.label.clone()).collect();
        assert_eq!(correlation, distribution.categories);
        assert_eq!(correlation, groups);
        assert_eq!(distribution.categories, distribution_categories(&data));
    }

    #[test]
    fn jitter_stays_within_the_band() {
        let mut data = Vec::new();
        for i in 0..50 {
            let label = if i % 2 == 0 { "Pump" } else { "Valve" };
            data.push(record(&[
                ("Type", text(label)),
                ("Temperature", num(30.0 + i as f64)),
            ]));
        }
        let mut rng = SmallRng::seed_from_u64(42);
        let series = build_distribution_series(&data, &mut rng);
        for group in &series.groups {
            let index = series
                .categories
                .iter()
                .position(|c| *c == group.label)
                .unwrap() as f64;
            for point in &group.points {
                let x = point.x.as_number().unwrap();
                assert!(x >= index - JITTER && x <= index + JITTER, "x = {}", x);
            }
        }
    }

    #[test]
    fn distribution_y_is_the_raw_temperature() {
        let data = vec![record(&[
            ("Type", text("Pump")),
            ("Temperature", text("overheat")),
        ])];
        let mut rng = SmallRng::seed_from_u64(1);
        let series = build_distribution_series(&data, &mut rng);
        assert_eq!(series.groups[0].points[0].y, text("overheat"));
    }

    #[test]
    fn distribution_tick_labels_read_the_shared_ordering() {
        let mut rng = SmallRng::seed_from_u64(1);
        let series = build_distribution_series(&sensor_rows(), &mut rng);
        assert_eq!(series.tick_label(0.0), Some("Pump"));
        assert_eq!(series.tick_label(0.4), Some("Pump"));
        assert_eq!(series.tick_label(1.0), Some("Valve"));
        assert_eq!(series.tick_label(-1.0), None);
        assert_eq!(series.tick_label(5.0), None);
        assert_eq!(series.tick_label(f64::NAN), None);
    }

    #[test]
    fn empty_dataset_yields_empty_series_everywhere() {
        let data: Dataset = Vec::new();
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(build_trend_series(&data), TrendSeries::default());
        assert_eq!(build_category_averages(&data), CategorySeries::default());
        assert!(build_correlation_series(&data).is_empty());
        let distribution = build_distribution_series(&data, &mut rng);
        assert!(distribution.categories.is_empty());
        assert!(distribution.groups.is_empty());
        assert!(distribution_categories(&data).is_empty());
    }

    #[test]
    fn builders_are_idempotent_over_the_same_snapshot() {
        let data = sensor_rows();
        assert_eq!(build_trend_series(&data), build_trend_series(&data));
        assert_eq!(
            build_category_averages(&data),
            build_category_averages(&data)
        );
        assert_eq!(
            build_correlation_series(&data),
            build_correlation_series(&data)
        );
        let mut first_rng = SmallRng::seed_from_u64(9);
        let mut second_rng = SmallRng::seed_from_u64(9);
        assert_eq!(
            build_distribution_series(&data, &mut first_rng),
            build_distribution_series(&data, &mut second_rng)
        );
    }
}
