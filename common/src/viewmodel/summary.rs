//! Read-only projections over the server-computed summary.
//!
//! No computation happens here: the share chart gets the distribution as
//! aligned label/value sequences, the sidebar gets display-formatted stat
//! tiles. The numbers themselves are the server's.

use crate::model::series::{ShareSeries, StatTile};
use crate::model::summary::Summary;

/// Equipment distribution as aligned label/value sequences for the share
/// chart.
///
/// `None` when the server reported no distribution at all; the caller must
/// render nothing rather than an empty chart.
pub fn share_series(summary: &Summary) -> Option<ShareSeries> {
    let distribution = summary.equipment_distribution.as_ref()?;
    let mut series = ShareSeries {
        labels: Vec::new(),
        values: Vec::new(),
    };
    for (label, count) in distribution {
        series.labels.push(label.clone());
        series.values.push(*count);
    }
    Some(series)
}

/// The four stat boxes of the summary sidebar.
///
/// Formatting only: means render to two decimal places, the record count
/// verbatim.
pub fn stat_tiles(summary: &Summary) -> Vec<StatTile> {
    vec![
        StatTile {
            label: "Total Records",
            value: summary.total_count.to_string(),
        },
        StatTile {
            label: "Avg Flow",
            value: format!("{:.2}", summary.avg_flowrate),
        },
        StatTile {
            label: "Avg Pressure",
            value: format!("{:.2}", summary.avg_pressure),
        },
        StatTile {
            label: "Avg Temp",
            value: format!("{:.2}", summary.avg_temperature),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn summary(distribution: Option<BTreeMap<String, u64>>) -> Summary {
        Summary {
            upload_date: "2026-08-05T09:00:00Z".into(),
            filename: "readings.csv".into(),
            total_count: 3,
            avg_flowrate: 11.666_666,
            avg_pressure: 2.1,
            avg_temperature: 41.0,
            equipment_distribution: distribution,
        }
    }

    #[test]
    fn share_series_is_none_without_a_distribution() {
        assert_eq!(share_series(&summary(None)), None);
    }

    #[test]
    fn share_series_aligns_labels_and_values() {
        let mut counts = BTreeMap::new();
        counts.insert("Pump".to_string(), 2);
        counts.insert("Valve".to_string(), 1);
        let series = share_series(&summary(Some(counts))).unwrap();
        assert_eq!(series.labels.len(), series.values.len());
        assert_eq!(series.labels, vec!["Pump".to_string(), "Valve".to_string()]);
        assert_eq!(series.values, vec![2, 1]);
    }

    #[test]
    fn stat_tiles_format_means_to_two_decimals() {
        let tiles = stat_tiles(&summary(None));
        assert_eq!(tiles[0].value, "3");
        assert_eq!(tiles[1].value, "11.67");
        assert_eq!(tiles[2].value, "2.10");
        assert_eq!(tiles[3].value, "41.00");
    }
}
