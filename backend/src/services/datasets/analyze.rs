//! CSV parsing and summary computation for uploaded datasets.
//!
//! Produces the two things the dashboard needs from an upload: aggregate
//! statistics over the whole file, and a preview slice of the rows as
//! loosely typed records for the chart builders.
//!
//! Means here are exclusion-based: only cells that parse as numbers enter
//! the numerator and the denominator. The client-side chart aggregation
//! uses a different, zero-coercion policy; the two are intentionally
//! distinct and must not be unified.

use std::collections::BTreeMap;

use common::model::record::{CellValue, Dataset, Record};
use common::viewmodel::resolve_key;

/// Rows included in the preview payload returned to the dashboard.
const PREVIEW_ROWS: usize = 500;

/// Server-side alias tables, wider than the client's because historical
/// uploads used more spellings.
const FLOW_ALIASES: &[&str] = &["Flowrate", "Flow Rate", "Flow_Rate"];
const PRESSURE_ALIASES: &[&str] = &["Pressure"];
const TEMPERATURE_ALIASES: &[&str] = &["Temperature", "Temp"];
const TYPE_ALIASES: &[&str] = &["Type", "EquipmentType"];
const STATUS_ALIASES: &[&str] = &["Status"];

/// Everything computed from one uploaded file.
pub struct Analysis {
    pub total_count: u64,
    pub avg_flowrate: f64,
    pub avg_pressure: f64,
    pub avg_temperature: f64,
    /// `None` when the file has no type-like column at all.
    pub equipment_distribution: Option<BTreeMap<String, u64>>,
    pub preview: Dataset,
}

/// Parses CSV bytes and computes the upload summary.
pub fn analyze_csv(bytes: &[u8]) -> Result<Analysis, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|c| c.trim().to_string()).collect());
    }

    let flow_col = find_column(&headers, FLOW_ALIASES);
    let pressure_col = find_column(&headers, PRESSURE_ALIASES);
    let temperature_col = find_column(&headers, TEMPERATURE_ALIASES);
    let dist_col = find_column(&headers, TYPE_ALIASES).or_else(|| find_column(&headers, STATUS_ALIASES));

    Ok(Analysis {
        total_count: rows.len() as u64,
        avg_flowrate: column_mean(&rows, flow_col),
        avg_pressure: column_mean(&rows, pressure_col),
        avg_temperature: column_mean(&rows, temperature_col),
        equipment_distribution: dist_col.map(|col| value_counts(&rows, col)),
        preview: preview_records(&headers, &rows),
    })
}

fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    let resolved = resolve_key(headers.iter().map(String::as_str), candidates)?;
    headers.iter().position(|h| h == resolved)
}

/// Mean over the cells of one column that parse as finite numbers. Zero when
/// the column is absent or holds no numeric cell.
fn column_mean(rows: &[Vec<String>], col: Option<usize>) -> f64 {
    let Some(col) = col else {
        return 0.0;
    };
    let mut sum = 0.0;
    let mut count = 0u64;
    for row in rows {
        if let Some(value) = row.get(col).and_then(|c| parse_number(c)) {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Count per distinct non-empty value of one column.
fn value_counts(rows: &[Vec<String>], col: usize) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for row in rows {
        match row.get(col) {
            Some(value) if !value.is_empty() => {
                *counts.entry(value.clone()).or_insert(0) += 1;
            }
            _ => {}
        }
    }
    counts
}

fn parse_number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// The first `PREVIEW_ROWS` rows as loosely typed records.
///
/// Empty and short cells become `0`, matching what the dashboard historically
/// received for missing readings; numeric-looking text becomes a number,
/// everything else stays text.
fn preview_records(headers: &[String], rows: &[Vec<String>]) -> Dataset {
    rows.iter()
        .take(PREVIEW_ROWS)
        .map(|row| {
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| (header.clone(), cell_value(row.get(i))))
                .collect::<Record>()
        })
        .collect()
}

fn cell_value(cell: Option<&String>) -> CellValue {
    match cell {
        None => CellValue::Number(0.0),
        Some(raw) if raw.is_empty() => CellValue::Number(0.0),
        Some(raw) => match parse_number(raw) {
            Some(n) => CellValue::Number(n),
            None => CellValue::Text(raw.clone()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Timestamp,FlowRate,Pressure,Temp,Type
08:00,10,2.0,40,Pump
08:05,20,3.0,45,Pump
08:10,5,1.5,38,Valve
";

    #[test]
    fn means_are_exclusion_based() {
        let csv = "FlowRate,Type\n10,Pump\nN/A,Pump\n";
        let analysis = analyze_csv(csv.as_bytes()).unwrap();
        // One numeric cell out of two rows: the bad cell is excluded from
        // the denominator, unlike the client-side chart aggregation.
        assert_eq!(analysis.avg_flowrate, 10.0);
        assert_eq!(analysis.total_count, 2);
    }

    #[test]
    fn aliases_resolve_case_insensitively() {
        let csv = "flow_rate,PRESSURE,temp\n4,1,30\n6,3,50\n";
        let analysis = analyze_csv(csv.as_bytes()).unwrap();
        assert_eq!(analysis.avg_flowrate, 5.0);
        assert_eq!(analysis.avg_pressure, 2.0);
        assert_eq!(analysis.avg_temperature, 40.0);
    }

    #[test]
    fn distribution_counts_types_and_skips_empties() {
        let analysis = analyze_csv(SAMPLE.as_bytes()).unwrap();
        let distribution = analysis.equipment_distribution.unwrap();
        assert_eq!(distribution.get("Pump"), Some(&2));
        assert_eq!(distribution.get("Valve"), Some(&1));
    }

    #[test]
    fn distribution_falls_back_to_status_then_none() {
        let with_status = "FlowRate,Status\n1,OK\n2,OK\n3,FAULT\n";
        let analysis = analyze_csv(with_status.as_bytes()).unwrap();
        assert_eq!(analysis.equipment_distribution.unwrap().get("OK"), Some(&2));

        let without = "FlowRate\n1\n2\n";
        let analysis = analyze_csv(without.as_bytes()).unwrap();
        assert!(analysis.equipment_distribution.is_none());
    }

    #[test]
    fn preview_keeps_row_order_and_types() {
        let analysis = analyze_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(analysis.preview.len(), 3);
        let first = &analysis.preview[0];
        assert_eq!(first.get("Timestamp"), Some(&CellValue::Text("08:00".into())));
        assert_eq!(first.get("FlowRate"), Some(&CellValue::Number(10.0)));
        assert_eq!(first.get("Type"), Some(&CellValue::Text("Pump".into())));
    }

    #[test]
    fn missing_cells_become_zero() {
        let csv = "FlowRate,Pressure\n10,\n20\n";
        let analysis = analyze_csv(csv.as_bytes()).unwrap();
        assert_eq!(
            analysis.preview[0].get("Pressure"),
            Some(&CellValue::Number(0.0))
        );
        assert_eq!(
            analysis.preview[1].get("Pressure"),
            Some(&CellValue::Number(0.0))
        );
    }

    #[test]
    fn empty_file_analyzes_to_zeroes() {
        let analysis = analyze_csv(b"FlowRate,Type\n").unwrap();
        assert_eq!(analysis.total_count, 0);
        assert_eq!(analysis.avg_flowrate, 0.0);
        assert!(analysis.preview.is_empty());
        assert_eq!(analysis.equipment_distribution, Some(BTreeMap::new()));
    }
}
