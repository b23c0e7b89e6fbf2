//! Loosely typed rows of an uploaded dataset.
//!
//! Uploaded CSVs are not normalized at ingestion: column names keep their
//! original case and spacing, and cell types are whatever the server could
//! make of the text. Every consumer resolves columns itself (see
//! `viewmodel::columns`), so a row is just a map from the literal column
//! name to a scalar cell.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One row of uploaded tabular sensor data, keyed by the literal column name.
pub type Record = HashMap<String, CellValue>;

/// The full ordered collection of rows for the current upload. Row order is
/// source order and doubles as the x-axis ordering of the trend chart.
pub type Dataset = Vec<Record>;

/// A single scalar cell.
///
/// Serialized untagged so the wire format stays plain JSON scalars: numbers
/// where the server parsed one, text otherwise, `null` for a column a row
/// never had.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Null,
}

impl CellValue {
    /// Numeric reading of the cell. Numeric-looking text parses the way a
    /// chart consumer would coerce it; everything else is `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Null => None,
        }
    }

    /// Lossy coercion used by aggregate builders: non-numeric and non-finite
    /// cells count as zero instead of being excluded, so they still weigh in
    /// the denominator of a mean.
    pub fn number_or_zero(&self) -> f64 {
        self.as_number().filter(|n| n.is_finite()).unwrap_or(0.0)
    }

    /// Truthiness for the fallback rules of the builders: missing cells,
    /// empty text and zero all read as absent.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Null => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            CellValue::Text(s) => f.write_str(s),
            CellValue::Null => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_reads_as_number() {
        assert_eq!(CellValue::Text(" 12.5 ".into()).as_number(), Some(12.5));
        assert_eq!(CellValue::Text("N/A".into()).as_number(), None);
        assert_eq!(CellValue::Number(3.0).as_number(), Some(3.0));
        assert_eq!(CellValue::Null.as_number(), None);
    }

    #[test]
    fn zero_coercion_keeps_bad_cells_in_the_denominator() {
        assert_eq!(CellValue::Text("bad".into()).number_or_zero(), 0.0);
        assert_eq!(CellValue::Number(f64::NAN).number_or_zero(), 0.0);
        assert_eq!(CellValue::Number(7.0).number_or_zero(), 7.0);
    }

    #[test]
    fn empty_and_zero_cells_are_falsy() {
        assert!(!CellValue::Null.is_truthy());
        assert!(!CellValue::Text(String::new()).is_truthy());
        assert!(!CellValue::Number(0.0).is_truthy());
        assert!(CellValue::Text("Pump".into()).is_truthy());
        assert!(CellValue::Number(-1.0).is_truthy());
    }

    #[test]
    fn integral_numbers_display_without_decimals() {
        assert_eq!(CellValue::Number(4.0).to_string(), "4");
        assert_eq!(CellValue::Number(4.5).to_string(), "4.5");
        assert_eq!(CellValue::Text("08:15".into()).to_string(), "08:15");
    }
}
