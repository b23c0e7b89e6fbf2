//! Column alias resolution for loosely schematized uploads.
//!
//! The same logical column arrives under many spellings (`FlowRate`,
//! `flowrate`, `Flow Rate`), so each semantic field carries an ordered alias
//! list and resolution is case-insensitive. Resolution runs once against the
//! first row of a dataset and the resolved key is reused for every row; a
//! later row presenting the column under yet another case reads as missing.
//! That trade keeps all rows consistent and is tolerated.

use crate::model::record::Record;

/// Aliases for the flow rate column, in priority order.
pub const FLOW_ALIASES: &[&str] = &["FlowRate", "Flow Rate"];
/// Aliases for the pressure column.
pub const PRESSURE_ALIASES: &[&str] = &["Pressure"];
/// Aliases for the temperature column.
pub const TEMPERATURE_ALIASES: &[&str] = &["Temperature"];
/// Aliases for the equipment type column.
pub const TYPE_ALIASES: &[&str] = &["Type", "EquipmentType"];
/// Aliases for the timestamp column.
pub const TIMESTAMP_ALIASES: &[&str] = &["Timestamp"];

/// Case-insensitive alias lookup over an arbitrary key set.
///
/// Candidates are tried in order; the first key whose lowercase form equals
/// the lowercase form of a candidate wins. `None` when no candidate matches
/// any key, which callers treat as "every row misses this column".
pub fn resolve_key<'a, I>(keys: I, candidates: &[&str]) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    for candidate in candidates {
        let wanted = candidate.to_lowercase();
        for key in keys.clone() {
            if key.to_lowercase() == wanted {
                return Some(key);
            }
        }
    }
    None
}

/// `resolve_key` against the key set of one record, by convention the
/// first row of the dataset, which acts as the schema oracle for the rest.
pub fn resolve_column<'a>(record: &'a Record, candidates: &[&str]) -> Option<&'a str> {
    resolve_key(record.keys().map(String::as_str), candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::CellValue;

    fn record(keys: &[&str]) -> Record {
        keys.iter()
            .map(|k| (k.to_string(), CellValue::Number(1.0)))
            .collect()
    }

    #[test]
    fn resolution_is_case_insensitive() {
        let upper = record(&["FLOWRATE"]);
        let camel = record(&["flowRate"]);
        assert_eq!(resolve_column(&upper, FLOW_ALIASES), Some("FLOWRATE"));
        assert_eq!(resolve_column(&camel, FLOW_ALIASES), Some("flowRate"));
    }

    #[test]
    fn candidates_are_tried_in_order() {
        let spaced = record(&["flow rate", "Pressure"]);
        assert_eq!(resolve_column(&spaced, FLOW_ALIASES), Some("flow rate"));
    }

    #[test]
    fn unresolvable_column_is_none() {
        let other = record(&["Voltage"]);
        assert_eq!(resolve_column(&other, FLOW_ALIASES), None);
        assert_eq!(resolve_key(std::iter::empty::<&str>(), FLOW_ALIASES), None);
    }
}
