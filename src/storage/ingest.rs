//! Clipboard-selection ingestion
//!
//! The surrounding tool collects data as pasted spreadsheet selections:
//! tab-separated columns, newline-separated rows, Russian-locale decimal
//! commas, and a header row that may or may not be part of the
//! selection. Parsing is forgiving — a row that does not parse is
//! skipped with a diagnostic, matching the "unparseable equals missing"
//! policy.

use tracing::warn;

use crate::types::{parse_datetime, parse_number, PressureSeries, Value};

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("no data rows found in pasted block")]
    Empty,
}

/// Parse a two-column "parameter name / value" selection.
///
/// Values that read as numbers become numbers; everything else is kept
/// as text (tags, dates, free-form notes all flow through as text and
/// get re-interpreted at lookup time).
pub fn parse_scalar_block(text: &str) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    for line in text.lines() {
        let mut cols = line.split('\t');
        let (Some(name), Some(raw)) = (cols.next(), cols.next()) else {
            continue;
        };
        let name = name.trim();
        let raw = raw.trim();
        if name.is_empty() || raw.is_empty() {
            continue;
        }
        let value = match parse_number(raw) {
            Some(n) => Value::Number(n),
            None => Value::Text(raw.to_string()),
        };
        out.push((name.to_string(), value));
    }
    out
}

/// Parse a pasted pressure-series selection.
///
/// Accepts both the three-column layout (index, timestamp, pressure) and
/// the two-column one (timestamp, pressure): the timestamp and pressure
/// are taken from the last two columns of each row. Header rows fail
/// timestamp parsing and are skipped.
pub fn parse_series_block(text: &str) -> Result<PressureSeries, IngestError> {
    let mut series = PressureSeries::default();
    for line in text.lines() {
        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() < 2 {
            continue;
        }
        let raw_at = cols[cols.len() - 2].trim();
        let raw_pressure = cols[cols.len() - 1].trim();

        let Some(at) = parse_datetime(raw_at) else {
            // Header or malformed row.
            if !raw_at.is_empty() {
                warn!(row = %raw_at, "skipping series row with unparseable timestamp");
            }
            continue;
        };
        let Some(pressure) = parse_number(raw_pressure) else {
            warn!(row = %raw_pressure, "skipping series row with unparseable pressure");
            continue;
        };
        series.push(at, pressure);
    }

    if series.is_empty() {
        return Err(IngestError::Empty);
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_block_with_comma_decimals() {
        let block = "P_pl_zam\t251,3\nfluid\tнефть\n\nDurat\t72";
        let parsed = parse_scalar_block(block);
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0], ("P_pl_zam".to_string(), Value::Number(251.3)));
        assert_eq!(parsed[1], ("fluid".to_string(), Value::Text("нефть".into())));
        assert_eq!(parsed[2], ("Durat".to_string(), Value::Number(72.0)));
    }

    #[test]
    fn series_block_skips_header_and_index_column() {
        let block = "\tDat\tPressureVnkModel\n1\t15.03.2024 08:00:00\t208,4\n2\t15.03.2024 20:00:00\t210.1";
        let series = parse_series_block(block).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.last_pressure(), Some(210.1));
    }

    #[test]
    fn two_column_series_accepted() {
        let block = "15.03.2024\t208,4\n16.03.2024\t210,0";
        let series = parse_series_block(block).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn header_only_block_is_empty() {
        assert!(matches!(
            parse_series_block("\tDat\tPressureVnkModel"),
            Err(IngestError::Empty)
        ));
    }
}
