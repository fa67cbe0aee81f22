//! CSV ledger parser.
//!
//! Columns are matched by header name, so their order in the export does
//! not matter. Short rows are padded with empty cells; rows with more cells
//! than the header are rejected rather than silently shifted.

use crate::error::{Error, Result};
use crate::types::TransactionRecord;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashSet;
use std::io::Read;

/// Parse ledger rows from any source implementing `Read`.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use csv_mt940::csv_format::parse_records;
///
/// let mut file = File::open("ledger.csv")?;
/// let records = parse_records(&mut file)?;
/// println!("{} rows", records.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<TransactionRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    check_headers(&headers)?;

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() > headers.len() {
            return Err(Error::MalformedRow {
                line,
                message: format!(
                    "expected at most {} fields, found {}",
                    headers.len(),
                    row.len()
                ),
            });
        }

        // Missing trailing cells read as empty strings.
        let record = TransactionRecord::from_pairs(
            headers
                .iter()
                .enumerate()
                .map(|(i, name)| (name, row.get(i).unwrap_or(""))),
        );
        records.push(record);
    }

    if records.is_empty() {
        return Err(Error::EmptyInput);
    }

    log::debug!("parsed {} ledger rows", records.len());
    Ok(records)
}

/// Parse ledger rows from an in-memory string.
pub fn parse_str(text: &str) -> Result<Vec<TransactionRecord>> {
    parse_records(text.as_bytes())
}

fn check_headers(headers: &StringRecord) -> Result<()> {
    let mut seen = HashSet::new();
    for name in headers.iter() {
        if !name.is_empty() && !seen.insert(name) {
            return Err(Error::MalformedRow {
                line: 1,
                message: format!("duplicate column {:?}", name),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_matched_by_name() {
        let records = parse_str("Amount,ID\n-1.00,a-1\n").unwrap();
        let swapped = parse_str("ID,Amount\na-1,-1.00\n").unwrap();
        assert_eq!(records, swapped);
        assert_eq!(records[0].get("ID"), Some("a-1"));
    }

    #[test]
    fn test_short_row_padded() {
        let records = parse_str("ID,Amount,Description\nx1\n").unwrap();
        assert_eq!(records[0].raw("Amount"), Some(""));
        assert_eq!(records[0].raw("Description"), Some(""));
    }

    #[test]
    fn test_quoted_fields() {
        let records = parse_str("ID,Description\n1,\"Shop, Berlin\nline two\"\n").unwrap();
        assert_eq!(records[0].get("Description"), Some("Shop, Berlin\nline two"));
    }

    #[test]
    fn test_source_order_preserved() {
        let records = parse_str("ID\n3\n2\n1\n").unwrap();
        let ids: Vec<_> = records.iter().filter_map(|r| r.get("ID")).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(matches!(parse_str(""), Err(Error::EmptyInput)));
        assert!(matches!(parse_str("ID,Amount\n"), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_long_row_rejected() {
        let err = parse_str("ID,Amount\n1,2\n1,2,3\n").unwrap_err();
        match err {
            Error::MalformedRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_header_rejected() {
        assert!(matches!(
            parse_str("ID,ID\n1,2\n"),
            Err(Error::MalformedRow { line: 1, .. })
        ));
    }
}
