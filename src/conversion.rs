//! Ledger-to-MT940 conversion entry points.

use crate::csv_format::parse_str;
use crate::error::Result;
use crate::mt940_format::Mt940Statement;
use crate::types::StatementConfig;

/// Convert a CSV ledger into MT940 text with the default configuration.
///
/// Rows are expected most-recent-first. The result ends with the `-`
/// terminator line followed by a single newline.
pub fn convert(csv_text: &str, account: &str) -> Result<String> {
    convert_with(csv_text, account, &StatementConfig::default())
}

/// Convert a CSV ledger into MT940 text using `config`.
pub fn convert_with(csv_text: &str, account: &str, config: &StatementConfig) -> Result<String> {
    config.validate()?;
    let records = parse_str(csv_text)?;
    let statement = Mt940Statement::assemble(&records, account, config)?;
    Ok(statement.to_string())
}
