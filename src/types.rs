//! Common types shared by the parser and the MT940 assembler.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Column names of the ledger export.
pub mod fields {
    pub const DATE_COMPLETED: &str = "Date completed (UTC)";
    pub const DATE_STARTED: &str = "Date started (UTC)";
    pub const AMOUNT: &str = "Amount";
    pub const ORIG_AMOUNT: &str = "Orig amount";
    pub const TYPE: &str = "Type";
    pub const DESCRIPTION: &str = "Description";
    pub const REFERENCE: &str = "Reference";
    pub const BENEFICIARY: &str = "Beneficiary IBAN";
    pub const BALANCE: &str = "Balance";
    pub const CURRENCY: &str = "Payment currency";
    pub const ID: &str = "ID";
}

/// One ledger row: column name to raw cell value.
///
/// Missing columns are not an error; lookups simply return `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionRecord {
    fields: HashMap<String, String>,
}

impl TransactionRecord {
    /// Build a record from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value of a column, exactly as parsed.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Trimmed value of a column, `None` when absent or blank.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.raw(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// First present, non-blank value among `names`, in order.
    pub fn first_of(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.get(name))
    }

    /// Completion date, falling back to the start date.
    pub fn effective_date(&self) -> Option<&str> {
        self.first_of(&[fields::DATE_COMPLETED, fields::DATE_STARTED])
    }
}

/// Debit/Credit indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebitCredit {
    /// Debit transaction (outgoing).
    Debit,
    /// Credit transaction (incoming).
    Credit,
}

impl DebitCredit {
    /// Direction of a signed amount: debit iff negative.
    pub fn of(amount: Decimal) -> Self {
        if amount < Decimal::ZERO {
            DebitCredit::Debit
        } else {
            DebitCredit::Credit
        }
    }

    /// MT940 mark.
    pub fn as_mark(&self) -> &'static str {
        match self {
            DebitCredit::Debit => "D",
            DebitCredit::Credit => "C",
        }
    }
}

/// A balance tied to a statement date.
#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    /// Balance amount (signed).
    pub amount: Decimal,

    /// Date of the balance.
    pub date: NaiveDate,
}

const EURO_CODE: &str = "EUR";
const EURO_SYMBOL: &str = "€";

/// Knobs of the assembler that would otherwise be hidden literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementConfig {
    /// Currency used when no row carries one.
    pub default_currency: String,

    /// Glyph written in the `~60`/`~63` sub-lines for the default currency.
    /// When unset, `EUR` gets `€` and any other currency its code.
    pub default_currency_symbol: Option<String>,

    /// Width of description chunks.
    pub chunk_width: usize,

    /// Sort records most-recent-first by date before assembling.
    pub sort_by_date: bool,
}

impl Default for StatementConfig {
    fn default() -> Self {
        Self {
            default_currency: "EUR".to_string(),
            default_currency_symbol: None,
            chunk_width: 35,
            sort_by_date: false,
        }
    }
}

impl StatementConfig {
    /// Check the configuration before it reaches the assembler.
    pub fn validate(&self) -> Result<()> {
        if !is_currency_code(&self.default_currency) {
            return Err(Error::InvalidArgument(format!(
                "default currency must be 3 uppercase letters, got {:?}",
                self.default_currency
            )));
        }
        if self.chunk_width == 0 {
            return Err(Error::InvalidArgument(
                "chunk width must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Symbol for the `~60`/`~63` sub-lines of a statement in `currency`.
    pub fn currency_symbol<'a>(&'a self, currency: &'a str) -> &'a str {
        match &self.default_currency_symbol {
            Some(symbol) if currency == self.default_currency => symbol.as_str(),
            _ if currency == EURO_CODE => EURO_SYMBOL,
            _ => currency,
        }
    }
}

/// Statement-level metadata derived from the records.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementContext {
    /// Account identifier with whitespace removed.
    pub account: String,

    /// Three-letter uppercase currency code.
    pub currency: String,

    /// Balance after the chronologically earliest record.
    pub opening: Balance,

    /// Balance after the chronologically latest record.
    pub closing: Balance,

    /// Last day of the opening month.
    pub available_date: NaiveDate,
}

/// `true` for exactly three ASCII uppercase letters.
pub fn is_currency_code(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase())
}
