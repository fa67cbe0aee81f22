//! MT940 statement assembler.
//!
//! Builds the field-tagged MT940 text from ledger records supplied
//! most-recent-first, as the ledger export orders them. Transactions are
//! written oldest first.

use crate::amount::amount_or_zero;
use crate::error::{Error, Result};
use crate::text_format::{
    chunk_text, format_amount, format_mmdd, format_yymmdd, last_day_of_month, parse_date,
};
use crate::types::{
    fields, is_currency_code, Balance, DebitCredit, StatementConfig, StatementContext,
    TransactionRecord,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::io::Write;

const OPERATION_CODE_FEE: &str = "49";
const OPERATION_CODE_DEFAULT: &str = "119";

/// Represents an assembled MT940 statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Mt940Statement {
    /// Metadata the statement was built from.
    pub context: StatementContext,

    /// Output lines, in order.
    pub lines: Vec<String>,
}

impl Mt940Statement {
    /// Assemble a statement from records ordered most-recent-first.
    ///
    /// # Examples
    ///
    /// ```
    /// use csv_mt940::csv_format::parse_str;
    /// use csv_mt940::mt940_format::Mt940Statement;
    /// use csv_mt940::types::StatementConfig;
    ///
    /// let records = parse_str("Date completed (UTC),Amount,Balance,ID\n2024-01-15,-1.00,9.00,a-1\n")?;
    /// let mt940 = Mt940Statement::assemble(&records, "DE00 1234", &StatementConfig::default())?;
    /// assert_eq!(mt940.lines[1], ":25:/DE001234");
    /// # Ok::<(), csv_mt940::Error>(())
    /// ```
    pub fn assemble(
        records: &[TransactionRecord],
        account: &str,
        config: &StatementConfig,
    ) -> Result<Self> {
        let ordered;
        let records = if config.sort_by_date {
            ordered = sort_most_recent_first(records);
            ordered.as_slice()
        } else {
            records
        };

        let context = derive_context(records, account, config)?;
        log::debug!(
            "assembling {} transactions in {} from {} to {}",
            records.len(),
            context.currency,
            context.opening.date,
            context.closing.date
        );

        let symbol = config.currency_symbol(&context.currency);
        let mut lines = Vec::new();

        lines.push(":20:MT940".to_string());
        lines.push(format!(":25:/{}", context.account));
        lines.push(":28C:1".to_string());
        lines.push(balance_line(":60F:", &context.opening, &context.currency));

        for record in records.iter().rev() {
            push_transaction(&mut lines, record, &context, symbol, config.chunk_width)?;
        }

        lines.push(balance_line(":62F:", &context.closing, &context.currency));
        lines.push(balance_line(
            ":64:",
            &Balance {
                amount: context.closing.amount,
                date: context.available_date,
            },
            &context.currency,
        ));
        lines.push("-".to_string());

        Ok(Mt940Statement { context, lines })
    }

    /// Write the MT940 statement to any destination implementing `Write`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for Mt940Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Derive account, currency, balances and dates from the records.
///
/// The last record is the opening one and the first record the closing one.
pub fn derive_context(
    records: &[TransactionRecord],
    account: &str,
    config: &StatementConfig,
) -> Result<StatementContext> {
    let (closing_record, opening_record) = match (records.first(), records.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(Error::EmptyInput),
    };

    let account: String = account.chars().filter(|c| !c.is_whitespace()).collect();

    let currency = resolve_currency(closing_record, opening_record, config);

    let opening_date = required_date(opening_record, "opening")?;
    let closing_date = required_date(closing_record, "closing")?;

    Ok(StatementContext {
        account,
        currency,
        opening: Balance {
            amount: amount_or_zero(opening_record.get(fields::BALANCE), "opening balance"),
            date: opening_date,
        },
        closing: Balance {
            amount: amount_or_zero(closing_record.get(fields::BALANCE), "closing balance"),
            date: closing_date,
        },
        available_date: last_day_of_month(opening_date),
    })
}

fn resolve_currency(
    closing_record: &TransactionRecord,
    opening_record: &TransactionRecord,
    config: &StatementConfig,
) -> String {
    [closing_record, opening_record]
        .into_iter()
        .filter_map(|record| record.get(fields::CURRENCY))
        .find_map(|raw| {
            let code = raw.to_uppercase();
            if is_currency_code(&code) {
                Some(code)
            } else {
                log::warn!("currency {:?} is not a 3-letter code, skipping", raw);
                None
            }
        })
        .unwrap_or_else(|| config.default_currency.clone())
}

fn required_date(record: &TransactionRecord, role: &str) -> Result<NaiveDate> {
    let raw = record
        .effective_date()
        .ok_or_else(|| Error::DateParse(format!("{} record has no completion date", role)))?;
    parse_date(raw)
}

fn balance_line(tag: &str, balance: &Balance, currency: &str) -> String {
    let direction = DebitCredit::of(balance.amount);
    format!(
        "{}{}{}{}{}",
        tag,
        direction.as_mark(),
        format_yymmdd(balance.date),
        currency,
        format_amount(balance.amount.abs())
    )
}

/// Operation code: fees get `49`, everything else `119`.
pub fn operation_code(record: &TransactionRecord) -> &'static str {
    let is_fee = record
        .get(fields::TYPE)
        .map(|t| t.to_uppercase().contains("FEE"))
        .unwrap_or(false);
    if is_fee {
        OPERATION_CODE_FEE
    } else {
        OPERATION_CODE_DEFAULT
    }
}

fn push_transaction(
    lines: &mut Vec<String>,
    record: &TransactionRecord,
    context: &StatementContext,
    symbol: &str,
    chunk_width: usize,
) -> Result<()> {
    let date = match record.effective_date() {
        Some(raw) => parse_date(raw)?,
        None => context.opening.date,
    };

    let amount: Decimal = amount_or_zero(
        record.first_of(&[fields::AMOUNT, fields::ORIG_AMOUNT]),
        "amount",
    );
    let direction = DebitCredit::of(amount);
    let code = operation_code(record);
    let id: String = record
        .get(fields::ID)
        .unwrap_or("")
        .chars()
        .filter(|c| *c != '-')
        .collect();

    lines.push(format!(
        ":61:{}{}{}{}N{}NONREF//{}",
        format_yymmdd(date),
        format_mmdd(date),
        direction.as_mark(),
        format_amount(amount.abs()),
        code,
        id
    ));
    lines.push(format!("{} 0", code));
    lines.push(format!(":86:020~00{}", code));

    if let Some(reference) = record.get(fields::REFERENCE) {
        lines.push(format!("~20{}", reference));
    }

    let chunks = chunk_text(record.get(fields::DESCRIPTION).unwrap_or(""), chunk_width);
    let mut chunks = chunks.into_iter();
    if let Some(first) = chunks.next() {
        lines.push(format!("~32{}", first));
    }
    if let Some(second) = chunks.next() {
        lines.push(format!("~33{}", second));
    }
    let rest: String = chunks.collect();
    if !rest.is_empty() {
        lines.push(format!("~38{}", rest));
    }

    if let Some(beneficiary) = record.get(fields::BENEFICIARY) {
        let beneficiary: String = beneficiary.chars().filter(|c| !c.is_whitespace()).collect();
        lines.push(format!("~38{}", beneficiary));
    }

    lines.push(format!("~60{}", symbol));
    lines.push(format!("~63{}", symbol));
    Ok(())
}

/// Stable sort by effective date, most recent first; undated records last.
fn sort_most_recent_first(records: &[TransactionRecord]) -> Vec<TransactionRecord> {
    let mut keyed: Vec<(Option<NaiveDate>, &TransactionRecord)> = records
        .iter()
        .map(|r| (r.effective_date().and_then(|d| parse_date(d).ok()), r))
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().map(|(_, r)| r.clone()).collect()
}
