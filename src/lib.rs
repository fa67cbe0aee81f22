//! CSV to MT940 Converter Library
//!
//! Turns a bank-exported CSV transaction ledger into an MT940 statement.
//!
//! # Pipeline
//!
//! - **csv_format**: header-keyed row parsing
//! - **amount**: lenient, exact decimal parsing
//! - **mt940_format**: statement assembly (balances, dates, transaction blocks)
//! - **text_format**: amount, date and description formatting
//!
//! # Examples
//!
//! ```
//! use csv_mt940::convert;
//!
//! let csv = "Date completed (UTC),Amount,Balance,Payment currency,Type,ID\n\
//!            2024-01-15,-12.50,987.50,EUR,CARD_PAYMENT,abc-123\n";
//! let mt940 = convert(csv, "DE89 3704 0044 0532 0130 00")?;
//! assert!(mt940.contains(":61:2401150115D12,50N119NONREF//abc123"));
//! # Ok::<(), csv_mt940::Error>(())
//! ```
//!
//! ## Writing to a file
//!
//! ```no_run
//! use std::fs::File;
//! use csv_mt940::csv_format::parse_records;
//! use csv_mt940::mt940_format::Mt940Statement;
//! use csv_mt940::StatementConfig;
//!
//! let mut input = File::open("ledger.csv")?;
//! let records = parse_records(&mut input)?;
//! let mt940 = Mt940Statement::assemble(&records, "DE00123", &StatementConfig::default())?;
//!
//! let mut output = File::create("mt940.txt")?;
//! mt940.write_to(&mut output)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod types;
pub mod amount;
pub mod text_format;
pub mod csv_format;
pub mod mt940_format;
pub mod conversion;

// Re-export commonly used types
pub use conversion::{convert, convert_with};
pub use error::{Error, Result};
pub use types::{Balance, DebitCredit, StatementConfig, StatementContext, TransactionRecord};
