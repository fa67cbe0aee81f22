//! csv2mt940 - CLI tool for converting a CSV ledger export to MT940.
//!
//! Set `RUST_LOG=warn` (or `debug`) to see diagnostics about substituted
//! values.

use clap::Parser;
use csv_mt940::{convert_with, Result, StatementConfig};
use std::fs::{self, File};
use std::io::{self, Read, Write};

#[derive(Parser)]
#[command(name = "csv2mt940")]
#[command(about = "Convert a CSV transaction ledger into an MT940 statement", long_about = None)]
struct Cli {
    /// Input CSV file path (or stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,

    /// Target account identifier (IBAN); whitespace is removed
    #[arg(short, long)]
    account: String,

    /// Output file path (or stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Currency used when no row carries one
    #[arg(long = "default-currency", default_value = "EUR")]
    default_currency: String,

    /// Symbol written for the default currency (EUR uses € unless set)
    #[arg(long = "currency-symbol")]
    currency_symbol: Option<String>,

    /// Sort rows by date instead of trusting the export order
    #[arg(long = "sort-by-date")]
    sort_by_date: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = StatementConfig {
        default_currency: cli.default_currency.trim().to_uppercase(),
        default_currency_symbol: cli.currency_symbol,
        sort_by_date: cli.sort_by_date,
        ..StatementConfig::default()
    };

    let csv_text = if let Some(ref input_path) = cli.input {
        fs::read_to_string(input_path)?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    // Convert fully before touching the output so errors never leave a partial file.
    let mt940 = convert_with(&csv_text, &cli.account, &config)?;

    if let Some(ref output_path) = cli.output {
        let mut file = File::create(output_path)?;
        file.write_all(mt940.as_bytes())?;
    } else {
        let mut stdout = io::stdout();
        stdout.write_all(mt940.as_bytes())?;
    }

    Ok(())
}
