//! Account CLI commands
//!
//! Builds accounts from flags, checks account snapshots and checks balances
//! against them.

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{close_time, Account, AccountRecord, Balance, CurrencyCode, Money};

/// Output format for account snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create an account and print its snapshot
    New {
        /// Account name
        name: String,
        /// Currency code (e.g., EUR)
        #[arg(short, long)]
        currency: String,
        /// When the account opened (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        opened: String,
        /// When the account closed (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        closed: Option<String>,
        /// Snapshot format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Validate an account snapshot file
    Validate {
        /// Path to a JSON account snapshot
        file: PathBuf,
    },
    /// Check that a balance date fits an account
    CheckBalance {
        /// Path to a JSON account snapshot
        file: PathBuf,
        /// Balance date (RFC 3339 or YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Balance amount (e.g., "1000.00")
        #[arg(short, long, default_value = "0")]
        amount: String,
    },
}

/// Handle an account command, writing results to `out`
pub fn handle_account_command<W: Write>(cmd: AccountCommands, out: &mut W) -> LedgerResult<()> {
    match cmd {
        AccountCommands::New {
            name,
            currency,
            opened,
            closed,
            format,
        } => {
            let currency = CurrencyCode::new(&currency)?;
            let opened = parse_timestamp(&opened)?;
            let options = closed
                .as_deref()
                .map(parse_timestamp)
                .transpose()?
                .map(close_time);

            let account = Account::new(name, currency, opened, options)?;
            write_account(&account, format, out)?;
        }
        AccountCommands::Validate { file } => {
            let account = read_account(&file)?;
            writeln!(out, "valid: {}", account)?;
        }
        AccountCommands::CheckBalance { file, date, amount } => {
            let account = read_account(&file)?;
            let amount = Money::parse(&amount)
                .map_err(|e| LedgerError::Input(e.to_string()))?;
            let balance = Balance::new(parse_timestamp(&date)?, amount);

            account.validate_balance(&balance)?;
            writeln!(out, "accepted: {} for {}", balance, account)?;
        }
    }

    Ok(())
}

/// Parse an RFC 3339 timestamp, or a plain date taken as midnight UTC
pub fn parse_timestamp(s: &str) -> LedgerResult<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            LedgerError::Input(format!(
                "Invalid timestamp: '{}'. Use RFC 3339 or YYYY-MM-DD",
                s
            ))
        })
}

/// Load an account snapshot, rebuilding it through the validated setters
fn read_account(path: &Path) -> LedgerResult<Account> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        LedgerError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let record: AccountRecord = serde_json::from_str(&contents)?;
    Account::try_from(record)
}

fn write_account<W: Write>(account: &Account, format: OutputFormat, out: &mut W) -> LedgerResult<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, account)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, account)?,
    }
    Ok(())
}
