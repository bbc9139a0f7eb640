use anyhow::Result;
use clap::{Parser, Subcommand};

use account_ledger::cli::{handle_account_command, AccountCommands};
use account_ledger::config::logging::{init_logging, LoggingConfig};

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Accounts and balances with temporal consistency checks",
    long_about = "Create account snapshots, validate them, and check that balances \
                  are dated within the period an account was open."
)]
struct Cli {
    /// Log filter (e.g., "debug"); defaults to $RUST_LOG or "warn"
    #[arg(long, global = true, env = "LEDGER_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account commands
    #[command(subcommand)]
    Account(AccountCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env().with_override(cli.log_level);
    init_logging(&logging)?;

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Account(cmd) => handle_account_command(cmd, &mut stdout)?,
    }

    Ok(())
}
