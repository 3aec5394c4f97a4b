use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use kurs::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for kurs::AppCommand {
    fn from(cmd: Commands) -> kurs::AppCommand {
        match cmd {
            Commands::Convert { from, to, amount } => {
                kurs::AppCommand::Convert { from, to, amount }
            }
            Commands::Rates { base } => kurs::AppCommand::Rates { base },
            Commands::Currencies => kurs::AppCommand::Currencies,
            Commands::History => kurs::AppCommand::History,
            Commands::ClearHistory { yes } => kurs::AppCommand::ClearHistory { yes },
            Commands::SetBase { currency } => kurs::AppCommand::SetBase { currency },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Source currency code, e.g. USD
        from: String,
        /// Target currency code, e.g. EUR
        to: String,
        /// Amount to convert
        amount: String,
    },
    /// Display the latest rates against the base currency
    Rates {
        /// Override the persisted base currency for this run
        #[arg(short, long)]
        base: Option<String>,
    },
    /// List all currencies offered by the provider
    Currencies,
    /// Display past conversions
    History,
    /// Delete all past conversions
    ClearHistory {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Persist the base currency used by the rate board
    SetBase {
        /// Currency code (BGN, USD or EUR)
        currency: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => kurs::cli::setup::setup(),
        Some(cmd) => kurs::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
