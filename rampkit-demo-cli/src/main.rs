//! Rampkit Demo CLI
//!
//! Command-line interface for exploring the Rampkit platform registry,
//! currency table, proof parsers and deposit validators.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "rampkit-demo")]
#[command(about = "Rampkit Demo CLI - Explore payment platforms, proofs and deposit checks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported payment platforms
    Platforms {
        /// Only platforms that can send this currency (e.g. EUR)
        #[arg(short, long)]
        currency: Option<String>,
    },

    /// Show one platform's configuration
    Platform {
        /// Platform identifier (venmo, cashapp, revolut, wise, mercado_pago)
        id: String,
    },

    /// List supported currencies
    Currencies,

    /// Look up a currency by code, code hash or country
    Currency {
        /// ISO 4217 code (e.g. USD)
        #[arg(long, conflicts_with_all = ["hash", "country"])]
        code: Option<String>,

        /// 0x-prefixed Keccak-256 code hash
        #[arg(long, conflicts_with = "country")]
        hash: Option<String>,

        /// Lowercase ISO country code (e.g. ar)
        #[arg(long)]
        country: Option<String>,
    },

    /// Validate a Mercado Pago CVU
    Cvu {
        /// 22-digit CVU
        cvu: String,
    },

    /// Build payment links for a recipient
    Links {
        /// Platform identifier
        platform: String,

        /// Recipient handle
        recipient: String,

        /// Currency to send (e.g. EUR)
        #[arg(short, long)]
        currency: Option<String>,

        /// Amount to send
        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Parse a proof-of-payment context
    ParseProof {
        /// Platform identifier
        platform: String,

        /// File holding the serialized context (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Resolve a payee handle through the platform's deposit validator
    ValidateDeposit {
        /// Platform identifier
        platform: String,

        /// Payee handle, Cashtag, Revtag or CVU
        handle: String,

        /// Telegram username to attach to the deposit
        #[arg(long)]
        telegram: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the flag-derived default
    let default_filter = if cli.verbose {
        "rampkit_demo_cli=debug,rampkit_lib=debug"
    } else {
        "rampkit_demo_cli=info,rampkit_lib=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Platforms { currency } => {
            commands::platforms::list(currency.as_deref(), cli.json)
        }
        Commands::Platform { id } => commands::platforms::show(&id, cli.json),
        Commands::Currencies => commands::currencies::list(cli.json),
        Commands::Currency {
            code,
            hash,
            country,
        } => commands::currencies::lookup(
            code.as_deref(),
            hash.as_deref(),
            country.as_deref(),
            cli.json,
        ),
        Commands::Cvu { cvu } => commands::cvu::run(&cvu, cli.json),
        Commands::Links {
            platform,
            recipient,
            currency,
            amount,
        } => commands::links::run(
            &platform,
            &recipient,
            currency.as_deref(),
            amount.as_deref(),
            cli.json,
        ),
        Commands::ParseProof { platform, file } => {
            commands::proof::run(&platform, file.as_deref(), cli.json)
        }
        Commands::ValidateDeposit {
            platform,
            handle,
            telegram,
        } => {
            commands::deposit::run(&platform, &handle, telegram.as_deref(), cli.verbose, cli.json)
                .await
        }
    };

    if let Err(e) = result {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}
