use clap::{Parser, Subcommand};
use eyre::Result;
use log::LevelFilter;
use std::path::PathBuf;

mod commands;
mod config;
mod logging;
mod secure_key;

use commands::RegisterArgs;
use config::Config;

#[derive(Parser)]
#[command(name = "cropsync")]
#[command(about = "Register farmers on the CropSync FarmerRegistration contract")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<String>,

    /// RPC URL (overrides config) [default: http://127.0.0.1:7545]
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Deployed FarmerRegistration address (overrides config)
    #[arg(long, global = true)]
    contract_address: Option<String>,

    /// Contract artifact or ABI JSON (overrides config, defaults to the bundled ABI)
    #[arg(long, global = true)]
    abi: Option<PathBuf>,

    /// Environment file path
    #[arg(long, global = true, default_value = ".env")]
    env_file: String,

    /// Log level (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a farmer (the default when no subcommand is given)
    Register(RegisterArgs),
    /// List the node's accounts and balances
    Accounts {
        /// Private key source (env:VAR_NAME, file:/path, or prompt)
        #[arg(short = 'k', long)]
        key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.log_level)?;

    let config = Config::load(&cli.config, &cli.env_file)?
        .with_rpc_url(cli.rpc_url)
        .with_contract_address(cli.contract_address)
        .with_abi_path(cli.abi);

    match cli
        .command
        .unwrap_or_else(|| Commands::Register(RegisterArgs::default()))
    {
        Commands::Register(args) => commands::register::handle_command(args, &config).await,
        Commands::Accounts { key } => commands::accounts::handle_command(key, &config).await,
    }
}
