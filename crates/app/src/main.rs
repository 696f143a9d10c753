//! Salesboard Application CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use salesboard_app::{context::AppContext, feed::DEFAULT_SEED_SOURCE_URL};

#[derive(Debug, Parser)]
#[command(name = "salesboard-app", about = "Salesboard CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replace all stored transactions with the seed feed's contents
    Import(ImportArgs),
}

#[derive(Debug, Args)]
struct ImportArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// URL of the JSON seed feed
    #[arg(long, env = "SEED_SOURCE_URL", default_value = DEFAULT_SEED_SOURCE_URL)]
    source_url: String,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        #[expect(clippy::print_stderr, reason = "CLI reports failures on stderr")]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Import(args) => import(args).await,
    }
}

async fn import(args: ImportArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url, &args.source_url)
        .await
        .map_err(|error| format!("failed to initialize app context: {error}"))?;

    let imported = app
        .import_transactions()
        .await
        .map_err(|error| format!("failed to import transactions: {error}"))?;

    #[expect(clippy::print_stdout, reason = "CLI reports the import result on stdout")]
    {
        println!("imported {imported} transactions from {}", args.source_url);
    }

    Ok(())
}
