mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dinefind_core::{
    DATA_PATH_ENV, DEFAULT_HOST, DEFAULT_PORT, HOST_ENV, PORT_ENV, env_parse_with_default,
    env_string_with_default,
};
use dinefind_service::RecommendParams;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dinefind")]
#[command(about = "Find top-rated restaurants by city, locality, cost and cuisine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on [env: DINEFIND_PORT, default: 8080]
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind [env: DINEFIND_HOST, default: 127.0.0.1]
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Restaurant dataset (.json, .jsonl or .ndjson) [env: DINEFIND_DATA]
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Run one query and print the outcome as JSON
    Query {
        /// Restaurant dataset (.json, .jsonl or .ndjson) [env: DINEFIND_DATA]
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Print restaurant count and cities of the dataset
    Stats {
        /// Restaurant dataset (.json, .jsonl or .ndjson) [env: DINEFIND_DATA]
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// City name, matched case-insensitively
    #[arg(long)]
    city: Option<String>,
    /// Neighbourhood within the city, matched case-insensitively
    #[arg(long)]
    locality: Option<String>,
    /// Lowest average cost for two, inclusive
    #[arg(long)]
    min_cost: Option<String>,
    /// Highest average cost for two, inclusive
    #[arg(long)]
    max_cost: Option<String>,
    /// One cuisine or a comma-separated list
    #[arg(long)]
    cuisine: Option<String>,
}

impl From<FilterArgs> for RecommendParams {
    fn from(args: FilterArgs) -> Self {
        Self {
            city: args.city,
            locality: args.locality,
            min_cost: args.min_cost,
            max_cost: args.max_cost,
            cuisine: args.cuisine,
        }
    }
}

pub(crate) fn get_data_path(arg: Option<PathBuf>) -> PathBuf {
    if let Some(path) = arg {
        return path;
    }
    let default = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dinefind")
        .join("restaurants.json");
    PathBuf::from(env_string_with_default(DATA_PATH_ENV, &default.to_string_lossy()))
}

pub(crate) fn get_port(arg: Option<u16>) -> u16 {
    arg.unwrap_or_else(|| env_parse_with_default(PORT_ENV, DEFAULT_PORT))
}

pub(crate) fn get_host(arg: Option<String>) -> String {
    arg.unwrap_or_else(|| env_string_with_default(HOST_ENV, DEFAULT_HOST))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, data } => {
            commands::serve::run(get_port(port), get_host(host), get_data_path(data)).await?;
        },
        Commands::Query { data, filters } => {
            commands::query::run_query(&get_data_path(data), filters.into()).await?;
        },
        Commands::Stats { data } => {
            commands::query::run_stats(&get_data_path(data))?;
        },
    }

    Ok(())
}
