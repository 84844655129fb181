// ABOUTME: Entry point for the archstudio server binary
// ABOUTME: Loads .env, initializes logging, parses flags, and runs the HTTP server

use std::net::IpAddr;
use std::path::PathBuf;
use std::process;

use archstudio_cli::{run_server, CliOverrides, Config, ServerError};
use clap::Parser;
use tracing::error;

#[derive(Parser)]
#[command(name = "archstudio")]
#[command(about = "Architecture Studio - vision, OKRs, stories, and C4 diagrams behind one API")]
#[command(version)]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<IpAddr>,

    /// SQLite database file (overrides ARCHSTUDIO_DB_PATH)
    #[arg(long)]
    database: Option<PathBuf>,
}

impl From<Cli> for CliOverrides {
    fn from(cli: Cli) -> Self {
        CliOverrides {
            port: cli.port,
            host: cli.host,
            database: cli.database,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();
}

async fn run(cli: Cli) -> Result<(), ServerError> {
    let config = Config::from_env()?.with_overrides(cli.into())?;
    run_server(config).await
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
