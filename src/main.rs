mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prodsched")]
#[command(about = "Scrape the producer schedule into filtered iCalendar files")]
struct Cli {
    /// Config file (defaults to ./prodsched.toml, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every configured month and write the calendars
    Build {
        /// Write calendars here instead of the configured output_dir
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Print the schedule page URL of every configured month
    Urls,
    /// List the events of a generated .ics file
    Inspect {
        /// Calendar file to read
        file: PathBuf,
    },
    /// Write a starter config covering one year of monthly pages
    Init {
        /// Year to generate month entries for
        #[arg(short, long)]
        year: i32,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { output_dir } => {
            commands::build::run(cli.config.as_deref(), output_dir).await
        }
        Commands::Urls => commands::urls::run(cli.config.as_deref()),
        Commands::Inspect { file } => commands::inspect::run(&file),
        Commands::Init { year, force } => commands::init::run(cli.config, year, force),
    }
}

/// Log to stderr; RUST_LOG overrides the default level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
