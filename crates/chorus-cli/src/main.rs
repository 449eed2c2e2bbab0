mod analyze;
mod input;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chorus-cli")]
#[command(about = "chorus comment insight command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a JSON file of comments and print the report
    Analyze {
        /// JSON file: an array of strings or an object with a `comments` array
        file: PathBuf,
        /// Print chunk prompts without calling the model
        #[arg(long)]
        dry_run: bool,
        /// Print the report on a single line
        #[arg(long)]
        compact: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze {
            file,
            dry_run,
            compact,
        }) => analyze::run(&file, dry_run, compact).await?,
        None => println!("chorus-cli ready; run `chorus-cli analyze <FILE>`"),
    }

    Ok(())
}
