mod cli;
mod config;
mod error;
mod init;
mod logger;

use clap::Parser;
use cli::Commands;

#[derive(Parser)]
#[command(name = "repopack")]
#[command(version, about = "Pack a repository into a single AI-friendly file")]
struct Cli {
    /// Show debug output.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    match cli.command {
        Commands::Init { directory } => cli::init::run_init(&directory).await?,
    }

    Ok(())
}
