mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use mmemory::config::{default_config_path, MmemoryConfig};

#[derive(Parser)]
#[command(name = "mmemory", version, about = "Turn DM screenshots into reviewable chat messages")]
struct Cli {
    /// Config file (defaults to ~/.mmemory/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse OCR text (file or stdin) into messages
    Parse {
        /// Text file with OCR output; reads stdin when omitted
        file: Option<PathBuf>,
        #[command(flatten)]
        members: cli::MemberArgs,
        /// Print the draft as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run OCR on a screenshot and parse the result
    Recognize {
        /// Screenshot image (PNG, JPEG, ...)
        image: PathBuf,
        /// OCR language hint, e.g. `kor+eng`
        #[arg(long)]
        lang: Option<String>,
        #[command(flatten)]
        members: cli::MemberArgs,
        /// Print the draft as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start the HTTP service for the admin panel
    Serve,
    /// Show effective config and check the OCR engine
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = MmemoryConfig::load_from(&config_path)?;

    // Log to stderr so stdout stays clean for JSON output.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Parse { file, members, json } => {
            cli::parse::parse(&config, file.as_deref(), &members, json)?;
        }
        Command::Recognize {
            image,
            lang,
            members,
            json,
        } => {
            cli::recognize::recognize(&config, &image, lang.as_deref(), &members, json).await?;
        }
        Command::Serve => {
            mmemory::server::serve(config).await?;
        }
        Command::Doctor => {
            cli::doctor::doctor(&config, &config_path)?;
        }
    }

    Ok(())
}
