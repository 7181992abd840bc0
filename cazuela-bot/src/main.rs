//! cazuela-bot CLI: run the restaurant assistant. Config from env and
//! optional CLI args.

use anyhow::Result;
use cazuela_bot::{run_bot, BotConfig};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cazuela-bot")]
#[command(about = "Restaurant messaging assistant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
    }
}
