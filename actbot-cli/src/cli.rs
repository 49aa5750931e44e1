//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "actbot")]
#[command(about = "Action-driven Telegram bot: run, compile", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the operations a text response compiles to, as JSON.
    Compile {
        #[arg(short, long)]
        text: String,
        /// Edit the origin message instead of sending.
        #[arg(long)]
        edit: bool,
        /// Compile as the answer to a button press.
        #[arg(long)]
        callback: bool,
        #[arg(long)]
        markdown: bool,
        /// Chunk size; defaults to ACTBOT_MAX_TEXT_LEN.
        #[arg(long)]
        max_len: Option<usize>,
    },
}
