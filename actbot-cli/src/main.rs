//! actbot CLI: run the Telegram bot, or preview how a response compiles.

use actbot_cli::{compile_preview, run, Cli, Commands, CompileOptions};
use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => run(token).await,
        Commands::Compile {
            text,
            edit,
            callback,
            markdown,
            max_len,
        } => {
            let json = compile_preview(&CompileOptions {
                text,
                edit,
                callback,
                markdown,
                max_len,
            })?;
            println!("{}", json);
            Ok(())
        }
    }
}
