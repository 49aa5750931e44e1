//! Wiring for the `run` and `compile` commands.

use std::sync::Arc;

use action_chain::ActionEngine;
use actbot_core::{init_tracing, EngineConfig, InMemorySessionStore, Response, SessionStore};
use actbot_responder::{compile, DeliveryContext};
use actbot_telegram::{build_bot, run_dispatcher, TelegramConfig, TelegramTransport};
use anyhow::Result;
use storage::SqliteSessionStore;
use tracing::info;

use crate::actions;

/// SQLite sessions when a database URL is configured, in-memory otherwise.
pub async fn session_store(database_url: Option<&str>) -> Result<Arc<dyn SessionStore>> {
    match database_url {
        Some(url) => {
            info!(database_url = %url, "Using SQLite session store");
            Ok(Arc::new(SqliteSessionStore::new(url).await?))
        }
        None => {
            info!("DATABASE_URL not set, sessions are kept in memory");
            Ok(Arc::new(InMemorySessionStore::new()))
        }
    }
}

/// Engine over the demo actions, without a transport.
pub fn build_engine(
    sessions: Arc<dyn SessionStore>,
    engine_config: EngineConfig,
) -> Result<ActionEngine> {
    let registry = actions::registry()?;
    info!(actions = ?registry.names(), "Actions registered");
    Ok(ActionEngine::new(registry, sessions, engine_config))
}

/// `actbot run`: load config, init logging, then poll Telegram until Ctrl-C.
pub async fn run(token: Option<String>) -> Result<()> {
    let config = TelegramConfig::from_env(token)?;
    let engine_config = EngineConfig::from_env()?;
    init_tracing(&config.log_file)?;

    info!(
        log_file = %config.log_file,
        max_text_len = engine_config.max_text_len,
        "Initializing bot"
    );

    let sessions = session_store(config.database_url.as_deref()).await?;
    let bot = build_bot(&config)?;
    let transport = Arc::new(TelegramTransport::new(bot.clone()));
    let engine = build_engine(sessions, engine_config)?.with_transport(transport);

    run_dispatcher(bot, Arc::new(engine)).await
}

/// Options of `actbot compile`.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    pub text: String,
    pub edit: bool,
    pub callback: bool,
    pub markdown: bool,
    pub max_len: Option<usize>,
}

/// Compiles a text response as if replying in chat 1 to message 1; returns pretty JSON.
pub fn compile_preview(options: &CompileOptions) -> Result<String> {
    let mut response = if options.markdown {
        Response::markdown(options.text.as_str())
    } else {
        Response::text(options.text.as_str())
    };
    if options.edit {
        response = response.with_edit();
    }

    let max_len = match options.max_len {
        Some(max_len) => max_len,
        None => EngineConfig::from_env()?.max_text_len,
    };
    if max_len == 0 {
        anyhow::bail!("--max-len must be greater than zero");
    }

    let mut ctx = DeliveryContext::for_chat(1).with_max_text_len(max_len);
    if options.edit || options.callback {
        ctx = ctx.with_message_id(1);
    }
    if options.callback {
        ctx = ctx.with_callback("preview");
    }

    let operations = compile(&response, &ctx);
    Ok(serde_json::to_string_pretty(&operations)?)
}
