//! Long-polling loop: teloxide Dispatcher feeding messages, callback queries and inline queries to
//! an [`ActionEngine`].

use std::sync::Arc;

use action_chain::ActionEngine;
use actbot_core::Event;
use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, InlineQuery, Message};
use tracing::{error, info, instrument};

use crate::adapters::{
    TelegramCallbackWrapper, TelegramInlineQueryWrapper, TelegramMessageWrapper, ToEvent,
};
use crate::config::TelegramConfig;

/// Creates the teloxide Bot, pointing it at TELEGRAM_API_URL when set.
pub fn build_bot(config: &TelegramConfig) -> Result<Bot> {
    let bot = Bot::new(&config.bot_token);
    match &config.telegram_api_url {
        Some(url) => {
            let url = reqwest::Url::parse(url)?;
            info!(api_url = %url, "Using custom Telegram API URL");
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Runs until Ctrl-C. teloxide delivers one chat's updates in order; distinct chats run concurrently.
#[instrument(skip(bot, engine))]
pub async fn run_dispatcher(bot: Bot, engine: Arc<ActionEngine>) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(
            username = me.user.username.as_deref().unwrap_or(""),
            "Bot identity resolved"
        ),
        Err(e) => error!(error = %e, "get_me failed; continuing"),
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query))
        .branch(Update::filter_inline_query().endpoint(on_inline_query));

    info!("Bot started successfully");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![engine])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

async fn on_message(msg: Message, engine: Arc<ActionEngine>) -> ResponseResult<()> {
    let event = TelegramMessageWrapper(&msg).to_event();
    info!(
        user_id = event.sender_id(),
        chat_id = event.chat_id,
        kind = %event.kind,
        message_content = %event.text_or_empty(),
        "Received message"
    );
    process(&engine, event).await;
    respond(())
}

async fn on_callback_query(q: CallbackQuery, engine: Arc<ActionEngine>) -> ResponseResult<()> {
    let event = TelegramCallbackWrapper(&q).to_event();
    info!(
        user_id = event.sender_id(),
        chat_id = event.chat_id,
        data = %event.text_or_empty(),
        "Received callback query"
    );
    process(&engine, event).await;
    respond(())
}

async fn on_inline_query(q: InlineQuery, engine: Arc<ActionEngine>) -> ResponseResult<()> {
    let event = TelegramInlineQueryWrapper(&q).to_event();
    info!(
        user_id = event.sender_id(),
        query = %event.text_or_empty(),
        "Received inline query"
    );
    process(&engine, event).await;
    respond(())
}

/// Failures are logged; the update is always acknowledged to teloxide.
async fn process(engine: &ActionEngine, event: Event) {
    let user_id = event.sender_id();
    let chat_id = event.chat_id;
    match engine.process(event).await {
        Ok(report) if !report.is_success() => {
            error!(user_id, chat_id, failed = report.failed, "Some operations failed");
        }
        Ok(_) => {}
        Err(e) => error!(error = %e, user_id, chat_id, "Event processing failed"),
    }
}
