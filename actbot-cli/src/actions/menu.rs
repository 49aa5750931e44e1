//! `/menu` and the callbacks of its buttons.

use action_chain::{Action, ActionContext, ActionResult};
use actbot_core::{EventKind, InlineButton, InlineKeyboard, Response};
use async_trait::async_trait;

/// Callback payload prefix owned by [`MenuCallbackAction`].
pub const MENU_PREFIX: &str = "menu:";

fn menu_keyboard() -> InlineKeyboard {
    vec![
        InlineButton::row([("Ping", "menu:ping"), ("Time", "menu:time")]),
        vec![InlineButton::url("Bot API docs", "https://core.telegram.org/bots/api")],
        vec![InlineButton::callback("Close", "menu:close")],
    ]
}

/// `/menu`: a message with inline buttons.
pub struct MenuAction;

#[async_trait]
impl Action for MenuAction {
    fn name(&self) -> &str {
        "menu"
    }

    async fn start_condition(&self, ctx: &ActionContext) -> ActionResult<bool> {
        Ok(ctx.event.arg(0) == Some("/menu"))
    }

    async fn start(&self, _ctx: &ActionContext) -> ActionResult<Option<Response>> {
        Ok(Some(Response::text("Pick one:").with_inline(menu_keyboard())))
    }
}

/// Presses on the `/menu` buttons: edits the menu message in place, or deletes it on Close.
pub struct MenuCallbackAction;

#[async_trait]
impl Action for MenuCallbackAction {
    fn name(&self) -> &str {
        "menu_callback"
    }

    fn matches(&self, kind: EventKind) -> bool {
        kind == EventKind::Callback
    }

    fn matches_group(&self) -> bool {
        true
    }

    async fn start_condition(&self, ctx: &ActionContext) -> ActionResult<bool> {
        Ok(ctx.text().starts_with(MENU_PREFIX))
    }

    async fn start(&self, ctx: &ActionContext) -> ActionResult<Option<Response>> {
        let item = ctx.text().trim_start_matches(MENU_PREFIX);
        let response = match item {
            "ping" => Response::text("Pong")
                .with_inline(menu_keyboard())
                .with_edit()
                .with_notice("Pong!"),
            "time" => Response::text(format!(
                "Server time: {}",
                ctx.event.received_at.format("%Y-%m-%d %H:%M:%S UTC")
            ))
            .with_inline(menu_keyboard())
            .with_edit(),
            "close" => Response::delete_origin().with_notice("Menu closed"),
            _ => Response::alert(format!("Unknown menu item: {}", item)),
        };
        Ok(Some(response))
    }
}
