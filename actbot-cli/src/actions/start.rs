use action_chain::{Action, ActionContext, ActionResult};
use actbot_core::Response;
use async_trait::async_trait;

/// `/start`: greeting plus a reply keyboard of the main commands.
pub struct StartAction;

#[async_trait]
impl Action for StartAction {
    fn name(&self) -> &str {
        "start"
    }

    async fn start_condition(&self, ctx: &ActionContext) -> ActionResult<bool> {
        Ok(ctx.event.arg(0) == Some("/start"))
    }

    async fn start(&self, _ctx: &ActionContext) -> ActionResult<Option<Response>> {
        Ok(Some(
            Response::text("Welcome")
                .with_keyboard(vec![vec!["/menu", "/help"], vec!["/feedback"]]),
        ))
    }
}
