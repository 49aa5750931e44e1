use action_chain::{Action, ActionContext, ActionResult};
use actbot_core::Response;
use async_trait::async_trait;

const HELP_TEXT: &str = "*Commands*\n\
/start - greeting and keyboard\n\
/menu - inline menu\n\
/feedback - leave a message for the maintainers\n\
/help - this text\n\n\
Bot API reference: https://core.telegram.org/bots/api";

pub struct HelpAction;

#[async_trait]
impl Action for HelpAction {
    fn name(&self) -> &str {
        "help"
    }

    fn matches_group(&self) -> bool {
        true
    }

    async fn start_condition(&self, ctx: &ActionContext) -> ActionResult<bool> {
        Ok(matches!(ctx.event.arg(0), Some("/help") | Some("/help@actbot")))
    }

    async fn start(&self, _ctx: &ActionContext) -> ActionResult<Option<Response>> {
        Ok(Some(Response::markdown(HELP_TEXT).with_link_preview()))
    }
}
