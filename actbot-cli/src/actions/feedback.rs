//! Two-step `/feedback` conversation kept in the user's session.

use action_chain::{Action, ActionContext, ActionResult};
use actbot_core::Response;
use async_trait::async_trait;
use tracing::info;

/// Set while the bot waits for the feedback text.
const AWAITING_KEY: &str = "feedback_awaiting";
/// Number of feedback messages the user has sent.
const COUNT_KEY: &str = "feedback_count";

/// `/feedback` asks for a message; the user's next message finishes it (`/cancel` aborts).
pub struct FeedbackAction;

impl FeedbackAction {
    fn is_cancel(ctx: &ActionContext) -> bool {
        ctx.event.arg(0) == Some("/cancel")
    }
}

#[async_trait]
impl Action for FeedbackAction {
    fn name(&self) -> &str {
        "feedback"
    }

    async fn start_condition(&self, ctx: &ActionContext) -> ActionResult<bool> {
        Ok(ctx.event.arg(0) == Some("/feedback"))
    }

    async fn finish_condition(&self, ctx: &ActionContext) -> ActionResult<bool> {
        Ok(ctx.session.contains(AWAITING_KEY).await?)
    }

    async fn start(&self, ctx: &ActionContext) -> ActionResult<Option<Response>> {
        ctx.session.set(AWAITING_KEY, true).await?;
        Ok(Some(
            Response::text("Send your feedback as one message, or /cancel.")
                .with_keyboard([["/cancel"]]),
        ))
    }

    async fn before_finish(&self, ctx: &ActionContext) -> ActionResult<Option<Response>> {
        if Self::is_cancel(ctx) {
            return Ok(None);
        }
        Ok(Some(Response::text("Saving your feedback...")))
    }

    async fn finish(&self, ctx: &ActionContext) -> ActionResult<Option<Response>> {
        if Self::is_cancel(ctx) {
            return Ok(Some(Response::text("Cancelled.")));
        }
        let count = ctx.session.get_as::<u64>(COUNT_KEY).await?.unwrap_or(0) + 1;
        ctx.session.set(COUNT_KEY, count).await?;
        info!(user_id = ctx.user_id(), count, feedback = %ctx.text(), "Feedback received");
        Ok(Some(Response::text(format!(
            "Thanks! That is feedback #{} from you.",
            count
        ))))
    }

    async fn after_finish(&self, ctx: &ActionContext) -> ActionResult<Option<Response>> {
        ctx.session.remove(AWAITING_KEY).await?;
        Ok(Some(
            Response::text("Anything else? Try /menu.").with_keyboard_removed(),
        ))
    }
}
