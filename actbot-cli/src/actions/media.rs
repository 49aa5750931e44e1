use action_chain::{Action, ActionContext, ActionResult};
use actbot_core::{EventKind, Response};
use async_trait::async_trait;

/// Fallback for media messages; runs after every other action.
pub struct MediaAction;

#[async_trait]
impl Action for MediaAction {
    fn name(&self) -> &str {
        "media"
    }

    fn priority(&self) -> i32 {
        -10
    }

    fn matches(&self, kind: EventKind) -> bool {
        matches!(
            kind,
            EventKind::Photo
                | EventKind::Document
                | EventKind::Voice
                | EventKind::Video
                | EventKind::Audio
        )
    }

    async fn start_condition(&self, _ctx: &ActionContext) -> ActionResult<bool> {
        Ok(true)
    }

    async fn start(&self, ctx: &ActionContext) -> ActionResult<Option<Response>> {
        let mut text = format!("Got your {}.", ctx.event.kind);
        if !ctx.text().is_empty() {
            text.push_str(&format!(" Caption: {}", ctx.text()));
        }
        Ok(Some(Response::text(text)))
    }
}
