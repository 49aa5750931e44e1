use action_chain::{Action, ActionContext, ActionResult};
use actbot_core::{EventKind, InlineArticle, Response};
use async_trait::async_trait;

/// Inline mode: offers the query back as plain and shouted text.
pub struct InlineEchoAction;

#[async_trait]
impl Action for InlineEchoAction {
    fn name(&self) -> &str {
        "inline_echo"
    }

    fn matches(&self, kind: EventKind) -> bool {
        kind == EventKind::InlineQuery
    }

    async fn start_condition(&self, _ctx: &ActionContext) -> ActionResult<bool> {
        Ok(true)
    }

    async fn start(&self, ctx: &ActionContext) -> ActionResult<Option<Response>> {
        let query = ctx.text().trim();
        if query.is_empty() {
            return Ok(Some(Response::empty()));
        }
        let mut shout = InlineArticle::new("shout", "Shout", query.to_uppercase());
        shout.description = Some("Sends the text in capitals".to_string());
        Ok(Some(Response::articles(vec![
            InlineArticle::new("echo", "Echo", query),
            shout,
        ])))
    }
}
