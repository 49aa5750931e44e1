use action_chain::{Action, ActionContext, ActionResult};
use actbot_core::{EventKind, Response};
use async_trait::async_trait;

/// Greets new members in groups. Private chats never see membership events.
pub struct GreetMembersAction;

#[async_trait]
impl Action for GreetMembersAction {
    fn name(&self) -> &str {
        "greet_members"
    }

    fn matches(&self, kind: EventKind) -> bool {
        kind == EventKind::NewChatMembers
    }

    fn matches_group(&self) -> bool {
        true
    }

    fn matches_private(&self) -> bool {
        false
    }

    async fn start_condition(&self, _ctx: &ActionContext) -> ActionResult<bool> {
        Ok(true)
    }

    async fn start(&self, _ctx: &ActionContext) -> ActionResult<Option<Response>> {
        Ok(Some(Response::text("Welcome to the group! Send /help to see what I can do.")))
    }
}
