//! Demo action set shipped with the `actbot` binary.

mod feedback;
mod help;
mod inline;
mod media;
mod members;
mod menu;
mod start;

pub use feedback::FeedbackAction;
pub use help::HelpAction;
pub use inline::InlineEchoAction;
pub use media::MediaAction;
pub use members::GreetMembersAction;
pub use menu::{MenuAction, MenuCallbackAction};
pub use start::StartAction;

use action_chain::ActionRegistry;
use actbot_core::Result;

/// Registers every demo action. Order only matters between equal priorities.
pub fn registry() -> Result<ActionRegistry> {
    ActionRegistry::builder()
        .register(StartAction)
        .register(HelpAction)
        .register(MenuAction)
        .register(MenuCallbackAction)
        .register(FeedbackAction)
        .register(GreetMembersAction)
        .register(InlineEchoAction)
        .register(MediaAction)
        .build()
}
