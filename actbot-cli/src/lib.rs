//! actbot binary internals: CLI definition, demo actions and command wiring.

pub mod actions;
pub mod app;
pub mod cli;

pub use app::{build_engine, compile_preview, run, session_store, CompileOptions};
pub use cli::{Cli, Commands};
