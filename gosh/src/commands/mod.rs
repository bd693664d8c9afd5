//! Builtin command implementations.
//!
//! Grouped by concern: navigation, file lifecycle, text, and session
//! bookkeeping. Every builtin writes its own `<name>: <message>` diagnostics.

pub mod files;
pub mod nav;
pub mod session;
pub mod text;

use crate::config::ShellConfig;
use crate::registry::Registry;

/// Register every builtin into `registry`.
pub fn register_builtins(registry: &mut Registry, config: &ShellConfig) {
    registry.register(Box::new(nav::CdCommand::new()));
    registry.register(Box::new(nav::PwdCommand));
    registry.register(Box::new(nav::LsCommand));

    registry.register(Box::new(files::MkdirCommand));
    registry.register(Box::new(files::TouchCommand));
    registry.register(Box::new(files::CpCommand));
    registry.register(Box::new(files::MvCommand));
    registry.register(Box::new(files::RmCommand));
    registry.register(Box::new(files::RmdirCommand));

    registry.register(Box::new(text::CatCommand));
    registry.register(Box::new(text::GrepCommand));
    registry.register(Box::new(text::EchoCommand));

    registry.register(Box::new(session::ExitCommand::new(&config.farewell)));
    registry.register(Box::new(session::HistoryCommand));
}
