//! # CLI Command Implementations
//!
//! This module contains the commands shipped with the `nuvers` binary. Each
//! command is defined in its own file and implements
//! [`nuvers::registry::Command`].
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - A struct holding the command's option fields, its [`CommonOptions`]
//!   and its positional arguments.
//! - A `Command` impl that declares the options, hands out field handles for
//!   binding, and runs the command in `execute`.
//!
//! [`registry`] wires them together. Commands are registered in the order
//! they are listed by `nuvers help`.
//!
//! [`CommonOptions`]: nuvers::common_options::CommonOptions

pub mod help;
pub mod some;
pub mod version;

use std::path::PathBuf;

use nuvers::config::Settings;
use nuvers::error::CommandLineError;
use nuvers::help::CommandHelp;
use nuvers::registry::CommandRegistry;

use help::HelpCommand;
use some::SomeCommand;
use version::VersionCommand;

/// Executable name used in usage lines and hints.
pub const EXE: &str = env!("CARGO_PKG_NAME");

/// Builds the registry of shipped commands.
///
/// `help` is registered last with a snapshot of every command's help data,
/// its own included.
pub fn registry(working_dir: PathBuf, settings: Settings) -> Result<CommandRegistry, CommandLineError> {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(VersionCommand::new(working_dir, settings)))?;
    registry.register(Box::new(SomeCommand::default()))?;

    let mut topics = registry.help_topics()?;
    if let Some(topic) = CommandHelp::from_command(&mut HelpCommand::default())? {
        topics.push(topic);
    }
    registry.register(Box::new(HelpCommand::new(topics)))?;

    Ok(registry)
}
