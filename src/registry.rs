//! # Command Registry
//!
//! Holds every command the binary can run and resolves a (possibly
//! abbreviated) name token to exactly one of them.
//!
//! Commands are registered explicitly before any parsing happens and the
//! registry is read-only while resolving. Resolution follows the rules in
//! [`crate::matching`]: a unique prefix match wins, an exact name breaks ties
//! between several prefix matches, and anything else is an
//! [`CommandLineError::UnknownCommand`] or
//! [`CommandLineError::AmbiguousCommand`].

use log::{debug, warn};

use crate::coerce::Field;
use crate::common_options::CommonOptions;
use crate::error::CommandLineError;
use crate::help::CommandHelp;
use crate::matching::{eq_ignore_case, resolve_partial, Named, Resolution};
use crate::options::{options_of, OptionDescriptor};
use crate::output::Console;

/// Identity and argument bounds of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandMetadata {
    /// Primary name, unique within a registry.
    pub name: &'static str,
    pub alt_name: Option<&'static str>,
    pub description: &'static str,
    /// Placeholder text shown after the command name in usage lines.
    pub usage_summary: Option<&'static str>,
    pub usage_example: Option<&'static str>,
    pub min_args: usize,
    pub max_args: usize,
}

impl CommandMetadata {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            alt_name: None,
            description,
            usage_summary: None,
            usage_example: None,
            min_args: 0,
            max_args: usize::MAX,
        }
    }

    pub const fn alias(mut self, alt_name: &'static str) -> Self {
        self.alt_name = Some(alt_name);
        self
    }

    pub const fn usage(mut self, summary: &'static str) -> Self {
        self.usage_summary = Some(summary);
        self
    }

    pub const fn example(mut self, example: &'static str) -> Self {
        self.usage_example = Some(example);
        self
    }

    pub const fn args(mut self, min_args: usize, max_args: usize) -> Self {
        self.min_args = min_args;
        self.max_args = max_args;
        self
    }
}

impl Named for CommandMetadata {
    fn primary_name(&self) -> &str {
        self.name
    }

    fn alt_name(&self) -> Option<&str> {
        self.alt_name
    }
}

/// A runnable command with bindable options.
///
/// Options are declared by [`Command::options`] and written through the
/// handles returned by [`Command::field`], looked up by the descriptor's
/// primary name.
pub trait Command {
    /// Command metadata; commands without it are never registered.
    fn metadata(&self) -> Option<CommandMetadata>;

    fn options(&self) -> Vec<OptionDescriptor> {
        Vec::new()
    }

    fn field(&mut self, _name: &str) -> Option<Field<'_>> {
        None
    }

    /// Whether an option is listed in help. Hidden options still bind.
    fn included_in_help(&self, _option: &str) -> bool {
        true
    }

    /// Options shared by every shipped command, when this command embeds them.
    fn common_options(&self) -> Option<&CommonOptions> {
        None
    }

    fn arguments(&self) -> &[String];

    fn arguments_mut(&mut self) -> &mut Vec<String>;

    /// Runs the command. Only called after binding succeeded and
    /// [`argument_count_valid`] holds.
    fn execute(&mut self, console: &Console) -> anyhow::Result<()>;
}

/// The set of commands available to the parser.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command. Returns `Ok(false)` when the command has no metadata
    /// or a command with the same primary name is already registered.
    ///
    /// The option table is inspected here, so a declared option without a
    /// usable field fails with [`CommandLineError::OptionWithoutSetter`]
    /// before any command line is parsed.
    pub fn register(&mut self, mut command: Box<dyn Command>) -> Result<bool, CommandLineError> {
        let Some(metadata) = command.metadata() else {
            debug!("Ignoring command without metadata");
            return Ok(false);
        };

        let duplicate = self.commands.iter().any(|existing| {
            existing
                .metadata()
                .is_some_and(|m| eq_ignore_case(m.name, metadata.name))
        });
        if duplicate {
            warn!("Command '{}' is already registered", metadata.name);
            return Ok(false);
        }

        let options = options_of(command.as_mut())?;
        debug!(
            "Registered command '{}' with {} option(s)",
            metadata.name,
            options.len()
        );
        self.commands.push(command);
        Ok(true)
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> + '_ {
        self.commands.iter().map(|command| &**command as &dyn Command)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands
            .iter()
            .filter_map(|command| command.metadata())
            .map(|metadata| metadata.name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn resolve(&self, name: &str) -> Result<&dyn Command, CommandLineError> {
        let index = self.position(name)?;
        Ok(self.commands[index].as_ref())
    }

    pub fn resolve_mut(&mut self, name: &str) -> Result<&mut dyn Command, CommandLineError> {
        let index = self.position(name)?;
        let command: &mut dyn Command = self.commands[index].as_mut();
        Ok(command)
    }

    /// Help data for every registered command, in registration order.
    pub fn help_topics(&mut self) -> Result<Vec<CommandHelp>, CommandLineError> {
        let mut topics = Vec::new();
        for command in &mut self.commands {
            if let Some(topic) = CommandHelp::from_command(command.as_mut())? {
                topics.push(topic);
            }
        }
        Ok(topics)
    }

    fn position(&self, name: &str) -> Result<usize, CommandLineError> {
        let candidates = self
            .commands
            .iter()
            .enumerate()
            .filter_map(|(index, command)| command.metadata().map(|metadata| (index, metadata)));

        match resolve_partial(candidates, name) {
            Resolution::Unique(index) => Ok(index),
            Resolution::Unknown => Err(CommandLineError::UnknownCommand {
                name: name.to_string(),
            }),
            Resolution::Ambiguous(candidates) => Err(CommandLineError::AmbiguousCommand {
                name: name.to_string(),
                candidates,
            }),
        }
    }
}

/// Whether the bound positional arguments fit the command's bounds.
pub fn argument_count_valid(command: &dyn Command) -> bool {
    let count = command.arguments().len();
    command
        .metadata()
        .is_some_and(|metadata| metadata.min_args <= count && count <= metadata.max_args)
}

/// The error describing why [`argument_count_valid`] failed.
pub fn invalid_arguments(command: &dyn Command) -> CommandLineError {
    let metadata = command.metadata();
    CommandLineError::InvalidArguments {
        command: metadata.map(|m| m.name).unwrap_or("<unnamed>").to_string(),
        min: metadata.map(|m| m.min_args).unwrap_or(0),
        max: metadata.map(|m| m.max_args).unwrap_or(usize::MAX),
        actual: command.arguments().len(),
    }
}
