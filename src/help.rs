//! # Help Rendering
//!
//! Builds the text of `nuvers help` and `nuvers help <command>` from the
//! registered commands' metadata and option declarations.
//!
//! Rendering is pure: every function takes the output width and returns a
//! `String`, so the binary decides where it goes and tests can pin it.

use crate::error::CommandLineError;
use crate::matching::{resolve_partial, Named, Resolution};
use crate::options::{options_of, OptionEntry};
use crate::output::justify;
use crate::registry::{Command, CommandMetadata};

/// A snapshot of one command's help data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHelp {
    pub metadata: CommandMetadata,
    /// Options listed in help, in declaration order.
    pub options: Vec<OptionEntry>,
}

impl CommandHelp {
    /// Reads the help data of `command`. Returns `None` when it has no
    /// metadata.
    pub fn from_command(command: &mut dyn Command) -> Result<Option<Self>, CommandLineError> {
        let Some(metadata) = command.metadata() else {
            return Ok(None);
        };
        let options = options_of(command)?
            .into_iter()
            .filter(|entry| entry.in_help)
            .collect();
        Ok(Some(Self { metadata, options }))
    }
}

impl Named for CommandHelp {
    fn primary_name(&self) -> &str {
        self.metadata.name
    }

    fn alt_name(&self) -> Option<&str> {
        self.metadata.alt_name
    }
}

/// Finds the topic `name` abbreviates, with the same rules as command
/// resolution.
pub fn resolve_topic<'t>(
    topics: &'t [CommandHelp],
    name: &str,
) -> Result<&'t CommandHelp, CommandLineError> {
    match resolve_partial(topics.iter().map(|topic| (topic, topic)), name) {
        Resolution::Unique(topic) => Ok(topic),
        Resolution::Unknown => Err(CommandLineError::UnknownCommand {
            name: name.to_string(),
        }),
        Resolution::Ambiguous(candidates) => Err(CommandLineError::AmbiguousCommand {
            name: name.to_string(),
            candidates,
        }),
    }
}

/// The general usage line printed above every command listing.
pub fn usage_line(exe: &str) -> String {
    format!("usage: {exe} <command> [args] [options]")
}

/// Lists every command with its description.
pub fn render_command_list(exe: &str, topics: &[CommandHelp], width: usize) -> String {
    let mut lines = vec![
        usage_line(exe),
        format!("Type '{exe} help <command>' for help on a specific command."),
        String::new(),
        "Available commands:".to_string(),
        String::new(),
    ];

    let name_width = topics
        .iter()
        .map(|topic| topic.metadata.name.chars().count())
        .max()
        .unwrap_or(0);
    for topic in topics {
        let description = justify(name_width + 4, topic.metadata.description, width);
        lines.push(format!(
            " {:<name_width$}   {}",
            topic.metadata.name, description
        ));
    }

    lines.join("\n")
}

/// Full usage of a single command.
pub fn render_command_usage(exe: &str, topic: &CommandHelp, width: usize) -> String {
    let metadata = &topic.metadata;
    let mut usage = format!("usage: {exe} {}", metadata.name);
    if let Some(summary) = metadata.usage_summary {
        usage.push(' ');
        usage.push_str(summary);
    }

    let mut lines = vec![usage, String::new(), justify(0, metadata.description, width)];

    if let Some(alt_name) = metadata.alt_name {
        lines.push(String::new());
        lines.push(format!("alias: {alt_name}"));
    }

    if !topic.options.is_empty() {
        lines.push(String::new());
        lines.push("options:".to_string());
        lines.push(String::new());

        let signatures: Vec<String> = topic.options.iter().map(option_signature).collect();
        let column = signatures
            .iter()
            .map(|signature| signature.chars().count())
            .max()
            .unwrap_or(0);
        for (signature, entry) in signatures.iter().zip(&topic.options) {
            let description = justify(column + 4, entry.descriptor.description, width);
            lines.push(format!(" {signature:<column$}   {description}"));
        }
    }

    if let Some(example) = metadata.usage_example {
        lines.push(String::new());
        lines.push("examples:".to_string());
        lines.push(String::new());
        lines.push(justify(0, example, width));
    }

    lines.join("\n")
}

/// `-name (-alt) <kind>`
fn option_signature(entry: &OptionEntry) -> String {
    let mut signature = format!("-{}", entry.descriptor.name);
    if let Some(alt_name) = entry.descriptor.alt_name {
        signature.push_str(&format!(" (-{alt_name})"));
    }
    if let Some(hint) = entry.kind.value_hint() {
        signature.push(' ');
        signature.push_str(&hint);
    }
    signature
}
