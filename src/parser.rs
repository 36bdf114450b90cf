//! # Argument Binder
//!
//! Turns an argument vector into a resolved, fully bound command.
//!
//! The first token names the command and is resolved through the
//! [`CommandRegistry`]. Every later token is either an option (leading `-`)
//! or a positional argument:
//!
//! - `-name value` binds `value` to the option `name` resolves to.
//! - `-flag` sets a boolean option to `true`; `-flag-` sets it to `false`.
//! - anything else is appended to the command's arguments once all options
//!   have bound.
//!
//! Option names may be abbreviated to any unambiguous prefix of the primary or
//! alternate name. The binder is a single forward pass and never backtracks.

use log::debug;

use crate::coerce::{assign, OptionKind};
use crate::error::CommandLineError;
use crate::matching::{resolve_partial, Resolution};
use crate::options::{field_of, options_of};
use crate::registry::{Command, CommandRegistry};

/// Resolves and binds commands from a registry.
pub struct CommandLineParser<'r> {
    registry: &'r mut CommandRegistry,
}

impl<'r> CommandLineParser<'r> {
    pub fn new(registry: &'r mut CommandRegistry) -> Self {
        Self { registry }
    }

    /// Resolves the command named by the first token and binds the rest.
    ///
    /// Returns `Ok(None)` for an empty argument vector.
    pub fn parse_command_line<I>(
        &mut self,
        args: I,
    ) -> Result<Option<&mut dyn Command>, CommandLineError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into);
        let Some(name) = args.next() else {
            return Ok(None);
        };

        let command = self.registry.resolve_mut(&name)?;
        debug!(
            "Resolved '{}' to command '{}'",
            name,
            command.metadata().map(|m| m.name).unwrap_or_default()
        );

        extract_options(command, &mut args)?;
        Ok(Some(command))
    }
}

/// Binds option tokens from `args` onto `command` and appends the
/// positional arguments to its argument list.
pub fn extract_options(
    command: &mut dyn Command,
    args: &mut dyn Iterator<Item = String>,
) -> Result<(), CommandLineError> {
    let entries = options_of(command)?;
    let mut arguments = Vec::new();

    while let Some(token) = args.next() {
        if !token.starts_with('-') {
            arguments.push(token);
            continue;
        }

        let mut option_text = &token[1..];
        let mut value = None;
        if option_text.ends_with('-') {
            option_text = option_text.trim_end_matches('-');
            value = Some("false".to_string());
        }

        let entry = match resolve_partial(entries.iter().map(|entry| (entry, entry)), option_text)
        {
            Resolution::Unique(entry) => entry,
            Resolution::Unknown => {
                return Err(CommandLineError::UnknownOption {
                    option: token.clone(),
                })
            }
            Resolution::Ambiguous(candidates) => {
                return Err(CommandLineError::AmbiguousOption {
                    option: option_text.to_string(),
                    candidates,
                })
            }
        };

        let value = match entry.kind {
            OptionKind::Boolean => value.unwrap_or_else(|| "true".to_string()),
            _ => args
                .next()
                .ok_or_else(|| CommandLineError::MissingOptionValue {
                    option: token.clone(),
                })?,
        };

        debug!("Binding '{}' to option '{}'", value, entry.descriptor.name);
        let field = field_of(command, entry)?;
        assign(field, &token, &value).map_err(|e| e.into_command_line_error(&token, &value))?;
    }

    command.arguments_mut().extend(arguments);
    Ok(())
}
