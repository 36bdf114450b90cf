//! # Nuvers Library
//!
//! A command-line dispatch framework with abbreviation-tolerant command and
//! option names, plus the project-versioning logic behind the `nuvers` tool.
//!
//! ## Quick Example
//!
//! ```
//! use nuvers::coerce::Field;
//! use nuvers::options::OptionDescriptor;
//! use nuvers::output::Console;
//! use nuvers::parser::CommandLineParser;
//! use nuvers::registry::{Command, CommandMetadata, CommandRegistry};
//!
//! #[derive(Default)]
//! struct Greet {
//!     name: String,
//!     loud: bool,
//!     arguments: Vec<String>,
//! }
//!
//! impl Command for Greet {
//!     fn metadata(&self) -> Option<CommandMetadata> {
//!         Some(CommandMetadata::new("greet", "Say hello"))
//!     }
//!
//!     fn options(&self) -> Vec<OptionDescriptor> {
//!         vec![
//!             OptionDescriptor::new("name", "Who to greet"),
//!             OptionDescriptor::new("loud", "Shout"),
//!         ]
//!     }
//!
//!     fn field(&mut self, name: &str) -> Option<Field<'_>> {
//!         match name {
//!             "name" => Some(Field::Scalar(&mut self.name)),
//!             "loud" => Some(Field::Flag(&mut self.loud)),
//!             _ => None,
//!         }
//!     }
//!
//!     fn arguments(&self) -> &[String] {
//!         &self.arguments
//!     }
//!
//!     fn arguments_mut(&mut self) -> &mut Vec<String> {
//!         &mut self.arguments
//!     }
//!
//!     fn execute(&mut self, console: &Console) -> anyhow::Result<()> {
//!         console.write_line(format!("Hello, {}", self.name));
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = CommandRegistry::new();
//! assert!(registry.register(Box::new(Greet::default())).unwrap());
//!
//! let mut parser = CommandLineParser::new(&mut registry);
//! let command = parser
//!     .parse_command_line(["gr", "-n", "world", "-lo"])
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(command.metadata().unwrap().name, "greet");
//! ```
//!
//! ## Core Concepts
//!
//! - **Registry (`registry`)**: The flat set of commands. A command is found
//!   by its name, its alternate name, or any unambiguous prefix of either.
//! - **Options (`options`, `common_options`)**: Each command declares its
//!   options as descriptors and hands out a typed [`coerce::Field`] handle for
//!   each one. Nothing is discovered by reflection.
//! - **Coercion (`coerce`)**: Converts option text into booleans, scalars,
//!   enums, collections and `key=value` maps.
//! - **Binding (`parser`)**: A single forward pass over the remaining tokens
//!   that binds `-option value` pairs and collects positional arguments.
//! - **Errors (`error`)**: Every command-line failure is a
//!   [`error::CommandLineError`] naming the offending token.
//!
//! The `version` command's project handling lives in `project`, settings in
//! `config`, and console output and help rendering in `output` and `help`.

pub mod coerce;
pub mod common_options;
pub mod config;
pub mod defaults;
pub mod error;
pub mod help;
pub mod logging;
pub mod matching;
pub mod options;
pub mod output;
pub mod parser;
pub mod project;
pub mod registry;
pub mod suggestions;

#[cfg(test)]
mod parser_proptest;
#[cfg(test)]
mod testing;

/// Process exit codes used by the `nuvers` binary.
pub mod exit_codes {
    /// The command ran to completion.
    pub const SUCCESS: u8 = 0;
    /// The command failed at runtime.
    pub const FAILURE: u8 = 1;
    /// The command line could not be resolved, bound or validated.
    pub const USAGE: u8 = 2;
}
