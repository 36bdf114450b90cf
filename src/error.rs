//! # Error Handling
//!
//! This module defines the two error types used throughout `nuvers`, both
//! built with `thiserror`.
//!
//! ## Key Components
//!
//! - **`CommandLineError`**: Every way a user's argument vector can fail to
//!   resolve or bind: unknown or ambiguous commands and options, missing or
//!   invalid option values, unsupported conversions, and the structural
//!   `OptionWithoutSetter` error raised when a command declares an option it
//!   cannot write. Each variant carries the offending token (and, for the
//!   ambiguous cases, every candidate name) so the message can be rendered
//!   precisely. `key()` and `args()` expose the same information as a message
//!   key plus format arguments for callers that localize messages themselves.
//!
//! - **`Error`**: Failures of the version workflow and its surroundings:
//!   project discovery, reading and rewriting the version marker, settings
//!   files, and wrapped I/O, regex, semver and YAML errors.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! A `CommandLineError` is always a user-input error. The binary reports it
//! once and exits with [`crate::exit_codes::USAGE`]; everything else exits with
//! [`crate::exit_codes::FAILURE`].

use thiserror::Error;

use crate::coerce::ScalarType;

/// A failure to resolve or bind a command line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandLineError {
    /// No registered command's name or alternate name starts with the token.
    #[error("Unknown command: '{name}'")]
    UnknownCommand { name: String },

    /// Several commands start with the token and none is named exactly that.
    #[error("Command '{name}' is ambiguous. Possible matches: {}", candidates.join(" "))]
    AmbiguousCommand {
        name: String,
        candidates: Vec<String>,
    },

    /// No declared option's name or alternate name starts with the token.
    #[error("Unknown option: '{option}'")]
    UnknownOption { option: String },

    /// Several options (or enum members) start with the token and none is
    /// named exactly that.
    #[error("Option '{option}' is ambiguous. Possible matches: {}", candidates.join(" "))]
    AmbiguousOption {
        option: String,
        candidates: Vec<String>,
    },

    /// A non-boolean option was the last token, leaving nothing to bind.
    #[error("Missing option value for: '{option}'")]
    MissingOptionValue { option: String },

    /// The value could not be coerced into the option's declared type.
    #[error("Invalid option value: '{option} {value}': {reason}")]
    InvalidOptionValue {
        option: String,
        value: String,
        reason: String,
    },

    /// Neither the source nor the target type knows a conversion path.
    #[error("Unable to convert from {from} to {to}")]
    UnsupportedConversion { from: ScalarType, to: ScalarType },

    /// A declared option has no setter and is not a collection or map.
    #[error("Option '{field}' is invalid because it has no setter and is not a collection")]
    OptionWithoutSetter { field: String },

    /// The number of positional arguments is outside the command's bounds.
    #[error("Invalid arguments for command '{command}': expected {}, got {actual}", describe_bounds(*min, *max))]
    InvalidArguments {
        command: String,
        min: usize,
        max: usize,
        actual: usize,
    },
}

impl CommandLineError {
    /// The resource key of the message this error renders.
    pub fn key(&self) -> &'static str {
        match self {
            Self::UnknownCommand { .. } => "UnknownCommandError",
            Self::AmbiguousCommand { .. } => "AmbiguousCommand",
            Self::UnknownOption { .. } => "UnknownOptionError",
            Self::AmbiguousOption { .. } => "AmbiguousOption",
            Self::MissingOptionValue { .. } => "MissingOptionValueError",
            Self::InvalidOptionValue { .. } => "InvalidOptionValueError",
            Self::UnsupportedConversion { .. } => "UnableToConvertTypeError",
            Self::OptionWithoutSetter { .. } => "OptionInvalidWithoutSetter",
            Self::InvalidArguments { .. } => "InvalidArguments",
        }
    }

    /// The format arguments of the message, in the order the message uses them.
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::UnknownCommand { name } => vec![name.clone()],
            Self::AmbiguousCommand { name, candidates } => {
                vec![name.clone(), candidates.join(" ")]
            }
            Self::UnknownOption { option } | Self::MissingOptionValue { option } => {
                vec![option.clone()]
            }
            Self::AmbiguousOption { option, candidates } => {
                vec![option.clone(), candidates.join(" ")]
            }
            Self::InvalidOptionValue { option, value, .. } => vec![option.clone(), value.clone()],
            Self::UnsupportedConversion { from, to } => vec![from.to_string(), to.to_string()],
            Self::OptionWithoutSetter { field } => vec![field.clone()],
            Self::InvalidArguments { command, .. } => vec![command.clone()],
        }
    }
}

fn describe_bounds(min: usize, max: usize) -> String {
    match (min, max) {
        (min, usize::MAX) => format!("at least {min} argument(s)"),
        (min, max) if min == max => format!("exactly {min} argument(s)"),
        (min, max) => format!("between {min} and {max} argument(s)"),
    }
}

/// Main error type for nuvers operations
#[derive(Error, Debug)]
pub enum Error {
    /// The project file could not be located or read.
    #[error("Project error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Project {
        message: String,
        /// Optional hint for how to point nuvers at the right project
        hint: Option<String>,
    },

    /// The version marker is missing or malformed.
    #[error("Version error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Version {
        message: String,
        /// Optional hint for how to fix the version declaration
        hint: Option<String>,
    },

    /// The settings file could not be parsed.
    #[error("Settings error in {path}: {message}")]
    Settings { path: String, message: String },

    /// A command line could not be resolved or bound.
    #[error(transparent)]
    CommandLine(#[from] CommandLineError),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A semantic versioning parsing error, wrapped from `semver::Error`.
    #[error("Semver parsing error: {0}")]
    Semver(#[from] semver::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
