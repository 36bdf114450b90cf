//! Options every shipped command accepts: `-help` and `-verbosity`.

use log::LevelFilter;

use crate::coerce::{Field, OptionEnum};
use crate::options::OptionDescriptor;

/// How much the binary writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only warnings and errors.
    Quiet,
    #[default]
    Normal,
    /// Also log each resolution and binding step.
    Detailed,
}

impl Verbosity {
    /// The log level used when `RUST_LOG` is not set.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Warn,
            Verbosity::Normal => LevelFilter::Info,
            Verbosity::Detailed => LevelFilter::Debug,
        }
    }
}

impl OptionEnum for Verbosity {
    const VARIANTS: &'static [Self] = &[Verbosity::Quiet, Verbosity::Normal, Verbosity::Detailed];

    fn name(self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Detailed => "detailed",
        }
    }
}

/// Shared option fields, embedded by value in each command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonOptions {
    pub help: bool,
    pub verbosity: Verbosity,
}

impl CommonOptions {
    pub const HELP: OptionDescriptor =
        OptionDescriptor::new("help", "Show help for this command").alias("?");
    pub const VERBOSITY: OptionDescriptor =
        OptionDescriptor::new("verbosity", "Output detail: quiet, normal or detailed");

    /// Descriptors to append to a command's own options.
    pub fn descriptors() -> [OptionDescriptor; 2] {
        [Self::HELP, Self::VERBOSITY]
    }

    /// Field handle for a common option, if `name` is one.
    pub fn field(&mut self, name: &str) -> Option<Field<'_>> {
        match name {
            "help" => Some(Field::Flag(&mut self.help)),
            "verbosity" => Some(Field::Choice(&mut self.verbosity)),
            _ => None,
        }
    }
}
