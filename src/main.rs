//! # Nuvers CLI
//!
//! This is the binary entry point for the `nuvers` command-line tool.
//!
//! Its primary responsibilities are:
//! - Building the registry of shipped commands.
//! - Resolving and binding the argument vector with
//!   [`nuvers::parser::CommandLineParser`].
//! - Handling `-help`, argument-count validation and `-verbosity` before a
//!   command runs.
//! - Translating failures into an error message, hints and an exit code.
//!
//! The parsing and binding logic lives in the library crate, so the binary
//! stays a thin wrapper around it.

mod commands;

use std::env;
use std::process::ExitCode;

use log::warn;

use nuvers::common_options::Verbosity;
use nuvers::config::{self, Settings};
use nuvers::error::CommandLineError;
use nuvers::exit_codes;
use nuvers::help::{render_command_usage, CommandHelp};
use nuvers::logging;
use nuvers::output::{terminal_width, Console, OutputConfig};
use nuvers::parser::CommandLineParser;
use nuvers::registry::{argument_count_valid, invalid_arguments};
use nuvers::suggestions::{usage_hints, UsageContext};

use commands::EXE;

/// Why a run did not succeed.
enum Failure {
    /// The command line was wrong.
    Usage {
        error: CommandLineError,
        hints: Vec<String>,
    },
    Runtime(anyhow::Error),
}

impl Failure {
    fn report(self, console: &Console) -> ExitCode {
        match self {
            Failure::Usage { error, hints } => {
                console.write_error(&error);
                for hint in hints {
                    console.hint(hint);
                }
                ExitCode::from(exit_codes::USAGE)
            }
            Failure::Runtime(error) => {
                console.write_error(format!("{error:#}"));
                ExitCode::from(exit_codes::FAILURE)
            }
        }
    }
}

fn main() -> ExitCode {
    logging::init();
    let mut console = Console::new(OutputConfig::from_env());

    match run(&mut console) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(failure) => failure.report(&console),
    }
}

fn run(console: &mut Console) -> Result<(), Failure> {
    let working_dir = env::current_dir().map_err(|e| Failure::Runtime(e.into()))?;
    let settings = config::load().unwrap_or_else(|error| {
        warn!("Ignoring settings: {error}");
        Settings::default()
    });

    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        args.push("help".to_string());
    }

    let mut registry = commands::registry(working_dir, settings).map_err(|error| Failure::Usage {
        error,
        hints: Vec::new(),
    })?;

    // Names for suggestions, gathered before the parser borrows the registry.
    let command_names = registry.command_names();
    let (command_name, option_names): (Option<&str>, Vec<&str>) = match registry.resolve(&args[0]) {
        Ok(command) => (
            command.metadata().map(|m| m.name),
            command.options().iter().map(|o| o.name).collect(),
        ),
        Err(_) => (None, Vec::new()),
    };
    let context = UsageContext {
        exe: EXE,
        command: command_name,
        command_names: &command_names,
        option_names: &option_names,
    };
    let usage = |error: CommandLineError| Failure::Usage {
        hints: usage_hints(&error, &context),
        error,
    };

    let mut parser = CommandLineParser::new(&mut registry);
    let Some(command) = parser.parse_command_line(args).map_err(usage)? else {
        return Ok(());
    };

    if command.common_options().is_some_and(|common| common.help) {
        if let Some(topic) = CommandHelp::from_command(command).map_err(usage)? {
            console.write_line(render_command_usage(EXE, &topic, terminal_width()));
        }
        return Ok(());
    }

    if !argument_count_valid(command) {
        return Err(usage(invalid_arguments(command)));
    }

    let verbosity = command
        .common_options()
        .map(|common| common.verbosity)
        .unwrap_or(Verbosity::Normal);
    console.set_verbosity(verbosity);
    logging::apply_verbosity(verbosity);

    command
        .execute(console)
        .map_err(|error| match error.downcast::<CommandLineError>() {
            Ok(error) => usage(error),
            Err(error) => Failure::Runtime(error),
        })
}
