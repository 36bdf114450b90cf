//! # Help Command Implementation
//!
//! `help` lists every command, and `help <command>` prints one command's
//! usage. Command names may be abbreviated here just like on the command
//! line.
//!
//! The help data is gathered once, when the registry is built, so the
//! command never reaches back into the registry that owns it.

use anyhow::Result;

use nuvers::coerce::Field;
use nuvers::common_options::CommonOptions;
use nuvers::help::{render_command_list, render_command_usage, resolve_topic, CommandHelp};
use nuvers::options::OptionDescriptor;
use nuvers::output::{terminal_width, Console};
use nuvers::registry::{Command, CommandMetadata};

use super::EXE;

pub(crate) const METADATA: CommandMetadata =
    CommandMetadata::new("help", "Displays general help information and help about other commands.")
        .alias("?")
        .usage("[command]")
        .example("nuvers help version")
        .args(0, 1);

#[derive(Debug, Default)]
pub struct HelpCommand {
    topics: Vec<CommandHelp>,
    common: CommonOptions,
    arguments: Vec<String>,
}

impl HelpCommand {
    pub fn new(topics: Vec<CommandHelp>) -> Self {
        Self {
            topics,
            ..Self::default()
        }
    }

    fn render(&self, width: usize) -> Result<String> {
        match self.arguments.first() {
            Some(name) => {
                let topic = resolve_topic(&self.topics, name)?;
                Ok(render_command_usage(EXE, topic, width))
            }
            None => Ok(render_command_list(EXE, &self.topics, width)),
        }
    }
}

impl Command for HelpCommand {
    fn metadata(&self) -> Option<CommandMetadata> {
        Some(METADATA)
    }

    fn options(&self) -> Vec<OptionDescriptor> {
        CommonOptions::descriptors().to_vec()
    }

    fn field(&mut self, name: &str) -> Option<Field<'_>> {
        self.common.field(name)
    }

    fn common_options(&self) -> Option<&CommonOptions> {
        Some(&self.common)
    }

    fn arguments(&self) -> &[String] {
        &self.arguments
    }

    fn arguments_mut(&mut self) -> &mut Vec<String> {
        &mut self.arguments
    }

    fn execute(&mut self, console: &Console) -> Result<()> {
        console.write_line(self.render(terminal_width())?);
        Ok(())
    }
}
