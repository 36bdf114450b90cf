//! # Sample Command Implementation
//!
//! `somecmd` exercises each kind of option binding: a plain text option, a
//! collection and a `key=value` map. It prints back whatever was bound.
//!
//! ```text
//! nuvers somecmd -myoption hello -tags a;b -props x=1;y=2
//! nuvers so -m hello -t a -t b
//! ```

use anyhow::Result;
use std::collections::BTreeMap;

use nuvers::coerce::Field;
use nuvers::common_options::CommonOptions;
use nuvers::help::usage_line;
use nuvers::options::OptionDescriptor;
use nuvers::output::Console;
use nuvers::registry::{Command, CommandMetadata};

use super::EXE;

const METADATA: CommandMetadata =
    CommandMetadata::new("somecmd", "Prints the options it was given.")
        .usage("[-myoption <text>] [-tags <a;b>] [-props <k=v;...>]")
        .example("nuvers somecmd -myoption hello -tags a;b -props x=1");

#[derive(Debug, Default)]
pub struct SomeCommand {
    myoption: Option<String>,
    tags: Vec<String>,
    props: BTreeMap<String, String>,
    common: CommonOptions,
    arguments: Vec<String>,
}

impl SomeCommand {
    fn report(&self) -> Vec<String> {
        let mut lines = vec![usage_line(EXE)];
        if let Some(value) = &self.myoption {
            lines.push(format!("Your option: {value}"));
        }
        if !self.tags.is_empty() {
            lines.push(format!("Tags: {}", self.tags.join(", ")));
        }
        for (key, value) in &self.props {
            lines.push(format!("Property {key} = {value}"));
        }
        if !self.arguments.is_empty() {
            lines.push(format!("Arguments: {}", self.arguments.join(", ")));
        }
        lines
    }
}

impl Command for SomeCommand {
    fn metadata(&self) -> Option<CommandMetadata> {
        Some(METADATA)
    }

    fn options(&self) -> Vec<OptionDescriptor> {
        let mut options = vec![
            OptionDescriptor::new("myoption", "Any text").alias("m"),
            OptionDescriptor::new("tags", "Tags to print, separated by ';'").read_only(),
            OptionDescriptor::new("props", "Properties to print, as key=value pairs").read_only(),
        ];
        options.extend(CommonOptions::descriptors());
        options
    }

    fn field(&mut self, name: &str) -> Option<Field<'_>> {
        match name {
            "myoption" => Some(Field::Scalar(&mut self.myoption)),
            "tags" => Some(Field::Items(&mut self.tags)),
            "props" => Some(Field::Pairs(&mut self.props)),
            _ => self.common.field(name),
        }
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
        for line in self.report() {
            console.write_line(line);
        }
        Ok(())
    }
}
