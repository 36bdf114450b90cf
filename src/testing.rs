//! Commands and enums shared by the unit tests.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::coerce::{Field, OptionEnum};
use crate::options::OptionDescriptor;
use crate::output::Console;
use crate::registry::{Command, CommandMetadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Minimal,
    Maximal,
    #[default]
    Normal,
}

impl OptionEnum for Mode {
    const VARIANTS: &'static [Self] = &[Mode::Minimal, Mode::Maximal, Mode::Normal];

    fn name(self) -> &'static str {
        match self {
            Mode::Minimal => "Minimal",
            Mode::Maximal => "Maximal",
            Mode::Normal => "Normal",
        }
    }
}

/// One field of every kind the binder supports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleCommand {
    pub myoption: String,
    pub verbose: bool,
    pub count: i64,
    pub tags: Vec<String>,
    pub tag: Option<String>,
    pub props: BTreeMap<String, String>,
    pub project: Option<String>,
    pub mode: Mode,
    pub since: Option<NaiveDate>,
    pub threshold: f64,
    pub release: Option<semver::Version>,
    pub output: Option<PathBuf>,
    pub secret: Option<String>,
    pub arguments: Vec<String>,
}

impl SampleCommand {
    pub const OPTION_NAMES: [&'static str; 13] = [
        "myoption",
        "verbose",
        "count",
        "tags",
        "tag",
        "props",
        "project",
        "mode",
        "since",
        "threshold",
        "release",
        "output",
        "secret",
    ];
}

impl Command for SampleCommand {
    fn metadata(&self) -> Option<CommandMetadata> {
        Some(CommandMetadata::new("sample", "A command with every kind of option"))
    }

    fn options(&self) -> Vec<OptionDescriptor> {
        vec![
            OptionDescriptor::new("myoption", "Free text").alias("m"),
            OptionDescriptor::new("verbose", "A flag").alias("v"),
            OptionDescriptor::new("count", "A signed number"),
            OptionDescriptor::new("tags", "Collected values").read_only(),
            OptionDescriptor::new("tag", "A single tag"),
            OptionDescriptor::new("props", "Collected pairs").read_only(),
            OptionDescriptor::new("project", "A project path"),
            OptionDescriptor::new("mode", "An enum"),
            OptionDescriptor::new("since", "A date"),
            OptionDescriptor::new("threshold", "A float"),
            OptionDescriptor::new("release", "A semantic version"),
            OptionDescriptor::new("output", "A path"),
            OptionDescriptor::new("secret", "Not listed in help"),
        ]
    }

    fn field(&mut self, name: &str) -> Option<Field<'_>> {
        Some(match name {
            "myoption" => Field::Scalar(&mut self.myoption),
            "verbose" => Field::Flag(&mut self.verbose),
            "count" => Field::Scalar(&mut self.count),
            "tags" => Field::Items(&mut self.tags),
            "tag" => Field::Scalar(&mut self.tag),
            "props" => Field::Pairs(&mut self.props),
            "project" => Field::Scalar(&mut self.project),
            "mode" => Field::Choice(&mut self.mode),
            "since" => Field::Scalar(&mut self.since),
            "threshold" => Field::Scalar(&mut self.threshold),
            "release" => Field::Scalar(&mut self.release),
            "output" => Field::Scalar(&mut self.output),
            "secret" => Field::Scalar(&mut self.secret),
            _ => return None,
        })
    }

    fn included_in_help(&self, option: &str) -> bool {
        option != "secret"
    }

    fn arguments(&self) -> &[String] {
        &self.arguments
    }

    fn arguments_mut(&mut self) -> &mut Vec<String> {
        &mut self.arguments
    }

    fn execute(&mut self, _console: &Console) -> anyhow::Result<()> {
        Ok(())
    }
}

/// A command with a name and argument bounds but no options.
#[derive(Debug, Default)]
pub struct NamedCommand {
    metadata: Option<CommandMetadata>,
    arguments: Vec<String>,
}

impl NamedCommand {
    pub fn new(name: &'static str, alt_name: Option<&'static str>) -> Self {
        let mut metadata = CommandMetadata::new(name, "A named command");
        metadata.alt_name = alt_name;
        Self {
            metadata: Some(metadata),
            arguments: Vec::new(),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, min_args: usize, max_args: usize) -> Self {
        self.metadata = self.metadata.map(|m| m.args(min_args, max_args));
        self
    }
}

impl Command for NamedCommand {
    fn metadata(&self) -> Option<CommandMetadata> {
        self.metadata
    }

    fn arguments(&self) -> &[String] {
        &self.arguments
    }

    fn arguments_mut(&mut self) -> &mut Vec<String> {
        &mut self.arguments
    }

    fn execute(&mut self, _console: &Console) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Declares a read-only option backed by a scalar field.
#[derive(Debug, Default)]
pub struct ReadOnlyScalarCommand {
    pub label: String,
    arguments: Vec<String>,
}

impl Command for ReadOnlyScalarCommand {
    fn metadata(&self) -> Option<CommandMetadata> {
        Some(CommandMetadata::new("readonly", "Read-only scalar option"))
    }

    fn options(&self) -> Vec<OptionDescriptor> {
        vec![OptionDescriptor::new("label", "A label").read_only()]
    }

    fn field(&mut self, name: &str) -> Option<Field<'_>> {
        match name {
            "label" => Some(Field::Scalar(&mut self.label)),
            _ => None,
        }
    }

    fn arguments(&self) -> &[String] {
        &self.arguments
    }

    fn arguments_mut(&mut self) -> &mut Vec<String> {
        &mut self.arguments
    }

    fn execute(&mut self, _console: &Console) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Declares an option it has no field for.
#[derive(Debug, Default)]
pub struct UndeclaredFieldCommand {
    arguments: Vec<String>,
}

impl Command for UndeclaredFieldCommand {
    fn metadata(&self) -> Option<CommandMetadata> {
        Some(CommandMetadata::new("undeclared", "Option without a field"))
    }

    fn options(&self) -> Vec<OptionDescriptor> {
        vec![OptionDescriptor::new("ghost", "Never bound")]
    }

    fn arguments(&self) -> &[String] {
        &self.arguments
    }

    fn arguments_mut(&mut self) -> &mut Vec<String> {
        &mut self.arguments
    }

    fn execute(&mut self, _console: &Console) -> anyhow::Result<()> {
        Ok(())
    }
}
