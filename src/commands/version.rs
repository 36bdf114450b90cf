//! # Version Command Implementation
//!
//! This module implements the `version` command, which bumps the
//! `AssemblyInformationalVersion` of a C# project.
//!
//! ## Functionality
//!
//! - **Project Discovery**: Uses `-project`, then the second positional
//!   argument, then the configured `project-path`, and finally the single
//!   `.csproj` file in the working directory.
//! - **Version Bump**: Increments the major, minor or patch component of the
//!   version declared in `Properties/AssemblyInfo.cs`.
//! - **Dry Run**: `-dryrun` reports the new version without writing it.
//!
//! ```text
//! nuvers version minor
//! nuvers version minor -project MyProj.csproj
//! nuvers ver patch -dry
//! ```

use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use nuvers::coerce::Field;
use nuvers::common_options::CommonOptions;
use nuvers::config::Settings;
use nuvers::error::Error;
use nuvers::options::OptionDescriptor;
use nuvers::output::Console;
use nuvers::project::{ProjectFile, VersionPart};
use nuvers::registry::{Command, CommandMetadata};

const METADATA: CommandMetadata = CommandMetadata::new(
    "version",
    "Increments the AssemblyInformationalVersion of a C# project.",
)
.usage("<major|minor|patch> [project.csproj]")
.example("nuvers version minor -project MyProj.csproj")
.args(0, 2);

/// Bump the version of a project
#[derive(Debug, Default)]
pub struct VersionCommand {
    project: Option<String>,
    dryrun: bool,
    common: CommonOptions,
    arguments: Vec<String>,
    working_dir: PathBuf,
    settings: Settings,
}

impl VersionCommand {
    pub fn new(working_dir: PathBuf, settings: Settings) -> Self {
        Self {
            working_dir,
            settings,
            ..Self::default()
        }
    }

    fn version_part(&self) -> Result<VersionPart> {
        let part = self.arguments.first().ok_or_else(|| Error::Version {
            message: "Missing version part".to_string(),
            hint: Some("Use: nuvers version <major|minor|patch>".to_string()),
        })?;
        Ok(part.parse()?)
    }

    fn explicit_project(&self, console: &Console) -> Option<&str> {
        let positional = self.arguments.get(1).map(String::as_str);
        match (self.project.as_deref(), positional) {
            (Some(option), Some(argument)) => {
                console.write_warning(format!(
                    "Ignoring project argument '{argument}' in favor of -project {option}"
                ));
                Some(option)
            }
            (option, argument) => option.or(argument),
        }
    }
}

impl Command for VersionCommand {
    fn metadata(&self) -> Option<CommandMetadata> {
        Some(METADATA)
    }

    fn options(&self) -> Vec<OptionDescriptor> {
        let mut options = vec![
            OptionDescriptor::new("project", "Path to the .csproj file to version"),
            OptionDescriptor::new("dryrun", "Show the new version without writing it"),
        ];
        options.extend(CommonOptions::descriptors());
        options
    }

    fn field(&mut self, name: &str) -> Option<Field<'_>> {
        match name {
            "project" => Some(Field::Scalar(&mut self.project)),
            "dryrun" => Some(Field::Flag(&mut self.dryrun)),
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
        let part = self.version_part()?;
        let project = ProjectFile::locate(
            &self.working_dir,
            self.explicit_project(console),
            &self.settings,
        )?;
        let package = project.package_name()?;
        debug!(
            "Bumping {} version of '{}' ({})",
            part,
            package,
            project.path().display()
        );

        let current = project.assembly_version()?;
        let next = part.increment(&current)?;

        if self.dryrun {
            console.write_line(format!(
                "AssemblyInfo version would change: {current} -> {next}"
            ));
            return Ok(());
        }

        project.update_assembly_version(&next)?;
        console.write_line(format!("Updated AssemblyInfo version: {next}"));
        Ok(())
    }
}
