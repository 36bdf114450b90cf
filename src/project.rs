//! # Project Files
//!
//! Locates a C# project (`.csproj`) and reads or rewrites the version it
//! declares in `Properties/AssemblyInfo.cs`:
//!
//! ```text
//! [assembly: AssemblyInformationalVersion("1.4.2")]
//! ```
//!
//! Only plain `major.minor.patch` versions are recognized.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info, warn};
use regex::{NoExpand, Regex};
use semver::Version;
use walkdir::WalkDir;
use xot::Xot;

use crate::config::Settings;
use crate::error::{Error, Result};

const PROJECT_EXTENSION: &str = "csproj";
const ASSEMBLY_INFO_PATTERN: &str = r#"\[assembly: AssemblyInformationalVersion\("[0-9].*"\)\]"#;
const VERSION_PATTERN: &str = r#"\("(\d+\.\d+\.\d+)"\)"#;

/// The component of a version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPart {
    Major,
    Minor,
    Patch,
}

impl VersionPart {
    /// Increments this part and resets the lower ones. Pre-release and
    /// build metadata are dropped. Fails when the component is already
    /// `u64::MAX`.
    pub fn increment(self, version: &Version) -> Result<Version> {
        let component = match self {
            VersionPart::Major => version.major,
            VersionPart::Minor => version.minor,
            VersionPart::Patch => version.patch,
        };
        let bumped = component.checked_add(1).ok_or_else(|| Error::Version {
            message: format!(
                "Cannot increment the {self} component of {version}: it is already at its maximum"
            ),
            hint: None,
        })?;

        Ok(match self {
            VersionPart::Major => Version::new(bumped, 0, 0),
            VersionPart::Minor => Version::new(version.major, bumped, 0),
            VersionPart::Patch => Version::new(version.major, version.minor, bumped),
        })
    }
}

impl FromStr for VersionPart {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(VersionPart::Major),
            "minor" => Ok(VersionPart::Minor),
            "patch" => Ok(VersionPart::Patch),
            _ => Err(Error::Version {
                message: format!("Unknown version part: '{s}'"),
                hint: Some("Use one of: major, minor, patch".to_string()),
            }),
        }
    }
}

impl fmt::Display for VersionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionPart::Major => "major",
            VersionPart::Minor => "minor",
            VersionPart::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// A located project file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    path: PathBuf,
}

impl ProjectFile {
    /// Wraps a known project path without checking it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Finds the project to work on.
    ///
    /// An explicit path wins and must name a `.csproj` file. Otherwise the
    /// configured project path is used, and failing that the only `.csproj`
    /// file directly inside `working_dir`. Relative paths are resolved
    /// against `working_dir`.
    pub fn locate(working_dir: &Path, explicit: Option<&str>, settings: &Settings) -> Result<Self> {
        let path = match (explicit, &settings.project_path) {
            (Some(explicit), _) => {
                if !explicit.contains(".csproj") {
                    return Err(Error::Project {
                        message: format!("Specify a .csproj file, got '{explicit}'"),
                        hint: Some("Pass -project <name>.csproj".to_string()),
                    });
                }
                working_dir.join(explicit)
            }
            (None, Some(configured)) => {
                debug!("Using configured project path {}", configured.display());
                working_dir.join(configured)
            }
            (None, None) => find_in_directory(working_dir)?,
        };

        if !path.is_file() {
            return Err(Error::Project {
                message: format!("Project file not found: {}", path.display()),
                hint: None,
            });
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Properties/AssemblyInfo.cs` next to the project file.
    pub fn assembly_info_path(&self) -> PathBuf {
        self.path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join("Properties")
            .join("AssemblyInfo.cs")
    }

    /// The `<AssemblyName>` declared in the project, if any.
    pub fn assembly_name(&self) -> Result<Option<String>> {
        let content = fs::read_to_string(&self.path)?;
        let mut xot = Xot::new();
        let root = xot.parse(&content).map_err(|e| Error::Project {
            message: format!("Error reading {}: {}", self.path.display(), e),
            hint: None,
        })?;

        let name = xot
            .descendants(root)
            .find(|node| {
                xot.element(*node)
                    .is_some_and(|element| xot.local_name_str(element.name()) == "AssemblyName")
            })
            .and_then(|node| xot.text_content_str(node))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        Ok(name)
    }

    /// The assembly name, falling back to the project file stem.
    pub fn package_name(&self) -> Result<String> {
        if let Some(name) = self.assembly_name()? {
            return Ok(name);
        }
        let stem = self
            .path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        warn!(
            "AssemblyName not found in {}, using '{}'",
            self.path.display(),
            stem
        );
        Ok(stem)
    }

    /// The version declared in `AssemblyInfo.cs`.
    pub fn assembly_version(&self) -> Result<Version> {
        let content = self.read_assembly_info()?;
        parse_assembly_version(&content)
    }

    /// Rewrites every version declaration in `AssemblyInfo.cs`.
    pub fn update_assembly_version(&self, version: &Version) -> Result<()> {
        let path = self.assembly_info_path();
        let content = self.read_assembly_info()?;
        info!("Incrementing version for {}", path.display());
        fs::write(&path, replace_assembly_version(&content, version)?)?;
        Ok(())
    }

    fn read_assembly_info(&self) -> Result<String> {
        let path = self.assembly_info_path();
        if !path.is_file() {
            return Err(Error::Version {
                message: format!("Could not find file {}", path.display()),
                hint: Some(
                    "The version is read from Properties/AssemblyInfo.cs next to the project"
                        .to_string(),
                ),
            });
        }
        Ok(fs::read_to_string(&path)?)
    }
}

fn find_in_directory(dir: &Path) -> Result<PathBuf> {
    let mut projects: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(PROJECT_EXTENSION))
        })
        .collect();
    projects.sort();

    match projects.len() {
        0 => Err(Error::Project {
            message: "No .csproj files found in this directory.".to_string(),
            hint: Some("Use -project <path> to point at a project file".to_string()),
        }),
        1 => Ok(projects.remove(0)),
        _ => {
            let names: Vec<String> = projects
                .iter()
                .filter_map(|path| path.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .collect();
            Err(Error::Project {
                message: "More than one .csproj file found in this directory.".to_string(),
                hint: Some(format!(
                    "Use -project to choose one of: {}",
                    names.join(", ")
                )),
            })
        }
    }
}

/// Extracts the version from the first `AssemblyInformationalVersion`
/// declaration in `content`.
pub fn parse_assembly_version(content: &str) -> Result<Version> {
    let declaration = Regex::new(ASSEMBLY_INFO_PATTERN)?
        .find(content)
        .ok_or_else(|| Error::Version {
            message: "Could not find assembly info version".to_string(),
            hint: Some(
                "Add [assembly: AssemblyInformationalVersion(\"1.0.0\")] to AssemblyInfo.cs"
                    .to_string(),
            ),
        })?;

    let version = Regex::new(VERSION_PATTERN)?
        .captures(declaration.as_str())
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| Error::Version {
            message: format!(
                "Assembly info declaration has an invalid version format: {}",
                declaration.as_str()
            ),
            hint: Some("Use a major.minor.patch version such as 1.2.3".to_string()),
        })?;

    Ok(Version::parse(version.as_str())?)
}

/// Replaces every `AssemblyInformationalVersion` declaration with `version`.
pub fn replace_assembly_version(content: &str, version: &Version) -> Result<String> {
    let declaration = format!("[assembly: AssemblyInformationalVersion(\"{version}\")]");
    Ok(Regex::new(ASSEMBLY_INFO_PATTERN)?
        .replace_all(content, NoExpand(&declaration))
        .into_owned())
}
