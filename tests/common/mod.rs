//! Shared test utilities for integration and E2E tests.
//!
//! This module provides fixtures for C# project layouts and a helper that
//! runs the `nuvers` binary in isolation from the user's own settings.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = ProjectFixture::new().with_project("App", "1.2.3");
//!     fixture.command().args(["version", "patch"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::projects;
    pub use super::ProjectFixture;
}

/// Project file snippets for testing.
#[allow(dead_code)]
pub mod projects {
    /// A project file declaring its assembly name.
    pub fn csproj(assembly_name: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="15.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <OutputType>Library</OutputType>
    <AssemblyName>{assembly_name}</AssemblyName>
  </PropertyGroup>
</Project>
"#
        )
    }

    /// An `AssemblyInfo.cs` declaring `version`.
    pub fn assembly_info(version: &str) -> String {
        format!(
            r#"using System.Reflection;

[assembly: AssemblyTitle("Sample")]
[assembly: AssemblyVersion("1.0.0.0")]
[assembly: AssemblyInformationalVersion("{version}")]
"#
        )
    }
}

/// A temporary directory laid out like a C# project.
pub struct ProjectFixture {
    temp_dir: assert_fs::TempDir,
}

impl ProjectFixture {
    /// Create a new fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add `<name>.csproj` and `Properties/AssemblyInfo.cs` at the root.
    pub fn with_project(self, name: &str, version: &str) -> Self {
        self.with_project_in("", name, version)
    }

    /// Add a project inside the subdirectory `dir`.
    pub fn with_project_in(self, dir: &str, name: &str, version: &str) -> Self {
        let base = if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        };
        self.with_file(&format!("{base}{name}.csproj"), &projects::csproj(name))
            .with_file(
                &format!("{base}Properties/AssemblyInfo.cs"),
                &projects::assembly_info(version),
            )
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// The `AssemblyInfo.cs` of the root project.
    #[allow(dead_code)]
    pub fn assembly_info(&self) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child("Properties/AssemblyInfo.cs")
    }

    /// Create a command running in this fixture's directory.
    ///
    /// The settings file points at a path that does not exist and the
    /// project override is cleared, so the user's environment never leaks in.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("nuvers");
        cmd.current_dir(self.path())
            .env("NUVERS_CONFIG", self.path().join("no-such-config.yaml"))
            .env_remove("NUVERS_PROJECT_PATH")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = ProjectFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_project() {
        let fixture = ProjectFixture::new().with_project("App", "1.0.0");
        assert!(fixture.path().join("App.csproj").exists());
        assert!(fixture.path().join("Properties/AssemblyInfo.cs").exists());
    }
}
