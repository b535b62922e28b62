//! Package manager invocation
//!
//! The pipeline never spawns processes directly. It talks to a
//! [`DependencyInstaller`], so tests can substitute a fake and the real
//! [`PackageManager`] stays a thin wrapper over the external binary.

use crate::error::{Error, Result};
use camino::Utf8Path;
use std::process::Command;
use tracing::{debug, info};

/// Default package manager binary
pub const DEFAULT_PACKAGE_MANAGER: &str = "pnpm";

/// Capability to create a manifest and add dependencies to a project
pub trait DependencyInstaller {
    /// Create the base package.json inside `dir`
    fn init_manifest(&self, dir: &Utf8Path) -> Result<()>;

    /// Add `packages` to the project in `dir`, as devDependencies when `dev` is set
    fn add_dependencies(&self, dir: &Utf8Path, packages: &[&str], dev: bool) -> Result<()>;
}

impl<T: DependencyInstaller + ?Sized> DependencyInstaller for &T {
    fn init_manifest(&self, dir: &Utf8Path) -> Result<()> {
        (**self).init_manifest(dir)
    }

    fn add_dependencies(&self, dir: &Utf8Path, packages: &[&str], dev: bool) -> Result<()> {
        (**self).add_dependencies(dir, packages, dev)
    }
}

/// External package manager (pnpm by default)
#[derive(Debug, Clone)]
pub struct PackageManager {
    program: String,
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE_MANAGER)
    }
}

impl PackageManager {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Binary name used for every invocation
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check that the binary can be found on PATH
    pub fn ensure_available(&self) -> Result<()> {
        which::which(&self.program)
            .map(|path| debug!("Found {} at {}", self.program, path.display()))
            .map_err(|_| Error::command_not_found(&self.program))
    }

    /// Arguments for an `add` invocation
    pub fn add_args<'a>(packages: &[&'a str], dev: bool) -> Vec<&'a str> {
        let mut args = vec!["add"];
        if dev {
            args.push("-D");
        }
        args.extend_from_slice(packages);
        args
    }

    /// Run the package manager with `args` in `dir` and wait for it
    fn run(&self, dir: &Utf8Path, args: &[&str]) -> Result<()> {
        let command_line = format!("{} {}", self.program, args.join(" "));
        info!("Running: {}", command_line);

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| {
                Error::process_execution(format!("Failed to execute '{}': {}", command_line, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::command_failed(
                command_line,
                output.status.to_string(),
                stderr.trim(),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.is_empty() {
            debug!("Command output: {}", stdout.trim());
        }

        Ok(())
    }
}

impl DependencyInstaller for PackageManager {
    fn init_manifest(&self, dir: &Utf8Path) -> Result<()> {
        self.run(dir, &["init"])
    }

    fn add_dependencies(&self, dir: &Utf8Path, packages: &[&str], dev: bool) -> Result<()> {
        self.run(dir, &Self::add_args(packages, dev))
    }
}
