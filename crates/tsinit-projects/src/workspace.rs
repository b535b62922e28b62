//! Project directory creation

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::io::ErrorKind;
use tracing::{debug, info};

/// A freshly created project directory
///
/// Every later step receives this explicit root instead of relying on the
/// process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    name: String,
    root: Utf8PathBuf,
}

impl Workspace {
    /// Create `parent/name` as a new, empty directory
    ///
    /// # Errors
    /// Returns `Error::ProjectExists` if anything already exists at that path,
    /// or `Error::Io` for any other filesystem failure (missing parent,
    /// permission denied, ...).
    pub fn create(parent: &Utf8Path, name: &str) -> Result<Self> {
        let root = parent.join(name);
        info!("Creating project directory at: {}", root);

        std::fs::create_dir(&root).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => Error::project_exists(root.as_str()),
            _ => Error::Io(e),
        })?;

        debug!("Project directory created");
        Ok(Self {
            name: name.to_string(),
            root,
        })
    }

    /// Wrap an existing directory without creating it
    pub fn open(root: impl Into<Utf8PathBuf>) -> Self {
        let root = root.into();
        let name = root.file_name().unwrap_or_default().to_string();
        Self { name, root }
    }

    /// Project name as given on the command line
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute or caller-relative project root
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Join a path relative to the project root
    pub fn path(&self, relative: impl AsRef<Utf8Path>) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Location of package.json
    pub fn manifest_path(&self) -> Utf8PathBuf {
        self.path("package.json")
    }
}
