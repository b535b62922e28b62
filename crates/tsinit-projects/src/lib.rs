//! # tsinit-projects
//!
//! Scaffolding library behind the `tsinit` CLI:
//! - Project directory creation
//! - package.json bootstrap and script patching
//! - Fixed TypeScript, ESLint and Prettier configuration documents
//! - Optional tooling extras (eslint, prettier, vitest, expressjs)
//!
//! The package manager and the extras prompt are injected through the
//! [`DependencyInstaller`] and [`ExtrasPrompt`] traits.
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use tsinit_projects::{FixedSelection, PackageManager, ScaffoldPipeline, TracingObserver};
//!
//! # fn example() -> tsinit_projects::Result<()> {
//! let pipeline = ScaffoldPipeline::new(PackageManager::default(), FixedSelection::none());
//! let report = pipeline.run(Utf8Path::new("."), "demo", &TracingObserver)?;
//! println!("Created {}", report.workspace.root());
//! # Ok(())
//! # }
//! ```

pub mod documents;
pub mod error;
pub mod extras;
pub mod installer;
pub mod manifest;
pub mod pipeline;
pub mod prompt;
pub mod types;
pub mod workspace;

pub use error::{Error, Result};
pub use installer::{DependencyInstaller, PackageManager};
pub use manifest::ProjectManifest;
pub use pipeline::{
    PipelineObserver, ScaffoldOptions, ScaffoldPipeline, ScaffoldReport, TracingObserver,
};
pub use prompt::{ExtrasPrompt, FixedSelection};
pub use types::{Extra, ExtrasSelection, PipelineStage};
pub use workspace::Workspace;
