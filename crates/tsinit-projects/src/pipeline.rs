//! Project initialization pipeline
//!
//! Six steps run strictly in order, each one reached only if the previous
//! one succeeded:
//!
//! 1. create the workspace directory ([`PipelineStage::Created`])
//! 2. initialize the manifest and add the base toolchain ([`PipelineStage::Bootstrapped`])
//! 3. write tsconfig.json, `src/`, `dist/` and `src/index.ts` ([`PipelineStage::FilesEmitted`])
//! 4. replace the manifest's scripts block ([`PipelineStage::ManifestPatched`])
//! 5. ask for extras ([`PipelineStage::ExtrasChosen`])
//! 6. install each selected extra ([`PipelineStage::ExtrasInstalled`])
//!
//! There is no rollback. A failure leaves the workspace half-built and the
//! error is returned to the caller.

use crate::documents::emit_static_files;
use crate::error::Result;
use crate::extras::install_extras;
use crate::installer::{DependencyInstaller, PackageManager, DEFAULT_PACKAGE_MANAGER};
use crate::manifest::patch_default_scripts;
use crate::prompt::ExtrasPrompt;
use crate::types::{Extra, ExtrasSelection, PipelineStage, BASE_DEV_DEPENDENCIES};
use crate::workspace::Workspace;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

/// Observer for pipeline progress
///
/// All methods default to no-ops.
pub trait PipelineObserver {
    /// Called once each stage has been reached
    fn on_stage(&self, stage: PipelineStage, workspace: &Workspace) {
        let _ = (stage, workspace);
    }

    /// Called before an extra's packages are added
    fn on_extra_started(&self, extra: Extra) {
        let _ = extra;
    }

    /// Called after an extra's artifact has been written
    fn on_extra_installed(&self, extra: Extra) {
        let _ = extra;
    }
}

/// Observer that logs progress through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_stage(&self, stage: PipelineStage, workspace: &Workspace) {
        info!(stage = %stage, project = workspace.name(), "Pipeline stage reached");
    }

    fn on_extra_started(&self, extra: Extra) {
        debug!(extra = %extra, "Installing extra");
    }

    fn on_extra_installed(&self, extra: Extra) {
        info!(extra = %extra, "Extra installed");
    }
}

/// Runtime options for a scaffolding run
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Package manager binary
    pub package_manager: String,
    /// Directory the project is created in
    pub parent_dir: Utf8PathBuf,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            parent_dir: Utf8PathBuf::from("."),
        }
    }
}

impl ScaffoldOptions {
    pub fn with_parent_dir(mut self, parent_dir: impl Into<Utf8PathBuf>) -> Self {
        self.parent_dir = parent_dir.into();
        self
    }

    pub fn with_package_manager(mut self, package_manager: impl Into<String>) -> Self {
        self.package_manager = package_manager.into();
        self
    }

    /// Package manager described by these options
    pub fn package_manager(&self) -> PackageManager {
        PackageManager::new(&self.package_manager)
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub workspace: Workspace,
    pub selection: ExtrasSelection,
    pub stages: Vec<PipelineStage>,
}

/// The initialization pipeline, parameterized over its two external collaborators
pub struct ScaffoldPipeline<I, P> {
    installer: I,
    prompt: P,
}

impl<I: DependencyInstaller, P: ExtrasPrompt> ScaffoldPipeline<I, P> {
    pub fn new(installer: I, prompt: P) -> Self {
        Self { installer, prompt }
    }

    /// Run all six steps for a project called `name` under `parent`
    pub fn run<O>(&self, parent: &Utf8Path, name: &str, observer: &O) -> Result<ScaffoldReport>
    where
        O: PipelineObserver + ?Sized,
    {
        debug!("Initialising project: {}", name);
        let mut stages = Vec::with_capacity(6);
        let mut reach = |stage: PipelineStage, workspace: &Workspace| {
            stages.push(stage);
            observer.on_stage(stage, workspace);
        };

        let workspace = Workspace::create(parent, name)?;
        reach(PipelineStage::Created, &workspace);

        self.installer.init_manifest(workspace.root())?;
        self.installer
            .add_dependencies(workspace.root(), BASE_DEV_DEPENDENCIES, true)?;
        reach(PipelineStage::Bootstrapped, &workspace);

        emit_static_files(&workspace)?;
        reach(PipelineStage::FilesEmitted, &workspace);

        patch_default_scripts(&workspace.manifest_path())?;
        reach(PipelineStage::ManifestPatched, &workspace);

        let selection = self.prompt.select(&Extra::all())?;
        debug!("Selected extras: {}", selection);
        reach(PipelineStage::ExtrasChosen, &workspace);

        install_extras(&workspace, &selection, &self.installer, observer)?;
        reach(PipelineStage::ExtrasInstalled, &workspace);

        Ok(ScaffoldReport {
            workspace,
            selection,
            stages,
        })
    }
}
