//! `tsinit init` command handler

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tsinit_projects::{
    DependencyInstaller, Extra, PackageManager, PipelineObserver, PipelineStage,
    ScaffoldOptions, ScaffoldPipeline, TracingObserver, Workspace,
};

use crate::cli::InitArgs;
use crate::output;
use crate::prompt::DialoguerPrompt;

/// Create a new TypeScript project in the current directory
pub fn run(args: InitArgs) -> Result<()> {
    output::info(&format!("Initialising project: {}", args.project_name));

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let cwd = Utf8PathBuf::try_from(cwd).context("Current directory is not valid UTF-8")?;
    let options = ScaffoldOptions::default().with_parent_dir(cwd);

    let package_manager = options.package_manager();
    package_manager
        .ensure_available()
        .with_context(|| format!("{} is required to initialise a project", options.package_manager))?;

    let pipeline = ScaffoldPipeline::new(SpinnerInstaller::new(package_manager), DialoguerPrompt);
    let report = pipeline
        .run(&options.parent_dir, &args.project_name, &ConsoleObserver)
        .with_context(|| format!("Failed to initialise project '{}'", args.project_name))?;

    output::success("Project initialised successfully");
    println!();
    output::kv("Location", report.workspace.root().as_str());
    output::kv("Extras", &report.selection.to_string());

    Ok(())
}

/// Package manager wrapper that shows a spinner while the command runs
struct SpinnerInstaller {
    inner: PackageManager,
}

impl SpinnerInstaller {
    fn new(inner: PackageManager) -> Self {
        Self { inner }
    }

    fn with_spinner<F>(&self, msg: String, f: F) -> tsinit_projects::Result<()>
    where
        F: FnOnce(&PackageManager) -> tsinit_projects::Result<()>,
    {
        let pb = output::spinner(&msg);
        let result = f(&self.inner);
        pb.finish_and_clear();
        result
    }
}

impl DependencyInstaller for SpinnerInstaller {
    fn init_manifest(&self, dir: &Utf8Path) -> tsinit_projects::Result<()> {
        self.with_spinner(format!("{} init", self.inner.program()), |pm| {
            pm.init_manifest(dir)
        })
    }

    fn add_dependencies(
        &self,
        dir: &Utf8Path,
        packages: &[&str],
        dev: bool,
    ) -> tsinit_projects::Result<()> {
        let args = PackageManager::add_args(packages, dev).join(" ");
        self.with_spinner(format!("{} {}", self.inner.program(), args), |pm| {
            pm.add_dependencies(dir, packages, dev)
        })
    }
}

/// Prints the per-extra success lines and forwards stage changes to tracing
struct ConsoleObserver;

impl PipelineObserver for ConsoleObserver {
    fn on_stage(&self, stage: PipelineStage, workspace: &Workspace) {
        TracingObserver.on_stage(stage, workspace);
    }

    fn on_extra_started(&self, extra: Extra) {
        TracingObserver.on_extra_started(extra);
    }

    fn on_extra_installed(&self, extra: Extra) {
        TracingObserver.on_extra_installed(extra);
        output::success(extra_message(extra));
    }
}

fn extra_message(extra: Extra) -> &'static str {
    match extra {
        Extra::Eslint => "Eslint config ✅",
        Extra::Prettier => "Prettier config ✅",
        Extra::Vitest => "Vitest script updated in package.json ✅",
        Extra::Expressjs => "Express app initialised 🚀",
    }
}
