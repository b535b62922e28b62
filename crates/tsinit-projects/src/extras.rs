//! Optional tooling presets
//!
//! Each selected extra adds its packages through the installer and then
//! writes exactly one artifact (or, for vitest, patches the manifest).

use crate::documents::{
    eslint_config, prettier_config, write_json, APP_FILE, ESLINT_CONFIG_FILE, EXPRESS_APP,
    PRETTIER_CONFIG_FILE,
};
use crate::error::Result;
use crate::installer::DependencyInstaller;
use crate::manifest::{ProjectManifest, VITEST_TEST_SCRIPT};
use crate::pipeline::PipelineObserver;
use crate::types::{Extra, ExtrasSelection};
use crate::workspace::Workspace;
use tracing::info;

/// Install one extra and write its artifact
pub fn install_extra<I: DependencyInstaller>(
    workspace: &Workspace,
    extra: Extra,
    installer: &I,
) -> Result<()> {
    info!("Installing extra: {}", extra);
    installer.add_dependencies(workspace.root(), extra.dependencies(), extra.is_dev())?;

    match extra {
        Extra::Eslint => write_json(&workspace.path(ESLINT_CONFIG_FILE), &eslint_config()),
        Extra::Prettier => write_json(&workspace.path(PRETTIER_CONFIG_FILE), &prettier_config()),
        Extra::Vitest => {
            // Re-read so dependencies added by earlier `add` calls are kept
            let mut manifest = ProjectManifest::load(&workspace.manifest_path())?;
            manifest.set_script("test", VITEST_TEST_SCRIPT);
            manifest.save()
        }
        Extra::Expressjs => {
            std::fs::write(workspace.path(APP_FILE), EXPRESS_APP)?;
            Ok(())
        }
    }
}

/// Install every selected extra in evaluation order, stopping at the first failure
pub fn install_extras<I, O>(
    workspace: &Workspace,
    selection: &ExtrasSelection,
    installer: &I,
    observer: &O,
) -> Result<()>
where
    I: DependencyInstaller,
    O: PipelineObserver + ?Sized,
{
    for extra in selection.iter() {
        observer.on_extra_started(extra);
        install_extra(workspace, extra, installer)?;
        observer.on_extra_installed(extra);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::{Utf8Path, Utf8PathBuf};
    use std::cell::RefCell;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(Vec<String>, bool)>>,
    }

    impl DependencyInstaller for Recorder {
        fn init_manifest(&self, _dir: &Utf8Path) -> Result<()> {
            Ok(())
        }

        fn add_dependencies(&self, _dir: &Utf8Path, packages: &[&str], dev: bool) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((packages.iter().map(|p| p.to_string()).collect(), dev));
            Ok(())
        }
    }

    fn temp_workspace() -> (TempDir, Workspace) {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        std::fs::create_dir(root.join("src")).unwrap();
        std::fs::write(
            root.join("package.json"),
            r#"{"name":"demo","scripts":{"test":"old"},"devDependencies":{"vitest":"^1.0.0"}}"#,
        )
        .unwrap();
        (temp_dir, Workspace::open(root))
    }

    #[test]
    fn test_eslint_writes_config() {
        let (_temp, workspace) = temp_workspace();
        let recorder = Recorder::default();

        install_extra(&workspace, Extra::Eslint, &recorder).unwrap();

        assert!(workspace.path(ESLINT_CONFIG_FILE).is_file());
        assert_eq!(recorder.calls.borrow()[0].0[0], "eslint");
        assert!(recorder.calls.borrow()[0].1);
    }

    #[test]
    fn test_vitest_patches_test_script_only() {
        let (_temp, workspace) = temp_workspace();

        install_extra(&workspace, Extra::Vitest, &Recorder::default()).unwrap();

        let manifest = ProjectManifest::load(&workspace.manifest_path()).unwrap();
        assert_eq!(manifest.script("test"), Some("vitest"));
        assert!(manifest.get("devDependencies").is_some());
    }

    #[test]
    fn test_express_is_runtime_dependency() {
        let (_temp, workspace) = temp_workspace();
        let recorder = Recorder::default();

        install_extra(&workspace, Extra::Expressjs, &recorder).unwrap();

        assert!(!recorder.calls.borrow()[0].1);
        let app = std::fs::read_to_string(workspace.path(APP_FILE)).unwrap();
        assert!(app.contains("54321"));
    }
}
