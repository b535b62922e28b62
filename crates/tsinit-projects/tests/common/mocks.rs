//! Mock implementations for testing
//!
//! `FakeInstaller` stands in for pnpm: `init` writes a minimal package.json
//! and `add` records the packages into the matching dependency block, the
//! same way the real package manager mutates the manifest.

#![allow(dead_code)]

use camino::Utf8Path;
use serde_json::{json, Map, Value};
use std::sync::Mutex;
use tsinit_projects::{DependencyInstaller, Error, Result};

/// Record of an installer call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Init,
    Add { packages: Vec<String>, dev: bool },
}

impl Invocation {
    pub fn add(packages: &[&str], dev: bool) -> Self {
        Self::Add {
            packages: packages.iter().map(|p| p.to_string()).collect(),
            dev,
        }
    }
}

/// Fake package manager
#[derive(Default)]
pub struct FakeInstaller {
    invocations: Mutex<Vec<Invocation>>,
    fail_on: Option<String>,
}

impl FakeInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any `add` call that includes `package`
    pub fn failing_on(package: &str) -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
            fail_on: Some(package.to_string()),
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl DependencyInstaller for FakeInstaller {
    fn init_manifest(&self, dir: &Utf8Path) -> Result<()> {
        self.invocations.lock().unwrap().push(Invocation::Init);
        let name = dir.file_name().unwrap_or_default();
        let manifest = json!({
            "name": name,
            "version": "1.0.0",
            "description": "",
            "main": "index.js",
            "scripts": {
                "test": "echo \"Error: no test specified\" && exit 1"
            },
            "keywords": [],
            "author": "",
            "license": "ISC"
        });
        std::fs::write(dir.join("package.json"), serde_json::to_string_pretty(&manifest)?)?;
        Ok(())
    }

    fn add_dependencies(&self, dir: &Utf8Path, packages: &[&str], dev: bool) -> Result<()> {
        self.invocations
            .lock()
            .unwrap()
            .push(Invocation::add(packages, dev));

        if let Some(fail) = &self.fail_on {
            if packages.iter().any(|p| *p == fail.as_str()) {
                return Err(Error::command_failed(
                    format!("pnpm add {}", packages.join(" ")),
                    "exit status: 1",
                    "ERR_PNPM_FETCH_404",
                ));
            }
        }

        let path = dir.join("package.json");
        let mut manifest: Map<String, Value> =
            serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        let key = if dev { "devDependencies" } else { "dependencies" };
        let block = manifest
            .entry(key)
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = block {
            for package in packages {
                map.insert(package.to_string(), Value::String("^1.0.0".to_string()));
            }
        }
        std::fs::write(&path, serde_json::to_string_pretty(&manifest)?)?;
        Ok(())
    }
}
