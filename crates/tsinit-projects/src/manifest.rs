//! package.json read-modify-write

use crate::documents::write_json;
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};
use tracing::debug;

/// `test` script installed by the vitest extra
pub const VITEST_TEST_SCRIPT: &str = "vitest";

/// Scripts block written into every new manifest, in declaration order
pub const DEFAULT_SCRIPTS: &[(&str, &str)] = &[
    ("build", "tsc"),
    ("start", "node dist/index.js"),
    ("dev", "ts-node src/index.ts"),
    ("lint", "eslint . --ext .ts"),
    ("format", "prettier --write \"src/**/*.ts\""),
    ("test", "echo \"Error: no test specified\" && exit 1"),
];

/// Default scripts as a JSON object
pub fn default_scripts() -> Map<String, Value> {
    DEFAULT_SCRIPTS
        .iter()
        .map(|(name, cmd)| (name.to_string(), Value::String(cmd.to_string())))
        .collect()
}

/// In-memory copy of a project's package.json
///
/// Unknown keys written by the package manager are preserved, in their
/// original order.
#[derive(Debug, Clone)]
pub struct ProjectManifest {
    path: Utf8PathBuf,
    fields: Map<String, Value>,
}

impl ProjectManifest {
    /// Read and parse the manifest at `path`
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;

        match value {
            Value::Object(fields) => Ok(Self {
                path: path.to_path_buf(),
                fields,
            }),
            other => Err(Error::invalid_manifest(
                path.as_str(),
                format!("expected a JSON object, found {}", json_kind(&other)),
            )),
        }
    }

    /// Rewrite the manifest file with the current contents
    pub fn save(&self) -> Result<()> {
        debug!("Saving manifest to {}", self.path);
        write_json(&self.path, &Value::Object(self.fields.clone()))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Replace the whole `scripts` block
    pub fn set_scripts(&mut self, scripts: Map<String, Value>) {
        self.fields
            .insert("scripts".to_string(), Value::Object(scripts));
    }

    /// Set a single script, creating the `scripts` block if needed
    pub fn set_script(&mut self, name: &str, command: &str) {
        let scripts = self
            .fields
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()));

        if !scripts.is_object() {
            *scripts = Value::Object(Map::new());
        }
        if let Value::Object(map) = scripts {
            map.insert(name.to_string(), Value::String(command.to_string()));
        }
    }

    /// Script command by name
    pub fn script(&self, name: &str) -> Option<&str> {
        self.fields.get("scripts")?.get(name)?.as_str()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Replace the scripts block of the manifest at `path` with the defaults
pub fn patch_default_scripts(path: &Utf8Path) -> Result<ProjectManifest> {
    let mut manifest = ProjectManifest::load(path)?;
    manifest.set_scripts(default_scripts());
    manifest.save()?;
    Ok(manifest)
}
