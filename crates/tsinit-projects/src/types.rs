//! Core types for project scaffolding

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Development dependencies installed into every new project
pub const BASE_DEV_DEPENDENCIES: &[&str] = &["typescript", "@types/node"];

/// Optional tooling preset
///
/// Variant order is the evaluation order used by the extras installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extra {
    /// ESLint with the TypeScript parser and plugin
    Eslint,
    /// Prettier formatter
    Prettier,
    /// Vitest test runner
    Vitest,
    /// Minimal Express web server
    Expressjs,
}

impl Extra {
    /// All extras in evaluation order
    pub fn all() -> Vec<Self> {
        vec![Self::Eslint, Self::Prettier, Self::Vitest, Self::Expressjs]
    }

    /// Tag used in prompts and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eslint => "eslint",
            Self::Prettier => "prettier",
            Self::Vitest => "vitest",
            Self::Expressjs => "expressjs",
        }
    }

    /// Packages added by the package manager for this extra
    pub fn dependencies(&self) -> &'static [&'static str] {
        match self {
            Self::Eslint => &[
                "eslint",
                "@typescript-eslint/parser",
                "@typescript-eslint/eslint-plugin",
            ],
            Self::Prettier => &["prettier", "eslint-config-prettier"],
            Self::Vitest => &["vitest"],
            Self::Expressjs => &["express", "@types/express"],
        }
    }

    /// Whether the packages go into devDependencies
    pub fn is_dev(&self) -> bool {
        !matches!(self, Self::Expressjs)
    }
}

impl fmt::Display for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Extra {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eslint" => Ok(Self::Eslint),
            "prettier" => Ok(Self::Prettier),
            "vitest" => Ok(Self::Vitest),
            "expressjs" => Ok(Self::Expressjs),
            other => Err(format!(
                "Unknown extra: {}. Available extras: eslint, prettier, vitest, expressjs",
                other
            )),
        }
    }
}

/// Set of extras chosen by the user
///
/// Iteration always follows evaluation order, whatever order the extras
/// were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtrasSelection {
    extras: BTreeSet<Extra>,
}

impl ExtrasSelection {
    /// Empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an extra; returns false if it was already selected
    pub fn insert(&mut self, extra: Extra) -> bool {
        self.extras.insert(extra)
    }

    pub fn contains(&self, extra: Extra) -> bool {
        self.extras.contains(&extra)
    }

    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }

    pub fn len(&self) -> usize {
        self.extras.len()
    }

    /// Selected extras in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = Extra> + '_ {
        self.extras.iter().copied()
    }
}

impl FromIterator<Extra> for ExtrasSelection {
    fn from_iter<T: IntoIterator<Item = Extra>>(iter: T) -> Self {
        Self {
            extras: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ExtrasSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let tags: Vec<&str> = self.iter().map(|e| e.as_str()).collect();
        f.write_str(&tags.join(", "))
    }
}

/// Stages of the initialization pipeline, in the order they are reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Project directory exists
    Created,
    /// Manifest initialized and base toolchain installed
    Bootstrapped,
    /// tsconfig.json, src/ and dist/ written
    FilesEmitted,
    /// Manifest scripts block replaced
    ManifestPatched,
    /// User selection received
    ExtrasChosen,
    /// All selected extras installed
    ExtrasInstalled,
}

impl PipelineStage {
    /// All stages in order
    pub fn all() -> Vec<Self> {
        vec![
            Self::Created,
            Self::Bootstrapped,
            Self::FilesEmitted,
            Self::ManifestPatched,
            Self::ExtrasChosen,
            Self::ExtrasInstalled,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Bootstrapped => "bootstrapped",
            Self::FilesEmitted => "files_emitted",
            Self::ManifestPatched => "manifest_patched",
            Self::ExtrasChosen => "extras_chosen",
            Self::ExtrasInstalled => "extras_installed",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_round_trip_tags() {
        for extra in Extra::all() {
            assert_eq!(extra.as_str().parse::<Extra>().unwrap(), extra);
        }
        assert!("webpack".parse::<Extra>().is_err());
    }

    #[test]
    fn test_extra_dependencies() {
        assert_eq!(Extra::Vitest.dependencies(), &["vitest"]);
        assert_eq!(Extra::Expressjs.dependencies(), &["express", "@types/express"]);
        assert!(Extra::Eslint.is_dev());
        assert!(!Extra::Expressjs.is_dev());
    }

    #[test]
    fn test_selection_iterates_in_evaluation_order() {
        let selection: ExtrasSelection =
            vec![Extra::Expressjs, Extra::Eslint, Extra::Vitest].into_iter().collect();

        let order: Vec<Extra> = selection.iter().collect();
        assert_eq!(order, vec![Extra::Eslint, Extra::Vitest, Extra::Expressjs]);
    }

    #[test]
    fn test_selection_ignores_duplicates() {
        let mut selection = ExtrasSelection::new();
        assert!(selection.insert(Extra::Prettier));
        assert!(!selection.insert(Extra::Prettier));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_selection_display() {
        assert_eq!(ExtrasSelection::new().to_string(), "none");
        let selection: ExtrasSelection = vec![Extra::Prettier, Extra::Eslint].into_iter().collect();
        assert_eq!(selection.to_string(), "eslint, prettier");
    }

    #[test]
    fn test_serde_tags() {
        let selection: ExtrasSelection = vec![Extra::Expressjs, Extra::Eslint].into_iter().collect();
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json, serde_json::json!({"extras": ["eslint", "expressjs"]}));

        let parsed: ExtrasSelection =
            serde_json::from_str(r#"{"extras": ["vitest", "prettier"]}"#).unwrap();
        assert_eq!(parsed.iter().collect::<Vec<_>>(), vec![Extra::Prettier, Extra::Vitest]);

        assert_eq!(
            serde_json::to_value(PipelineStage::ManifestPatched).unwrap(),
            "manifest_patched"
        );
        let stage: PipelineStage = serde_json::from_str("\"extras_chosen\"").unwrap();
        assert_eq!(stage, PipelineStage::ExtrasChosen);
        assert!(serde_json::from_str::<Extra>("\"Eslint\"").is_err());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for extra in Extra::all() {
            assert_eq!(serde_json::to_value(extra).unwrap(), extra.as_str());
        }
        for stage in PipelineStage::all() {
            assert_eq!(serde_json::to_value(stage).unwrap(), stage.as_str());
        }
    }

    #[test]
    fn test_stages_are_ordered() {
        let stages = PipelineStage::all();
        assert!(stages.windows(2).all(|w| w[0] < w[1]));
    }
}
