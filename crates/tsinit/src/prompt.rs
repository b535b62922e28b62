//! Interactive extras selection

use dialoguer::MultiSelect;
use tsinit_projects::prompt::EXTRAS_PROMPT;
use tsinit_projects::{Error, Extra, ExtrasPrompt, ExtrasSelection, Result};

use crate::output;

/// Multi-select prompt over the extras, backed by dialoguer
#[derive(Debug, Default)]
pub struct DialoguerPrompt;

impl ExtrasPrompt for DialoguerPrompt {
    fn select(&self, choices: &[Extra]) -> Result<ExtrasSelection> {
        // No terminal to draw on: proceed with no extras rather than block or fail
        if !console::user_attended_stderr() {
            output::warning("No interactive terminal detected, skipping optional extras");
            tracing::warn!("Extras prompt skipped: stderr is not a terminal");
            return Ok(ExtrasSelection::new());
        }

        let labels: Vec<&str> = choices.iter().map(|e| e.as_str()).collect();
        let picked = MultiSelect::new()
            .with_prompt(EXTRAS_PROMPT)
            .items(&labels)
            .interact()
            .map_err(|e| Error::prompt(e.to_string()))?;

        Ok(picked.into_iter().map(|i| choices[i]).collect())
    }
}
