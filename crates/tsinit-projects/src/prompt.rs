//! Extras selection capability

use crate::error::Result;
use crate::types::{Extra, ExtrasSelection};

/// Prompt shown when asking for extras
pub const EXTRAS_PROMPT: &str = "Select optional extras:";

/// Source of the user's extras selection
///
/// The CLI implements this with an interactive multi-select; tests and
/// non-interactive runs use [`FixedSelection`].
pub trait ExtrasPrompt {
    /// Ask the user to choose any subset of `choices`
    fn select(&self, choices: &[Extra]) -> Result<ExtrasSelection>;
}

impl<T: ExtrasPrompt + ?Sized> ExtrasPrompt for &T {
    fn select(&self, choices: &[Extra]) -> Result<ExtrasSelection> {
        (**self).select(choices)
    }
}

/// Prompt that always answers with a preset selection
#[derive(Debug, Clone, Default)]
pub struct FixedSelection {
    selection: ExtrasSelection,
}

impl FixedSelection {
    pub fn new(selection: ExtrasSelection) -> Self {
        Self { selection }
    }

    /// Selection used when no terminal is attached
    pub fn none() -> Self {
        Self::default()
    }
}

impl ExtrasPrompt for FixedSelection {
    fn select(&self, choices: &[Extra]) -> Result<ExtrasSelection> {
        Ok(self
            .selection
            .iter()
            .filter(|extra| choices.contains(extra))
            .collect())
    }
}
