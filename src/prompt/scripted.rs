//! Scripted prompt provider with predefined answers
//!
//! This module provides a prompt provider that answers questions without
//! user interaction, for automation, CI environments, or tests.

use std::collections::HashMap;

use super::interface::{ConfirmationConfig, SingleChoiceConfig, TextPromptConfig};
use crate::error::{Error, Result};

/// Prompt provider that gives predefined answers keyed by prompt text.
///
/// Prompts without a predefined answer fall back to the default carried
/// in the prompt configuration.
#[derive(Debug)]
pub struct ScriptedPrompter {
    text_answers: HashMap<String, String>,
    choice_answers: HashMap<String, usize>,
    confirmation_answers: HashMap<String, bool>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self {
            text_answers: HashMap::new(),
            choice_answers: HashMap::new(),
            confirmation_answers: HashMap::new(),
        }
    }

    /// Adds a predefined text answer for a specific prompt.
    pub fn with_text_answer(mut self, prompt: &str, answer: &str) -> Self {
        self.text_answers.insert(prompt.to_string(), answer.to_string());
        self
    }

    /// Adds a predefined selection answer for a specific prompt.
    pub fn with_choice_answer(mut self, prompt: &str, index: usize) -> Self {
        self.choice_answers.insert(prompt.to_string(), index);
        self
    }

    /// Adds a predefined confirmation answer for a specific prompt.
    pub fn with_confirmation_answer(mut self, prompt: &str, answer: bool) -> Self {
        self.confirmation_answers.insert(prompt.to_string(), answer);
        self
    }
}

impl Default for ScriptedPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl super::interface::TextPrompter for ScriptedPrompter {
    fn prompt_text(&mut self, config: &TextPromptConfig) -> Result<String> {
        if let Some(answer) = self.text_answers.get(&config.prompt) {
            return Ok(answer.clone());
        }
        Ok(config.default.clone().unwrap_or_default())
    }
}

impl super::interface::SingleChoicePrompter for ScriptedPrompter {
    fn prompt_single_choice(&mut self, config: &SingleChoiceConfig) -> Result<usize> {
        let index = self
            .choice_answers
            .get(&config.prompt)
            .copied()
            .or(config.default_index)
            .unwrap_or(0);

        // Scripted answers are range-checked the same way typed ones are.
        if index >= config.choices.len() {
            return Err(Error::SelectionOutOfRangeError {
                max: config.choices.len().saturating_sub(1),
            });
        }

        Ok(index)
    }
}

impl super::interface::ConfirmationPrompter for ScriptedPrompter {
    fn prompt_confirmation(&mut self, config: &ConfirmationConfig) -> Result<bool> {
        Ok(self
            .confirmation_answers
            .get(&config.prompt)
            .copied()
            .unwrap_or(config.default))
    }
}
