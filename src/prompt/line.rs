//! Line-buffered implementation of the prompt interfaces
//!
//! This module provides the concrete implementation of the prompt
//! interfaces over an injected input source and output sink. Each
//! operation writes the question text, writes the prompt marker, reads
//! one line of answer text and strips its terminator.

use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

use log::{debug, trace};

use super::interface::{
    ConfirmationConfig, ConfirmationPrompter, SingleChoiceConfig,
    SingleChoicePrompter, TextPromptConfig, TextPrompter,
};
use crate::error::{Error, Result};

const DEFAULT_MARKER: &str = "> ";

/// Prompter backed by a line-buffered input source and a text output sink.
///
/// The endpoints are injected at construction time, so independent
/// instances can coexist and tests can run against in-memory streams.
/// Both endpoints may be `&mut` borrows to retain access to the
/// underlying buffers.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
    marker: String,
}

impl LinePrompter<BufReader<Stdin>, Stdout> {
    /// Creates a prompter wired to standard input and standard output.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, marker: DEFAULT_MARKER.to_string() }
    }

    /// Replaces the prompt marker. A single space is always appended.
    /// The default is `"> "`.
    pub fn set_prompt(&mut self, marker: &str) {
        self.marker = format!("{marker} ");
    }

    /// Writes the prompt marker and reads one line of answer text.
    ///
    /// Exactly one trailing terminator is stripped, recognizing both a
    /// bare `\n` and a `\r\n` pair. Other trailing whitespace is kept.
    /// End of stream before a terminator yields the partial text,
    /// possibly empty.
    fn read_answer(&mut self) -> Result<String> {
        write!(self.output, "{}", self.marker)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        trace!("Read answer of {} bytes.", line.len());
        Ok(line)
    }

    /// Prompts the user for input. There is no default answer, so an
    /// empty answer returns an empty string.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        self.prompt_text(&TextPromptConfig {
            prompt: question.to_string(),
            default: None,
            secret: false,
        })
    }

    /// Prompts the user for input, substituting `default_answer` if no
    /// answer is provided.
    pub fn ask_def(&mut self, question: &str, default_answer: &str) -> Result<String> {
        self.prompt_text(&TextPromptConfig {
            prompt: question.to_string(),
            default: Some(default_answer.to_string()),
            secret: false,
        })
    }

    /// Prompts the user for an input that should not be shown on the
    /// terminal. The answer is currently not masked; a warning is printed
    /// after the question instead.
    pub fn ask_secret(&mut self, question: &str) -> Result<String> {
        self.prompt_text(&TextPromptConfig {
            prompt: question.to_string(),
            default: None,
            secret: true,
        })
    }

    /// Displays `options` as a numbered selection list in the form of
    /// `  [index] option`, from which the user picks one by number.
    /// Returns the chosen index, or an error if the answer was not a
    /// number or was out of range.
    pub fn ask_selection(&mut self, question: &str, options: &[String]) -> Result<usize> {
        self.prompt_single_choice(&SingleChoiceConfig {
            prompt: question.to_string(),
            choices: options.to_vec(),
            default_index: None,
        })
    }

    /// Like [`ask_selection`](Self::ask_selection), but with a default
    /// index that is chosen when no answer is provided. A default outside
    /// the option range fails without prompting.
    pub fn ask_selection_def(
        &mut self,
        question: &str,
        default_index: usize,
        options: &[String],
    ) -> Result<usize> {
        self.prompt_single_choice(&SingleChoiceConfig {
            prompt: question.to_string(),
            choices: options.to_vec(),
            default_index: Some(default_index),
        })
    }

    /// Prompts the user with a yes/no question. An empty answer returns
    /// `default`; a non-empty answer is `true` only for exactly `"y"`.
    pub fn ask_bool_def(&mut self, question: &str, default: bool) -> Result<bool> {
        self.prompt_confirmation(&ConfirmationConfig {
            prompt: question.to_string(),
            default,
        })
    }
}

impl<R: BufRead, W: Write> TextPrompter for LinePrompter<R, W> {
    fn prompt_text(&mut self, config: &TextPromptConfig) -> Result<String> {
        if config.secret {
            writeln!(
                self.output,
                "{} - WARNING: What you type will be shown!",
                config.prompt
            )?;
            return self.read_answer();
        }

        if let Some(default) = &config.default {
            writeln!(self.output, "{} ({}):", config.prompt, default)?;

            let answer = self.read_answer()?;
            if answer.is_empty() {
                debug!("Empty answer, substituting default {default:?}.");
                return Ok(default.clone());
            }
            return Ok(answer);
        }

        writeln!(self.output, "{}", config.prompt)?;
        self.read_answer()
    }
}

impl<R: BufRead, W: Write> SingleChoicePrompter for LinePrompter<R, W> {
    fn prompt_single_choice(&mut self, config: &SingleChoiceConfig) -> Result<usize> {
        let max = config.choices.len().saturating_sub(1);

        if let Some(default_index) = config.default_index {
            if default_index >= config.choices.len() {
                write!(
                    self.output,
                    "Default answer was out of bounds of number of options."
                )?;
                self.output.flush()?;
                return Err(Error::DefaultOutOfBoundsError {
                    default: default_index,
                    count: config.choices.len(),
                });
            }
            writeln!(self.output, "{} (default: {})", config.prompt, default_index)?;
        } else {
            writeln!(self.output, "{}", config.prompt)?;
        }

        for (index, choice) in config.choices.iter().enumerate() {
            writeln!(self.output, "  [{index}] {choice}")?;
        }

        let answer = self.read_answer()?;

        if answer.is_empty() {
            if let Some(default_index) = config.default_index {
                debug!("Empty answer, selecting default option {default_index}.");
                return Ok(default_index);
            }
        }

        match answer.parse::<usize>() {
            Ok(index) if index < config.choices.len() => Ok(index),
            _ => {
                debug!("Rejected selection answer {answer:?}.");
                writeln!(self.output, "Invalid input. Can only be between 0-{max}")?;
                Err(Error::SelectionOutOfRangeError { max })
            }
        }
    }
}

impl<R: BufRead, W: Write> ConfirmationPrompter for LinePrompter<R, W> {
    fn prompt_confirmation(&mut self, config: &ConfirmationConfig) -> Result<bool> {
        let rendered_default = if config.default { "y" } else { "n" };
        writeln!(self.output, "{} (y/n) ({}):", config.prompt, rendered_default)?;

        let answer = self.read_answer()?;
        if answer.is_empty() {
            return Ok(config.default);
        }

        Ok(answer == "y")
    }
}
