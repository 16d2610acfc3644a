//! Interactive question prompting over line-buffered text streams
//!
//! This module provides a modular approach to asking questions on the
//! command line and reading the answers back as strings. Questions are
//! printed to an output sink, one line of answer text is read from an
//! input source, and the trimmed answer is returned to the caller.
//!
//! The module is structured in layers:
//! - `interface`: Pure prompt configurations and traits independent of any
//!   concrete I/O backend
//! - `line`: Concrete implementation over an injected input source and
//!   output sink
//! - `scripted`: Non-interactive implementation with predefined answers
//!
//! Question marks are not added to the questions, that is left to the
//! caller.

use std::io::{BufReader, Stdin, Stdout};

pub mod interface;
pub mod line;
pub mod scripted;

// Re-export the interfaces for easy access
pub use interface::*;
pub use line::LinePrompter;
pub use scripted::ScriptedPrompter;

/// Convenience function to create a prompter wired to standard input and
/// standard output.
pub fn stdio_prompter() -> LinePrompter<BufReader<Stdin>, Stdout> {
    LinePrompter::stdio()
}
