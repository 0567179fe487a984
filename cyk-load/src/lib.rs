//! Allows us to load CNF membership problems from the judge's text format,
//! and to print the verdicts in the format the judge expects.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod instance;
mod options;
mod report;

use std::fmt;

pub use crate::instance::{load_str, Instance, InstanceReader};
pub use crate::options::{LoadOptions, MAX_WORD_LEN_VAR};
pub use crate::report::write_report;

/// Kinds of errors that abort loading.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadErrorKind {
    /// The header or a rule line does not describe a CNF grammar.
    InvalidGrammar,
    /// A candidate word is too long or uses a nonterminal.
    InvalidWord,
    /// Reading the input failed.
    Io,
}

/// Represents an error when loading a problem instance.
#[derive(Debug, Clone)]
pub struct LoadError {
    /// What went wrong.
    pub kind: LoadErrorKind,
    /// Human-readable reason for the error.
    pub reason: String,
    /// Line where the error happened.
    ///
    /// One-indexed.
    pub line: u32,
}

impl LoadError {
    pub(crate) fn invalid_grammar(reason: impl fmt::Display, line: u32) -> Self {
        LoadError {
            kind: LoadErrorKind::InvalidGrammar,
            reason: reason.to_string(),
            line,
        }
    }

    pub(crate) fn invalid_word(reason: impl fmt::Display, line: u32) -> Self {
        LoadError {
            kind: LoadErrorKind::InvalidWord,
            reason: reason.to_string(),
            line,
        }
    }

    pub(crate) fn io(reason: impl fmt::Display, line: u32) -> Self {
        LoadError {
            kind: LoadErrorKind::Io,
            reason: reason.to_string(),
            line,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self.kind {
            LoadErrorKind::InvalidGrammar => "invalid grammar",
            LoadErrorKind::InvalidWord => "invalid word",
            LoadErrorKind::Io => "read error",
        };
        write!(f, "{} at line {}: {}", kind, self.line, self.reason)
    }
}

impl std::error::Error for LoadError {}

/// Reasons for rejecting a candidate word.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WordError {
    /// The word has more symbols than allowed.
    TooLong {
        /// Number of symbols in the word.
        len: usize,
        /// The configured maximum.
        max: usize,
    },
    /// The word contains a declared nonterminal.
    Nonterminal(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            WordError::TooLong { len, max } => {
                write!(f, "word has {} symbols, at most {} are allowed", len, max)
            }
            WordError::Nonterminal(sym) => {
                write!(f, "word contains nonterminal {:?}", sym)
            }
        }
    }
}

impl std::error::Error for WordError {}
