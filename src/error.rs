//! Errors detected while constructing a grammar.

use std::error::Error;
use std::fmt;

use crate::symbol::Symbol;

/// Represents a grammar that is not a well-formed CNF grammar over its
/// declared alphabets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidGrammar {
    /// The start symbol is not a declared nonterminal.
    StartNotNonterminal(char),
    /// A symbol is declared both as a nonterminal and as a terminal.
    OverlappingAlphabets(char),
    /// A rule mentions a symbol outside both alphabets.
    UndeclaredSymbol(char),
    /// A rule's left-hand side is a terminal.
    TerminalLhs(char),
    /// A single-symbol right-hand side is a nonterminal.
    UnitRule {
        /// The rule's left-hand side.
        lhs: char,
        /// The offending right-hand side.
        rhs: char,
    },
    /// A two-symbol right-hand side contains a terminal.
    TerminalInPair {
        /// The rule's left-hand side.
        lhs: char,
        /// The offending terminal.
        terminal: char,
    },
    /// A right-hand side has neither one nor two symbols.
    Arity {
        /// The rule's left-hand side.
        lhs: char,
        /// Number of symbols found.
        len: usize,
    },
    /// A right-hand side was given before any left-hand side.
    MissingLhs,
    /// A deserialized grammar refers to a symbol ID without a name.
    UnknownSymbol(Symbol),
}

impl fmt::Display for InvalidGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InvalidGrammar::StartNotNonterminal(start) => {
                write!(f, "start symbol {:?} is not a declared nonterminal", start)
            }
            InvalidGrammar::OverlappingAlphabets(sym) => {
                write!(f, "symbol {:?} is both a nonterminal and a terminal", sym)
            }
            InvalidGrammar::UndeclaredSymbol(sym) => {
                write!(f, "symbol {:?} is not declared", sym)
            }
            InvalidGrammar::TerminalLhs(sym) => {
                write!(f, "terminal {:?} cannot be a left-hand side", sym)
            }
            InvalidGrammar::UnitRule { lhs, rhs } => {
                write!(f, "rule {} -> {} derives a single nonterminal", lhs, rhs)
            }
            InvalidGrammar::TerminalInPair { lhs, terminal } => write!(
                f,
                "rule for {} has terminal {:?} in a pair of nonterminals",
                lhs, terminal
            ),
            InvalidGrammar::Arity { lhs, len } => write!(
                f,
                "rule for {} has {} symbols on the right-hand side, expected 1 or 2",
                lhs, len
            ),
            InvalidGrammar::MissingLhs => write!(f, "right-hand side without a rule"),
            InvalidGrammar::UnknownSymbol(sym) => {
                write!(f, "symbol ID {} is not declared", sym.usize())
            }
        }
    }
}

impl Error for InvalidGrammar {}
