//! This module defines grammar rules. Each rule in a CNF grammar consists of
//! a single nonterminal on its left-hand side and either one terminal or an
//! ordered pair of nonterminals on its right-hand side.

pub mod builder;

use std::fmt;

use crate::symbol::{Symbol, SymbolSource};

/// An ordered pair of nonterminals. `SymbolPair(a, b)` and `SymbolPair(b, a)`
/// are different right-hand sides.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct SymbolPair(pub Symbol, pub Symbol);

/// Compact representation of a CNF rule's RHS.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Rhs {
    /// RHS with one terminal.
    Terminal(Symbol),
    /// RHS with two nonterminals.
    Pair(SymbolPair),
}

impl Rhs {
    /// Creates a pair RHS.
    pub fn pair(left: Symbol, right: Symbol) -> Self {
        Rhs::Pair(SymbolPair(left, right))
    }

    /// Returns the symbols of this RHS in order.
    pub fn symbols(&self) -> Vec<Symbol> {
        match *self {
            Rhs::Terminal(sym) => vec![sym],
            Rhs::Pair(SymbolPair(left, right)) => vec![left, right],
        }
    }
}

/// References a rule's components.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CnfRule {
    /// Left-hand side.
    pub lhs: Symbol,
    /// Right-hand side.
    pub rhs: Rhs,
}

impl CnfRule {
    /// Displays the rule as `X -> rhs` using the names from the given source.
    pub fn named<'a>(&self, sym_source: &'a SymbolSource) -> NamedCnfRule<'a> {
        NamedCnfRule {
            rule: *self,
            sym_source,
        }
    }
}

/// A rule paired with the symbol names needed to display it.
#[derive(Clone, Copy)]
pub struct NamedCnfRule<'a> {
    rule: CnfRule,
    sym_source: &'a SymbolSource,
}

impl<'a> fmt::Display for NamedCnfRule<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |sym: Symbol| self.sym_source.name_of(sym).unwrap_or('?');
        write!(f, "{} -> ", name(self.rule.lhs))?;
        for sym in self.rule.rhs.symbols() {
            write!(f, "{}", name(sym))?;
        }
        Ok(())
    }
}
