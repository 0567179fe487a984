//! Grammars are built with the builder pattern.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::InvalidGrammar;
use crate::grammar::CnfGrammar;
use crate::rule::Rhs;
use crate::symbol::{Symbol, SymbolSource};

/// The grammar builder.
///
/// Symbols are allocated when the builder is created: declared nonterminals in
/// ascending order, then declared terminals in ascending order. Two builders
/// given the same alphabets in any order allocate the same symbols.
#[derive(Clone, Debug)]
pub struct GrammarBuilder {
    start: char,
    sym_source: SymbolSource,
    num_nonterminals: usize,
    rules: BTreeMap<Symbol, BTreeSet<Rhs>>,
    lhs: Option<char>,
    error: Option<InvalidGrammar>,
}

impl GrammarBuilder {
    /// Creates a builder for a grammar with the given start symbol and alphabets.
    pub fn new(start: char, nonterminals: &str, terminals: &str) -> Self {
        let nonterminals = sorted_alphabet(nonterminals);
        let terminals = sorted_alphabet(terminals);
        let error = terminals
            .iter()
            .find(|&&sym| nonterminals.binary_search(&sym).is_ok())
            .map(|&sym| InvalidGrammar::OverlappingAlphabets(sym));

        let mut sym_source = SymbolSource::new();
        for &name in nonterminals.iter().chain(terminals.iter()) {
            sym_source.next_sym(name);
        }

        GrammarBuilder {
            start,
            sym_source,
            num_nonterminals: nonterminals.len(),
            rules: BTreeMap::new(),
            lhs: None,
            error,
        }
    }

    /// Adds the rule `lhs -> rhs`, where `rhs` is one terminal or two nonterminals.
    /// Adding a rule twice has no further effect.
    pub fn add_rule(&mut self, lhs: char, rhs: &str) -> Result<&mut Self, InvalidGrammar> {
        let lhs_sym = self.lookup(lhs)?;
        if !self.is_nonterminal(lhs_sym) {
            return Err(InvalidGrammar::TerminalLhs(lhs));
        }
        let mut chars = rhs.chars();
        let rhs = match (chars.next(), chars.next(), chars.next()) {
            (Some(name), None, None) => {
                let sym = self.lookup(name)?;
                if self.is_nonterminal(sym) {
                    return Err(InvalidGrammar::UnitRule { lhs, rhs: name });
                }
                Rhs::Terminal(sym)
            }
            (Some(left), Some(right), None) => {
                Rhs::pair(self.pair_member(lhs, left)?, self.pair_member(lhs, right)?)
            }
            _ => {
                return Err(InvalidGrammar::Arity {
                    lhs,
                    len: rhs.chars().count(),
                })
            }
        };
        self.rules.entry(lhs_sym).or_default().insert(rhs);
        Ok(self)
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: char) -> Self {
        self.lhs = Some(lhs);
        self
    }

    /// Adds a rule alternative to the grammar. The first error is kept and
    /// reported by [`fn build`].
    ///
    /// [`fn build`]: Self::build
    pub fn rhs(mut self, rhs: &str) -> Self {
        if self.error.is_some() {
            return self;
        }
        let result = match self.lhs {
            Some(lhs) => self.add_rule(lhs, rhs).map(|_| ()),
            None => Err(InvalidGrammar::MissingLhs),
        };
        if let Err(error) = result {
            self.error = Some(error);
        }
        self
    }

    /// Finishes the grammar.
    pub fn build(self) -> Result<CnfGrammar, InvalidGrammar> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let start = match self.sym_source.sym_of(self.start) {
            Some(sym) if self.is_nonterminal(sym) => sym,
            _ => return Err(InvalidGrammar::StartNotNonterminal(self.start)),
        };
        Ok(CnfGrammar::from_parts(
            self.sym_source,
            self.num_nonterminals,
            start,
            self.rules,
        ))
    }

    fn lookup(&self, name: char) -> Result<Symbol, InvalidGrammar> {
        self.sym_source
            .sym_of(name)
            .ok_or(InvalidGrammar::UndeclaredSymbol(name))
    }

    fn pair_member(&self, lhs: char, name: char) -> Result<Symbol, InvalidGrammar> {
        let sym = self.lookup(name)?;
        if self.is_nonterminal(sym) {
            Ok(sym)
        } else {
            Err(InvalidGrammar::TerminalInPair {
                lhs,
                terminal: name,
            })
        }
    }

    fn is_nonterminal(&self, sym: Symbol) -> bool {
        sym.usize() < self.num_nonterminals
    }
}

fn sorted_alphabet(names: &str) -> Vec<char> {
    let mut names: Vec<char> = names.chars().collect();
    names.sort_unstable();
    names.dedup();
    names
}
