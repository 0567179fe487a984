//! Definitions of the CNF grammar type.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[cfg(feature = "serde")]
use crate::error::InvalidGrammar;
use crate::rule::builder::GrammarBuilder;
use crate::rule::{CnfRule, Rhs};
use crate::symbol::{Symbol, SymbolBitSet, SymbolSource};

/// Context-free grammar in Chomsky normal form.
///
/// Nonterminals occupy the symbol IDs `0..num_nonterminals()`, terminals
/// the IDs from there up to `num_syms()`. Grammars compare equal when their
/// alphabets, start symbols and rule sets are equal. The order in which rules
/// were added is not significant.
///
/// With the `serde` feature, a deserialized grammar is validated and
/// renumbered as if it had been built with [`GrammarBuilder`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCnfGrammar"))]
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct CnfGrammar {
    /// The symbol source.
    sym_source: SymbolSource,
    num_nonterminals: usize,
    start: Symbol,
    /// Right-hand sides, by left-hand side.
    rules: BTreeMap<Symbol, BTreeSet<Rhs>>,
}

impl CnfGrammar {
    /// Starts building a grammar over the given alphabets. Every `char` of
    /// `nonterminals` and `terminals` declares one symbol.
    pub fn builder(start: char, nonterminals: &str, terminals: &str) -> GrammarBuilder {
        GrammarBuilder::new(start, nonterminals, terminals)
    }

    pub(crate) fn from_parts(
        sym_source: SymbolSource,
        num_nonterminals: usize,
        start: Symbol,
        rules: BTreeMap<Symbol, BTreeSet<Rhs>>,
    ) -> Self {
        CnfGrammar {
            sym_source,
            num_nonterminals,
            start,
            rules,
        }
    }

    /// Returns the start symbol.
    pub fn start(&self) -> Symbol {
        self.start
    }

    /// Determines whether `sym` is the start symbol.
    pub fn is_start(&self, sym: Symbol) -> bool {
        self.start == sym
    }

    /// Returns an iterator over the right-hand sides of the given nonterminal.
    pub fn rhs_of(&self, lhs: Symbol) -> impl Iterator<Item = &Rhs> + '_ {
        self.rules.get(&lhs).into_iter().flatten()
    }

    /// Returns an iterator over all rules, ordered by LHS and then by RHS.
    pub fn rules(&self) -> impl Iterator<Item = CnfRule> + '_ {
        self.rules.iter().flat_map(|(&lhs, rhs_set)| {
            rhs_set.iter().map(move |&rhs| CnfRule { lhs, rhs })
        })
    }

    /// Returns the number of rules.
    pub fn num_rules(&self) -> usize {
        self.rules.values().map(BTreeSet::len).sum()
    }

    /// Returns the number of declared symbols.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Returns the number of declared nonterminals.
    pub fn num_nonterminals(&self) -> usize {
        self.num_nonterminals
    }

    /// Allows access to the symbol source through a reference.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Checks whether `sym` is a declared nonterminal.
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        sym.usize() < self.num_nonterminals
    }

    /// Checks whether `sym` is a declared terminal.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        (self.num_nonterminals..self.num_syms()).contains(&sym.usize())
    }

    /// Constructs the set of nonterminals.
    pub fn nonterminals(&self) -> SymbolBitSet {
        SymbolBitSet::from_range(self.num_syms(), 0..self.num_nonterminals)
    }

    /// Constructs the set of terminals.
    pub fn terminals(&self) -> SymbolBitSet {
        SymbolBitSet::from_range(self.num_syms(), self.num_nonterminals..self.num_syms())
    }

    /// Returns the name of a declared symbol.
    pub fn name_of(&self, sym: Symbol) -> Option<char> {
        self.sym_source.name_of(sym)
    }

    /// Finds the declared symbol with the given name.
    pub fn sym_of(&self, name: char) -> Option<Symbol> {
        self.sym_source.sym_of(name)
    }

    /// A symbol that is not declared in this grammar. No rule produces it.
    pub fn foreign_symbol(&self) -> Symbol {
        Symbol::from(self.num_syms())
    }

    /// Translates text into a word over this grammar's terminals. Characters
    /// that are not declared terminals become the [`fn foreign_symbol`].
    ///
    /// [`fn foreign_symbol`]: Self::foreign_symbol
    pub fn word(&self, text: &str) -> Vec<Symbol> {
        text.chars()
            .map(|name| {
                self.sym_of(name)
                    .filter(|&sym| self.is_terminal(sym))
                    .unwrap_or_else(|| self.foreign_symbol())
            })
            .collect()
    }
}

impl fmt::Display for CnfGrammar {
    /// Formats one rule per line, in the form `S -> AB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in self.rules() {
            writeln!(f, "{}", rule.named(&self.sym_source))?;
        }
        Ok(())
    }
}

/// The serialized fields of a grammar, before validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCnfGrammar {
    sym_source: SymbolSource,
    num_nonterminals: usize,
    start: Symbol,
    rules: BTreeMap<Symbol, BTreeSet<Rhs>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCnfGrammar> for CnfGrammar {
    type Error = InvalidGrammar;

    fn try_from(raw: RawCnfGrammar) -> Result<Self, InvalidGrammar> {
        if raw.num_nonterminals > raw.sym_source.num_syms() {
            return Err(InvalidGrammar::UnknownSymbol(Symbol::from(
                raw.num_nonterminals - 1,
            )));
        }
        let name = |sym: Symbol| {
            raw.sym_source
                .name_of(sym)
                .ok_or(InvalidGrammar::UnknownSymbol(sym))
        };
        let (mut nonterminals, mut terminals) = (String::new(), String::new());
        for (sym, sym_name) in raw.sym_source.iter() {
            if sym.usize() < raw.num_nonterminals {
                nonterminals.push(sym_name);
            } else {
                terminals.push(sym_name);
            }
        }
        let mut builder = GrammarBuilder::new(name(raw.start)?, &nonterminals, &terminals);
        for (&lhs, rhs_set) in &raw.rules {
            for rhs in rhs_set {
                let rhs = rhs
                    .symbols()
                    .into_iter()
                    .map(name)
                    .collect::<Result<String, _>>()?;
                builder.add_rule(name(lhs)?, &rhs)?;
            }
        }
        builder.build()
    }
}
