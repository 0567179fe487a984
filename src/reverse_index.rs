//! Maps right-hand sides back to the nonterminals producing them.

use std::collections::HashMap;

use log::trace;

use crate::grammar::CnfGrammar;
use crate::rule::Rhs;
use crate::symbol::SymbolBitSet;

/// A lazily built, memoized index from right-hand sides to their producers.
///
/// Each distinct right-hand side costs one scan over the grammar's rules on
/// its first lookup. An index must be queried with one grammar only.
#[derive(Clone, Debug, Default)]
pub struct ReverseRuleIndex {
    producers: HashMap<Rhs, SymbolBitSet>,
    lookups: u64,
}

/// Counters describing how an index was used.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct IndexStats {
    /// Number of calls to `producers_of`.
    pub lookups: u64,
    /// Number of rule scans, one per distinct right-hand side.
    pub scans: u64,
}

impl ReverseRuleIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set of nonterminals `A` such that `A -> rhs` is a rule of
    /// `grammar`. The set is empty when no rule produces `rhs`.
    pub fn producers_of(&mut self, grammar: &CnfGrammar, rhs: Rhs) -> &SymbolBitSet {
        self.lookups += 1;
        self.producers
            .entry(rhs)
            .or_insert_with(|| scan_producers(grammar, rhs))
    }

    /// Returns the number of memoized right-hand sides.
    pub fn len(&self) -> usize {
        self.producers.len()
    }

    /// Checks whether nothing was memoized yet.
    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    /// Returns usage counters.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            lookups: self.lookups,
            scans: self.producers.len() as u64,
        }
    }
}

fn scan_producers(grammar: &CnfGrammar, rhs: Rhs) -> SymbolBitSet {
    let mut producers = SymbolBitSet::new(grammar.num_nonterminals());
    for rule in grammar.rules() {
        if rule.rhs == rhs {
            producers.set(rule.lhs, true);
        }
    }
    trace!("producers of {:?}: {:?}", rhs, producers.iter().collect::<Vec<_>>());
    producers
}
