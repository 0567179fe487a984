//! Memoized membership tests for batches of words.

use std::collections::HashMap;

use log::debug;

use crate::grammar::CnfGrammar;
use crate::reverse_index::ReverseRuleIndex;
use crate::symbol::Symbol;
use crate::table::recognize;

/// Remembers verdicts per grammar and word.
///
/// Grammars are keyed structurally, so a grammar that reappears in a later
/// problem instance reuses both the verdicts and the rule index of the first
/// one. Entries are never evicted.
#[derive(Debug, Default)]
pub struct MembershipCache {
    grammars: HashMap<CnfGrammar, GrammarEntry>,
    hits: u64,
    misses: u64,
}

#[derive(Debug, Default)]
struct GrammarEntry {
    index: ReverseRuleIndex,
    verdicts: HashMap<Vec<Symbol>, bool>,
}

/// Counters describing how a cache was used.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CacheStats {
    /// Number of distinct grammars seen.
    pub grammars: usize,
    /// Verdicts answered from the cache.
    pub hits: u64,
    /// Verdicts computed by the recognizer.
    pub misses: u64,
    /// Rule index lookups, summed over all grammars.
    pub index_lookups: u64,
    /// Rule index scans, summed over all grammars.
    pub index_scans: u64,
}

impl MembershipCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decides whether `grammar` generates `word`, computing the verdict only
    /// on the first request for this grammar and word.
    pub fn membership(&mut self, grammar: &CnfGrammar, word: &[Symbol]) -> bool {
        let (verdict, hit) = self.verdict(grammar, word);
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        verdict
    }

    /// Decides membership for every word, in order.
    pub fn evaluate_all<I, W>(&mut self, grammar: &CnfGrammar, words: I) -> Vec<bool>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[Symbol]>,
    {
        let verdicts = words
            .into_iter()
            .map(|word| self.membership(grammar, word.as_ref()))
            .collect();
        debug!("{:?}", self.stats());
        verdicts
    }

    /// Returns usage counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = CacheStats {
            grammars: self.grammars.len(),
            hits: self.hits,
            misses: self.misses,
            ..CacheStats::default()
        };
        for entry in self.grammars.values() {
            let index_stats = entry.index.stats();
            stats.index_lookups += index_stats.lookups;
            stats.index_scans += index_stats.scans;
        }
        stats
    }

    /// Forgets all grammars and verdicts.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns the verdict and whether it came from the cache. The grammar is
    /// cloned only on its first appearance.
    fn verdict(&mut self, grammar: &CnfGrammar, word: &[Symbol]) -> (bool, bool) {
        if let Some(entry) = self.grammars.get_mut(grammar) {
            return entry.verdict(grammar, word);
        }
        let mut entry = GrammarEntry::default();
        let result = entry.verdict(grammar, word);
        self.grammars.insert(grammar.clone(), entry);
        result
    }
}

impl GrammarEntry {
    /// Returns the verdict and whether it came from the cache.
    fn verdict(&mut self, grammar: &CnfGrammar, word: &[Symbol]) -> (bool, bool) {
        if let Some(&verdict) = self.verdicts.get(word) {
            return (verdict, true);
        }
        let verdict = recognize(grammar, &mut self.index, word);
        self.verdicts.insert(word.to_vec(), verdict);
        (verdict, false)
    }
}

/// Decides membership for every word, in order, with a fresh cache.
pub fn evaluate_all<I, W>(grammar: &CnfGrammar, words: I) -> Vec<bool>
where
    I: IntoIterator<Item = W>,
    W: AsRef<[Symbol]>,
{
    MembershipCache::new().evaluate_all(grammar, words)
}
