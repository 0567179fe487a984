//! The CYK recognizer. For a word of length `n`, a triangular table holds one
//! set of nonterminals per substring; cell `(i, j)` contains every nonterminal
//! that derives `word[i..=j]`.

use bit_matrix::BitMatrix;
use log::trace;

use crate::grammar::CnfGrammar;
use crate::reverse_index::ReverseRuleIndex;
use crate::rule::Rhs;
use crate::symbol::{Symbol, SymbolBitSet};

/// The triangular CYK table for one word.
///
/// Each cell is a row of a bit matrix with one column per nonterminal.
#[derive(Clone, Debug)]
pub struct CykTable {
    len: usize,
    num_nonterminals: usize,
    cells: BitMatrix,
}

impl CykTable {
    fn new(len: usize, num_nonterminals: usize) -> Self {
        CykTable {
            len,
            num_nonterminals,
            cells: BitMatrix::new(len * (len + 1) / 2, num_nonterminals),
        }
    }

    /// Fills the whole table for `word`. Unlike [`fn recognize`], this does not
    /// stop at a terminal that no rule produces.
    pub fn fill(grammar: &CnfGrammar, index: &mut ReverseRuleIndex, word: &[Symbol]) -> Self {
        let mut table = CykTable::new(word.len(), grammar.num_nonterminals());
        for (pos, &terminal) in word.iter().enumerate() {
            table.fill_diagonal(grammar, index, pos, terminal);
        }
        table.fill_spans(grammar, index);
        table
    }

    /// Returns the length of the word this table was filled for.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the table was filled for the empty word.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the nonterminals deriving `word[start..=end]`.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end < self.len()`.
    pub fn cell(&self, start: usize, end: usize) -> impl Iterator<Item = Symbol> + '_ {
        self.cells
            .iter_row(self.row(start, end))
            .take(self.num_nonterminals)
            .enumerate()
            .filter_map(|(id, present)| if present { Some(Symbol::from(id)) } else { None })
    }

    /// Checks whether `sym` derives `word[start..=end]`.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end < self.len()`.
    pub fn contains(&self, start: usize, end: usize, sym: Symbol) -> bool {
        sym.usize() < self.num_nonterminals && self.cells[(self.row(start, end), sym.usize())]
    }

    /// Checks whether `start` derives the whole word.
    pub fn accepts(&self, start: Symbol) -> bool {
        !self.is_empty() && self.contains(0, self.len - 1, start)
    }

    fn row(&self, start: usize, end: usize) -> usize {
        assert!(
            start <= end && end < self.len,
            "cell ({}, {}) out of bounds for a word of length {}",
            start,
            end,
            self.len
        );
        end * (end + 1) / 2 + start
    }

    /// Returns `false` if no rule produces the terminal.
    fn fill_diagonal(
        &mut self,
        grammar: &CnfGrammar,
        index: &mut ReverseRuleIndex,
        pos: usize,
        terminal: Symbol,
    ) -> bool {
        let row = self.row(pos, pos);
        let producers = index.producers_of(grammar, Rhs::Terminal(terminal));
        for lhs in producers {
            self.cells.set(row, lhs.usize(), true);
        }
        !producers.is_empty()
    }

    /// Fills cells in the order of increasing span, so that both halves of every
    /// split are complete before they are combined.
    fn fill_spans(&mut self, grammar: &CnfGrammar, index: &mut ReverseRuleIndex) {
        let mut left = Vec::with_capacity(self.num_nonterminals);
        let mut right = Vec::with_capacity(self.num_nonterminals);
        for span in 1..self.len {
            for start in 0..self.len - span {
                let end = start + span;
                let mut derived = SymbolBitSet::new(self.num_nonterminals);
                for split in 0..span {
                    left.clear();
                    left.extend(self.cell(start, start + split));
                    right.clear();
                    right.extend(self.cell(start + split + 1, end));
                    for &a in &left {
                        for &b in &right {
                            derived.union(index.producers_of(grammar, Rhs::pair(a, b)));
                        }
                    }
                }
                let row = self.row(start, end);
                for lhs in &derived {
                    self.cells.set(row, lhs.usize(), true);
                }
            }
        }
    }
}

/// Decides whether `grammar` generates `word`, memoizing rule lookups in `index`.
///
/// The empty word is never a member. A terminal that no rule produces makes
/// the word a non-member without filling the rest of the table.
pub fn recognize(grammar: &CnfGrammar, index: &mut ReverseRuleIndex, word: &[Symbol]) -> bool {
    if word.is_empty() {
        return false;
    }
    let mut table = CykTable::new(word.len(), grammar.num_nonterminals());
    for (pos, &terminal) in word.iter().enumerate() {
        if !table.fill_diagonal(grammar, index, pos, terminal) {
            trace!("no rule produces the terminal at position {}", pos);
            return false;
        }
    }
    table.fill_spans(grammar, index);
    let accepted = table.accepts(grammar.start());
    trace!("word of length {} accepted: {}", word.len(), accepted);
    accepted
}

/// Decides whether `grammar` generates `word`, with a fresh rule index.
pub fn is_member(grammar: &CnfGrammar, word: &[Symbol]) -> bool {
    recognize(grammar, &mut ReverseRuleIndex::new(), word)
}
