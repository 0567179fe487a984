//! Sets of symbols, such as the nonterminals producing a right-hand side.

use std::{iter, ops};

use bit_vec::BitVec;

use crate::symbol::Symbol;

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet` with room for `num_syms` symbols.
    pub fn new(num_syms: usize) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(num_syms, false),
        }
    }

    /// Constructs a `SymbolBitSet` containing every symbol in `range`.
    pub fn from_range(num_syms: usize, range: ops::Range<usize>) -> Self {
        let mut set = SymbolBitSet::new(num_syms);
        for id in range {
            set.set(Symbol::from(id), true);
        }
        set
    }

    /// Set the entry for a symbol.
    ///
    /// # Panics
    ///
    /// Panics if the symbol lies outside the set's size.
    pub fn set(&mut self, sym: Symbol, value: bool) {
        self.bit_vec.set(sym.usize(), value);
    }

    /// Checks whether a given symbol is in this set. Symbols beyond the set's
    /// size are never members.
    pub fn contains(&self, sym: Symbol) -> bool {
        self.bit_vec.get(sym.usize()).unwrap_or(false)
    }

    /// Adds all members of `other` to this set. Returns `true` if this set changed.
    ///
    /// # Panics
    ///
    /// Panics if the sets have different sizes.
    pub fn union(&mut self, other: &SymbolBitSet) -> bool {
        self.bit_vec.or(&other.bit_vec)
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }

    /// Returns the number of symbols in the set.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Checks whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.bit_vec.none()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;
    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a SymbolBitSet {
    type Item = Symbol;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.contains(index) {
            &TRUE
        } else {
            &FALSE
        }
    }
}
