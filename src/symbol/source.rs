//! Source

use crate::symbol::Symbol;

/// A source of numeric symbols. Every symbol is named by a single `char`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct SymbolSource {
    names: Vec<char>,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a new unique symbol with the given name.
    pub fn next_sym(&mut self, name: char) -> Symbol {
        let ret = Symbol::from(self.names.len());
        self.names.push(name);
        ret
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }

    /// Returns the name of a symbol, or `None` if the symbol was not generated
    /// by this source.
    pub fn name_of(&self, sym: Symbol) -> Option<char> {
        self.names.get(sym.usize()).copied()
    }

    /// Finds the first symbol with the given name.
    pub fn sym_of(&self, name: char) -> Option<Symbol> {
        self.names
            .iter()
            .position(|&other| other == name)
            .map(Symbol::from)
    }

    /// Iterates over all generated symbols with their names.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, char)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(id, &name)| (Symbol::from(id), name))
    }
}
