//! A type that can represent symbols in a CNF grammar. Symbols are distinguished by their
//! IDs. Each ID is named by the `char` it stands for in the text format.

mod repr;
pub mod set;
pub mod source;

use self::repr::SymbolRepr;

pub use self::repr::Symbol;
pub use self::set::SymbolBitSet;
pub use self::source::SymbolSource;

impl Symbol {
    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.into()
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        Symbol::from(id as SymbolRepr)
    }
}

impl From<Symbol> for usize {
    #[inline]
    fn from(sym: Symbol) -> Self {
        let id: SymbolRepr = sym.into();
        id as usize
    }
}
