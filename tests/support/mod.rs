#![allow(dead_code)]

use cyk::{CnfGrammar, Symbol};

/// `S -> AB`, `A -> a`, `B -> b`.
pub fn ab_grammar() -> CnfGrammar {
    CnfGrammar::builder('S', "SAB", "ab")
        .rule('S')
        .rhs("AB")
        .rule('A')
        .rhs("a")
        .rule('B')
        .rhs("b")
        .build()
        .unwrap()
}

/// Non-empty balanced parentheses.
pub fn parens_grammar() -> CnfGrammar {
    CnfGrammar::builder('S', "SXLR", "()")
        .rule('S')
        .rhs("LR")
        .rhs("LX")
        .rhs("SS")
        .rule('X')
        .rhs("SR")
        .rule('L')
        .rhs("(")
        .rule('R')
        .rhs(")")
        .build()
        .unwrap()
}

/// `S -> AB`, `A -> AA | a`, `B -> b`: the language `a+b`.
pub fn a_plus_b_grammar() -> CnfGrammar {
    CnfGrammar::builder('S', "SAB", "ab")
        .rule('S')
        .rhs("AB")
        .rule('A')
        .rhs("AA")
        .rhs("a")
        .rule('B')
        .rhs("b")
        .build()
        .unwrap()
}

pub fn sym(grammar: &CnfGrammar, name: char) -> Symbol {
    grammar.sym_of(name).unwrap()
}

pub fn names(grammar: &CnfGrammar, syms: impl IntoIterator<Item = Symbol>) -> String {
    let mut names: Vec<char> = syms
        .into_iter()
        .map(|sym| grammar.name_of(sym).unwrap())
        .collect();
    names.sort();
    names.into_iter().collect()
}
