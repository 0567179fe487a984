#![cfg(feature = "serde")]

mod support;

use cyk::{is_member, CnfGrammar, InvalidGrammar, Symbol};
use serde_json::{json, Value};

fn single_terminal() -> CnfGrammar {
    CnfGrammar::builder('S', "S", "a").rule('S').rhs("a").build().unwrap()
}

fn load(value: Value) -> Result<CnfGrammar, String> {
    serde_json::from_value(value).map_err(|error| error.to_string())
}

#[test]
fn test_round_trip() {
    let grammar = support::parens_grammar();
    let value = serde_json::to_value(&grammar).unwrap();
    assert_eq!(load(value), Ok(grammar));
}

#[test]
fn test_terminal_lhs_is_rejected() {
    let grammar = single_terminal();
    let mut value = serde_json::to_value(&grammar).unwrap();
    let rules = value["rules"].as_object_mut().unwrap();
    let rhs = rules.remove("0").unwrap();
    rules.insert("1".to_string(), rhs);

    let expected = InvalidGrammar::TerminalLhs('a').to_string();
    assert_eq!(load(value), Err(expected));
}

#[test]
fn test_unknown_symbol_is_rejected() {
    let grammar = single_terminal();
    let mut value = serde_json::to_value(&grammar).unwrap();
    value["rules"]["0"] = json!([{ "Terminal": 7 }]);

    let expected = InvalidGrammar::UnknownSymbol(Symbol::from(7u32)).to_string();
    assert_eq!(load(value), Err(expected));

    let mut value = serde_json::to_value(&grammar).unwrap();
    value["num_nonterminals"] = json!(3);
    assert!(load(value).is_err());
}

#[test]
fn test_deserialized_grammar_is_renumbered() {
    let value = json!({
        "sym_source": { "names": ['B', 'A', 'b', 'a'] },
        "num_nonterminals": 2,
        "start": 1,
        "rules": { "1": [{ "Pair": [0, 0] }], "0": [{ "Terminal": 3 }] },
    });
    let grammar = load(value).unwrap();
    let expected = CnfGrammar::builder('A', "AB", "ab")
        .rule('A')
        .rhs("BB")
        .rule('B')
        .rhs("a")
        .build()
        .unwrap();
    assert_eq!(grammar, expected);
    assert!(is_member(&grammar, &grammar.word("aa")));
    assert!(!is_member(&grammar, &grammar.word("ab")));
}
