use cyk::{evaluate_all, MembershipCache};
use cyk_load::{
    load_str, write_report, InstanceReader, LoadErrorKind, LoadOptions, MAX_WORD_LEN_VAR,
};
use test_case::test_case;

const TWO_INSTANCES: &str = "S SAB ab
S -> AB
A -> a
B -> b
# -> #
ab
ba

#
P PLRX ()
P -> LR
P -> LX
P -> PP
X -> PR
L -> (
R -> )
# -> #
(())
(()
#
";

#[test]
fn test_load() {
    let instances = load_str(TWO_INSTANCES, LoadOptions::default()).unwrap();
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].grammar.num_rules(), 3);
    assert_eq!(instances[0].words, vec!["ab", "ba", ""]);
    assert_eq!(instances[1].grammar.num_rules(), 6);
    assert_eq!(instances[1].words, vec!["(())", "(()"]);

    let verdicts: Vec<Vec<bool>> = instances
        .iter()
        .map(|instance| evaluate_all(&instance.grammar, instance.symbol_words()))
        .collect();
    assert_eq!(verdicts, vec![vec![true, false, false], vec![true, false]]);
}

#[test]
fn test_report() {
    let mut cache = MembershipCache::new();
    let mut out = vec![];
    let reader = InstanceReader::new(TWO_INSTANCES.as_bytes(), LoadOptions::default());
    for (i, instance) in reader.enumerate() {
        let instance = instance.unwrap();
        let verdicts = cache.evaluate_all(&instance.grammar, instance.symbol_words());
        write_report(&mut out, i + 1, &instance.words, &verdicts).unwrap();
    }
    let expected = "Instancia 1
ab e uma palavra valida
ba nao e uma palavra valida
 nao e uma palavra valida

Instancia 2
(()) e uma palavra valida
(() nao e uma palavra valida

";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_degenerate_inputs() {
    assert!(load_str("", LoadOptions::default()).unwrap().is_empty());
    assert!(load_str("\n\n", LoadOptions::default()).unwrap().is_empty());

    let instances = load_str("S S a\n# -> #\n#\n", LoadOptions::default()).unwrap();
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].grammar.num_rules(), 0);
    assert!(instances[0].words.is_empty());
}

#[test]
fn test_crlf_and_spacing() {
    let input = "S  SA  a\r\nS->AA\r\n  A -> a \r\n# -> #\r\naa\r\n#\r\n";
    let instances = load_str(input, LoadOptions::default()).unwrap();
    assert_eq!(instances[0].grammar.num_rules(), 2);
    assert_eq!(instances[0].words, vec!["aa"]);
    assert_eq!(
        evaluate_all(&instances[0].grammar, instances[0].symbol_words()),
        vec![true]
    );
}

#[test_case("S SAB\n", 1 ; "short header")]
#[test_case("ST SAB ab\n", 1 ; "long start symbol")]
#[test_case("T SAB ab\n# -> #\n#\n", 1 ; "undeclared start")]
#[test_case("S SAB aB\n# -> #\n#\n", 1 ; "overlapping alphabets")]
#[test_case("S SAB ab\nS -> AB\nS => a\n", 3 ; "missing arrow")]
#[test_case("S SAB ab\nSA -> AB\n", 2 ; "long left-hand side")]
#[test_case("S SAB ab\nS -> ABA\n", 2 ; "long right-hand side")]
#[test_case("S SAB ab\nS -> \n", 2 ; "empty right-hand side")]
#[test_case("S SAB ab\nS -> A\n", 2 ; "unit rule")]
#[test_case("S SAB ab\nS -> Ab\n", 2 ; "terminal in pair")]
#[test_case("S SAB ab\nS -> c\n", 2 ; "undeclared terminal")]
#[test_case("S SAB ab\nS -> AB\n", 2 ; "truncated rules")]
fn test_invalid_grammar(input: &str, line: u32) {
    let error = load_str(input, LoadOptions::default()).unwrap_err();
    assert_eq!(error.kind, LoadErrorKind::InvalidGrammar);
    assert_eq!(error.line, line);
}

#[test_case("aSb", 3 ; "nonterminal")]
#[test_case("aaaaaa", 3 ; "too long")]
fn test_invalid_word(word: &str, line: u32) {
    let input = format!("S SAB ab\n# -> #\n{}\n#\n", word);
    let options = LoadOptions::new().max_word_len(5);
    let error = load_str(&input, options).unwrap_err();
    assert_eq!(error.kind, LoadErrorKind::InvalidWord);
    assert_eq!(error.line, line);
}

#[test]
fn test_truncated_words() {
    let error = load_str("S SAB ab\n# -> #\nab\n", LoadOptions::default()).unwrap_err();
    assert_eq!(error.kind, LoadErrorKind::InvalidWord);
    assert_eq!(error.line, 3);
}

#[test]
fn test_unknown_terminal_is_not_an_error() {
    let instances = load_str(
        "S SAB ab\nS -> AB\nA -> a\nB -> b\n# -> #\nac\n#\n",
        LoadOptions::default(),
    )
    .unwrap();
    assert_eq!(
        evaluate_all(&instances[0].grammar, instances[0].symbol_words()),
        vec![false]
    );
}

#[test]
fn test_reader_stops_after_error() {
    let input = "S SAB ab\n# -> #\nab\n#\nS\nS SAB ab\n# -> #\n#\n";
    let mut reader = InstanceReader::new(input.as_bytes(), LoadOptions::default());
    assert!(reader.next().unwrap().is_ok());
    let error = reader.next().unwrap().unwrap_err();
    assert_eq!(error.line, 5);
    assert_eq!(
        error.to_string(),
        "invalid grammar at line 5: expected a start symbol, nonterminals and terminals, found \"S\""
    );
    assert!(reader.next().is_none());
}

#[test]
fn test_error_display() {
    let error = load_str("S SAB ab\nS -> Ab\n", LoadOptions::default()).unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid grammar at line 2: rule for S has terminal 'b' in a pair of nonterminals"
    );
    let input = "S SAB ab\n# -> #\naBa\n#\n";
    let error = load_str(input, LoadOptions::default()).unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid word at line 3: word contains nonterminal 'B'"
    );
}

#[test]
fn test_options_from_env() {
    std::env::set_var(MAX_WORD_LEN_VAR, " 7 ");
    assert_eq!(LoadOptions::from_env().max_word_len, 7);
    std::env::set_var(MAX_WORD_LEN_VAR, "many");
    assert_eq!(LoadOptions::from_env(), LoadOptions::default());
    std::env::remove_var(MAX_WORD_LEN_VAR);
    assert_eq!(LoadOptions::from_env().max_word_len, 50);
}
