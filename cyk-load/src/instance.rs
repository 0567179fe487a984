//! Reads problem instances.
//!
//! Each instance is a header line `S SAB ab` (start symbol, nonterminals,
//! terminals), rule lines such as `S -> AB` or `A -> a` up to the line
//! `# -> #`, then one candidate word per line up to the line `#`.

use std::io::{self, BufRead};

use log::debug;

use cyk::{CnfGrammar, GrammarBuilder, Symbol};

use crate::{LoadError, LoadOptions, WordError};

const END_OF_RULES: &str = "# -> #";
const END_OF_WORDS: &str = "#";

/// A grammar with its candidate words.
#[derive(Clone, Debug)]
pub struct Instance {
    /// The validated grammar.
    pub grammar: CnfGrammar,
    /// Candidate words, as written in the input.
    pub words: Vec<String>,
}

impl Instance {
    /// Translates the candidate words into words over the grammar's terminals.
    pub fn symbol_words(&self) -> Vec<Vec<Symbol>> {
        self.words.iter().map(|word| self.grammar.word(word)).collect()
    }
}

/// Iterates over the instances of a text stream.
///
/// Stops after the first error.
pub struct InstanceReader<R> {
    lines: io::Lines<R>,
    line: u32,
    options: LoadOptions,
    failed: bool,
}

impl<R: BufRead> InstanceReader<R> {
    /// Creates a reader over the given stream.
    pub fn new(reader: R, options: LoadOptions) -> Self {
        InstanceReader {
            lines: reader.lines(),
            line: 0,
            options,
            failed: false,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, LoadError> {
        match self.lines.next() {
            Some(Ok(mut text)) => {
                self.line += 1;
                if text.ends_with('\r') {
                    text.pop();
                }
                Ok(Some(text))
            }
            Some(Err(error)) => Err(LoadError::io(error, self.line + 1)),
            None => Ok(None),
        }
    }

    fn read_instance(&mut self) -> Result<Option<Instance>, LoadError> {
        let header = loop {
            match self.next_line()? {
                None => return Ok(None),
                Some(text) if text.trim().is_empty() => continue,
                Some(text) => break text,
            }
        };
        let header_line = self.line;
        let mut builder = parse_header(&header).map_err(|reason| {
            LoadError::invalid_grammar(reason, header_line)
        })?;

        loop {
            let text = self.next_line()?.ok_or_else(|| {
                LoadError::invalid_grammar("input ends inside the rules", self.line)
            })?;
            if text.trim() == END_OF_RULES {
                break;
            }
            let (lhs, rhs) = split_rule(&text)
                .map_err(|reason| LoadError::invalid_grammar(reason, self.line))?;
            builder
                .add_rule(lhs, rhs)
                .map_err(|error| LoadError::invalid_grammar(error, self.line))?;
        }
        let grammar = builder
            .build()
            .map_err(|error| LoadError::invalid_grammar(error, header_line))?;

        let mut words = vec![];
        loop {
            let text = self.next_line()?.ok_or_else(|| {
                LoadError::invalid_word("input ends inside the words", self.line)
            })?;
            if text.trim() == END_OF_WORDS {
                break;
            }
            check_word(&grammar, &text, self.options.max_word_len)
                .map_err(|error| LoadError::invalid_word(error, self.line))?;
            words.push(text);
        }

        debug!(
            "instance at line {}: {} rules, {} words",
            header_line,
            grammar.num_rules(),
            words.len()
        );
        Ok(Some(Instance { grammar, words }))
    }
}

impl<R: BufRead> Iterator for InstanceReader<R> {
    type Item = Result<Instance, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_instance() {
            Ok(instance) => instance.map(Ok),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

/// Reads all instances of a string.
pub fn load_str(input: &str, options: LoadOptions) -> Result<Vec<Instance>, LoadError> {
    InstanceReader::new(input.as_bytes(), options).collect()
}

fn parse_header(text: &str) -> Result<GrammarBuilder, String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (start, nonterminals, terminals) = match tokens[..] {
        [start, nonterminals, terminals] => (start, nonterminals, terminals),
        _ => {
            return Err(format!(
                "expected a start symbol, nonterminals and terminals, found {:?}",
                text
            ))
        }
    };
    let start = single_char(start)
        .ok_or_else(|| format!("start symbol {:?} is not a single symbol", start))?;
    Ok(CnfGrammar::builder(start, nonterminals, terminals))
}

fn split_rule(text: &str) -> Result<(char, &str), String> {
    let (lhs, rhs) = text
        .split_once("->")
        .ok_or_else(|| format!("expected a rule, found {:?}", text))?;
    let lhs = single_char(lhs.trim())
        .ok_or_else(|| format!("left-hand side of {:?} is not a single symbol", text))?;
    Ok((lhs, rhs.trim()))
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn check_word(grammar: &CnfGrammar, text: &str, max_word_len: usize) -> Result<(), WordError> {
    let len = text.chars().count();
    if len > max_word_len {
        return Err(WordError::TooLong {
            len,
            max: max_word_len,
        });
    }
    let nonterminal = text.chars().find(|&name| {
        grammar
            .sym_of(name)
            .map_or(false, |sym| grammar.is_nonterminal(sym))
    });
    match nonterminal {
        Some(name) => Err(WordError::Nonterminal(name)),
        None => Ok(()),
    }
}
