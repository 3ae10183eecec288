use indexmap::IndexMap;
use tracing::debug;

/// Punctuation recognized by the block-structured metadata grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    BraceOpen,
    BraceClose,
    Equals,
    Comma,
    /// Emitted at the end of every input line
    Newline,
}

impl Symbol {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '{' => Some(Symbol::BraceOpen),
            '}' => Some(Symbol::BraceClose),
            '=' => Some(Symbol::Equals),
            ',' => Some(Symbol::Comma),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(String),
    Symbol(Symbol),
}

/// Streaming tokenizer over block-structured metadata text.
///
/// Yields quoted strings as single text tokens with the quotes removed,
/// single-character symbols, and bare words split on spaces. Every line
/// terminates with a newline token. A quote left open at the end of a
/// line drops the rest of that line without yielding a token.
pub struct Tokenizer<'a> {
    lines: std::str::Split<'a, char>,
    current: Option<&'a str>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n'),
            current: None,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let line = match self.current {
                Some(line) => line,
                None => {
                    let line = self.lines.next()?;
                    self.current = Some(line);
                    line
                }
            };
            let line = line.trim_start();

            if line.is_empty() {
                self.current = None;
                return Some(Token::Symbol(Symbol::Newline));
            }

            if let Some(rest) = line.strip_prefix('"') {
                match rest.find('"') {
                    Some(end) => {
                        self.current = Some(&rest[end + 1..]);
                        return Some(Token::Text(rest[..end].to_string()));
                    }
                    None => {
                        self.current = Some("");
                        continue;
                    }
                }
            }

            // line is non-empty here
            let first = line.chars().next()?;
            if let Some(symbol) = Symbol::from_char(first) {
                self.current = Some(&line[first.len_utf8()..]);
                return Some(Token::Symbol(symbol));
            }

            match line.find(' ') {
                Some(space) => {
                    self.current = Some(&line[space + 1..]);
                    return Some(Token::Text(line[..space].to_string()));
                }
                None => {
                    self.current = Some("");
                    return Some(Token::Text(line.to_string()));
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outer {
    Idle,
    ExpectingSlot,
    ExpectingBrace,
    InBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    KeyStart,
    KeyCont,
    ValueStart,
    ValueCont,
}

/// Walk the token stream and collect `(slot, levelname)` pairs from
/// `MAP <slot> { ... levelname = <value> ... }` declarations.
///
/// Malformed assignments reset to the start of the next one. A block
/// opened without a preceding `MAP <slot>` header is consumed without
/// producing names.
pub fn extract_level_names(tokens: impl Iterator<Item = Token>) -> Vec<(String, String)> {
    let mut names = Vec::new();
    let mut outer = Outer::Idle;
    let mut block = Block::KeyStart;
    let mut slot: Option<String> = None;
    let mut key = String::new();
    let mut value = String::new();

    let mut flush = |slot: &Option<String>, key: &mut String, value: &mut String| {
        if let Some(slot) = slot {
            if key.eq_ignore_ascii_case("levelname") && !value.is_empty() {
                names.push((slot.to_uppercase(), value.clone()));
            }
        }
        key.clear();
        value.clear();
    };

    for token in tokens {
        match outer {
            Outer::Idle => match token {
                Token::Text(t) if t.eq_ignore_ascii_case("MAP") => {
                    outer = Outer::ExpectingSlot;
                }
                Token::Symbol(Symbol::BraceOpen) => {
                    slot = None;
                    block = Block::KeyStart;
                    key.clear();
                    value.clear();
                    outer = Outer::InBlock;
                }
                _ => {}
            },
            Outer::ExpectingSlot => match token {
                Token::Text(t) => {
                    slot = Some(t);
                    outer = Outer::ExpectingBrace;
                }
                _ => {
                    slot = None;
                    outer = Outer::Idle;
                }
            },
            Outer::ExpectingBrace => match token {
                Token::Symbol(Symbol::BraceOpen) => {
                    block = Block::KeyStart;
                    key.clear();
                    value.clear();
                    outer = Outer::InBlock;
                }
                Token::Symbol(Symbol::Newline) => {
                    slot = None;
                    outer = Outer::Idle;
                }
                _ => {}
            },
            Outer::InBlock => match token {
                Token::Symbol(Symbol::BraceClose) => {
                    flush(&slot, &mut key, &mut value);
                    slot = None;
                    outer = Outer::Idle;
                }
                Token::Symbol(Symbol::Newline) => {
                    flush(&slot, &mut key, &mut value);
                    block = Block::KeyStart;
                }
                token => {
                    if !step_block(&mut block, token, &mut key, &mut value) {
                        block = Block::KeyStart;
                        key.clear();
                        value.clear();
                    }
                }
            },
        }
    }

    names
}

fn step_block(block: &mut Block, token: Token, key: &mut String, value: &mut String) -> bool {
    match (*block, token) {
        (Block::KeyStart, Token::Text(t)) => {
            *key = t;
            *block = Block::KeyCont;
            true
        }
        (Block::KeyCont, Token::Text(t)) => {
            key.push(' ');
            key.push_str(&t);
            true
        }
        (Block::KeyCont, Token::Symbol(Symbol::Equals)) => {
            *block = Block::ValueStart;
            true
        }
        (Block::ValueStart, Token::Text(t)) => {
            *value = t;
            *block = Block::ValueCont;
            true
        }
        (Block::ValueCont, Token::Text(t)) => {
            value.push(' ');
            value.push_str(&t);
            true
        }
        _ => false,
    }
}

/// Apply extracted level names to the detected map slots
pub fn apply_umapinfo(text: &str, maps: &mut IndexMap<String, String>) {
    let mut applied = 0usize;

    for (slot, name) in extract_level_names(Tokenizer::new(text)) {
        if let Some(entry) = maps.get_mut(&slot) {
            *entry = name;
            applied += 1;
        }
    }

    debug!(applied, "applied block-structured level names");
}
