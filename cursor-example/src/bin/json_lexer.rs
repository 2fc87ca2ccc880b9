//! JSON lexer example
//! Shows how to tokenize JSON documents with the cursor framework.

use cursor_example::{init_logging, inputs};
use cursor_framework::{CharClass, Cursor, Predicate};
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonToken {
    String { value: String, at: isize },
    Number { value: String, at: isize },
    Boolean { value: bool, at: isize },
    Null { at: isize },
    LeftBrace { at: isize },
    RightBrace { at: isize },
    LeftBracket { at: isize },
    RightBracket { at: isize },
    Comma { at: isize },
    Colon { at: isize },
    Eof { at: isize },
}

pub struct JsonLexer {
    string_stop: Regex,
}

impl JsonLexer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            string_stop: Regex::new(r#"["\\]"#)?,
        })
    }

    pub fn tokenize(&self, input: &str) -> Vec<JsonToken> {
        let mut cursor = Cursor::new(input);
        let mut tokens = Vec::new();

        loop {
            cursor.read_while(Predicate::from_fn(|c, _| c.is_whitespace()));
            let at = cursor.index() + 1;
            if cursor.is_eof() {
                tokens.push(JsonToken::Eof { at });
                break;
            }

            let token = Self::punctuation(&mut cursor, at)
                .or_else(|| Self::keyword(&mut cursor, at))
                .or_else(|| self.string(&mut cursor, at))
                .or_else(|| Self::number(&mut cursor, at));

            match token {
                Some(token) => tokens.push(token),
                None => {
                    if let Some(ch) = cursor.next() {
                        tracing::warn!(%ch, at, "skipping unexpected character");
                    }
                }
            }
        }
        tokens
    }

    fn punctuation(cursor: &mut Cursor<'_>, at: isize) -> Option<JsonToken> {
        if cursor.is_class(CharClass::LeftCurlyBracket) {
            Some(JsonToken::LeftBrace { at })
        } else if cursor.is_class(CharClass::RightCurlyBracket) {
            Some(JsonToken::RightBrace { at })
        } else if cursor.is_class(CharClass::LeftSquareBracket) {
            Some(JsonToken::LeftBracket { at })
        } else if cursor.is_class(CharClass::RightSquareBracket) {
            Some(JsonToken::RightBracket { at })
        } else if cursor.is_class(CharClass::Colon) {
            Some(JsonToken::Colon { at })
        } else if cursor.is(&[","]) {
            Some(JsonToken::Comma { at })
        } else {
            None
        }
    }

    fn keyword(cursor: &mut Cursor<'_>, at: isize) -> Option<JsonToken> {
        if cursor.is(&["true"]) {
            Some(JsonToken::Boolean { value: true, at })
        } else if cursor.is(&["false"]) {
            Some(JsonToken::Boolean { value: false, at })
        } else if cursor.is(&["null"]) {
            Some(JsonToken::Null { at })
        } else {
            None
        }
    }

    fn string(&self, cursor: &mut Cursor<'_>, at: isize) -> Option<JsonToken> {
        if !cursor.is(&["\""]) {
            return None;
        }

        let mut value = String::new();
        loop {
            value.push_str(cursor.read_until(&self.string_stop));
            if cursor.is(&["\""]) {
                return Some(JsonToken::String { value, at });
            }
            if !cursor.is(&["\\"]) {
                tracing::warn!(at, "unterminated string");
                return Some(JsonToken::String { value, at });
            }
            match cursor.next() {
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some('r') => value.push('\r'),
                Some(other) => value.push(other),
                None => {
                    tracing::warn!(at, "unterminated escape");
                    return Some(JsonToken::String { value, at });
                }
            }
        }
    }

    fn number(cursor: &mut Cursor<'_>, at: isize) -> Option<JsonToken> {
        let negative = cursor.is(&["-"]);
        let int_part = cursor.read_while(CharClass::Digit);
        if int_part.is_empty() {
            if negative {
                cursor.undo();
            }
            return None;
        }

        let mut value = String::new();
        if negative {
            value.push('-');
        }
        value.push_str(int_part);

        if cursor.is_class(CharClass::Dot) {
            value.push('.');
            value.push_str(cursor.read_while(CharClass::Digit));
        }
        if let Some(e) = cursor.peak().filter(|c| matches!(c, 'e' | 'E')) {
            cursor.next();
            value.push(e);
            if let Some(sign) = cursor.peak().filter(|c| matches!(c, '+' | '-')) {
                cursor.next();
                value.push(sign);
            }
            value.push_str(cursor.read_while(CharClass::Digit));
        }

        Some(JsonToken::Number { value, at })
    }
}

fn main() -> Result<(), regex::Error> {
    init_logging();

    let samples = [r#"{
        "name": "Alice",
        "age": 30,
        "score": -1.5e3,
        "active": true,
        "tags": ["developer", "rust\n"],
        "address": null
    }"#];

    let lexer = JsonLexer::new()?;
    for json in inputs(&samples) {
        println!("Tokenizing JSON:");
        println!("{}\n", json);

        println!("Tokens:");
        for (i, token) in lexer.tokenize(&json).iter().enumerate() {
            println!("  {}: {:?}", i, token);
        }
    }
    Ok(())
}
