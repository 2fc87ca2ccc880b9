//! Calculator lexer example
//! Shows how to tokenize arithmetic expressions with the cursor framework.

use cursor_example::{init_logging, inputs};
use cursor_framework::{CharClass, Cursor, Predicate};

#[derive(Debug, Clone, PartialEq)]
pub enum CalcToken {
    Number { value: f64, at: isize },
    Plus { at: isize },
    Minus { at: isize },
    Multiply { at: isize },
    Divide { at: isize },
    Power { at: isize },
    LeftParen { at: isize },
    RightParen { at: isize },
    Eof { at: isize },
}

/// Reads `123`, `3.14` or `.5`. Anything consumed by a failed read is given
/// back with `undo`.
fn number(cursor: &mut Cursor<'_>, at: isize) -> Option<CalcToken> {
    let start = cursor.index();
    let int_part = cursor.read_while(CharClass::Digit);
    let mut text = int_part.to_string();

    if cursor.is_class(CharClass::Dot) {
        text.push('.');
        text.push_str(cursor.read_while(CharClass::Digit));
    }

    match text.parse::<f64>() {
        Ok(value) => Some(CalcToken::Number { value, at }),
        Err(_) => {
            rewind(cursor, start);
            None
        }
    }
}

/// Undoes reads until the cursor is back at `start`.
fn rewind(cursor: &mut Cursor<'_>, start: isize) {
    while cursor.index() != start && cursor.history_len() > 0 {
        cursor.undo();
    }
}

fn operator(cursor: &mut Cursor<'_>, at: isize) -> Option<CalcToken> {
    use CalcToken::*;
    let token = match cursor.peak()? {
        '+' => Plus { at },
        '-' => Minus { at },
        '*' => Multiply { at },
        '/' => Divide { at },
        '^' => Power { at },
        '(' => LeftParen { at },
        ')' => RightParen { at },
        _ => return None,
    };
    cursor.next();
    Some(token)
}

pub fn tokenize(input: &str) -> Vec<CalcToken> {
    let mut cursor = Cursor::new(input);
    let mut tokens = Vec::new();

    loop {
        cursor.read_while(Predicate::from_fn(|c, _| c.is_whitespace()));
        let at = cursor.index() + 1;
        if cursor.is_eof() {
            tokens.push(CalcToken::Eof { at });
            break;
        }

        if let Some(token) = number(&mut cursor, at).or_else(|| operator(&mut cursor, at)) {
            tracing::debug!(?token, "token");
            tokens.push(token);
            continue;
        }

        if let Some(ch) = cursor.next() {
            tracing::warn!(%ch, at, "skipping unexpected character");
        }
    }
    tokens
}

fn main() {
    init_logging();

    let expressions = inputs(&["3 + 4", "2 * 3.14", "(1 + 2) * 3", "2 ^ 8", "10 / .5", "1 . 2"]);
    for expr in expressions {
        println!("Expression: {}", expr);
        println!("Tokens:");
        for token in tokenize(&expr) {
            println!("  {:?}", token);
        }
        println!();
    }
}
