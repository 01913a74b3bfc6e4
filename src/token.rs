//! Tokenizer for expanded L-System strings.
//!
//! Scans a string left to right into [`Token`]s, each a recognized symbol
//! with an optional numeric parameter written as `symbol(number)`, e.g.
//! `F(2.5)` or `+(45)`.

use serde::{Deserialize, Serialize};

/// Operator symbols recognized in addition to alphanumerics.
const OPERATORS: &str = "+-&^/\\[]!\"?_";

/// A recognized symbol plus its optional attached parameter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The symbol character.
    pub symbol: char,
    /// Numeric parameter parsed from a `(number)` suffix, if present and valid.
    pub parameter: Option<f32>,
}

fn is_symbol(c: char) -> bool {
    c.is_alphanumeric() || OPERATORS.contains(c)
}

/// Tokenizes `input` into an ordered sequence of [`Token`]s.
///
/// Parsing is deliberately permissive and never fails:
///
/// - Whitespace produces no token.
/// - Characters that are neither alphanumeric nor in the operator set
///   `+ - & ^ / \ [ ] ! " ? _` are silently skipped. Grammars may carry
///   symbols meaningful only to custom rule layers, so unknown input
///   degrades gracefully instead of aborting.
/// - A symbol immediately followed by `(` starts a parameter scan to the
///   next `)`. If the parenthetical closes and its text parses as a float,
///   the value is attached and the cursor moves past the `)`. Text that
///   does not parse is consumed all the same but yields a parameterless
///   token. An unclosed or empty `()` parenthetical consumes only the
///   symbol, and scanning resumes at the next character.
pub fn tokenize(input: &str) -> Vec<Token> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() || !is_symbol(c) {
            i += 1;
            continue;
        }

        let mut parameter = None;
        if chars.get(i + 1) == Some(&'(') {
            let start = i + 2;
            match chars[start..].iter().position(|&c| c == ')') {
                Some(len) if len > 0 => {
                    let text: String = chars[start..start + len].iter().collect();
                    parameter = text.trim().parse::<f32>().ok();
                    i = start + len + 1;
                }
                // Unclosed or empty parens: consume the symbol only.
                _ => i += 1,
            }
        } else {
            i += 1;
        }

        tokens.push(Token { symbol: c, parameter });
    }

    tokens
}
