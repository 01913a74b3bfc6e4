// tests/tokenize.rs
use lsys_turtle::{tokenize, Token};

fn tok(symbol: char, parameter: Option<f32>) -> Token {
    Token { symbol, parameter }
}

#[test]
fn empty_input_yields_no_tokens() {
    assert_eq!(tokenize(""), vec![]);
}

#[test]
fn parses_parameters() {
    assert_eq!(
        tokenize("F(2.5)+(30)"),
        vec![tok('F', Some(2.5)), tok('+', Some(30.0))]
    );
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(
        tokenize("F \tF\nF"),
        vec![tok('F', None), tok('F', None), tok('F', None)]
    );
}

#[test]
fn unrecognized_characters_are_skipped() {
    assert_eq!(tokenize("F.G"), vec![tok('F', None), tok('G', None)]);
}

#[test]
fn all_operators_are_recognized() {
    let symbols: Vec<char> = tokenize("+-&^/\\[]!\"?_")
        .into_iter()
        .map(|t| t.symbol)
        .collect();
    assert_eq!(
        symbols,
        vec!['+', '-', '&', '^', '/', '\\', '[', ']', '!', '"', '?', '_']
    );
}

#[test]
fn non_numeric_parameter_degrades_to_parameterless() {
    // The malformed parenthetical is consumed; scanning resumes after `)`.
    assert_eq!(tokenize("F(abc)"), vec![tok('F', None)]);
    assert_eq!(tokenize("F(abc)G"), vec![tok('F', None), tok('G', None)]);
}

#[test]
fn unclosed_parameter_consumes_symbol_only() {
    // Without a `)` the scan resumes right after `F`: the `(` is dropped and
    // the digits become ordinary tokens.
    assert_eq!(
        tokenize("F(2.5"),
        vec![tok('F', None), tok('2', None), tok('5', None)]
    );
}

#[test]
fn empty_parens_yield_parameterless_token() {
    assert_eq!(tokenize("F()"), vec![tok('F', None)]);
}

#[test]
fn negative_and_fractional_parameters() {
    assert_eq!(
        tokenize("+(-22.5)F(0.75)"),
        vec![tok('+', Some(-22.5)), tok('F', Some(0.75))]
    );
}
