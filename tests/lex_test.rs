use curconv::lang::{lex, token::*};

fn lex_dot(s: &str) -> Vec<Token> {
    lex(s, &['.'])
}

#[test]
fn test_expression() {
    assert_eq!(
        lex_dot("1 000.5 USD+10% IN €"),
        vec![
            Token::Number("1 000.5".to_string()),
            Token::Whitespace(1),
            Token::Code("USD".to_string()),
            Token::Operator(Operator::Plus),
            Token::Number("10".to_string()),
            Token::Operator(Operator::Percent),
            Token::Whitespace(1),
            Token::Word(Word::In),
            Token::Whitespace(1),
            Token::Symbol("€".to_string()),
        ]
    );
}

#[test]
fn test_parens_and_power() {
    assert_eq!(
        lex_dot("(2)^3"),
        vec![
            Token::LParen,
            Token::Number("2".to_string()),
            Token::RParen,
            Token::Operator(Operator::Caret),
            Token::Number("3".to_string()),
        ]
    );
}

#[test]
fn test_multichar_symbol() {
    assert_eq!(
        lex_dot("R$10"),
        vec![
            Token::Symbol("R$".to_string()),
            Token::Number("10".to_string()),
        ]
    );
}

#[test]
fn test_words() {
    assert_eq!(
        lex_dot("TO DOLLARS"),
        vec![
            Token::Word(Word::To),
            Token::Whitespace(1),
            Token::Unknown("DOLLARS".to_string()),
        ]
    );
}

#[test]
fn test_grouping_space_before_code() {
    assert_eq!(
        lex_dot("5 EUR"),
        vec![
            Token::Number("5".to_string()),
            Token::Whitespace(1),
            Token::Code("EUR".to_string()),
        ]
    );
}

#[test]
fn test_trailing_whitespace_trimmed() {
    assert_eq!(lex_dot("7  "), vec![Token::Number("7".to_string())]);
}
