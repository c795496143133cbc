use super::{token::*, NOISE_CHARS};
use crate::currency;

/// Splits an uppercased expression into tokens. Characters listed in
/// `separators` are accepted inside numeric literals in addition to the
/// fixed noise characters.
pub fn lex(s: &str, separators: &[char]) -> Vec<Token> {
    Lexer::lex(s, separators)
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r'
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::CharIndices<'a>>;
    fn rest(&mut self) -> &'a str;
    fn is_number_char(&self, c: char) -> bool;

    fn take(&mut self, count: usize) -> String {
        let mut s = String::new();
        for _ in 0..count {
            if let Some((_, ch)) = self.chars().next() {
                s.push(ch);
            }
        }
        s
    }

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars().next();
            len += 1;
            if let Some((_, pk)) = self.chars().peek() {
                if is_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    /// Length in chars of a run of separator or noise characters at the
    /// start of `s` when a digit follows it, or `None` otherwise.
    fn digit_after_run(&self, s: &str) -> Option<usize> {
        let mut len = 0;
        for ch in s.chars() {
            if is_digit(ch) {
                return if len > 0 { Some(len) } else { None };
            }
            if !self.is_number_char(ch) {
                return None;
            }
            len += 1;
        }
        None
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        loop {
            let ch = match self.chars().next() {
                Some((_, c)) => c,
                None => {
                    debug_assert!(false, "Failed to tokenize number.");
                    return None;
                }
            };
            s.push(ch);
            if let Some((_, pk)) = self.chars().peek() {
                if is_digit(*pk) {
                    continue;
                }
            }
            let rest = self.rest();
            if let Some(len) = self.digit_after_run(rest) {
                s.push_str(&self.take(len));
                continue;
            }
            break;
        }
        Some(Token::Number(s))
    }

    fn symbol(&mut self, symbol: &str) -> Option<Token> {
        let s = self.take(symbol.chars().count());
        Some(Token::Symbol(s))
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some((_, pk)) = self.chars().peek() {
            if !is_alphabetic(*pk) {
                break;
            }
            let ch = *pk;
            self.chars().next();
            s.push(ch.to_ascii_uppercase());
        }
        if let Some(token) = Token::from_string(&s) {
            return Some(token);
        }
        if s.len() == 3 {
            return Some(Token::Code(s));
        }
        Some(Token::Unknown(s))
    }

    fn minutia(&mut self) -> Option<Token> {
        let (_, ch) = self.chars().next()?;
        let s = ch.to_string();
        match Token::from_string(&s) {
            Some(t) => Some(t),
            None => Some(Token::Unknown(s)),
        }
    }
}

struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    separators: &'a [char],
}

impl<'a> Tokenizers<'a> for Lexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::CharIndices<'a>> {
        &mut self.chars
    }

    fn rest(&mut self) -> &'a str {
        match self.chars.peek() {
            Some((idx, _)) => &self.source[*idx..],
            None => "",
        }
    }

    fn is_number_char(&self, c: char) -> bool {
        NOISE_CHARS.contains(&c) || self.separators.contains(&c)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, pk) = *self.chars.peek()?;
        if is_whitespace(pk) {
            return self.whitespace();
        }
        let rest = self.rest();
        if let Some(symbol) = currency::match_symbol(rest) {
            return self.symbol(symbol);
        }
        if is_digit(pk) {
            return self.number();
        }
        if self.is_number_char(pk) && self.digit_after_run(rest).is_some() {
            return self.number();
        }
        if is_alphabetic(pk) {
            return self.alphabetic();
        }
        self.minutia()
    }
}

impl<'a> Lexer<'a> {
    fn lex(s: &'a str, separators: &'a [char]) -> Vec<Token> {
        let mut tokens = Lexer {
            source: s,
            chars: s.char_indices().peekable(),
            separators,
        }
        .collect();
        Lexer::trim_end(&mut tokens);
        tokens
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
    }
}
