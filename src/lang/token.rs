#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Number(String),
    Symbol(String),
    Code(String),
    Word(Word),
    Operator(Operator),
    LParen,
    RParen,
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        use Token::*;
        Some(match s {
            "IN" => Word(self::Word::In),
            "TO" => Word(self::Word::To),
            "(" => LParen,
            ")" => RParen,
            _ => Operator(self::Operator::from_string(s)?),
        })
    }

    pub fn is_currency(&self) -> bool {
        matches!(self, Token::Symbol(_) | Token::Code(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Number(s) => write!(f, "{}", s),
            Symbol(s) => write!(f, "{}", s),
            Code(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    In,
    To,
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            In => write!(f, "IN"),
            To => write!(f, "TO"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Plus,
    Minus,
    Percent,
}

impl Operator {
    pub fn from_string(s: &str) -> Option<Operator> {
        use Operator::*;
        match s {
            "^" => Some(Caret),
            "*" => Some(Multiply),
            "/" => Some(Divide),
            "+" => Some(Plus),
            "-" => Some(Minus),
            "%" => Some(Percent),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Percent => write!(f, "%"),
        }
    }
}
