use super::{ast::*, token::*, Column, Error};

type Result<T> = std::result::Result<T, Error>;

/// Deepest nesting of parentheses, signs and `^` chains accepted.
pub const MAX_DEPTH: usize = 256;

pub fn parse(tokens: &[Token]) -> Result<Root> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Root> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
            depth: 0,
        };
        if parse.peek().is_none() {
            return Err(error!(SyntaxError; "empty expression"));
        }
        let expr = parse.expression()?;
        let dst = match parse.peek() {
            None => None,
            Some(Token::Word(_)) => {
                parse.next();
                Some(parse.currency()?)
            }
            Some(t) if t.is_currency() => Some(parse.currency()?),
            Some(_) => return Err(parse.unexpected()),
        };
        if parse.peek().is_some() {
            return Err(parse.unexpected());
        }
        Ok(Root { expr, dst })
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    /// Consumes the next token and reports it as out of place.
    fn unexpected(&mut self) -> Error {
        match self.next() {
            Some(t) => {
                let msg = format!("unexpected \"{}\"", t);
                error!(SyntaxError, ..&self.column(); &msg)
            }
            None => {
                let end = self.col.end;
                error!(SyntaxError, ..&(end..end + 1); "unexpected end of expression")
            }
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        self.binary(0)
    }

    fn binary(&mut self, precedence: usize) -> Result<Expression> {
        if self.depth == MAX_DEPTH {
            return Err(error!(SyntaxError, ..&self.column(); "expression too deeply nested"));
        }
        self.depth += 1;
        let mut lhs = self.operand()?;
        loop {
            let op = match self.peek() {
                Some(Token::Operator(op)) if *op != Operator::Percent => *op,
                _ => break,
            };
            let op_precedence = Expression::op_precedence(&op);
            if op_precedence < precedence {
                break;
            }
            self.next();
            let column = self.column();
            let rhs = if Expression::is_right_assoc(&op) {
                self.binary(op_precedence)?
            } else {
                self.binary(op_precedence + 1)?
            };
            lhs = match self.peek() {
                Some(Token::Operator(Operator::Percent)) => {
                    self.next();
                    Expression::Percent(column, op, Box::new(lhs), Box::new(rhs))
                }
                _ => Expression::for_binary_op(column, &op, lhs, rhs),
            };
        }
        self.depth -= 1;
        Ok(lhs)
    }

    fn operand(&mut self) -> Result<Expression> {
        match self.peek() {
            Some(Token::LParen) => {
                self.next();
                let expr = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }
            Some(Token::Operator(op @ (Operator::Plus | Operator::Minus))) => {
                let op = *op;
                self.next();
                let column = self.column();
                let operand = self.binary(Expression::op_precedence(&Operator::Caret))?;
                Ok(match op {
                    Operator::Minus => Expression::Negate(column, Box::new(operand)),
                    _ => operand,
                })
            }
            Some(Token::Number(_)) => {
                let number = self.number()?;
                match self.peek() {
                    Some(t) if t.is_currency() => {
                        let currency = self.currency()?;
                        Ok(Expression::Source(
                            number.column(),
                            currency,
                            Box::new(number),
                        ))
                    }
                    _ => Ok(number),
                }
            }
            Some(t) if t.is_currency() => {
                let currency = self.currency()?;
                let number = self.number()?;
                Ok(Expression::Source(
                    currency.column(),
                    currency,
                    Box::new(number),
                ))
            }
            _ => Err(self.unexpected()),
        }
    }

    fn number(&mut self) -> Result<Expression> {
        match self.peek() {
            Some(Token::Number(s)) => {
                let s = s.clone();
                self.next();
                Ok(Expression::Number(self.column(), s))
            }
            _ => Err(self.unexpected()),
        }
    }

    fn currency(&mut self) -> Result<Currency> {
        match self.next() {
            Some(Token::Symbol(s)) => Ok(Currency::Symbol(self.column(), s.clone())),
            Some(Token::Code(s)) => Ok(Currency::Code(self.column(), s.clone())),
            Some(Token::Unknown(s)) if s.chars().all(|c| c.is_ascii_alphabetic()) => {
                let msg = format!("unknown currency code \"{}\"", s);
                Err(error!(UnknownCurrency, ..&self.column(); &msg))
            }
            Some(t) => {
                let msg = format!("expected currency, found \"{}\"", t);
                Err(error!(SyntaxError, ..&self.column(); &msg))
            }
            None => {
                let end = self.col.end;
                Err(error!(SyntaxError, ..&(end..end + 1); "expected currency"))
            }
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.peek() {
            if **t == token {
                self.next();
                return Ok(());
            }
        }
        Err(self.unexpected())
    }
}

impl Expression {
    fn for_binary_op(col: Column, op: &Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        match op {
            Caret => Expression::Power(col, Box::new(lhs), Box::new(rhs)),
            Multiply => Expression::Multiply(col, Box::new(lhs), Box::new(rhs)),
            Divide => Expression::Divide(col, Box::new(lhs), Box::new(rhs)),
            Plus => Expression::Add(col, Box::new(lhs), Box::new(rhs)),
            Minus => Expression::Subtract(col, Box::new(lhs), Box::new(rhs)),
            Percent => unreachable!("percent is never a binary operator"),
        }
    }

    fn op_precedence(op: &Operator) -> usize {
        use Operator::*;
        match op {
            Plus | Minus => 10,
            Multiply | Divide => 20,
            Caret => 30,
            Percent => 0,
        }
    }

    fn is_right_assoc(op: &Operator) -> bool {
        *op == Operator::Caret
    }
}
