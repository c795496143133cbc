use super::token::Operator;
use super::{Column, Error};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
pub struct Root {
    pub expr: Expression,
    pub dst: Option<Currency>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Currency {
    Symbol(Column, String),
    Code(Column, String),
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Number(Column, String),
    Source(Column, Currency, Box<Expression>),
    Negate(Column, Box<Expression>),
    Power(Column, Box<Expression>, Box<Expression>),
    Multiply(Column, Box<Expression>, Box<Expression>),
    Divide(Column, Box<Expression>, Box<Expression>),
    Add(Column, Box<Expression>, Box<Expression>),
    Subtract(Column, Box<Expression>, Box<Expression>),
    Percent(Column, Operator, Box<Expression>, Box<Expression>),
}

impl Currency {
    pub fn column(&self) -> Column {
        match self {
            Currency::Symbol(col, _) | Currency::Code(col, _) => col.clone(),
        }
    }
}

impl Expression {
    pub fn column(&self) -> Column {
        use Expression::*;
        match self {
            Number(col, ..)
            | Source(col, ..)
            | Negate(col, ..)
            | Power(col, ..)
            | Multiply(col, ..)
            | Divide(col, ..)
            | Add(col, ..)
            | Subtract(col, ..)
            | Percent(col, ..) => col.clone(),
        }
    }
}

/// Callbacks for a post-order walk. Children are always visited before
/// their parent, left operand before right.
pub trait Visitor {
    fn visit_root(&mut self, _: &Root) -> Result<()> {
        Ok(())
    }
    fn visit_expression(&mut self, _: &Expression) -> Result<()> {
        Ok(())
    }
    fn visit_source(&mut self, _: &Currency) -> Result<()> {
        Ok(())
    }
    fn visit_destination(&mut self, _: &Currency) -> Result<()> {
        Ok(())
    }
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<()>;
}

impl AcceptVisitor for Root {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<()> {
        self.expr.accept(visitor)?;
        if let Some(dst) = &self.dst {
            visitor.visit_destination(dst)?;
        }
        visitor.visit_root(self)
    }
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<()> {
        use Expression::*;
        match self {
            Number(..) => {}
            Source(_, currency, expr) => {
                expr.accept(visitor)?;
                visitor.visit_source(currency)?;
            }
            Negate(_, expr) => expr.accept(visitor)?,
            Power(_, expr1, expr2)
            | Multiply(_, expr1, expr2)
            | Divide(_, expr1, expr2)
            | Add(_, expr1, expr2)
            | Subtract(_, expr1, expr2)
            | Percent(_, _, expr1, expr2) => {
                expr1.accept(visitor)?;
                expr2.accept(visitor)?;
            }
        }
        visitor.visit_expression(self)
    }
}
