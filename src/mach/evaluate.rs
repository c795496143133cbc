use super::{NumberReplacer, ParseResult, Settings, Stack};
use crate::currency;
use crate::error;
use crate::lang::ast::{self, AcceptVisitor};
use crate::lang::token::Operator;
use crate::lang::{lex, parse, Error};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// Evaluates `expression` to an amount with resolved source and target
/// currencies. Pure: no rates are looked up here.
pub fn evaluate(expression: &str, settings: &Settings) -> Result<ParseResult> {
    let upper = expression.trim().to_uppercase();
    let tokens = lex(&upper, &settings.decimal_separators);
    let root = parse(&tokens)?;
    let mut this = Evaluator::new(settings);
    root.accept(&mut this)?;
    this.finish()
}

struct Evaluator {
    stack: Stack<f64>,
    replacer: NumberReplacer,
    explicit_src: Option<String>,
    dst: Option<String>,
    default_src: Option<String>,
    default_tgt: Option<String>,
}

impl Evaluator {
    fn new(settings: &Settings) -> Evaluator {
        Evaluator {
            stack: Stack::new("expression too long"),
            replacer: NumberReplacer::new(&settings.decimal_separators),
            explicit_src: None,
            dst: None,
            default_src: settings.default_src.clone(),
            default_tgt: settings.default_tgt.clone(),
        }
    }

    fn finish(mut self) -> Result<ParseResult> {
        if self.stack.len() != 1 {
            debug!(stack = ?self.stack, "unbalanced evaluation stack");
            return Err(error!(InternalError; "Incorrect expression!"));
        }
        let src = self.stack.pop()?;
        if !src.is_finite() {
            return Err(error!(MalformedNumber; "result is not a finite number"));
        }
        let src_currency = match self.explicit_src.or(self.default_src) {
            Some(code) => code,
            None => {
                return Err(
                    error!(UnresolvedCurrency; "Can't determine source currency for conversion"),
                )
            }
        };
        let tgt_currency = match self.dst.or(self.default_tgt) {
            Some(code) => code,
            None => {
                return Err(
                    error!(UnresolvedCurrency; "Can't determine target currency for conversion"),
                )
            }
        };
        Ok(ParseResult {
            src,
            src_currency,
            tgt: None,
            tgt_currency,
        })
    }

    fn number(&mut self, col: &crate::lang::Column, text: &str) -> Result<()> {
        let numstr = self.replacer.replace(text);
        match numstr.parse::<f64>() {
            Ok(num) => self.stack.push(num),
            Err(_) => {
                if numstr.matches('.').count() > 1 {
                    let msg = format!("multiple decimal points in \"{}\"", text);
                    Err(error!(SyntaxError, ..col; &msg))
                } else {
                    let msg = format!("can't convert \"{}\" to number", text);
                    Err(error!(MalformedNumber, ..col; &msg))
                }
            }
        }
    }

    fn percent(&mut self, col: &crate::lang::Column, op: &Operator) -> Result<()> {
        let pct = self.stack.pop()? / 100.0;
        let factor = match op {
            Operator::Plus => 1.0 + pct,
            Operator::Minus => 1.0 - pct,
            _ => return Err(error!(InvalidPercent, ..col)),
        };
        let lhs = self.stack.pop()?;
        self.stack.push(lhs * factor)
    }

    fn resolve(currency: &ast::Currency) -> Result<String> {
        match currency {
            ast::Currency::Symbol(col, sym) => match currency::code_for_symbol(sym) {
                Some(code) => Ok(code.to_string()),
                None => {
                    let msg = format!("unknown currency symbol \"{}\"", sym);
                    Err(error!(UnknownCurrency, ..col; &msg))
                }
            },
            ast::Currency::Code(col, code) => match currency::lookup(code) {
                Some(c) => Ok(c.code.to_string()),
                None => {
                    let msg = format!("unknown currency code \"{}\"", code);
                    Err(error!(UnknownCurrency, ..col; &msg))
                }
            },
        }
    }
}

impl ast::Visitor for Evaluator {
    fn visit_expression(&mut self, expression: &ast::Expression) -> Result<()> {
        use ast::Expression::*;
        match expression {
            Number(col, text) => self.number(col, text),
            Source(..) => Ok(()),
            Negate(..) => {
                let value = self.stack.pop()?;
                self.stack.push(-value)
            }
            Power(..) => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(lhs.powf(rhs))
            }
            Multiply(..) => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(lhs * rhs)
            }
            Divide(..) => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(lhs / rhs)
            }
            Add(..) => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(lhs + rhs)
            }
            Subtract(..) => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(lhs - rhs)
            }
            Percent(col, op, ..) => self.percent(col, op),
        }
    }

    fn visit_source(&mut self, currency: &ast::Currency) -> Result<()> {
        let code = Evaluator::resolve(currency)?;
        if let Some(prev) = &self.explicit_src {
            if *prev != code {
                let msg = format!("conflicting source currencies {} and {}", prev, code);
                return Err(error!(UnresolvedCurrency, ..&currency.column(); &msg));
            }
        }
        self.explicit_src = Some(code);
        Ok(())
    }

    fn visit_destination(&mut self, currency: &ast::Currency) -> Result<()> {
        self.dst = Some(Evaluator::resolve(currency)?);
        Ok(())
    }
}
