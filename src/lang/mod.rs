/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of conversion
expressions such as `1 234,50 usd + 10% in eur`.

*/

#[macro_use]
mod error;
mod lex;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use parse::parse;

/// Character range of a token or node in the uppercased expression.
pub type Column = std::ops::Range<usize>;

/// Characters that may appear inside a numeric literal without being digits.
pub const NOISE_CHARS: [char; 5] = ['.', ',', ' ', '\'', '`'];
