/*!
## Rust Machine Module

This Rust module evaluates parsed expressions on a value stack and binds the
currencies they mention.

*/

mod conversion;
mod evaluate;
mod number;
mod stack;

pub use conversion::ParseResult;
pub use conversion::Settings;
pub use evaluate::evaluate;
pub use number::NumberReplacer;
pub use stack::Stack;
