//! # curconv
//!
//! A currency converter with a built-in calculator.
//!
//! ```text
//! $ curconv '1 500 usd + 10% in eur'
//! 1 650.00$ is 1 520.31€
//! ```
//!
//! The crate is split the way the expression flows through it. [`lang`]
//! turns text into a syntax tree, [`mach`] evaluates the tree into an
//! amount and a currency pair, [`rates`] supplies the exchange rate, and
//! [`term`] is the command line driver.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod currency;
pub mod error;
pub mod lang;
pub mod mach;
pub mod rates;
pub mod term;

pub use error::Error;
