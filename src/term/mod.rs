/*!
## Terminal Module

Command line driver: argument handling, logging setup, the conversion
pipeline and the three output formats.

*/

mod args;
mod output;

pub use args::{Args, Request};
pub use output::{alfred_error, currency_table, render, space_format, text_line, Format};

use crate::mach::{self, ParseResult, Settings};
use crate::rates::{default_cache_path, CurrConv, ExchangeRateCache, RateSource};
use crate::Error;
use ansi_term::Style;
use clap::Parser;
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const VAGUE_ERROR: &str = "please enter a valid expression";
const UNKNOWN_ERROR: &str = "Unknown error";

pub fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if args.list_currencies {
        println!("{}", currency_table());
        return;
    }
    if args.clear_cache {
        ExchangeRateCache::clear(&default_cache_path());
        return;
    }
    let request = match args.validate() {
        Ok(request) => request,
        Err(error) => error.exit(),
    };
    match run(&request) {
        Ok(output) => println!("{}", output),
        Err(error) => std::process::exit(report_error(&error, request.format, args.debug)),
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("curconv=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run(request: &Request) -> Result<String, Error> {
    let mut cache = if request.no_cache {
        ExchangeRateCache::empty()
    } else {
        ExchangeRateCache::load(default_cache_path())
    };
    let source = CurrConv::new(request.api_key.as_str());
    let result = convert(&request.expression, &request.settings, &mut cache, &source)?;
    Ok(render(&result, request.format))
}

/// Evaluates `expression` and converts the amount with a cached or freshly
/// fetched rate.
pub fn convert(
    expression: &str,
    settings: &Settings,
    cache: &mut ExchangeRateCache,
    source: &dyn RateSource,
) -> Result<ParseResult, Error> {
    let result = mach::evaluate(expression, settings)?;
    debug!(
        src = result.src,
        src_currency = %result.src_currency,
        tgt_currency = %result.tgt_currency,
        "Evaluated"
    );
    Ok(cache.convert(source, result)?)
}

/// The text shown for `error` when internal details are hidden or not.
pub fn error_message(error: &Error, format: Format, debug: bool) -> String {
    match error {
        Error::User(_) => error.to_string(),
        Error::Internal(_) if debug => error.to_string(),
        Error::Internal(_) if format == Format::Alfred => VAGUE_ERROR.to_string(),
        Error::Internal(_) => UNKNOWN_ERROR.to_string(),
    }
}

/// Prints `error` and returns the process exit code.
fn report_error(error: &Error, format: Format, debug: bool) -> i32 {
    let message = error_message(error, format, debug);
    match format {
        Format::Alfred => {
            println!("{}", alfred_error(&message));
            0
        }
        Format::Text | Format::Num => {
            if std::io::stderr().is_terminal() {
                eprintln!("{}", Style::new().bold().paint(message));
            } else {
                eprintln!("{}", message);
            }
            1
        }
    }
}
