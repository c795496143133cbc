use super::output::Format;
use crate::currency;
use crate::mach::Settings;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

const LONG_ABOUT: &str = "Currency converter with built-in calculator.

Mathematical operations:
+ - * /
+X% -X%
a^b (power)

Numbers could include spaces to aid with readability and use \",\" or \".\" for decimal point.

Examples:
\"1\" - convert 1 unit of default source currency to default target currency.
\"1 USD\" | \"$1\" - convert 1 USD to default target currency.
\"1 in EUR\" | \"1 to €\" - convert 1 unit of default source currency to euro.
\"1 usd eur\" - convert 1 USD to EUR (you can omit \"to\"/\"in\" if both currency symbols are present)

You can use standard 3-letter currency code or currency symbols.";

#[derive(Debug, Parser)]
#[command(name = "curconv", version, about = "Currency converter with built-in calculator", long_about = LONG_ABOUT)]
pub struct Args {
    /// Expression to evaluate
    #[arg(value_name = "EXPR")]
    pub expression: Option<String>,

    /// currencyconverterapi.com API key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Default source currency
    #[arg(long = "src", env = "DEFAULT_SRC_CURRENCY", value_parser = currency_code)]
    pub default_src: Option<String>,

    /// Default target currency
    #[arg(long = "tgt", env = "DEFAULT_TGT_CURRENCY", value_parser = currency_code)]
    pub default_tgt: Option<String>,

    /// Decimal separator character[s]
    #[arg(long, env = "DEC_SEP", default_value = ".")]
    pub dec_sep: String,

    /// Output format
    #[arg(short, long, env = "OUTPUT_FORMAT", value_enum, ignore_case = true, default_value_t = Format::Text, value_name = "FMT")]
    pub format: Format,

    /// Reset all cached data
    #[arg(long)]
    pub clear_cache: bool,

    /// Request rates every time
    #[arg(long)]
    pub no_cache: bool,

    /// Show the list of supported currencies
    #[arg(long = "list")]
    pub list_currencies: bool,

    /// Show internal errors and debug logs
    #[arg(long, env = "CURCONV_DEBUG")]
    pub debug: bool,
}

/// A validated conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub expression: String,
    pub api_key: String,
    pub settings: Settings,
    pub format: Format,
    pub no_cache: bool,
}

fn currency_code(s: &str) -> Result<String, String> {
    let code = s.trim().to_uppercase();
    match currency::lookup(&code) {
        Some(c) => Ok(c.code.to_string()),
        None => Err(format!("unknown currency code \"{}\"", s.trim())),
    }
}

impl Args {
    /// Checks the arguments needed for a conversion.
    pub fn validate(&self) -> Result<Request, clap::Error> {
        let api_key = self.api_key.as_deref().unwrap_or("").trim().to_string();
        if api_key.is_empty() {
            return Err(Self::fail("No API key present"));
        }
        let expression = self.expression.as_deref().unwrap_or("").trim().to_string();
        if expression.is_empty() {
            return Err(Self::fail("No expression present"));
        }
        let decimal_separators: Vec<char> = self.dec_sep.trim().to_uppercase().chars().collect();
        if decimal_separators.is_empty() {
            return Err(Self::fail("Empty decimal separators list"));
        }
        Ok(Request {
            expression,
            api_key,
            settings: Settings {
                default_src: self.default_src.clone(),
                default_tgt: self.default_tgt.clone(),
                decimal_separators,
            },
            format: self.format,
            no_cache: self.no_cache,
        })
    }

    fn fail(message: &str) -> clap::Error {
        Args::command().error(ErrorKind::ValueValidation, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_validate() {
        let a = args(&[
            "curconv", "--api-key", " k ", "--src", "usd", "--dec-sep", ",", "-f", "NUM", "1,5",
        ]);
        let r = a.validate().unwrap();
        assert_eq!(r.api_key, "k");
        assert_eq!(r.expression, "1,5");
        assert_eq!(r.settings.default_src.as_deref(), Some("USD"));
        assert_eq!(r.settings.decimal_separators, vec![',']);
        assert_eq!(r.format, Format::Num);
    }

    #[test]
    fn test_missing_expression() {
        let a = args(&["curconv", "--api-key", "k", "  "]);
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_unknown_default_currency() {
        assert!(Args::try_parse_from(["curconv", "--tgt", "XXX", "1"]).is_err());
    }

    #[test]
    fn test_command_is_consistent() {
        Args::command().debug_assert();
    }
}
