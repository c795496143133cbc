/// Inputs the evaluator needs besides the expression itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub default_src: Option<String>,
    pub default_tgt: Option<String>,
    pub decimal_separators: Vec<char>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_src: None,
            default_tgt: None,
            decimal_separators: vec!['.'],
        }
    }
}

/// Outcome of one evaluation. `tgt` stays `None` until the amount has been
/// converted with an exchange rate.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub src: f64,
    pub src_currency: String,
    pub tgt: Option<f64>,
    pub tgt_currency: String,
}

impl ParseResult {
    /// Key of the directed rate this result needs, `SRC_TGT`.
    pub fn pair_name(&self) -> String {
        format!("{}_{}", self.src_currency, self.tgt_currency)
    }

    pub fn converted(self, rate: f64) -> ParseResult {
        debug_assert!(self.tgt.is_none());
        ParseResult {
            tgt: Some(self.src * rate),
            ..self
        }
    }
}
