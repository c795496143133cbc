use crate::currency;
use crate::mach::ParseResult;
use clap::ValueEnum;
use serde::Serialize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human readable sentence
    Text,
    /// Converted amount only
    Num,
    /// Alfred script filter JSON
    Alfred,
}

const COPY_HINT: &str = "Action this item to copy this number to the clipboard";
const ERROR_TITLE: &str = "...";

#[derive(Debug, Serialize)]
struct AlfredText {
    copy: String,
    largetype: String,
}

#[derive(Debug, Serialize)]
struct AlfredItem {
    title: String,
    subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    arg: Option<String>,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<AlfredText>,
}

#[derive(Debug, Serialize)]
struct AlfredItems {
    items: Vec<AlfredItem>,
}

impl AlfredItems {
    fn single(item: AlfredItem) -> String {
        let items = AlfredItems { items: vec![item] };
        serde_json::to_string(&items).unwrap_or_default()
    }
}

/// Formats with two decimals and groups thousands with spaces.
pub fn space_format(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let s = format!("{:.2}", n.abs());
    let (int, frac) = s.split_at(s.len() - 3);
    let mut out = String::new();
    if n < 0.0 && s.bytes().any(|b| b != b'0' && b != b'.') {
        out.push('-');
    }
    let lead = match int.len() % 3 {
        0 => 3,
        n => n,
    };
    out.push_str(&int[..lead]);
    let mut rest = &int[lead..];
    while !rest.is_empty() {
        out.push(' ');
        out.push_str(&rest[..3]);
        rest = &rest[3..];
    }
    out.push_str(frac);
    out
}

/// `<src><suffix> is <tgt><suffix>`
pub fn text_line(result: &ParseResult) -> String {
    format!(
        "{}{} is {}{}",
        space_format(result.src),
        currency::display_suffix(&result.src_currency),
        space_format(result.tgt.unwrap_or_default()),
        currency::display_suffix(&result.tgt_currency),
    )
}

pub fn render(result: &ParseResult, format: Format) -> String {
    let tgt = result.tgt.unwrap_or_default();
    match format {
        Format::Text => text_line(result),
        Format::Num => format!("{:.2}", tgt),
        Format::Alfred => {
            let line = text_line(result);
            AlfredItems::single(AlfredItem {
                title: line.clone(),
                subtitle: COPY_HINT.to_string(),
                arg: Some(format!("{:.2}", tgt)),
                valid: true,
                text: Some(AlfredText {
                    copy: format!("{:.2}", tgt),
                    largetype: line,
                }),
            })
        }
    }
}

/// A non actionable Alfred item carrying an error message.
pub fn alfred_error(message: &str) -> String {
    AlfredItems::single(AlfredItem {
        title: ERROR_TITLE.to_string(),
        subtitle: message.to_string(),
        arg: None,
        valid: false,
        text: None,
    })
}

#[derive(Tabled)]
struct CurrencyRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Symbol")]
    symbol: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
}

/// Code, symbol and name of every supported currency in aligned columns.
pub fn currency_table() -> String {
    let rows = currency::all().iter().map(|c| CurrencyRow {
        code: c.code,
        symbol: c.symbol,
        name: c.name,
    });
    let mut table = Table::new(rows);
    table
        .with(Style::blank())
        .with(Modify::new(Columns::new(..)).with(Alignment::left()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_format() {
        assert_eq!(space_format(0.0), "0.00");
        assert_eq!(space_format(123.456), "123.46");
        assert_eq!(space_format(1234.5), "1 234.50");
        assert_eq!(space_format(1234567.891), "1 234 567.89");
        assert_eq!(space_format(-1234.5), "-1 234.50");
        assert_eq!(space_format(-0.001), "0.00");
    }

    #[test]
    fn test_alfred_error_shape() {
        let v: serde_json::Value = serde_json::from_str(&alfred_error("bad")).unwrap();
        assert_eq!(v["items"][0]["subtitle"], "bad");
        assert_eq!(v["items"][0]["valid"], false);
        assert!(v["items"][0].get("arg").is_none());
    }

    #[test]
    fn test_currency_table_header() {
        let table = currency_table();
        let mut lines = table.lines();
        let header: Vec<&str> = lines.next().unwrap().split_whitespace().collect();
        assert_eq!(header, vec!["Code", "Symbol", "Name"]);
        assert_eq!(lines.count(), currency::all().len());
        let usd = table.lines().find(|l| l.trim_start().starts_with("USD")).unwrap();
        assert!(usd.contains("United States Dollar"));
        assert!(usd.contains('$'));
    }
}
