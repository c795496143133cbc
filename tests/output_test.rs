use curconv::mach::ParseResult;
use curconv::term::{render, text_line, Format};

fn result(src: f64, src_currency: &str, tgt: f64, tgt_currency: &str) -> ParseResult {
    ParseResult {
        src,
        src_currency: src_currency.to_string(),
        tgt: Some(tgt),
        tgt_currency: tgt_currency.to_string(),
    }
}

#[test]
fn test_text_with_symbols() {
    let r = result(1500.0, "USD", 1380.456, "EUR");
    assert_eq!(text_line(&r), "1 500.00$ is 1 380.46€");
    assert_eq!(render(&r, Format::Text), "1 500.00$ is 1 380.46€");
}

#[test]
fn test_text_without_symbol() {
    let r = result(10.0, "USD", 13.7, "CAD");
    assert_eq!(text_line(&r), "10.00$ is 13.70 CAD");
}

#[test]
fn test_num() {
    let r = result(1500.0, "USD", 1380.456, "EUR");
    assert_eq!(render(&r, Format::Num), "1380.46");
}

#[test]
fn test_alfred() {
    let r = result(2.0, "GBP", 2.5, "USD");
    let v: serde_json::Value = serde_json::from_str(&render(&r, Format::Alfred)).unwrap();
    let item = &v["items"][0];
    assert_eq!(item["title"], "2.00£ is 2.50$");
    assert_eq!(item["arg"], "2.50");
    assert_eq!(item["valid"], true);
    assert_eq!(item["text"]["copy"], "2.50");
    assert_eq!(item["text"]["largetype"], "2.00£ is 2.50$");
}
