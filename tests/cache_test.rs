mod common;
use chrono::{Duration, Utc};
use common::*;
use curconv::mach::evaluate;
use curconv::rates::{ExchangeRateCache, RateError};
use curconv::term::convert;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cache_file(dir: &TempDir) -> PathBuf {
    dir.path().join("rates.json")
}

fn write_record(path: &Path, pair: &str, age: Duration, rate: f64) {
    let date = (Utc::now() - age).to_rfc3339();
    let json = format!(r#"{{"{}":{{"date":"{}","rate":{}}}}}"#, pair, date, rate);
    std::fs::write(path, json).unwrap();
}

#[test]
fn test_miss_fetches_and_persists() {
    let dir = TempDir::new().unwrap();
    let path = cache_file(&dir);
    let rates = FakeRates::new(0.5);
    let mut cache = ExchangeRateCache::load(&path);
    assert!(cache.is_empty());

    let r = convert("10 usd", &settings(), &mut cache, &rates).unwrap();
    assert_eq!(r.tgt, Some(5.0));
    assert_eq!(rates.calls(), 1);
    assert_eq!(rates.pairs(), vec!["USD_EUR".to_string()]);
    assert!(path.exists());

    let reloaded = ExchangeRateCache::load(&path);
    assert_eq!(reloaded.get("USD_EUR").map(|r| r.rate), Some(0.5));
}

#[test]
fn test_fresh_record_is_not_fetched() {
    let dir = TempDir::new().unwrap();
    let path = cache_file(&dir);
    write_record(&path, "USD_EUR", Duration::minutes(30), 0.9);
    let rates = FakeRates::new(0.5);
    let mut cache = ExchangeRateCache::load(&path);

    let r = convert("100", &settings(), &mut cache, &rates).unwrap();
    assert_eq!(r.tgt, Some(90.0));
    assert_eq!(rates.calls(), 0);
}

#[test]
fn test_stale_record_is_refetched_once() {
    let dir = TempDir::new().unwrap();
    let path = cache_file(&dir);
    write_record(&path, "USD_EUR", Duration::hours(2), 0.9);
    let rates = FakeRates::new(0.5);
    let mut cache = ExchangeRateCache::load(&path);
    assert!(cache.get("USD_EUR").is_none());

    convert("1", &settings(), &mut cache, &rates).unwrap();
    convert("2", &settings(), &mut cache, &rates).unwrap();
    assert_eq!(rates.calls(), 1);

    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(written["USD_EUR"]["rate"], 0.5);
}

#[test]
fn test_rewrite_keeps_other_pairs() {
    let dir = TempDir::new().unwrap();
    let path = cache_file(&dir);
    write_record(&path, "GBP_EUR", Duration::minutes(5), 1.2);
    let rates = FakeRates::new(0.5);
    let mut cache = ExchangeRateCache::load(&path);
    convert("1", &settings(), &mut cache, &rates).unwrap();

    let reloaded = ExchangeRateCache::load(&path);
    assert_eq!(reloaded.len(), 2);
}

#[test]
fn test_corrupt_file_is_empty_cache() {
    let dir = TempDir::new().unwrap();
    let path = cache_file(&dir);
    std::fs::write(&path, "{not json").unwrap();
    let cache = ExchangeRateCache::load(&path);
    assert!(cache.is_empty());
}

#[test]
fn test_empty_cache_keeps_rates_in_memory() {
    let rates = FakeRates::new(2.0);
    let mut cache = ExchangeRateCache::empty();
    let r = convert("3", &settings(), &mut cache, &rates).unwrap();
    assert_eq!(r.tgt, Some(6.0));
    assert_eq!(cache.len(), 1);
    convert("4", &settings(), &mut cache, &rates).unwrap();
    assert_eq!(rates.calls(), 1);
}

#[test]
fn test_fetch_error_is_propagated() {
    let rates = FakeRates::failing();
    let mut cache = ExchangeRateCache::empty();
    let result = evaluate("1", &settings()).unwrap();
    let err = cache.convert(&rates, result).unwrap_err();
    assert!(matches!(err, RateError::Api(_)));
    assert!(cache.is_empty());

    let err = convert("1", &settings(), &mut cache, &rates).unwrap_err();
    assert_eq!(err.to_string(), "failed to get the rate: \"Invalid API key\"");
    assert!(err.is_user());
}

#[test]
fn test_clear_removes_file() {
    let dir = TempDir::new().unwrap();
    let path = cache_file(&dir);
    write_record(&path, "USD_EUR", Duration::minutes(1), 0.9);
    ExchangeRateCache::clear(&path);
    assert!(!path.exists());
    ExchangeRateCache::clear(&path);
}
