#![allow(dead_code)]

use curconv::mach::Settings;
use curconv::rates::{RateError, RateResult, RateSource};
use std::cell::{Cell, RefCell};

/// Serves one fixed rate and counts how often it was asked.
pub struct FakeRates {
    rate: Option<f64>,
    calls: Cell<usize>,
    pairs: RefCell<Vec<String>>,
}

impl FakeRates {
    pub fn new(rate: f64) -> FakeRates {
        FakeRates {
            rate: Some(rate),
            calls: Cell::new(0),
            pairs: RefCell::new(vec![]),
        }
    }

    pub fn failing() -> FakeRates {
        FakeRates {
            rate: None,
            calls: Cell::new(0),
            pairs: RefCell::new(vec![]),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn pairs(&self) -> Vec<String> {
        self.pairs.borrow().clone()
    }
}

impl RateSource for FakeRates {
    fn fetch_rate(&self, pair_name: &str) -> RateResult<f64> {
        self.calls.set(self.calls.get() + 1);
        self.pairs.borrow_mut().push(pair_name.to_string());
        self.rate
            .ok_or_else(|| RateError::Api("Invalid API key".to_string()))
    }
}

pub fn settings() -> Settings {
    Settings {
        default_src: Some("USD".to_string()),
        default_tgt: Some("EUR".to_string()),
        decimal_separators: vec!['.'],
    }
}

pub fn settings_with(separators: &[char]) -> Settings {
    Settings {
        decimal_separators: separators.to_vec(),
        ..settings()
    }
}
