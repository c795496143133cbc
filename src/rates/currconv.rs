//! Client for the currconv quote endpoint.

use super::error::{RateError, RateResult};
use super::RateSource;
use serde_json::{Map, Value};
use tracing::debug;

pub const CURRCONV_ENDPOINT: &str = "https://free.currconv.com/api/v7/convert";

/// Fetches single pair quotes with `compact=ultra` responses, which look
/// like `{"USD_EUR": 0.92}`.
pub struct CurrConv {
    api_key: String,
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl CurrConv {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, CURRCONV_ENDPOINT)
    }

    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl RateSource for CurrConv {
    fn fetch_rate(&self, pair_name: &str) -> RateResult<f64> {
        debug!(pair = pair_name, endpoint = %self.endpoint, "Fetching rate");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("compact", "ultra"),
                ("q", pair_name),
            ])
            .send()
            .map_err(RateError::Transport)?;
        let status = response.status().as_u16();
        let body: Map<String, Value> = match response.json() {
            Ok(body) => body,
            Err(_) if status != 200 => Map::new(),
            Err(_) => return Err(RateError::Malformed),
        };
        read_rate(status, &body, pair_name)
    }
}

/// Interprets a decoded response body.
pub fn read_rate(status: u16, body: &Map<String, Value>, pair_name: &str) -> RateResult<f64> {
    if status != 200 {
        return match body.get("error").and_then(Value::as_str) {
            Some(text) => Err(RateError::Api(text.to_string())),
            None => Err(RateError::Status(status)),
        };
    }
    body.get(pair_name)
        .and_then(Value::as_f64)
        .ok_or(RateError::Malformed)
}
