/*!
## Exchange Rates

Conversion rates for resolved currency pairs, served from a file cache that
is refreshed from the currconv service on a miss.

*/

mod cache;
mod currconv;
mod error;

pub use cache::{default_cache_path, is_stale, ExchangeRateCache, ExchangeRateRecord};
pub use cache::{CACHE_FILE_NAME, REFRESH_INTERVAL_SECS};
pub use currconv::{read_rate, CurrConv, CURRCONV_ENDPOINT};
pub use error::{RateError, RateResult};

/// Anything that can quote the rate for a `SRC_TGT` pair.
pub trait RateSource {
    fn fetch_rate(&self, pair_name: &str) -> RateResult<f64>;
}
