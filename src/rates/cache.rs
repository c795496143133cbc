//! Exchange rate cache persisted as a single JSON file.

use super::error::RateResult;
use super::RateSource;
use crate::mach::ParseResult;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Age in seconds after which a cached rate is no longer used.
pub const REFRESH_INTERVAL_SECS: i64 = 60 * 60;

/// File name of the cache inside the temporary directory.
pub const CACHE_FILE_NAME: &str = "cur_conf_cache.json";

/// Default location of the cache file.
pub fn default_cache_path() -> PathBuf {
    std::env::temp_dir().join(CACHE_FILE_NAME)
}

/// One fetched rate and when it was fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateRecord {
    #[serde(rename = "date")]
    pub last_update: DateTime<Utc>,
    pub rate: f64,
}

impl ExchangeRateRecord {
    pub fn new(rate: f64) -> Self {
        Self {
            last_update: Utc::now(),
            rate,
        }
    }

    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.last_update) > Duration::seconds(REFRESH_INTERVAL_SECS)
    }
}

/// A missing record is stale.
pub fn is_stale(record: Option<&ExchangeRateRecord>) -> bool {
    record.map_or(true, |r| r.is_stale_at(Utc::now()))
}

/// Rates keyed by `SRC_TGT`. Records are only checked for staleness when
/// loaded; once in memory they are trusted for the rest of the run.
#[derive(Debug, Default)]
pub struct ExchangeRateCache {
    records: BTreeMap<String, ExchangeRateRecord>,
    path: Option<PathBuf>,
}

impl ExchangeRateCache {
    /// A cache that is never read from or written to disk.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads the cache file at `path`, dropping stale records. A missing or
    /// unreadable file gives an empty cache that will still be written to.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut records = Self::read(&path);
        let total = records.len();
        records.retain(|_, record| !is_stale(Some(record)));
        debug!(
            path = %path.display(),
            fresh = records.len(),
            stale = total - records.len(),
            "Loaded rate cache"
        );
        Self {
            records,
            path: Some(path),
        }
    }

    fn read(path: &Path) -> BTreeMap<String, ExchangeRateRecord> {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(error) => {
                debug!(%error, "Rate cache not readable");
                return BTreeMap::new();
            }
        };
        match serde_json::from_slice(&data) {
            Ok(records) => records,
            Err(error) => {
                debug!(%error, "Rate cache not parsable");
                BTreeMap::new()
            }
        }
    }

    /// Deletes the cache file, ignoring a file that is already gone.
    pub fn clear(path: &Path) {
        if let Err(error) = std::fs::remove_file(path) {
            debug!(%error, "Rate cache not removed");
        }
    }

    pub fn get(&self, pair_name: &str) -> Option<&ExchangeRateRecord> {
        self.records.get(pair_name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Converts `result.src` into the target currency, fetching and
    /// persisting the rate if the pair is not cached.
    pub fn convert(
        &mut self,
        source: &dyn RateSource,
        result: ParseResult,
    ) -> RateResult<ParseResult> {
        let pair_name = result.pair_name();
        let rate = match self.records.get(&pair_name) {
            Some(record) => {
                debug!(pair = %pair_name, rate = record.rate, "Cache hit");
                record.rate
            }
            None => {
                debug!(pair = %pair_name, "Cache miss");
                let rate = source.fetch_rate(&pair_name)?;
                self.records
                    .insert(pair_name, ExchangeRateRecord::new(rate));
                self.save();
                rate
            }
        };
        Ok(result.converted(rate))
    }

    /// Rewrites the whole cache file. Failures only cost a refetch next time.
    pub fn save(&self) {
        let path = match &self.path {
            Some(path) => path,
            None => return,
        };
        let data = match serde_json::to_vec(&self.records) {
            Ok(data) => data,
            Err(error) => {
                debug!(%error, "Rate cache not serializable");
                return;
            }
        };
        if let Err(error) = std::fs::write(path, data) {
            debug!(%error, path = %path.display(), "Rate cache not written");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staleness() {
        let now = Utc::now();
        let fresh = ExchangeRateRecord {
            last_update: now - Duration::minutes(59),
            rate: 1.0,
        };
        let stale = ExchangeRateRecord {
            last_update: now - Duration::minutes(61),
            rate: 1.0,
        };
        assert!(!fresh.is_stale_at(now));
        assert!(stale.is_stale_at(now));
        assert!(is_stale(None));
    }

    #[test]
    fn test_record_json_shape() {
        let record = ExchangeRateRecord {
            last_update: "2024-03-01T12:00:00Z".parse().unwrap(),
            rate: 0.5,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["rate"], 0.5);
        assert_eq!(json["date"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn test_empty_cache_has_no_path() {
        let cache = ExchangeRateCache::empty();
        assert!(cache.is_empty());
        cache.save();
    }
}
