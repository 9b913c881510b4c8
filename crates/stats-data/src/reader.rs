//! Loading of the JSON data export.
//!
//! The export is read and parsed once; every metric is then summed from the
//! in-memory `Usage` object.

use std::path::Path;

use serde_json::{Map, Value};
use stats_core::models::{Metric, Totals};
use stats_core::{Result, StatsError};
use tracing::debug;

/// Top-level key holding the per-metric, per-date counters.
pub const USAGE_KEY: &str = "Usage";

/// The `Usage` section of a parsed export.
#[derive(Debug, Clone)]
pub struct UsageExport {
    usage: Map<String, Value>,
}

impl UsageExport {
    /// Read and parse the export at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| StatsError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", content.len(), path.display());
        Self::from_json_str(&content)
    }

    /// Parse an export from its JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(content)?;
        Self::from_value(document)
    }

    /// Wrap an already-parsed document, checking that it has a `Usage` object.
    pub fn from_value(document: Value) -> Result<Self> {
        let Value::Object(mut root) = document else {
            return Err(StatsError::Schema(
                "export root is not a JSON object".to_string(),
            ));
        };
        match root.remove(USAGE_KEY) {
            Some(Value::Object(usage)) => Ok(Self { usage }),
            Some(_) => Err(StatsError::Schema(format!(
                "`{USAGE_KEY}` is not an object"
            ))),
            None => Err(StatsError::Schema(format!("missing key `{USAGE_KEY}`"))),
        }
    }

    /// Sum every per-date value recorded for `metric`.
    pub fn metric_total(&self, metric: Metric) -> Result<u64> {
        let counts = match self.usage.get(metric.key()) {
            Some(Value::Object(counts)) => counts,
            Some(_) => {
                return Err(StatsError::Schema(format!(
                    "`{USAGE_KEY}.{metric}` is not an object"
                )))
            }
            None => {
                return Err(StatsError::Schema(format!(
                    "missing key `{USAGE_KEY}.{metric}`"
                )))
            }
        };

        let mut total: u64 = 0;
        for (date, value) in counts {
            let count = value.as_u64().ok_or_else(|| {
                StatsError::Schema(format!(
                    "`{USAGE_KEY}.{metric}.{date}` is not a non-negative integer: {value}"
                ))
            })?;
            total = total.checked_add(count).ok_or_else(|| {
                StatsError::Schema(format!("`{USAGE_KEY}.{metric}` total overflows"))
            })?;
        }

        debug!("{} = {} over {} days", metric, total, counts.len());
        Ok(total)
    }

    /// Extract the four totals the report needs.
    ///
    /// Fails if likes, super-likes and passes together overflow `u64`.
    pub fn totals(&self) -> Result<Totals> {
        let totals = Totals {
            likes: self.metric_total(Metric::SwipesLikes)?,
            super_likes: self.metric_total(Metric::Superlikes)?,
            left_swipes: self.metric_total(Metric::SwipesPasses)?,
            matches: self.metric_total(Metric::Matches)?,
        };
        totals.total_swipes()?;
        Ok(totals)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
