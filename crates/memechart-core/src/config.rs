use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::history::{TimeframeConfig, REFERENCE_END_PRICE};
use crate::{MemechartError, Result, Timeframe};

/// A timeframe as written in a config file. `tick_count` falls back to the
/// timeframe's own tick count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeEntry {
    pub timeframe: Timeframe,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_count: Option<usize>,
    pub start_price: f64,
    pub end_price: f64,
}

/// History generation settings, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
    pub timeframes: Vec<TimeframeEntry>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            reference_date: None,
            timeframes: TimeframeConfig::reference_set()
                .into_iter()
                .map(|c| TimeframeEntry {
                    timeframe: c.timeframe,
                    tick_count: None,
                    start_price: c.start_price,
                    end_price: REFERENCE_END_PRICE,
                })
                .collect(),
        }
    }
}

impl HistoryConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading history config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: HistoryConfig = serde_json::from_str(json)?;
        if config.timeframes.is_empty() {
            return Err(MemechartError::InvalidConfig(
                "at least one timeframe is required".to_string(),
            ));
        }
        Ok(config)
    }

    /// Validated per-timeframe parameters, in file order.
    pub fn timeframe_configs(&self) -> Result<Vec<TimeframeConfig>> {
        let mut seen = HashSet::new();
        self.timeframes
            .iter()
            .map(|entry| {
                if !seen.insert(entry.timeframe) {
                    return Err(MemechartError::InvalidConfig(format!(
                        "timeframe {} configured more than once",
                        entry.timeframe
                    )));
                }
                TimeframeConfig::new(
                    entry.timeframe,
                    entry.tick_count.unwrap_or_else(|| entry.timeframe.tick_count()),
                    entry.start_price,
                    entry.end_price,
                )
            })
            .collect()
    }
}
