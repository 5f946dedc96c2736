use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

mod error;
pub mod config;
pub mod display;
pub mod export;
pub mod generator;
pub mod graph;
pub mod history;

pub use config::{HistoryConfig, TimeframeEntry};
pub use display::{create_history_table, HistoryTableRow};
pub use error::{MemechartError, Result};
pub use export::{export_csv, export_json, write_csv, write_json};
pub use generator::{generate_dates, generate_prices, generate_random_walk};
pub use graph::PriceChart;
pub use history::{
    build_price_history_set, Clock, FixedClock, PriceHistorySet, SystemClock, TimeframeConfig,
};

/// A single sample of a generated price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

/// Chart windows offered on a token page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl Timeframe {
    pub const ALL: [Timeframe; 5] = [
        Timeframe::Day,
        Timeframe::Week,
        Timeframe::Month,
        Timeframe::Quarter,
        Timeframe::Year,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Day => "24h",
            Timeframe::Week => "7d",
            Timeframe::Month => "30d",
            Timeframe::Quarter => "90d",
            Timeframe::Year => "1y",
        }
    }

    /// Number of samples drawn for this window.
    ///
    /// The 24h window is sampled as 24 daily ticks, like every other window.
    pub fn tick_count(&self) -> usize {
        match self {
            Timeframe::Day => 24,
            Timeframe::Week => 7,
            Timeframe::Month => 30,
            Timeframe::Quarter => 90,
            Timeframe::Year => 365,
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Timeframe {
    type Err = MemechartError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "24h" | "1d" => Ok(Timeframe::Day),
            "7d" | "1w" => Ok(Timeframe::Week),
            "30d" | "1m" => Ok(Timeframe::Month),
            "90d" | "3m" => Ok(Timeframe::Quarter),
            "1y" | "365d" => Ok(Timeframe::Year),
            _ => Err(MemechartError::InvalidTimeframe(format!(
                "{}. Valid options are: 24h, 7d, 30d, 90d, 1y",
                s
            ))),
        }
    }
}
