use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use crate::generator::{generate_dates, generate_prices, price_floor};
use crate::{MemechartError, PricePoint, Result, Timeframe};

/// Token price every reference timeframe lands on.
pub const REFERENCE_END_PRICE: f64 = 0.00420;

/// Source of the date a generated history ends on.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// A clock pinned to one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 25).unwrap_or_default()
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self(Self::reference_date())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The current UTC date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Generation parameters for a single timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeframeConfig {
    pub timeframe: Timeframe,
    pub tick_count: usize,
    pub start_price: f64,
    pub end_price: f64,
}

impl TimeframeConfig {
    /// Validates the parameters so that every series invariant can hold.
    pub fn new(
        timeframe: Timeframe,
        tick_count: usize,
        start_price: f64,
        end_price: f64,
    ) -> Result<Self> {
        if tick_count == 0 {
            return Err(MemechartError::InvalidConfig(format!(
                "{}: tick count must be positive",
                timeframe
            )));
        }
        for (name, price) in [("start price", start_price), ("end price", end_price)] {
            if !price.is_finite() || price <= 0.0 {
                return Err(MemechartError::InvalidConfig(format!(
                    "{}: {} must be a positive number, got {}",
                    timeframe, name, price
                )));
            }
        }
        if end_price < price_floor(start_price) {
            return Err(MemechartError::InvalidConfig(format!(
                "{}: end price {} is below the floor of {} for start price {}",
                timeframe,
                end_price,
                price_floor(start_price),
                start_price
            )));
        }

        Ok(Self {
            timeframe,
            tick_count,
            start_price,
            end_price,
        })
    }

    /// The hardcoded timeframes of the token detail page.
    pub fn reference_set() -> Vec<TimeframeConfig> {
        [
            (Timeframe::Day, 0.00375),
            (Timeframe::Week, 0.00231),
            (Timeframe::Month, 0.00190),
            (Timeframe::Quarter, 0.00110),
            (Timeframe::Year, 0.00050),
        ]
        .into_iter()
        .map(|(timeframe, start_price)| TimeframeConfig {
            timeframe,
            tick_count: timeframe.tick_count(),
            start_price,
            end_price: REFERENCE_END_PRICE,
        })
        .collect()
    }
}

/// Generated price series keyed by timeframe. Never mutated once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceHistorySet {
    series: BTreeMap<Timeframe, Vec<PricePoint>>,
}

impl PriceHistorySet {
    pub fn get(&self, timeframe: Timeframe) -> Option<&[PricePoint]> {
        self.series.get(&timeframe).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Timeframe, &[PricePoint])> {
        self.series.iter().map(|(t, points)| (*t, points.as_slice()))
    }

    pub fn timeframes(&self) -> Vec<Timeframe> {
        self.series.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Generates one series per config, all ending on `reference_date`.
pub fn build_price_history_set<R: Rng + ?Sized>(
    rng: &mut R,
    reference_date: NaiveDate,
    configs: &[TimeframeConfig],
) -> Result<PriceHistorySet> {
    let mut series = BTreeMap::new();

    for config in configs {
        let dates = generate_dates(reference_date, config.tick_count);
        let prices = generate_prices(rng, config.tick_count, config.start_price, config.end_price);
        let points: Vec<PricePoint> = dates
            .into_iter()
            .zip(prices)
            .map(|(date, price)| PricePoint::new(date, price))
            .collect();

        if series.insert(config.timeframe, points).is_some() {
            return Err(MemechartError::InvalidConfig(format!(
                "timeframe {} configured more than once",
                config.timeframe
            )));
        }
    }

    info!(
        "Generated price history for {} timeframes ending {}",
        series.len(),
        reference_date
    );
    Ok(PriceHistorySet { series })
}
