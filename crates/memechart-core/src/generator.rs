//! Trend-plus-noise price paths for the token chart.
//!
//! Every function takes its random source as a parameter. Pass a seeded
//! `StdRng` for reproducible output, or `rand::thread_rng()` for variety.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use tracing::debug;

/// Perturbation magnitude for the shortest windows.
pub const BASE_VOLATILITY: f64 = 0.1;
/// Upper bound on how much of `BASE_VOLATILITY` a long window gives up.
pub const MAX_VOLATILITY_DAMPING: f64 = 0.9;
/// Tick count at which volatility damping saturates.
pub const DAMPING_HORIZON_TICKS: f64 = 365.0;
/// Centre of the uniform draw; below 0.5 skews the noise upward.
pub const PERTURBATION_CENTER: f64 = 0.45;
/// Prices never drop below this fraction of the start price.
pub const PRICE_FLOOR_RATIO: f64 = 0.7;

pub const WALK_POINTS: usize = 50;
pub const WALK_BASE_PRICE: f64 = 0.002;
pub const WALK_BASE_SPREAD: f64 = 0.001;
pub const WALK_DRIFT_CENTER: f64 = 0.3;
pub const WALK_STEP_SCALE: f64 = 0.0005;
pub const WALK_MIN_PRICE: f64 = 0.0005;

/// `tick_count` consecutive days ending at `reference_date`, oldest first.
pub fn generate_dates(reference_date: NaiveDate, tick_count: usize) -> Vec<NaiveDate> {
    (0..tick_count)
        .rev()
        .map(|offset| reference_date - Duration::days(offset as i64))
        .collect()
}

/// Volatility scale for a series of `tick_count` samples.
pub fn volatility(tick_count: usize) -> f64 {
    let damping = (tick_count as f64 / DAMPING_HORIZON_TICKS).min(MAX_VOLATILITY_DAMPING);
    BASE_VOLATILITY * (1.0 - damping)
}

/// Lowest price the generator will emit for a series starting at `start_price`.
pub fn price_floor(start_price: f64) -> f64 {
    start_price * PRICE_FLOOR_RATIO
}

/// Interpolates from `start_price` to `end_price` with multiplicative noise.
///
/// The last element is always exactly `end_price`. Every other element is at
/// least `price_floor(start_price)`. A `tick_count` of zero yields an empty
/// series.
pub fn generate_prices<R: Rng + ?Sized>(
    rng: &mut R,
    tick_count: usize,
    start_price: f64,
    end_price: f64,
) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }

    let range = end_price - start_price;
    let volatility = volatility(tick_count);
    let floor = price_floor(start_price);
    let last_index = tick_count - 1;

    let mut prices: Vec<f64> = (0..tick_count)
        .map(|i| {
            let trend_fraction = if last_index == 0 {
                0.0
            } else {
                i as f64 / last_index as f64
            };
            let trend_price = start_price + range * trend_fraction;
            let perturbation = (rng.gen::<f64>() - PERTURBATION_CENTER) * volatility;
            (trend_price * (1.0 + perturbation)).max(floor)
        })
        .collect();

    prices[last_index] = end_price;

    debug!(
        tick_count,
        start_price, end_price, volatility, "Generated synthetic price series"
    );
    prices
}

/// Free-running upward-drifting walk, used when a chart has no history to show.
pub fn generate_random_walk<R: Rng + ?Sized>(rng: &mut R, points: usize) -> Vec<f64> {
    let mut price = WALK_BASE_PRICE + rng.gen::<f64>() * WALK_BASE_SPREAD;
    let mut walk = Vec::with_capacity(points);

    for _ in 0..points {
        price += (rng.gen::<f64>() - WALK_DRIFT_CENTER) * WALK_STEP_SCALE;
        price = price.max(WALK_MIN_PRICE);
        walk.push(price);
    }

    walk
}
