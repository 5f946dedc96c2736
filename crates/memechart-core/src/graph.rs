use colored::Colorize;
use rasciigraph::{plot, Config};
use serde::{Deserialize, Serialize};

use crate::PricePoint;

/// Graph values are plotted in micro-dollars so sub-cent prices keep their digits.
const PLOT_SCALE: f64 = 1_000_000.0;
/// Number of evenly spaced date labels between the first and last tick.
const DATE_LABEL_DIVISIONS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceChart {
    pub points: Vec<PricePoint>,
}

impl PriceChart {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn from_slice(points: &[PricePoint]) -> Self {
        Self::new(points.to_vec())
    }

    pub fn start_price(&self) -> Option<f64> {
        self.points.first().map(|p| p.price)
    }

    pub fn current_price(&self) -> Option<f64> {
        self.points.last().map(|p| p.price)
    }

    pub fn min_price(&self) -> Option<f64> {
        self.points.iter().map(|p| p.price).reduce(f64::min)
    }

    pub fn max_price(&self) -> Option<f64> {
        self.points.iter().map(|p| p.price).reduce(f64::max)
    }

    /// Change from the first to the last point, in percent.
    pub fn percent_change(&self) -> Option<f64> {
        match (self.start_price(), self.current_price()) {
            (Some(start), Some(current)) if start != 0.0 => {
                Some((current - start) / start * 100.0)
            }
            _ => None,
        }
    }

    /// Token name, latest price and change, as shown above the plot.
    pub fn header(&self, token_name: &str) -> String {
        let price = self
            .current_price()
            .map(|p| format!("${:.6}", p))
            .unwrap_or_else(|| "N/A".to_string());
        let change = self
            .percent_change()
            .map(|c| format!("{:+.2}%", c))
            .unwrap_or_else(|| "N/A".to_string());

        format!("{}  {}  {}", token_name.bold(), price.green().bold(), change.green())
    }

    pub fn to_ascii_graph(&self, width: usize, height: usize) -> String {
        if self.points.is_empty() {
            return "No hist".to_string();
        }

        let prices: Vec<f64> = self.points.iter().map(|p| p.price * PLOT_SCALE).collect();
        render(prices, width, height)
    }

    /// `(index, "M/D")` pairs for the x axis: first, last and every
    /// `ceil(last / 3)`-th tick.
    pub fn date_labels(&self) -> Vec<(usize, String)> {
        let Some(last) = self.points.len().checked_sub(1) else {
            return Vec::new();
        };
        let step = last.div_ceil(DATE_LABEL_DIVISIONS).max(1);

        self.points
            .iter()
            .enumerate()
            .filter(|(i, _)| *i == 0 || *i == last || i % step == 0)
            .map(|(i, p)| (i, p.date.format("%-m/%-d").to_string()))
            .collect()
    }

    /// Date labels joined into a single axis line of roughly `width` columns.
    pub fn date_axis(&self, width: usize) -> String {
        let labels = self.date_labels();
        let last = self.points.len().saturating_sub(1).max(1);
        let mut axis = String::new();

        for (i, label) in labels {
            let column = i * width.saturating_sub(1) / last;
            let column = column.min(width.saturating_sub(label.len()));
            if axis.len() < column {
                axis.push_str(&" ".repeat(column - axis.len()));
            } else if !axis.is_empty() {
                axis.push(' ');
            }
            axis.push_str(&label);
        }

        axis
    }
}

/// Plots a bare price series, such as the fallback random walk.
pub fn plot_prices(prices: &[f64], width: usize, height: usize) -> String {
    if prices.is_empty() {
        return "No hist".to_string();
    }
    render(prices.iter().map(|p| p * PLOT_SCALE).collect(), width, height)
}

fn render(series: Vec<f64>, width: usize, height: usize) -> String {
    let config = Config::default()
        .with_width(width as u32)
        .with_height(height as u32);
    let graph = plot(series, config);

    graph
        .lines()
        .map(|line| format!("{:width$}", line, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
