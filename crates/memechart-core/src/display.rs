use tabled::settings::{object::Columns, Modify, Style, Width};
use tabled::{Table, Tabled};

use crate::graph::PriceChart;
use crate::{PriceHistorySet, PricePoint, Timeframe};

#[derive(Tabled)]
pub struct HistoryTableRow {
    #[tabled(rename = "Timeframe")]
    pub timeframe: String,
    #[tabled(rename = "Ticks", display_with = "display_right_5")]
    pub ticks: String,
    #[tabled(rename = "From")]
    pub from: String,
    #[tabled(rename = "To")]
    pub to: String,
    #[tabled(rename = "Open", display_with = "display_right_10")]
    pub open: String,
    #[tabled(rename = "Close", display_with = "display_right_10")]
    pub close: String,
    #[tabled(rename = "Low", display_with = "display_right_10")]
    pub low: String,
    #[tabled(rename = "High", display_with = "display_right_10")]
    pub high: String,
    #[tabled(rename = "Change", display_with = "display_right_10")]
    pub change: String,
    #[tabled(rename = "History")]
    pub history: String,
}

fn display_right_5(s: &str) -> String {
    format!("{:>5}", s)
}

fn display_right_10(s: &str) -> String {
    format!("{:>10}", s)
}

fn format_price(price: Option<f64>) -> String {
    price
        .map(|p| format!("{:.6}", p))
        .unwrap_or_else(|| "N/A".to_string())
}

impl HistoryTableRow {
    pub fn from_series(timeframe: Timeframe, points: &[PricePoint], graph_height: u8) -> Self {
        let chart = PriceChart::from_slice(points);
        let history = chart
            .to_ascii_graph(12, graph_height as usize)
            .replace('\n', " ");

        let date = |p: Option<&PricePoint>| {
            p.map(|p| p.date.to_string())
                .unwrap_or_else(|| "N/A".to_string())
        };

        Self {
            timeframe: timeframe.to_string(),
            ticks: points.len().to_string(),
            from: date(points.first()),
            to: date(points.last()),
            open: format_price(chart.start_price()),
            close: format_price(chart.current_price()),
            low: format_price(chart.min_price()),
            high: format_price(chart.max_price()),
            change: chart
                .percent_change()
                .map(|c| format!("{:+.2}%", c))
                .unwrap_or_else(|| "N/A".to_string()),
            history,
        }
    }
}

pub fn create_history_table(set: &PriceHistorySet, graph_height: u8) -> String {
    let rows: Vec<HistoryTableRow> = set
        .iter()
        .map(|(timeframe, points)| HistoryTableRow::from_series(timeframe, points, graph_height))
        .collect();

    let mut table = Table::new(&rows);

    table
        .with(Style::modern())
        .with(Modify::new(Columns::single(0)).with(Width::truncate(9)))
        .with(Modify::new(Columns::single(9)).with(Width::wrap(40)));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_price_history_set, FixedClock, TimeframeConfig};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_row_from_series() {
        let end = NaiveDate::from_ymd_opt(2025, 3, 25).unwrap();
        let points = vec![
            PricePoint::new(end.pred_opt().unwrap(), 0.002),
            PricePoint::new(end, 0.003),
        ];
        let row = HistoryTableRow::from_series(Timeframe::Week, &points, 1);

        assert_eq!(row.timeframe, "7d");
        assert_eq!(row.ticks, "2");
        assert_eq!(row.from, "2025-03-24");
        assert_eq!(row.to, "2025-03-25");
        assert_eq!(row.open, "0.002000");
        assert_eq!(row.close, "0.003000");
        assert_eq!(row.change, "+50.00%");
    }

    #[test]
    fn test_empty_series_row() {
        let row = HistoryTableRow::from_series(Timeframe::Day, &[], 1);
        assert_eq!(row.from, "N/A");
        assert_eq!(row.change, "N/A");
        assert_eq!(row.history, "No hist");
    }

    #[test]
    fn test_table_lists_every_timeframe() {
        let mut rng = StdRng::seed_from_u64(12);
        let set = build_price_history_set(
            &mut rng,
            FixedClock::reference_date(),
            &TimeframeConfig::reference_set(),
        )
        .unwrap();

        let table = create_history_table(&set, 1);
        for timeframe in Timeframe::ALL {
            assert!(table.contains(&format!("│ {}", timeframe.label())));
        }
        assert!(table.contains("0.004200"));
    }
}
