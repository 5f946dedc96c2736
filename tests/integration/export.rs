use memechart_core::{
    build_price_history_set, export_csv, export_json, FixedClock, PriceHistorySet, Timeframe,
    TimeframeConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

fn reference_history(seed: u64) -> PriceHistorySet {
    build_price_history_set(
        &mut StdRng::seed_from_u64(seed),
        FixedClock::reference_date(),
        &TimeframeConfig::reference_set(),
    )
    .unwrap()
}

#[test]
fn test_csv_export_has_a_row_per_point() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("history.csv");
    let set = reference_history(1);

    export_csv(&set, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["timeframe", "date", "price"]);

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 24 + 7 + 30 + 90 + 365);

    let last_week = records.iter().rev().find(|r| &r[0] == "7d").unwrap();
    assert_eq!(&last_week[1], "2025-03-25");
    assert_eq!(last_week[2].parse::<f64>().unwrap(), 0.0042);
}

#[test]
fn test_json_export_reloads() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("history.json");
    let set = reference_history(2);

    export_json(&set, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let reloaded: PriceHistorySet = serde_json::from_str(&contents).unwrap();
    assert_eq!(reloaded.timeframes(), Timeframe::ALL.to_vec());
    assert_eq!(reloaded.get(Timeframe::Quarter).unwrap().len(), 90);
    assert_eq!(reloaded.get(Timeframe::Day).unwrap().last().unwrap().price, 0.0042);
}
