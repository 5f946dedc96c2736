use chrono::{Duration, NaiveDate};
use memechart_core::{
    build_price_history_set, generate_dates, generate_prices, Clock, FixedClock, HistoryConfig,
    PriceChart, Timeframe, TimeframeConfig,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_week_history_end_to_end() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = TimeframeConfig::new(Timeframe::Week, 7, 0.00231, 0.00420).unwrap();
    let set = build_price_history_set(&mut rng, FixedClock::reference_date(), &[config]).unwrap();

    let week = set.get(Timeframe::Week).unwrap();
    assert_eq!(week.len(), 7);
    assert_eq!(week.last().unwrap().price, 0.00420);
    assert!(week.windows(2).all(|pair| pair[0].date < pair[1].date));
}

#[test]
fn test_invariants_hold_for_random_parameters() {
    let mut params = StdRng::seed_from_u64(1234);
    let mut rng = StdRng::seed_from_u64(5678);
    let reference = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

    for _ in 0..200 {
        let tick_count = params.gen_range(1..=400);
        let start: f64 = params.gen_range(0.0001..10.0);
        let end: f64 = start * params.gen_range(0.7..5.0);

        let dates = generate_dates(reference, tick_count);
        let prices = generate_prices(&mut rng, tick_count, start, end);

        assert_eq!(dates.len(), tick_count);
        assert_eq!(prices.len(), tick_count);
        assert_eq!(*dates.last().unwrap(), reference);
        assert!(dates.windows(2).all(|pair| pair[1] - pair[0] == Duration::days(1)));
        assert_eq!(prices[tick_count - 1], end);
        assert!(prices.iter().all(|&p| p >= start * 0.7));
    }
}

#[test]
fn test_single_tick_lands_on_end_price() {
    let mut rng = rand::thread_rng();
    assert_eq!(generate_prices(&mut rng, 1, 5.0, 9.0), vec![9.0]);
}

#[test]
fn test_default_config_drives_reference_history() {
    let config = HistoryConfig::default();
    let configs = config.timeframe_configs().unwrap();
    let set = build_price_history_set(
        &mut StdRng::seed_from_u64(99),
        FixedClock::default().today(),
        &configs,
    )
    .unwrap();

    let year = PriceChart::from_slice(set.get(Timeframe::Year).unwrap());
    assert_eq!(year.points.len(), 365);
    assert_eq!(year.current_price(), Some(0.0042));
    assert!(year.percent_change().unwrap() > 0.0);
    assert_eq!(
        year.points[0].date,
        NaiveDate::from_ymd_opt(2024, 3, 26).unwrap()
    );
}
