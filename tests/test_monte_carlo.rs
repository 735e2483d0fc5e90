// End-to-end Monte Carlo sanity checks with a seeded generator.
use percolate::percolation_stats::PercolationStats;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn estimate_matches_known_threshold_range() {
    let mut stats = PercolationStats::new(20, 100).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    stats.run(&mut rng).unwrap();

    let mean = stats.mean();
    assert!(
        mean > 0.55 && mean < 0.62,
        "mean {mean} outside the empirical threshold range"
    );
    assert!(stats.stddev() > 0.0);
    assert!(stats.confidence_lo() <= mean);
    assert!(mean <= stats.confidence_hi());
}

#[test]
fn confidence_interval_narrows_with_more_trials() {
    let mut few = PercolationStats::new(10, 20).unwrap();
    let mut many = PercolationStats::new(10, 200).unwrap();
    let mut rng = StdRng::seed_from_u64(1234);
    few.run(&mut rng).unwrap();
    many.run(&mut rng).unwrap();

    let few_width = few.confidence_hi() - few.confidence_lo();
    let many_width = many.confidence_hi() - many.confidence_lo();
    assert!(
        many_width < few_width,
        "expected {many_width} < {few_width} with 10x the trials"
    );
}

#[test]
fn thresholds_are_valid_fractions() {
    let mut stats = PercolationStats::new(6, 50).unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    stats.run(&mut rng).unwrap();

    // a 6x6 grid needs at least 6 open sites to percolate
    assert!(stats.mean() >= 6.0 / 36.0);
    assert!(stats.mean() <= 1.0);
}

#[test]
fn accessors_report_configuration() {
    let stats = PercolationStats::new(12, 34).unwrap();
    assert_eq!(stats.grid_size(), 12);
    assert_eq!(stats.trials(), 34);
}
