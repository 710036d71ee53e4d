use crate::domain::filter::apply;
use crate::domain::{BedroomFilter, DistrictFilter, FilterCriteria, Record};
use crate::tests::utils::{record, two_district_records, with_bedrooms};

fn bedroom_records() -> Vec<Record> {
    (1..=6)
        .map(|n| with_bedrooms(record("Miraflores", 1000.0 * n as f64, 7.0), n as f64))
        .collect()
}

#[test]
fn unbounded_criteria_return_input_unchanged() {
    let records = two_district_records();

    let out = apply(&records, &FilterCriteria::unbounded());

    let expected: Vec<&Record> = records.iter().collect();
    assert_eq!(out, expected);
}

#[test]
fn empty_input_gives_empty_output() {
    let records: Vec<Record> = Vec::new();
    assert!(apply(&records, &FilterCriteria::unbounded()).is_empty());
}

#[test]
fn output_is_subset_and_filtering_is_idempotent() {
    let records = two_district_records();
    let criteria = FilterCriteria {
        max_price: 4000.0,
        min_score: 7.0,
        ..FilterCriteria::unbounded()
    };

    let once = apply(&records, &criteria);
    let twice = apply(once.iter().copied(), &criteria);

    assert_eq!(once, twice);
    for r in &once {
        assert!(records.iter().any(|x| std::ptr::eq(x, *r)));
    }
    // prices 1000 (8.0), 3000 (9.0), 4000 (8.0) pass; 2000 scores 6.0, 5000 is too expensive
    let prices: Vec<f64> = once.iter().map(|r| r.price()).collect();
    assert_eq!(prices, vec![1000.0, 3000.0, 4000.0]);
}

#[test]
fn district_filter_is_exact_match() {
    let mut records = two_district_records();
    records.push(record("AB", 100.0, 9.0));

    let criteria = FilterCriteria {
        district: DistrictFilter::Only("A".to_string()),
        ..FilterCriteria::unbounded()
    };
    let out = apply(&records, &criteria);

    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|r| r.district == "A"));
}

#[test]
fn max_price_and_min_score_bounds_are_inclusive() {
    let records = vec![record("A", 5000.0, 7.5), record("A", 5000.01, 7.5), record("A", 10.0, 7.49)];
    let criteria = FilterCriteria {
        max_price: 5000.0,
        min_score: 7.5,
        ..FilterCriteria::unbounded()
    };

    let out = apply(&records, &criteria);

    assert_eq!(out, vec![&records[0]]);
}

#[test]
fn absent_price_counts_as_zero() {
    let mut cheap = record("A", 0.0, 8.0);
    cheap.price_clean = None;
    let records = vec![cheap];

    let out = apply(&records, &FilterCriteria::with_max_price(0.0));

    assert_eq!(out.len(), 1);
}

#[test]
fn exact_bedroom_filter_matches_only_that_count() {
    let records = bedroom_records();
    let criteria = FilterCriteria {
        bedrooms: BedroomFilter::Exactly(3),
        ..FilterCriteria::unbounded()
    };

    let out = apply(&records, &criteria);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].bedroom_clean, Some(3.0));
}

#[test]
fn five_bedroom_filter_means_five_or_more() {
    let records = bedroom_records();
    let criteria = FilterCriteria {
        bedrooms: BedroomFilter::FiveOrMore,
        ..FilterCriteria::unbounded()
    };

    let counts: Vec<f64> = apply(&records, &criteria)
        .iter()
        .map(|r| r.bedrooms())
        .collect();

    assert_eq!(counts, vec![5.0, 6.0]);
}

#[test]
fn missing_bedrooms_never_match_a_positive_filter() {
    let records = vec![record("A", 1000.0, 8.0)];
    let criteria = FilterCriteria {
        bedrooms: BedroomFilter::Exactly(1),
        ..FilterCriteria::unbounded()
    };

    assert!(apply(&records, &criteria).is_empty());
}

#[test]
fn bedroom_selector_values_parse() {
    assert_eq!(BedroomFilter::parse("0"), BedroomFilter::Any);
    assert_eq!(BedroomFilter::parse("2"), BedroomFilter::Exactly(2));
    assert_eq!(BedroomFilter::parse("5"), BedroomFilter::FiveOrMore);
    assert_eq!(BedroomFilter::parse("9"), BedroomFilter::FiveOrMore);
    assert_eq!(BedroomFilter::parse("many"), BedroomFilter::Any);
    assert_eq!(BedroomFilter::parse("-1"), BedroomFilter::Any);
}
