use crate::domain::sort::sort;
use crate::domain::{Record, SortKey};
use crate::tests::utils::{record, with_area};

fn refs(records: &[Record]) -> Vec<&Record> {
    records.iter().collect()
}

fn titles(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.title.clone()).collect()
}

fn titled(title: &str, price: f64, score: f64) -> Record {
    Record {
        title: title.to_string(),
        ..record("A", price, score)
    }
}

#[test]
fn score_desc_is_default_and_stable() {
    let records = vec![
        titled("a", 100.0, 7.0),
        titled("b", 200.0, 9.0),
        titled("c", 300.0, 7.0),
        titled("d", 400.0, 9.0),
    ];

    let sorted = sort(&refs(&records), SortKey::default());

    assert_eq!(titles(&sorted), vec!["b", "d", "a", "c"]);
}

#[test]
fn sorting_sorted_input_is_a_no_op() {
    let records = vec![
        titled("a", 100.0, 9.0),
        titled("b", 200.0, 8.0),
        titled("c", 300.0, 8.0),
    ];
    let input = refs(&records);

    let once = sort(&input, SortKey::ScoreDesc);

    assert_eq!(once, input);
    assert_eq!(sort(&once, SortKey::ScoreDesc), once);
}

#[test]
fn price_keys_sort_both_ways() {
    let records = vec![
        titled("mid", 200.0, 5.0),
        titled("low", 100.0, 5.0),
        titled("high", 300.0, 5.0),
    ];
    let input = refs(&records);

    assert_eq!(titles(&sort(&input, SortKey::PriceAsc)), vec!["low", "mid", "high"]);
    assert_eq!(titles(&sort(&input, SortKey::PriceDesc)), vec!["high", "mid", "low"]);
}

#[test]
fn area_desc_treats_missing_area_as_zero() {
    let records = vec![
        titled("none", 100.0, 5.0),
        with_area(titled("big", 100.0, 5.0), 120.0),
        with_area(titled("small", 100.0, 5.0), 45.0),
    ];

    let sorted = sort(&refs(&records), SortKey::AreaDesc);

    assert_eq!(titles(&sorted), vec!["big", "small", "none"]);
}

#[test]
fn input_is_left_untouched() {
    let records = vec![titled("a", 100.0, 1.0), titled("b", 200.0, 2.0)];
    let input = refs(&records);

    let _ = sort(&input, SortKey::ScoreDesc);

    assert_eq!(titles(&input), vec!["a", "b"]);
}

#[test]
fn unknown_sort_key_falls_back_to_score() {
    assert_eq!(SortKey::parse("bogus"), SortKey::ScoreDesc);
    assert_eq!(SortKey::parse("price_clean_asc"), SortKey::PriceAsc);
    for key in SortKey::ALL {
        assert_eq!(SortKey::parse(key.as_str()), key);
    }
}
