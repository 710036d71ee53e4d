// src/domain/sort.rs

use crate::domain::criteria::SortKey;
use crate::domain::record::Record;
use std::cmp::Ordering;

/// Returns a new ordering of `records`. Equal keys keep their input order.
pub fn sort<'a>(records: &[&'a Record], key: SortKey) -> Vec<&'a Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}

fn compare(a: &Record, b: &Record, key: SortKey) -> Ordering {
    match key {
        SortKey::ScoreDesc => b.score().total_cmp(&a.score()),
        SortKey::PriceAsc => a.price().total_cmp(&b.price()),
        SortKey::PriceDesc => b.price().total_cmp(&a.price()),
        SortKey::AreaDesc => b.area().total_cmp(&a.area()),
    }
}
