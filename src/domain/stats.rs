// src/domain/stats.rs

use crate::domain::record::Record;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

pub const TOP_DISTRICTS_LIMIT: usize = 5;
pub const TOP_DISTRICTS_MIN_COUNT: usize = 3;
pub const PRICE_STEP: f64 = 5000.0;

/// Dataset-wide counters shown above the listing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    pub total: usize,
    pub district_count: usize,
    pub avg_price: f64,
    pub avg_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictStat {
    pub district: String,
    pub avg_score: f64,
    pub avg_price: f64,
    pub count: usize,
}

/// Averages divide by the full record count; absent values count as zero.
pub fn summarize(records: &[Record]) -> Summary {
    let total = records.len();
    if total == 0 {
        return Summary::default();
    }

    let district_count = records
        .iter()
        .map(|r| r.district.as_str())
        .filter(|d| !d.is_empty())
        .collect::<HashSet<_>>()
        .len();

    let price_sum: f64 = records.iter().map(Record::price).sum();
    let score_sum: f64 = records.iter().map(Record::score).sum();

    Summary {
        total,
        district_count,
        avg_price: price_sum / total as f64,
        avg_score: score_sum / total as f64,
    }
}

/// Districts ranked by average final score.
///
/// Groups with fewer than `min_count` records are left out. Ties keep the
/// order in which the districts first appear in `records`.
pub fn top_districts(records: &[Record], limit: usize, min_count: usize) -> Vec<DistrictStat> {
    struct Acc<'a> {
        district: &'a str,
        score_sum: f64,
        price_sum: f64,
        count: usize,
    }

    let mut groups: Vec<Acc> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let district = record.district.as_str();
        if district.is_empty() {
            continue;
        }

        let slot = *index.entry(district).or_insert_with(|| {
            groups.push(Acc {
                district,
                score_sum: 0.0,
                price_sum: 0.0,
                count: 0,
            });
            groups.len() - 1
        });

        let acc = &mut groups[slot];
        acc.score_sum += record.score();
        acc.price_sum += record.price();
        acc.count += 1;
    }

    let mut stats: Vec<DistrictStat> = groups
        .into_iter()
        .filter(|g| g.count >= min_count)
        .map(|g| DistrictStat {
            district: g.district.to_string(),
            avg_score: g.score_sum / g.count as f64,
            avg_price: g.price_sum / g.count as f64,
            count: g.count,
        })
        .collect();

    stats.sort_by(|a, b| b.avg_score.total_cmp(&a.avg_score));
    stats.truncate(limit);
    stats
}

/// Distinct non-empty districts in Spanish alphabetical order.
pub fn district_options(records: &[Record]) -> Vec<String> {
    let mut districts: Vec<String> = records
        .iter()
        .map(|r| r.district.trim())
        .filter(|d| !d.is_empty())
        .collect::<HashSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    districts.sort_by(|a, b| collation_key(a).cmp(&collation_key(b)).then_with(|| a.cmp(b)));
    districts
}

/// Highest price in the dataset, rounded up to the next multiple of 5000.
pub fn price_ceiling(records: &[Record]) -> f64 {
    let max = records.iter().map(Record::price).fold(0.0_f64, f64::max);
    (max / PRICE_STEP).ceil() * PRICE_STEP
}

// Accent-insensitive, case-insensitive ordering key. "ñ" sorts after "n".
fn collation_key(value: &str) -> Vec<(char, u8)> {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' => ('a', 0),
            'é' | 'è' | 'ë' => ('e', 0),
            'í' | 'ì' | 'ï' => ('i', 0),
            'ó' | 'ò' | 'ö' => ('o', 0),
            'ú' | 'ù' | 'ü' => ('u', 0),
            'ñ' => ('n', 1),
            other => (other, 0),
        })
        .collect()
}
