// src/domain/filter.rs

use crate::domain::criteria::{DistrictFilter, FilterCriteria};
use crate::domain::record::Record;

/// Keeps the records that pass every active criterion, in input order.
///
/// Predicates, all required:
/// 1. district equals the selected one (skipped for "all")
/// 2. price at most `max_price`
/// 3. final score at least `min_score`
/// 4. bedroom count matches the bedroom selector
///
/// Sorting is not applied here; see [`crate::domain::sort::sort`].
pub fn apply<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| matches(record, criteria))
        .collect()
}

pub fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
    if let DistrictFilter::Only(district) = &criteria.district {
        if record.district != *district {
            return false;
        }
    }

    record.price() <= criteria.max_price
        && record.score() >= criteria.min_score
        && criteria.bedrooms.matches(record.bedrooms())
}
