// src/dashboard.rs

use crate::domain::stats::{self, TOP_DISTRICTS_LIMIT, TOP_DISTRICTS_MIN_COUNT};
use crate::domain::{
    filter, sort, BedroomFilter, DistrictFilter, DistrictStat, FilterCriteria, Record, SortKey,
    Summary,
};
use crate::store::RecordStore;
use tracing::debug;

pub const RESET_NOTICE: &str = "Filters reset";

/// The loaded dataset plus everything derived from it that does not depend
/// on the user's criteria.
#[derive(Debug)]
pub struct Dashboard {
    store: RecordStore,
    summary: Summary,
    top_districts: Vec<DistrictStat>,
    district_options: Vec<String>,
    price_ceiling: f64,
}

impl Dashboard {
    pub fn new(store: RecordStore) -> Self {
        let records = store.records();
        let summary = stats::summarize(records);
        let top_districts =
            stats::top_districts(records, TOP_DISTRICTS_LIMIT, TOP_DISTRICTS_MIN_COUNT);
        let district_options = stats::district_options(records);
        let price_ceiling = stats::price_ceiling(records);

        Self {
            store,
            summary,
            top_districts,
            district_options,
            price_ceiling,
        }
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn top_districts(&self) -> &[DistrictStat] {
        &self.top_districts
    }

    pub fn district_options(&self) -> &[String] {
        &self.district_options
    }

    pub fn price_ceiling(&self) -> f64 {
        self.price_ceiling
    }

    /// All districts, price capped at the rounded dataset maximum, no score
    /// or bedroom limit, best score first.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::with_max_price(self.price_ceiling)
    }
}

/// A single change coming from one of the filter controls.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterInput {
    District(DistrictFilter),
    MaxPrice(f64),
    MinScore(f64),
    Bedrooms(BedroomFilter),
    Sort(SortKey),
}

impl FilterInput {
    /// Decodes the filter form's query string. Unknown keys and numbers that
    /// do not parse are skipped.
    pub fn from_query(query: &str) -> Vec<FilterInput> {
        url::form_urlencoded::parse(query.as_bytes())
            .filter_map(|(key, value)| match key.as_ref() {
                "district" => Some(FilterInput::District(DistrictFilter::parse(&value))),
                "max_price" => parse_number(&value).map(FilterInput::MaxPrice),
                "min_score" => parse_number(&value).map(FilterInput::MinScore),
                "bedrooms" => Some(FilterInput::Bedrooms(BedroomFilter::parse(&value))),
                "sort" => Some(FilterInput::Sort(SortKey::parse(&value))),
                _ => None,
            })
            .collect()
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Encodes criteria the way the filter form submits them.
pub fn criteria_query(criteria: &FilterCriteria) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("district", criteria.district.as_str());
    if criteria.max_price.is_finite() {
        query.append_pair("max_price", &criteria.max_price.to_string());
    }
    query
        .append_pair("min_score", &criteria.min_score.to_string())
        .append_pair("bedrooms", &criteria.bedrooms.as_count().to_string())
        .append_pair("sort", criteria.sort.as_str());
    query.finish()
}

/// One user's view of the dashboard: the current criteria and the records
/// they select, already sorted.
pub struct Session<'a> {
    dashboard: &'a Dashboard,
    criteria: FilterCriteria,
    results: Vec<&'a Record>,
}

impl<'a> Session<'a> {
    pub fn new(dashboard: &'a Dashboard) -> Self {
        let mut session = Self {
            dashboard,
            criteria: dashboard.default_criteria(),
            results: Vec::new(),
        };
        session.recompute();
        session
    }

    pub fn dashboard(&self) -> &'a Dashboard {
        self.dashboard
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Filtered and sorted records, uncapped.
    pub fn results(&self) -> &[&'a Record] {
        &self.results
    }

    pub fn count(&self) -> usize {
        self.results.len()
    }

    /// Applies one or more control changes and recomputes once.
    pub fn update<I>(&mut self, inputs: I)
    where
        I: IntoIterator<Item = FilterInput>,
    {
        for input in inputs {
            self.set(input);
        }
        self.recompute();
    }

    /// Restores the default criteria and returns the confirmation to show.
    pub fn reset(&mut self) -> &'static str {
        self.criteria = self.dashboard.default_criteria();
        self.recompute();
        RESET_NOTICE
    }

    fn set(&mut self, input: FilterInput) {
        match input {
            FilterInput::District(district) => self.criteria.district = district,
            FilterInput::MaxPrice(price) => self.criteria.max_price = price,
            FilterInput::MinScore(score) => self.criteria.min_score = score,
            FilterInput::Bedrooms(bedrooms) => self.criteria.bedrooms = bedrooms,
            FilterInput::Sort(key) => self.criteria.sort = key,
        }
    }

    fn recompute(&mut self) {
        let filtered = filter::apply(self.dashboard.records(), &self.criteria);
        self.results = sort::sort(&filtered, self.criteria.sort);
        debug!(criteria = %self.criteria, count = self.results.len(), "filters applied");
    }
}
