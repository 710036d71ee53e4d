// src/domain/criteria.rs

use std::fmt;

/// District selector value. `All` is the "all districts" option.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DistrictFilter {
    #[default]
    All,
    Only(String),
}

impl DistrictFilter {
    /// `"all"` and the empty string both mean no district filter.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == "all" {
            DistrictFilter::All
        } else {
            DistrictFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DistrictFilter::All => "all",
            DistrictFilter::Only(name) => name,
        }
    }
}

/// Bedroom selector: any, an exact count from 1 to 4, or five and more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BedroomFilter {
    #[default]
    Any,
    Exactly(u8),
    FiveOrMore,
}

impl BedroomFilter {
    pub fn from_count(count: i64) -> Self {
        match count {
            i64::MIN..=0 => BedroomFilter::Any,
            1..=4 => BedroomFilter::Exactly(count as u8),
            _ => BedroomFilter::FiveOrMore,
        }
    }

    /// Selector values are "0".."5"; anything unparseable means any.
    pub fn parse(value: &str) -> Self {
        value
            .trim()
            .parse::<i64>()
            .map(Self::from_count)
            .unwrap_or_default()
    }

    /// The value the selector submits for this filter.
    pub fn as_count(&self) -> u8 {
        match self {
            BedroomFilter::Any => 0,
            BedroomFilter::Exactly(n) => *n,
            BedroomFilter::FiveOrMore => 5,
        }
    }

    pub fn matches(&self, bedrooms: f64) -> bool {
        match self {
            BedroomFilter::Any => true,
            BedroomFilter::Exactly(n) => bedrooms == f64::from(*n),
            BedroomFilter::FiveOrMore => bedrooms >= 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    ScoreDesc,
    PriceAsc,
    PriceDesc,
    AreaDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::ScoreDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::AreaDesc,
    ];

    /// Unknown keys fall back to `ScoreDesc`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "price_clean_asc" => SortKey::PriceAsc,
            "price_clean_desc" => SortKey::PriceDesc,
            "area_clean_desc" => SortKey::AreaDesc,
            _ => SortKey::ScoreDesc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::ScoreDesc => "final_score_desc",
            SortKey::PriceAsc => "price_clean_asc",
            SortKey::PriceDesc => "price_clean_desc",
            SortKey::AreaDesc => "area_clean_desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::ScoreDesc => "Best score",
            SortKey::PriceAsc => "Price: low to high",
            SortKey::PriceDesc => "Price: high to low",
            SortKey::AreaDesc => "Largest area",
        }
    }
}

/// The filter and sort configuration selected by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub district: DistrictFilter,
    pub max_price: f64,
    pub min_score: f64,
    pub bedrooms: BedroomFilter,
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Criteria that let every record through.
    pub fn unbounded() -> Self {
        Self {
            district: DistrictFilter::All,
            max_price: f64::INFINITY,
            min_score: 0.0,
            bedrooms: BedroomFilter::Any,
            sort: SortKey::ScoreDesc,
        }
    }

    pub fn with_max_price(max_price: f64) -> Self {
        Self {
            max_price,
            ..Self::unbounded()
        }
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "district={} max_price={} min_score={} bedrooms={} sort={}",
            self.district.as_str(),
            self.max_price,
            self.min_score,
            self.bedrooms.as_count(),
            self.sort.as_str()
        )
    }
}
