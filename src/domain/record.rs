// src/domain/record.rs

use crate::store::models::RawRecord;
use serde::Serialize;

/// Weights of the composite score: cost, safety, services.
pub const SCORE_WEIGHTS: (f64, f64, f64) = (0.4, 0.4, 0.2);

/// A listing as the dashboard sees it: flattened, with the safety sub-score
/// resolved to its canonical name.
///
/// Numeric fields stay optional. Everything that filters, sorts or averages
/// goes through the accessors below, which read an absent value as `0.0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Record {
    pub district: String,
    pub location: String,
    pub title: String,
    pub url: String,
    #[serde(rename = "date_pub")]
    pub date_published: String,

    pub price_clean: Option<f64>,
    pub area_clean: Option<f64>,
    pub bedroom_clean: Option<f64>,
    pub bathroom_clean: Option<f64>,

    pub final_score: Option<f64>,
    pub cost_score: Option<f64>,
    pub safety_score: Option<f64>,
    pub services_score: Option<f64>,
}

#[inline]
fn or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

impl Record {
    pub fn price(&self) -> f64 {
        or_zero(self.price_clean)
    }

    pub fn area(&self) -> f64 {
        or_zero(self.area_clean)
    }

    pub fn bedrooms(&self) -> f64 {
        or_zero(self.bedroom_clean)
    }

    pub fn score(&self) -> f64 {
        or_zero(self.final_score)
    }

    pub fn cost(&self) -> f64 {
        or_zero(self.cost_score)
    }

    pub fn safety(&self) -> f64 {
        or_zero(self.safety_score)
    }

    pub fn services(&self) -> f64 {
        or_zero(self.services_score)
    }

    /// Score recomputed from the sub-scores, shown at the end of the card's
    /// formula line. Upstream data is not required to agree with `final_score`.
    pub fn weighted_score(&self) -> f64 {
        let (cost, safety, services) = SCORE_WEIGHTS;
        self.cost() * cost + self.safety() * safety + self.services() * services
    }

    /// Records without a district, a price or a final score are not shown.
    pub fn is_displayable(&self) -> bool {
        !self.district.trim().is_empty() && self.price_clean.is_some() && self.final_score.is_some()
    }
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Record {
            district: raw.district.trim().to_string(),
            location: raw.location,
            title: raw.title,
            url: raw.url,
            date_published: raw.date_published,
            price_clean: raw.price_clean,
            area_clean: raw.area_clean,
            bedroom_clean: raw.bedroom_clean,
            bathroom_clean: raw.bathroom_clean,
            final_score: raw.final_score,
            cost_score: raw.cost_score,
            safety_score: raw.safety_score.or(raw.security_score),
            services_score: raw.services_score,
        }
    }
}
