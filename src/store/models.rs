use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

// One entry of data/properties.json, as produced by the cleaning pipeline.
//
// entry
//  ├── district, location, title, url, date_pub
//  ├── price_clean, area_clean, bedroom_clean, bathroom_clean
//  └── final_score
//       ├── cost_score
//       ├── safety_score   (older exports: security_score)
//       └── services_score

#[derive(Debug, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub district: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, rename = "date_pub", deserialize_with = "null_as_empty")]
    pub date_published: String,

    #[serde(default, deserialize_with = "lenient_number")]
    pub price_clean: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub area_clean: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub bedroom_clean: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub bathroom_clean: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub final_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub cost_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub safety_score: Option<f64>,
    // Deprecated spelling, only read when safety_score is absent.
    #[serde(default, deserialize_with = "lenient_number")]
    pub security_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub services_score: Option<f64>,
}

/// A number, or a string holding one. Anything else reads as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::Number(n) => Some(n),
        Loose::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        Loose::Other(_) => None,
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
