use crate::router::handle;
use crate::tests::utils::{body_string, get, record, test_state, two_district_records};
use serde_json::Value;

#[test]
fn properties_api_returns_filtered_sorted_records() {
    let state = test_state(two_district_records());

    let resp = handle(get("/api/properties?sort=price_clean_asc&min_score=8"), &state).unwrap();
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "application/json");

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["total"], 4);
    let prices: Vec<f64> = json["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price_clean"].as_f64().unwrap())
        .collect();
    assert_eq!(prices, vec![1000.0, 3000.0, 4000.0, 5000.0]);
}

#[test]
fn properties_api_uses_canonical_field_names() {
    let mut listing = record("Barranco", 2500.0, 7.0);
    listing.safety_score = Some(6.5);
    let state = test_state(vec![listing]);

    let json: Value =
        serde_json::from_str(&body_string(handle(get("/api/properties"), &state).unwrap())).unwrap();

    let first = &json["properties"][0];
    assert_eq!(first["safety_score"], 6.5);
    assert_eq!(first["date_pub"], "2024-05-01");
    assert!(first.get("security_score").is_none());
}

#[test]
fn summary_api_guards_empty_dataset() {
    let state = test_state(Vec::new());

    let json: Value =
        serde_json::from_str(&body_string(handle(get("/api/summary"), &state).unwrap())).unwrap();

    assert_eq!(json["summary"]["total"], 0);
    assert_eq!(json["summary"]["district_count"], 0);
    assert_eq!(json["summary"]["avg_price"], 0.0);
    assert_eq!(json["summary"]["avg_score"], 0.0);
    assert_eq!(json["top_districts"], Value::Array(Vec::new()));
}

#[test]
fn summary_api_ranks_districts() {
    let state = test_state(two_district_records());

    let json: Value =
        serde_json::from_str(&body_string(handle(get("/api/summary"), &state).unwrap())).unwrap();

    assert_eq!(json["top_districts"][0]["district"], "A");
    assert_eq!(json["top_districts"][0]["avg_score"], 9.0);
    assert_eq!(json["top_districts"][0]["count"], 3);
    assert_eq!(json["districts"], serde_json::json!(["A", "B"]));
    assert_eq!(json["price_ceiling"], 5000.0);
}
