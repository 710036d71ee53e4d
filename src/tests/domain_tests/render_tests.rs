use crate::domain::ScoreTier;
use crate::templates::components::{property_card, PropertyCardVm};
use crate::templates::format;
use crate::templates::images::{district_slug, DistrictImages, DEFAULT_IMAGE};
use crate::tests::utils::{record, temp_path};

#[test]
fn tiers_follow_score_thresholds() {
    assert_eq!(ScoreTier::from_score(8.5), ScoreTier::Excellent);
    assert_eq!(ScoreTier::from_score(8.49), ScoreTier::Good);
    assert_eq!(ScoreTier::from_score(7.5), ScoreTier::Good);
    assert_eq!(ScoreTier::from_score(6.5), ScoreTier::Medium);
    assert_eq!(ScoreTier::from_score(6.4), ScoreTier::Low);
    assert_eq!(ScoreTier::from_score(0.0).label(), "low");
}

#[test]
fn district_slugs() {
    assert_eq!(district_slug("San Isidro"), "san-isidro");
    assert_eq!(district_slug("Breña"), "brena");
    assert_eq!(district_slug("Jesús María"), "jess-mara");
    assert_eq!(district_slug("Villa El Salvador (Lima)"), "villa-el-salvador-lima");
    assert_eq!(district_slug(""), "");
}

#[test]
fn images_fall_back_to_default() {
    let dir = temp_path("district_images", "d");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("barranco.jpg"), b"jpg").unwrap();
    let images = DistrictImages::new(&dir);

    assert_eq!(images.identifier("Barranco"), "barranco");
    assert_eq!(images.url("Barranco"), "/assets/img/barranco.jpg");
    assert_eq!(images.identifier("Surquillo"), DEFAULT_IMAGE);
    assert_eq!(images.identifier(""), DEFAULT_IMAGE);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn shorten_counts_characters() {
    let long = "Calle Los Álamos 123, Urbanización Santa Catalina, La Victoria";

    let short = format::shorten(long, 50);

    assert!(short.ends_with("..."));
    assert_eq!(short.chars().count(), 53);
    assert_eq!(format::shorten("corto", 50), "corto");
}

#[test]
fn money_and_counts_format() {
    assert_eq!(format::soles(1_234_567.4), "S/ 1,234,567");
    assert_eq!(format::soles(950.0), "S/ 950");
    assert_eq!(format::price(None), format::MISSING);
    assert_eq!(format::area(Some(85.6)), "86 m²");
    assert_eq!(format::count(Some(3.0)), "3");
    assert_eq!(format::count(Some(0.0)), format::MISSING);
    assert_eq!(format::score(7.26), "7.3");
}

#[test]
fn card_shows_breakdown_and_tier() {
    let mut listing = record("Miraflores", 3500.0, 8.7);
    listing.cost_score = Some(8.0);
    listing.safety_score = Some(9.0);
    listing.services_score = Some(10.0);
    let images = DistrictImages::new(temp_path("no_images", "d"));

    let html = property_card(&PropertyCardVm::new(&listing, &images)).into_string();

    assert!(html.contains("score-excellent"));
    assert!(html.contains("S/ 3,500"));
    assert!(html.contains("width: 90%"));
    // 8.0×0.4 + 9.0×0.4 + 10.0×0.2
    assert!(html.contains(") = 8.8"));
    assert!(html.contains("/assets/img/default.jpg"));
    assert!(html.contains("2024-05-01"));
}
