use crate::domain::record::SCORE_WEIGHTS;
use crate::domain::{Record, ScoreTier};
use crate::templates::format;
use crate::templates::images::DistrictImages;
use maud::{html, Markup};

const ADDRESS_MAX_CHARS: usize = 50;

/// Everything a card needs, already formatted.
pub struct PropertyCardVm<'a> {
    pub district: &'a str,
    pub title: &'a str,
    pub address: String,
    pub url: &'a str,
    pub published: &'a str,
    pub image_url: String,
    pub score: f64,
    pub tier: ScoreTier,
    pub price: String,
    pub area: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub cost: f64,
    pub safety: f64,
    pub services: f64,
    pub weighted: f64,
}

impl<'a> PropertyCardVm<'a> {
    pub fn new(record: &'a Record, images: &DistrictImages) -> Self {
        Self {
            district: &record.district,
            title: &record.title,
            address: format::shorten(&record.location, ADDRESS_MAX_CHARS),
            url: &record.url,
            published: &record.date_published,
            image_url: images.url(&record.district),
            score: record.score(),
            tier: ScoreTier::from_score(record.score()),
            price: format::price(record.price_clean),
            area: format::area(record.area_clean),
            bedrooms: format::count(record.bedroom_clean),
            bathrooms: format::count(record.bathroom_clean),
            cost: record.cost(),
            safety: record.safety(),
            services: record.services(),
            weighted: record.weighted_score(),
        }
    }
}

pub fn property_card(vm: &PropertyCardVm) -> Markup {
    let tier = vm.tier.css_class();
    let (w_cost, w_safety, w_services) = SCORE_WEIGHTS;

    html! {
        div class="property-card" data-tier=(vm.tier.label()) {
            div class="property-image" {
                img src=(vm.image_url) alt=(vm.district)
                    onerror=(format!("this.onerror=null;this.src='{}'", DistrictImages::default_url()));
                div class={ "property-score-overlay " (tier) } { (format::score(vm.score)) }
            }

            div class="property-content" {
                div class="property-header" {
                    h3 class="property-district" {
                        @if vm.district.is_empty() { "District not specified" } @else { (vm.district) }
                    }
                    div class={ "property-final-score " (tier) } { (format::score(vm.score)) }
                }

                p class="property-title" { (vm.title) }
                p class="property-address" { (vm.address) }

                div class="property-details" {
                    div class="detail-row" {
                        (detail("Price", &vm.price))
                        (detail("Area", &vm.area))
                    }
                    div class="detail-row" {
                        (detail("Beds", &vm.bedrooms))
                        (detail("Baths", &vm.bathrooms))
                    }
                }

                div class="score-breakdown" {
                    h4 { "Score breakdown" }
                    (score_bar("Cost", vm.cost))
                    (score_bar("Safety", vm.safety))
                    (score_bar("Services", vm.services))
                    div class="score-formula" {
                        small {
                            "Final = (" (format::score(vm.cost)) "×" (w_cost) ") + ("
                            (format::score(vm.safety)) "×" (w_safety) ") + ("
                            (format::score(vm.services)) "×" (w_services) ") = "
                            (format::score(vm.weighted))
                        }
                    }
                }

                div class="property-footer" {
                    a href=(if vm.url.is_empty() { "#" } else { vm.url }) target="_blank" rel="noopener" class="btn-view-details" {
                        "View on Properati"
                    }
                    span class="publish-date" {
                        @if vm.published.is_empty() { "Date not available" } @else { (vm.published) }
                    }
                }
            }
        }
    }
}

fn detail(label: &str, value: &str) -> Markup {
    html! {
        div class="detail-item" {
            span class="detail-label" { (label) }
            span class="detail-value" { (value) }
        }
    }
}

fn score_bar(label: &str, value: f64) -> Markup {
    let width = (value * 10.0).clamp(0.0, 100.0);
    html! {
        div class="score-item" {
            div class="score-label" {
                span class="score-name" { (label) }
                span class="score-value" { (format::score(value)) }
            }
            div class="score-bar" {
                div class="bar-fill" style=(format!("width: {width}%")) {}
            }
        }
    }
}

/// The compact card of the simple view.
pub fn simple_card(record: &Record) -> Markup {
    html! {
        div class="property-card" {
            div class="property-header" {
                div class="property-district" {
                    @if record.location.is_empty() { "Unknown district" } @else { (record.location) }
                }
                div class={ "property-score " (ScoreTier::from_score(record.score()).css_class()) } {
                    @match record.final_score {
                        Some(s) => (format::score(s)),
                        None => (format::MISSING),
                    }
                }
            }
            div class="property-details" {
                (detail("Price", &format::price(record.price_clean)))
                (detail("Area", &format::area(record.area_clean)))
                (detail("Beds", &format::count(record.bedroom_clean)))
            }
            div class="property-breakdown" {
                "Cost: " (opt_score(record.cost_score))
                " | Safety: " (opt_score(record.safety_score))
                " | Services: " (opt_score(record.services_score))
            }
        }
    }
}

fn opt_score(value: Option<f64>) -> String {
    value.map(format::score).unwrap_or_else(|| format::MISSING.to_string())
}
