use crate::dashboard::{criteria_query, Session};
use crate::domain::{BedroomFilter, DistrictFilter, FilterCriteria, SortKey};
use crate::templates::components::{
    card, notification, property_card, props_count, summary_counters, top_districts_panel,
    PropertyCardVm,
};
use crate::templates::images::DistrictImages;
use crate::templates::{desktop_layout, format};
use maud::{html, Markup};

/// Cards shown at once on the dashboard.
pub const DASHBOARD_CAP: usize = 50;

pub struct DashboardVm<'s, 'a> {
    pub session: &'s Session<'a>,
    pub images: &'s DistrictImages,
    pub notice: Option<&'s str>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let dashboard = vm.session.dashboard();
    let criteria = vm.session.criteria();

    desktop_layout(
        "Dashboard",
        html! {
            main class="container" {
                h1 { "Lima Housing Analytics" }

                (summary_counters(dashboard.summary()))

                div class="dashboard-grid" {
                    aside class="sidebar" {
                        (card("Filters", filter_form(criteria, dashboard.district_options(), dashboard.price_ceiling())))
                        (top_districts_panel(dashboard.top_districts()))
                    }

                    section class="results" {
                        h2 { (props_count(vm.session.count(), false)) " properties" }
                        div id="properties-container" {
                            (property_results(vm.session, vm.images))
                        }
                    }
                }

                @if let Some(message) = vm.notice {
                    (notification(message))
                }
            }
        },
    )
}

/// The card list swapped in by htmx when a filter changes.
pub fn property_results(session: &Session, images: &DistrictImages) -> Markup {
    let results = session.results();
    let shown = results.len().min(DASHBOARD_CAP);

    html! {
        @if results.is_empty() {
            div class="no-results" {
                h3 { "No properties found" }
                p { "Try different filters or reset them." }
                a href="/reset" class="btn-primary" { "Reset filters" }
            }
        } @else {
            div class="results-toolbar" {
                a href=(format!("/export?{}", criteria_query(session.criteria()))) class="btn-export" {
                    "Download .xlsx"
                }
            }
            div class="properties-grid" {
                @for record in &results[..shown] {
                    (property_card(&PropertyCardVm::new(record, images)))
                }
            }
            @if results.len() > shown {
                div class="results-warning" {
                    "Showing " (shown) " of " (format::group_thousands(results.len() as f64)) " properties. "
                    "Use more specific filters to narrow the results."
                }
            }
        }
    }
}

// Labels follow the sliders while they move; the results refresh on release.
const PRICE_LABEL_JS: &str =
    "document.getElementById('priceValue').textContent='S/ '+Number(this.value).toLocaleString('en-US')";
const SCORE_LABEL_JS: &str =
    "document.getElementById('scoreValue').textContent=Number(this.value).toFixed(1)";

fn filter_form(criteria: &FilterCriteria, districts: &[String], price_ceiling: f64) -> Markup {
    let selected_district = match &criteria.district {
        DistrictFilter::All => None,
        DistrictFilter::Only(name) => Some(name.as_str()),
    };
    let max_price = criteria.max_price.min(price_ceiling);

    html! {
        form
            id="filters"
            action="/"
            method="get"
            hx-get="/properties"
            hx-target="#properties-container"
            hx-trigger="change"
            hx-swap="innerHTML"
        {
            label for="districtFilter" { "District" }
            select name="district" id="districtFilter" {
                option value="all" selected[selected_district.is_none()] { "All districts" }
                @for district in districts {
                    option value=(district) selected[selected_district == Some(district.as_str())] { (district) }
                }
            }

            label for="priceFilter" { "Max price: " span id="priceValue" { (format::soles(max_price)) } }
            input type="range" name="max_price" id="priceFilter"
                min="0" max=(price_ceiling) step="5000" value=(max_price)
                oninput=(PRICE_LABEL_JS);

            label for="scoreFilter" { "Min score: " span id="scoreValue" { (format::score(criteria.min_score)) } }
            input type="range" name="min_score" id="scoreFilter"
                min="0" max="10" step="0.5" value=(criteria.min_score)
                oninput=(SCORE_LABEL_JS);

            label for="bedroomsFilter" { "Bedrooms" }
            select name="bedrooms" id="bedroomsFilter" {
                @for count in 0..=5u8 {
                    option value=(count) selected[criteria.bedrooms.as_count() == count] {
                        (bedroom_label(BedroomFilter::from_count(i64::from(count))))
                    }
                }
            }

            label for="sortSelect" { "Sort by" }
            select name="sort" id="sortSelect" {
                @for key in SortKey::ALL {
                    option value=(key.as_str()) selected[criteria.sort == key] { (key.label()) }
                }
            }

            div class="filter-actions" {
                button type="submit" class="btn-primary" { "Apply" }
                a href="/reset" id="resetFilters" class="btn-secondary" { "Reset filters" }
            }
        }
    }
}

fn bedroom_label(filter: BedroomFilter) -> String {
    match filter {
        BedroomFilter::Any => "Any".to_string(),
        BedroomFilter::Exactly(n) => n.to_string(),
        BedroomFilter::FiveOrMore => "5+".to_string(),
    }
}
