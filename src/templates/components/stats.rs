use crate::domain::Summary;
use crate::templates::format;
use maud::{html, Markup};

pub fn summary_counters(summary: &Summary) -> Markup {
    html! {
        section class="stats-grid" {
            (counter("total-props", "Properties", &format::group_thousands(summary.total as f64)))
            (counter("total-districts", "Districts", &summary.district_count.to_string()))
            (counter("avg-score", "Average score", &format::score(summary.avg_score)))
            (counter("avg-price", "Average price", &format::soles(summary.avg_price)))
        }
    }
}

fn counter(id: &str, label: &str, value: &str) -> Markup {
    html! {
        div class="stat-card" {
            div class="stat-value" id=(id) { (value) }
            div class="stat-label" { (label) }
        }
    }
}

/// Filtered count. Sent out-of-band with each partial so the header stays in sync.
pub fn props_count(count: usize, out_of_band: bool) -> Markup {
    html! {
        span id="propsCount" hx-swap-oob=[out_of_band.then_some("true")] {
            (format::group_thousands(count as f64))
        }
    }
}
