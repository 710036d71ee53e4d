use maud::{html, Markup};

pub mod district_panel;
pub mod error;
pub mod notification;
pub mod property_card;
pub mod stats;

pub use district_panel::top_districts_panel;
pub use error::html_error_response;
pub use notification::notification;
pub use property_card::{property_card, simple_card, PropertyCardVm};
pub use stats::{props_count, summary_counters};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
