use crate::domain::Record;
use crate::templates::components::simple_card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Cards shown on the quick view.
pub const SIMPLE_CAP: usize = 12;

pub fn simple_page(records: &[Record]) -> Markup {
    desktop_layout(
        "Quick view",
        html! {
            main class="container" {
                h1 { "Quick view" }
                p { "The first " (records.len().min(SIMPLE_CAP)) " listings of the dataset." }
                div id="properties-container" class="properties-grid" {
                    @for record in records.iter().take(SIMPLE_CAP) {
                        (simple_card(record))
                    }
                }
            }
        },
    )
}
