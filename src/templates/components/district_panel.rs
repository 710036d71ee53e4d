use crate::domain::{DistrictStat, ScoreTier};
use crate::templates::format;
use maud::{html, Markup};

fn medal(rank: usize) -> &'static str {
    match rank {
        0 => "🥇",
        1 => "🥈",
        2 => "🥉",
        _ => "",
    }
}

/// Ranked list of the best districts by average score.
pub fn top_districts_panel(stats: &[DistrictStat]) -> Markup {
    html! {
        section class="top-districts" {
            h3 { "Top districts" }
            div id="topDistrictsList" {
                @if stats.is_empty() {
                    div class="district-item" {
                        div class="district-name" { "Not enough data" }
                        div class="district-score" { (format::MISSING) }
                    }
                }
                @for (rank, item) in stats.iter().enumerate() {
                    div class="district-item" {
                        div class="district-info" {
                            div class="district-rank" { (medal(rank)) }
                            div class="district-name" { (item.district) }
                        }
                        div class="district-stats" {
                            div class={ "district-score " (ScoreTier::from_score(item.avg_score).css_class()) } {
                                (format::score(item.avg_score))
                            }
                            small { (item.count) " props · avg " (format::soles(item.avg_price)) }
                        }
                    }
                }
            }
        }
    }
}
