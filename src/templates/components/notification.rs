use maud::{html, Markup, PreEscaped};

/// Toast that removes itself after three seconds.
pub fn notification(message: &str) -> Markup {
    html! {
        div class="notification show" id="notification" role="status" {
            span { (message) }
        }
        script {
            (PreEscaped("setTimeout(function () { var n = document.getElementById('notification'); if (n) { n.remove(); } }, 3000);"))
        }
    }
}
