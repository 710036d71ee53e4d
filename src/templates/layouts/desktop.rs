use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Lima Housing Analytics" }
                link rel="stylesheet" href="/static/dashboard.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                header class="site-header" {
                    h3 { "Lima Housing Analytics" }
                    nav {
                        ul {
                            li { a href="/" { "Dashboard" } }
                            li { a href="/simple" { "Quick view" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
