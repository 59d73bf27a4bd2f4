use maud::{html, Markup};

/// Titled section of the index; `count` is shown beside the heading.
pub fn card(title: &str, count: usize, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 {
                (title) " "
                span class="badge" { (count) }
            }
            (body)
        }
    }
}
