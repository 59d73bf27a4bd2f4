use maud::{html, Markup};

pub mod card;

pub use card::card;

/// A link per delivery mode of one document.
pub fn document_links(links: &[(&str, String)]) -> Markup {
    html! {
        span class="actions" {
            @for (label, href) in links {
                a href=(href) target="_blank" { (label) }
            }
        }
    }
}
