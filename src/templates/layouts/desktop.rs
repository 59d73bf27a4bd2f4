use maud::{html, Markup, DOCTYPE};

const ADMIN_CSS: &str = "\
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
header { display: flex; align-items: center; justify-content: space-between; padding: 12px 24px; background: #4a5d23; color: #fff; }
header a { color: #fff; text-decoration: none; }
main { max-width: 1100px; margin: 0 auto; padding: 24px; }
.card { border: 1px solid #e5e7eb; border-radius: 12px; padding: 16px 20px; margin-bottom: 2rem; }
table { width: 100%; border-collapse: collapse; }
th { padding: 10px 8px; border-bottom: 2px solid #e5e7eb; text-align: left; font-size: 0.8em; text-transform: uppercase; }
td { padding: 8px; border-bottom: 1px solid #f3f4f6; }
.actions a { margin-right: 12px; color: #4a5d23; font-weight: 600; }
.badge { background: #e5e7eb; padding: 2px 6px; border-radius: 4px; font-size: 0.85em; }
";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(ADMIN_CSS)) }
            }
            body {
                header {
                    h3 { a href="/" { "Documentos" } }
                    nav { "Contratos e informes de rendimentos" }
                }
                (content)
            }
        }
    }
}
