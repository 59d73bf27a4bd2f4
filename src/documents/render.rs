// src/documents/render.rs
//
// Serialises a `Document` into one self-contained markup file. Styles are
// inline and nothing is loaded from outside, so the same bytes work as a
// word-processor download and as a printable page.

use maud::{html, Markup, PreEscaped};

use crate::documents::model::{Block, Clause, Document, DocumentArtifact, Signature, SummaryTable};

// Office namespaces make Word open the file as a document instead of a web page.
const WORD_HTML_OPEN: &str = "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
    xmlns:w=\"urn:schemas-microsoft-com:office:word\" \
    xmlns=\"http://www.w3.org/TR/REC-html40\">";

const DOCUMENT_CSS: &str = "\
body { font-family: Arial, sans-serif; font-size: 11pt; line-height: 1.5; text-align: justify; margin: 20px; }
h1 { text-align: center; font-size: 14pt; text-transform: uppercase; margin-bottom: 20px; }
h2 { font-size: 11pt; margin: 16px 0 6px; }
p { margin: 0 0 10px; }
p.subtitle { text-align: center; }
p.sub { margin-left: 24px; }
p.closing { text-align: right; margin-top: 24px; }
table.summary { width: 100%; border-collapse: collapse; margin-bottom: 14px; }
table.summary caption { text-align: left; font-weight: bold; padding: 4px 0; }
table.summary th, table.summary td { border: 1px solid #000; padding: 4px 6px; text-align: left; }
table.summary tr.total td { font-weight: bold; background: #eee; }
.signatures { margin-top: 50px; }
.signature { margin: 40px auto 0; width: 300px; text-align: center; }
.signature-line { border-top: 1px solid #000; padding-top: 5px; font-weight: bold; }
";

const PRINT_SCRIPT: &str = "<script>\
window.onload = function () { window.print(); };\
window.onafterprint = function () { window.close(); };\
</script>";

pub fn render_document(document: &Document) -> String {
    let markup = html! {
        (PreEscaped(WORD_HTML_OPEN))
        head {
            meta charset="utf-8";
            title { (document.title) }
            style { (PreEscaped(DOCUMENT_CSS)) }
        }
        body {
            h1 { (document.title) }
            @if let Some(subtitle) = &document.subtitle {
                p class="subtitle" { (subtitle) }
            }
            @for table in &document.tables {
                (summary_table(table))
            }
            @for clause in &document.clauses {
                (clause_section(clause))
            }
            @if let Some(closing) = &document.closing {
                p class="closing" { (closing) }
            }
            @if !document.signatures.is_empty() {
                (signature_block(&document.signatures))
            }
        }
        (PreEscaped("</html>"))
    };

    markup.into_string()
}

/// The artifact's markup plus a script that opens the print dialog on load
/// and closes the window once printing is done or cancelled.
pub fn printable_html(artifact: &DocumentArtifact) -> String {
    match artifact.html.rfind("</body>") {
        Some(at) => {
            let mut out = String::with_capacity(artifact.html.len() + PRINT_SCRIPT.len());
            out.push_str(&artifact.html[..at]);
            out.push_str(PRINT_SCRIPT);
            out.push_str(&artifact.html[at..]);
            out
        }
        None => format!("{}{PRINT_SCRIPT}", artifact.html),
    }
}

fn summary_table(table: &SummaryTable) -> Markup {
    let key_value = table.columns.is_empty();
    html! {
        table class="summary" {
            caption { (table.caption) }
            @if !key_value {
                thead {
                    tr {
                        @for column in &table.columns {
                            th { (column) }
                        }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    tr {
                        @for (i, cell) in row.iter().enumerate() {
                            @if key_value && i == 0 {
                                th scope="row" { (cell) }
                            } @else {
                                td { (cell) }
                            }
                        }
                    }
                }
                @if let Some(footer) = &table.footer {
                    tr class="total" {
                        @for cell in footer {
                            td { (cell) }
                        }
                    }
                }
            }
        }
    }
}

fn clause_section(clause: &Clause) -> Markup {
    html! {
        div class="clause" {
            h2 { (clause.heading) }
            @for block in &clause.blocks {
                @match block {
                    Block::Paragraph(text) => {
                        p { (text) }
                    }
                    Block::Items(items) => {
                        ul {
                            @for item in items {
                                li { (item) }
                            }
                        }
                    }
                    Block::Numbered(items) => {
                        @for item in items {
                            p class="sub" { (item) }
                        }
                    }
                }
            }
        }
    }
}

fn signature_block(signatures: &[Signature]) -> Markup {
    html! {
        div class="signatures" {
            @for signature in signatures {
                div class="signature" {
                    div class="signature-line" { (signature.role) }
                    @if !signature.name.is_empty() {
                        div class="signature-name" { (signature.name) }
                    }
                }
            }
        }
    }
}
