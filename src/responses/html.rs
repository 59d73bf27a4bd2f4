use crate::documents::{printable_html, DocumentArtifact};
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::{Markup, PreEscaped};

pub fn html_response(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Print mode: the document page opens the browser print dialog by itself.
pub fn print_response(artifact: &DocumentArtifact) -> ResultResp {
    html_response(PreEscaped(printable_html(artifact)))
        .map_err(|_| ServerError::Delivery(format!("could not serve '{}' for printing", artifact.title)))
}
