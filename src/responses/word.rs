// responses/word.rs
use crate::documents::DocumentArtifact;
use crate::errors::ServerError;
use crate::responses::attachment::{attachment_filename, content_disposition};
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const MSWORD: &str = "application/msword";
const UTF8_BOM: &str = "\u{feff}";

/// Download mode: the document markup as a `.doc` attachment.
///
/// The byte-order mark makes Word read the markup as UTF-8.
pub fn word_download_response(artifact: &DocumentArtifact, prefix: &str) -> ResultResp {
    let filename = attachment_filename(prefix, &artifact.file_seed, "doc");

    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + artifact.html.len());
    bytes.extend_from_slice(UTF8_BOM.as_bytes());
    bytes.extend_from_slice(artifact.html.as_bytes());

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", format!("{MSWORD}; charset=utf-8"))
        .header("Content-Disposition", content_disposition(&filename))
        .body(Body::from(bytes))
        .map_err(|e| ServerError::Delivery(format!("could not build download '{filename}': {e}")))
}
