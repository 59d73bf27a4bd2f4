// responses/xlsx.rs
use crate::errors::ServerError;
use crate::responses::attachment::content_disposition;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Return XLSX file as HTTP response
pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header(
            "Content-Type",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        )
        .header("Content-Disposition", content_disposition(filename))
        .body(Body::from(buffer))
        .map_err(|e| ServerError::Delivery(format!("could not build download '{filename}': {e}")))
}
