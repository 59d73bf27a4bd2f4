use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde_json::Value;

pub fn json_response(status: u16, value: &Value) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(value.to_string()))
        .map_err(|_| ServerError::InternalError)
}
