pub mod attachment;
pub mod errors;
pub mod html;
pub mod json;
pub mod word;
pub mod xlsx;

pub use errors::{html_error_response, ResultResp};

pub use html::{html_response, print_response};
pub use json::json_response;
pub use word::word_download_response;
pub use xlsx::xlsx_response;
