use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, DOCTYPE};
use tracing::{error, warn};

pub use crate::errors::ResultResp;

fn status_for(err: &ServerError) -> u16 {
    match err {
        ServerError::NotFound => 404,
        ServerError::BadRequest(_) => 400,
        ServerError::DbError(_)
        | ServerError::Delivery(_)
        | ServerError::XlsxError(_)
        | ServerError::InternalError => 500,
    }
}

/// Convert a ServerError into a proper HTML error page
pub fn html_error_response(err: ServerError) -> Response {
    let status = status_for(&err);
    if status >= 500 {
        error!(status, error = %err, "request failed");
    } else {
        warn!(status, error = %err, "request rejected");
    }

    let page = html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                title { "Erro " (status) }
            }
            body style="font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem;" {
                h1 { "Erro " (status) }
                p style="font-size: 1.1rem; color: #444;" { (err) }
                p { a href="/" { "← Voltar" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn errors_map_to_status_and_escape_messages() {
        let resp = html_error_response(ServerError::BadRequest("<b>id</b>".into()));
        assert_eq!(resp.status(), 400);

        let mut body = String::new();
        resp.into_body().reader().read_to_string(&mut body).unwrap();
        assert!(body.contains("&lt;b&gt;id&lt;/b&gt;"));

        assert_eq!(html_error_response(ServerError::NotFound).status(), 404);
        assert_eq!(
            html_error_response(ServerError::Delivery("closed".into())).status(),
            500
        );
    }
}
