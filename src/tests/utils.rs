use crate::db::{init_db, Database};
use crate::documents::TenantMatchPolicy;
use crate::router::handle;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::Value;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// Fresh SQLite file with the production schema applied.
pub fn make_db(label: &str) -> Database {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "{label}_{nanos}_{}.sqlite",
        NEXT_DB.fetch_add(1, Ordering::SeqCst)
    ));
    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

pub fn get(db: &Database, path: &str) -> Response {
    let req = http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    dispatch(db, req)
}

pub fn send_json(db: &Database, method: &str, path: &str, payload: &Value) -> Response {
    let req = http::Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    dispatch(db, req)
}

/// Runs the router the way the server does, error pages included.
pub fn dispatch(db: &Database, req: Request) -> Response {
    match handle(req, db, TenantMatchPolicy::MostRecent) {
        Ok(resp) => resp,
        Err(err) => crate::responses::html_error_response(err),
    }
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}

/// Posts a record and returns the id the server assigned.
pub fn create(db: &Database, path: &str, payload: &Value) -> Value {
    let resp = send_json(db, "POST", path, payload);
    assert_eq!(resp.status(), 201, "POST {path} failed");
    let body: Value = serde_json::from_slice(&body_bytes(resp)).unwrap();
    body["id"].clone()
}

pub fn header(resp: &Response, name: &str) -> String {
    resp.headers()
        .get(name)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default()
}
