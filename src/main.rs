use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::responses::html_error_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod documents;
mod domain;
mod errors;
mod format;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env();

    let db = Database::new(config.database_path.clone());
    if let Err(e) = init_db(&db, &config.schema_path) {
        error!(error = %e, path = %config.database_path, "database initialization failed");
        std::process::exit(1);
    }

    let addr: SocketAddr = match config.bind_address().parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, address = %config.bind_address(), "invalid bind address");
            std::process::exit(1);
        }
    };
    info!(%addr, workers = config.max_workers, tenant_policy = ?config.tenant_match_policy, "starting server");

    let policy = config.tenant_match_policy;
    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &db, policy) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
