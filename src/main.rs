use crate::catalog::Catalog;
use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod config;
mod domain;
mod errors;
mod params;
mod query;
mod responses;
mod router;
mod services;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,atog_listings=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // Fixtures are validated once; a bad catalog never serves traffic.
    let catalog = match Catalog::load() {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            tracing::error!(error = %e, "catalog failed to load");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);
    tracing::info!(%addr, workers = config.max_workers, "starting server at http://{addr}");

    let state = AppState { catalog, config };
    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let resp = match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status() >= 500 {
                    tracing::error!(%method, %path, error = %err, "request failed");
                }
                error_to_response(&err)
            }
        };

        tracing::info!(%method, %path, status = resp.status().as_u16(), "request");
        resp
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
