#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the collision dashboard.
//!
//! Serves the filter vocabularies and the query endpoint that fetches,
//! filters, and aggregates collision records into renderer-ready views.

mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use crash_dash_source::{CollisionSource, FetchOptions, SocrataSource};

/// Shared application state.
pub struct AppState {
    /// Record-fetch collaborator.
    pub source: Arc<dyn CollisionSource>,
    /// Fetch limits, from the environment.
    pub fetch_options: FetchOptions,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let mut fetch_options = FetchOptions::default();
    if let Some(limit) = std::env::var("MAX_RECORDS").ok().and_then(|v| v.parse().ok()) {
        fetch_options.limit = limit;
    }

    let state = web::Data::new(AppState {
        source: Arc::new(SocrataSource::new()),
        fetch_options,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/filters", web::get().to(handlers::filters))
                    .route("/data", web::post().to(handlers::data)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
