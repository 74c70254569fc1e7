//! HTTP handler functions for the dashboard API.

use actix_web::{HttpResponse, web};
use chrono::Datelike as _;
use crash_dash_query::{FilterSelection, filter, search};
use crash_dash_server_models::{ApiHealth, DataResponse, FilterOptions};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/filters`
///
/// Returns the filter vocabularies for the UI dropdowns.
pub async fn filters() -> HttpResponse {
    let latest_year = chrono::Utc::now().year();
    HttpResponse::Ok().json(FilterOptions::for_latest_year(latest_year))
}

/// `POST /api/data`
///
/// Fetches records matching the submitted selection, applies the in-memory
/// filter engine, and returns the composed dashboard views. Free text in
/// the selection is parsed into filters first; parsed values only fill
/// fields the dropdowns left unset.
pub async fn data(state: web::Data<AppState>, body: web::Json<FilterSelection>) -> HttpResponse {
    let mut selection = body.into_inner();
    if let Some(text) = selection.search.clone() {
        let parsed = search::parse(&text);
        if !parsed.is_empty() {
            // Text that parsed into structured filters is consumed; only
            // unrecognized text falls through to the substring scan.
            selection.merge_missing_from(parsed);
            selection.search = None;
        }
    }

    match state.source.fetch(&selection, &state.fetch_options).await {
        Ok(records) => {
            let matched = filter::apply(&records, &selection);
            let views = crash_dash_dashboard::compose(&matched);
            HttpResponse::Ok().json(DataResponse {
                record_count: matched.len() as u64,
                views,
            })
        }
        Err(e) => {
            log::error!("Failed to fetch collision records: {e}");
            HttpResponse::BadGateway().json(serde_json::json!({
                "error": "Failed to fetch collision records"
            }))
        }
    }
}
