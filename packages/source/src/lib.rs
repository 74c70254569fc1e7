#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Record-fetch collaborator.
//!
//! [`CollisionSource`] is the one external contract the aggregation core
//! depends on: given a filter selection, return the matching collision
//! records. The production implementation pages through the NYC Open Data
//! Socrata API with borough/year pushed down as a `$where` clause; the
//! remaining filters are applied in memory by the query crate.

pub mod socrata;

use async_trait::async_trait;
use crash_dash_collision_models::CollisionRecord;
use crash_dash_query::FilterSelection;

pub use socrata::SocrataSource;

/// Errors that can occur while fetching records.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for one fetch pass.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Maximum number of records to fetch across all pages.
    pub limit: u64,
    /// Page size for `$limit`/`$offset` pagination.
    pub page_size: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            limit: 100_000,
            page_size: 50_000,
        }
    }
}

/// A provider of collision records.
///
/// The caller owns failure handling: on error it surfaces a failure state
/// and hands the aggregation core an empty record set. The core never
/// distinguishes "no results" from "fetch failed".
#[async_trait]
pub trait CollisionSource: Send + Sync {
    /// Unique identifier for this source (e.g., `"nyc_open_data"`).
    fn id(&self) -> &str;

    /// Human-readable source name.
    fn name(&self) -> &str;

    /// Fetches records matching the pushdown-eligible parts of
    /// `selection`, up to `options.limit`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the transport fails or the response is
    /// not decodable.
    async fn fetch(
        &self,
        selection: &FilterSelection,
        options: &FetchOptions,
    ) -> Result<Vec<CollisionRecord>, SourceError>;
}
