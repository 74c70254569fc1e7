//! Socrata SODA client for the NYC Motor Vehicle Collisions dataset.
//!
//! Pages through the dataset with `$limit`/`$offset`/`$order`, pushing the
//! borough and crash-year filters down as a `$where` clause. Everything
//! else is filtered in memory after the fetch.

use async_trait::async_trait;
use crash_dash_collision_models::CollisionRecord;
use crash_dash_query::FilterSelection;

use crate::{CollisionSource, FetchOptions, SourceError};

/// NYC Motor Vehicle Collisions (Crashes) dataset.
const API_URL: &str = "https://data.cityofnewyork.us/resource/h9gi-nx95.json";

/// The dataset's crash date column, used for ordering and `$where`.
const DATE_COLUMN: &str = "crash_date";

/// NYC Open Data collision source.
pub struct SocrataSource {
    api_url: String,
    client: reqwest::Client,
}

impl SocrataSource {
    /// Creates a source against the production NYC dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::with_api_url(API_URL)
    }

    /// Creates a source against a custom endpoint (test servers, mirrors).
    #[must_use]
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for SocrataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CollisionSource for SocrataSource {
    fn id(&self) -> &str {
        "nyc_open_data"
    }

    fn name(&self) -> &str {
        "NYC Open Data Motor Vehicle Collisions"
    }

    async fn fetch(
        &self,
        selection: &FilterSelection,
        options: &FetchOptions,
    ) -> Result<Vec<CollisionRecord>, SourceError> {
        let where_clause = soql_where(selection);
        let mut records: Vec<CollisionRecord> = Vec::new();
        let mut offset: u64 = 0;

        loop {
            let remaining = options.limit.saturating_sub(offset);
            if remaining == 0 {
                break;
            }
            let page_limit = remaining.min(options.page_size);

            let mut request = self.client.get(&self.api_url).query(&[
                ("$limit", page_limit.to_string()),
                ("$offset", offset.to_string()),
                ("$order", format!("{DATE_COLUMN} DESC")),
            ]);
            if let Some(clause) = &where_clause {
                request = request.query(&[("$where", clause)]);
            }

            log::info!("Fetching collisions: offset={offset}, limit={page_limit}");
            let page: Vec<CollisionRecord> = request.send().await?.json().await?;

            let count = page.len() as u64;
            if count == 0 {
                break;
            }
            records.extend(page);
            offset += count;

            if count < page_limit {
                break;
            }
        }

        log::info!("Downloaded {} collision records total", records.len());
        Ok(records)
    }
}

/// Builds the `$where` clause for the pushdown-eligible filters, or `None`
/// when nothing can be pushed down.
fn soql_where(selection: &FilterSelection) -> Option<String> {
    let mut clauses = Vec::new();

    if let Some(borough) = &selection.borough {
        // Borough values are stored upper-case; single quotes double per SoQL.
        let escaped = borough.to_uppercase().replace('\'', "''");
        clauses.push(format!("borough = '{escaped}'"));
    }

    if let Some(year) = selection.year {
        clauses.push(format!(
            "{DATE_COLUMN} between '{year}-01-01T00:00:00' and '{year}-12-31T23:59:59'"
        ));
    }

    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" AND "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pushdown_for_empty_selection() {
        assert_eq!(soql_where(&FilterSelection::default()), None);
    }

    #[test]
    fn borough_is_uppercased_and_escaped() {
        let selection = FilterSelection {
            borough: Some("Staten Island".to_string()),
            ..FilterSelection::default()
        };
        assert_eq!(
            soql_where(&selection).unwrap(),
            "borough = 'STATEN ISLAND'"
        );

        let quoted = FilterSelection {
            borough: Some("O'Hara".to_string()),
            ..FilterSelection::default()
        };
        assert_eq!(soql_where(&quoted).unwrap(), "borough = 'O''HARA'");
    }

    #[test]
    fn year_becomes_a_date_range() {
        let selection = FilterSelection {
            year: Some(2022),
            ..FilterSelection::default()
        };
        assert_eq!(
            soql_where(&selection).unwrap(),
            "crash_date between '2022-01-01T00:00:00' and '2022-12-31T23:59:59'"
        );
    }

    #[test]
    fn clauses_join_conjunctively() {
        let selection = FilterSelection {
            borough: Some("Queens".to_string()),
            year: Some(2021),
            ..FilterSelection::default()
        };
        assert_eq!(
            soql_where(&selection).unwrap(),
            "borough = 'QUEENS' AND crash_date between '2021-01-01T00:00:00' and '2021-12-31T23:59:59'"
        );
    }
}
