//! Meal Catalog Loader
//!
//! Fetches the remote meal template CSV and reshapes it into a
//! [`MealCatalog`]. One GET per invocation, no caching, no retry: a
//! failed attempt is final for that render pass.
//!
//! The loader never returns an error. Every failure mode - network,
//! non-success HTTP status, malformed CSV, missing columns - collapses to
//! an empty catalog plus a diagnostic message for the warning banner.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{CatalogError, MealCatalog};

/// Canonical location of the meal template CSV
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/fitplan-data/meal-templates/main/meals.csv";

/// One row of the catalog CSV; extra columns are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRow {
    pub goal_type: String,
    pub meal_type: String,
    pub meal_name: String,
}

const REQUIRED_COLUMNS: [&str; 3] = ["goal_type", "meal_type", "meal_name"];

/// Result of one load attempt: the catalog that the render pass will use,
/// and the diagnostic to surface when the fallback kicked in
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub catalog: MealCatalog,
    pub warning: Option<String>,
}

/// HTTP loader for the meal catalog
pub struct CatalogLoader {
    client: Client,
    url: String,
}

impl CatalogLoader {
    /// Create a loader for the given CSV URL
    pub fn new(url: impl Into<String>, timeout_ms: u64) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// The URL this loader fetches from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Load the catalog, substituting an empty one on any failure
    pub async fn load(&self) -> LoadOutcome {
        match self.fetch().await {
            Ok(catalog) => {
                tracing::debug!(goals = catalog.goal_count(), "Meal catalog loaded");
                LoadOutcome {
                    catalog,
                    warning: None,
                }
            }
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "Meal catalog load failed");
                LoadOutcome {
                    catalog: MealCatalog::new(),
                    warning: Some(format!("Could not load meal data: {}", e)),
                }
            }
        }
    }

    /// Fetch and parse the catalog, reporting what went wrong
    async fn fetch(&self) -> Result<MealCatalog, CatalogError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body = response.text().await?;
        parse_catalog(&body)
    }
}

/// Parse a headered CSV body into a catalog
///
/// Required columns: `goal_type`, `meal_type`, `meal_name`. Row order is
/// preserved so that first-occurrence grouping stays deterministic.
pub fn parse_catalog(body: &str) -> Result<MealCatalog, CatalogError> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CatalogError::MissingColumn(column));
        }
    }

    let rows = reader
        .deserialize::<CatalogRow>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MealCatalog::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario_csv() {
        let body = "goal_type,meal_type,meal_name
Weight Loss,Breakfast,Oatmeal
Weight Loss,Lunch,Salad
Muscle Gain,Breakfast,Eggs";

        let catalog = parse_catalog(body).unwrap();

        assert_eq!(catalog.goal_count(), 2);
        assert_eq!(catalog.meal("Weight Loss", "Breakfast"), Some("Oatmeal"));
        assert_eq!(catalog.meal("Weight Loss", "Lunch"), Some("Salad"));
        assert_eq!(catalog.meal("Muscle Gain", "Breakfast"), Some("Eggs"));
        assert!(catalog.meal("Muscle Gain", "Lunch").is_none());
    }

    #[test]
    fn test_parse_ignores_extra_columns() {
        let body = "goal_type,calories,meal_type,meal_name
Weight Loss,350,Breakfast,Oatmeal";

        let catalog = parse_catalog(body).unwrap();
        assert_eq!(catalog.meal("Weight Loss", "Breakfast"), Some("Oatmeal"));
    }

    #[test]
    fn test_parse_missing_column() {
        let body = "goal_type,meal_type
Weight Loss,Breakfast";

        let err = parse_catalog(body).unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn("meal_name")));
    }

    #[test]
    fn test_parse_header_only_is_empty_catalog() {
        let catalog = parse_catalog("goal_type,meal_type,meal_name\n").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_parse_ragged_row_is_error() {
        let body = "goal_type,meal_type,meal_name
Weight Loss,Breakfast";

        assert!(parse_catalog(body).is_err());
    }

    #[tokio::test]
    async fn test_load_failure_yields_empty_catalog_and_warning() {
        // Nothing listens on port 1; the connection is refused immediately.
        let loader = CatalogLoader::new("http://127.0.0.1:1/meals.csv", 1000).unwrap();

        let outcome = loader.load().await;

        assert!(outcome.catalog.is_empty());
        let warning = outcome.warning.expect("warning expected on failure");
        assert!(warning.starts_with("Could not load meal data"));
    }
}
