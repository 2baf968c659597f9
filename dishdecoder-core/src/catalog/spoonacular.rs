//! Spoonacular recipe catalog client.
//!
//! Thin GET wrapper over three read-only endpoints: ingredient search,
//! filtered complex search, and by-identifier information lookup. No
//! retries, no pagination, no caching.

use async_trait::async_trait;
use serde::Deserialize;

use super::CatalogClient;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::types::{DietaryTagSet, InstructionStep, RecipeRecord};

/// Spoonacular API client.
pub struct SpoonacularClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl SpoonacularClient {
    /// Create a new client from a loaded configuration.
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            api_key: config.api_key,
            base_url: config.base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self, crate::error::ConfigError> {
        Ok(Self::new(CatalogConfig::from_env()?))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Issue a GET request and return the body, mapping non-2xx to ApiError.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, CatalogError> {
        let response = self
            .client
            .get(self.url(path))
            .query(&[("apiKey", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            return Err(CatalogError::ApiError {
                status,
                message: body,
            });
        }

        Ok(body)
    }
}

/// Response envelope for the complex search endpoint.
#[derive(Debug, Deserialize)]
struct ComplexSearchResponse {
    #[serde(default)]
    results: Vec<RecipeRecord>,
}

/// One block of analyzed instructions. A recipe may carry several blocks
/// (e.g. one per component); the first block is the main instruction list.
#[derive(Debug, Deserialize)]
struct AnalyzedInstructions {
    #[serde(default)]
    steps: Vec<InstructionStep>,
}

#[async_trait]
impl CatalogClient for SpoonacularClient {
    async fn by_ingredients(
        &self,
        ingredients: &[String],
        count: u32,
    ) -> Result<Vec<RecipeRecord>, CatalogError> {
        let query = [
            ("ingredients", ingredients.join(",")),
            ("number", count.to_string()),
        ];

        tracing::debug!(ingredients = %query[0].1, count, "catalog: findByIngredients");
        let body = self.get("/recipes/findByIngredients", &query).await?;

        // This endpoint returns a bare array, not an envelope.
        serde_json::from_str(&body).map_err(|e| CatalogError::ParseError(e.to_string()))
    }

    async fn by_diet(
        &self,
        diets: &DietaryTagSet,
        intolerances: &[String],
        count: u32,
    ) -> Result<Vec<RecipeRecord>, CatalogError> {
        let diet_param = diets
            .iter()
            .map(|t| t.query_value())
            .collect::<Vec<_>>()
            .join(",");

        let mut query = vec![
            ("diet", diet_param),
            ("number", count.to_string()),
            // Pull sourceUrl and image into the search results directly.
            ("addRecipeInformation", "true".to_string()),
        ];
        if !intolerances.is_empty() {
            query.push(("intolerances", intolerances.join(",")));
        }

        tracing::debug!(diet = %query[0].1, count, "catalog: complexSearch");
        let body = self.get("/recipes/complexSearch", &query).await?;

        let response: ComplexSearchResponse =
            serde_json::from_str(&body).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        Ok(response.results)
    }

    async fn by_id(&self, id: u64) -> Result<Option<RecipeRecord>, CatalogError> {
        let path = format!("/recipes/{}/information", id);

        tracing::debug!(id, "catalog: information lookup");
        let result = self.get(&path, &[]).await;

        match result {
            Ok(body) => {
                let record: RecipeRecord = serde_json::from_str(&body)
                    .map_err(|e| CatalogError::ParseError(e.to_string()))?;
                Ok(Some(record))
            }
            Err(CatalogError::ApiError { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn instructions(&self, id: u64) -> Result<Vec<InstructionStep>, CatalogError> {
        let path = format!("/recipes/{}/analyzedInstructions", id);

        tracing::debug!(id, "catalog: analyzedInstructions lookup");
        let body = self.get(&path, &[]).await?;

        let blocks: Vec<AnalyzedInstructions> =
            serde_json::from_str(&body).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        Ok(blocks.into_iter().next().map(|b| b.steps).unwrap_or_default())
    }

    async fn similar(&self, id: u64, count: u32) -> Result<Vec<RecipeRecord>, CatalogError> {
        let path = format!("/recipes/{}/similar", id);
        let query = [("number", count.to_string())];

        tracing::debug!(id, count, "catalog: similar lookup");
        let body = self.get(&path, &query).await?;

        // Bare array; similar results carry no image and often no sourceUrl,
        // which the lenient record type absorbs.
        serde_json::from_str(&body).map_err(|e| CatalogError::ParseError(e.to_string()))
    }
}
