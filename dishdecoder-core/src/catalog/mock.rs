//! Mock catalog client for testing.

use async_trait::async_trait;
use std::collections::HashMap;

use super::CatalogClient;
use crate::error::CatalogError;
use crate::types::{DietaryTagSet, InstructionStep, RecipeRecord};

/// Mock catalog for testing.
///
/// Ingredient searches are keyed by the comma-joined, lowercased ingredient
/// list; unkeyed searches fall back to an empty result. Diet searches return
/// one canned list. When `fail_everything` is set, every operation reports a
/// transport-style error.
#[derive(Default)]
pub struct MockCatalog {
    ingredient_results: HashMap<String, Vec<RecipeRecord>>,
    diet_results: Vec<RecipeRecord>,
    records_by_id: HashMap<u64, RecipeRecord>,
    instructions_by_id: HashMap<u64, Vec<InstructionStep>>,
    similar_by_id: HashMap<u64, Vec<RecipeRecord>>,
    fail_everything: bool,
}

impl MockCatalog {
    /// Create a new empty mock catalog. All searches return empty results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock catalog where every operation fails.
    pub fn failing() -> Self {
        Self {
            fail_everything: true,
            ..Self::default()
        }
    }

    /// Register results for an ingredient search.
    pub fn with_ingredient_results(
        mut self,
        ingredients: &[&str],
        records: Vec<RecipeRecord>,
    ) -> Self {
        self.ingredient_results
            .insert(Self::ingredient_key_of(ingredients), records);
        self
    }

    /// Register the canned diet-search results.
    pub fn with_diet_results(mut self, records: Vec<RecipeRecord>) -> Self {
        self.diet_results = records;
        self
    }

    /// Register a record for by-id lookup.
    pub fn with_recipe(mut self, record: RecipeRecord) -> Self {
        self.records_by_id.insert(record.id, record);
        self
    }

    /// Register cooking instructions for a recipe id.
    pub fn with_instructions(mut self, id: u64, steps: Vec<InstructionStep>) -> Self {
        self.instructions_by_id.insert(id, steps);
        self
    }

    /// Register similar-recipe results for a recipe id.
    pub fn with_similar(mut self, id: u64, records: Vec<RecipeRecord>) -> Self {
        self.similar_by_id.insert(id, records);
        self
    }

    fn ingredient_key_of(ingredients: &[&str]) -> String {
        ingredients
            .iter()
            .map(|i| i.to_lowercase())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn ingredient_key(ingredients: &[String]) -> String {
        ingredients
            .iter()
            .map(|i| i.to_lowercase())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn check_failure(&self) -> Result<(), CatalogError> {
        if self.fail_everything {
            Err(CatalogError::InvalidUrl(
                "MockCatalog: configured to fail".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogClient for MockCatalog {
    async fn by_ingredients(
        &self,
        ingredients: &[String],
        count: u32,
    ) -> Result<Vec<RecipeRecord>, CatalogError> {
        self.check_failure()?;
        let mut records = self
            .ingredient_results
            .get(&Self::ingredient_key(ingredients))
            .cloned()
            .unwrap_or_default();
        records.truncate(count as usize);
        Ok(records)
    }

    async fn by_diet(
        &self,
        _diets: &DietaryTagSet,
        _intolerances: &[String],
        count: u32,
    ) -> Result<Vec<RecipeRecord>, CatalogError> {
        self.check_failure()?;
        let mut records = self.diet_results.clone();
        records.truncate(count as usize);
        Ok(records)
    }

    async fn by_id(&self, id: u64) -> Result<Option<RecipeRecord>, CatalogError> {
        self.check_failure()?;
        Ok(self.records_by_id.get(&id).cloned())
    }

    async fn instructions(&self, id: u64) -> Result<Vec<InstructionStep>, CatalogError> {
        self.check_failure()?;
        Ok(self.instructions_by_id.get(&id).cloned().unwrap_or_default())
    }

    async fn similar(&self, id: u64, count: u32) -> Result<Vec<RecipeRecord>, CatalogError> {
        self.check_failure()?;
        let mut records = self.similar_by_id.get(&id).cloned().unwrap_or_default();
        records.truncate(count as usize);
        Ok(records)
    }
}
