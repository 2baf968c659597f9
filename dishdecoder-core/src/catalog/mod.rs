//! Recipe catalog client trait and implementations.

mod mock;
mod spoonacular;

pub use mock::MockCatalog;
pub use spoonacular::SpoonacularClient;

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::types::{DietaryTagSet, InstructionStep, RecipeRecord};

/// Trait for recipe catalog clients, enabling mockability in tests.
///
/// All three lookups are independent and stateless read operations. Result
/// ordering is the catalog's own relevance ranking and is opaque here.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search recipes by ingredient names, returning up to `count` matches.
    async fn by_ingredients(
        &self,
        ingredients: &[String],
        count: u32,
    ) -> Result<Vec<RecipeRecord>, CatalogError>;

    /// Structured search by diet tags and optional intolerances.
    async fn by_diet(
        &self,
        diets: &DietaryTagSet,
        intolerances: &[String],
        count: u32,
    ) -> Result<Vec<RecipeRecord>, CatalogError>;

    /// Direct lookup of a single recipe for detail enrichment.
    /// Returns `None` when the catalog has no recipe with this id.
    async fn by_id(&self, id: u64) -> Result<Option<RecipeRecord>, CatalogError>;

    /// Step-by-step cooking instructions for a recipe. Empty when the
    /// catalog has no analyzed instructions for it.
    async fn instructions(&self, id: u64) -> Result<Vec<InstructionStep>, CatalogError>;

    /// Recipes similar to the given one, up to `count`.
    async fn similar(&self, id: u64, count: u32) -> Result<Vec<RecipeRecord>, CatalogError>;
}
