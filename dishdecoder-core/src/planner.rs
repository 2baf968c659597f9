//! One-shot meal-planning flow: interpret preferences, then reconcile the
//! generated candidates against the catalog.

use crate::catalog::CatalogClient;
use crate::interpreter::{analyze, suggest_candidate_names};
use crate::llm::LlmProvider;
use crate::resolver::{recipes_for_diet, resolve_candidates, ResolvedCandidate};
use crate::types::{DietaryTagSet, RecipeRecord};

/// Result of the one-shot suggestion flow.
#[derive(Debug)]
pub struct MealPlan {
    /// Natural-language analysis of the user's input.
    pub analysis: String,
    /// One entry per generated candidate name, in generation order.
    pub candidates: Vec<ResolvedCandidate>,
}

/// Run the full suggestion flow for one user interaction.
///
/// One interpreter call for the analysis, one for the candidate names, then
/// one sequential catalog lookup per candidate. Every stage degrades rather
/// than fails, so the returned plan is always displayable.
pub async fn suggest_meals(
    provider: &dyn LlmProvider,
    catalog: &dyn CatalogClient,
    free_text: &str,
    tags: &DietaryTagSet,
) -> MealPlan {
    let analysis = analyze(provider, free_text).await;
    let names = suggest_candidate_names(provider, free_text, tags).await;
    let candidates = resolve_candidates(catalog, &names).await;

    MealPlan {
        analysis,
        candidates,
    }
}

/// Diet-filtered catalog search, independent of any free-text input.
///
/// Diet tags and free-text ingredient search are deliberately separate
/// modes; they are never combined into one query.
pub async fn recipes_for_preferences(
    catalog: &dyn CatalogClient,
    tags: &DietaryTagSet,
    intolerances: &[String],
    count: u32,
) -> Vec<RecipeRecord> {
    recipes_for_diet(catalog, tags, intolerances, count).await
}
