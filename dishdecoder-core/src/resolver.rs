//! Recipe resolver: catalog lookups with a degrade-to-empty policy, plus
//! the name-to-recipe reconciliation.
//!
//! Catalog failures are never surfaced as errors here. Every failure is
//! logged once and converted to an empty result (or `None` for single-record
//! lookups), so the caller always has something displayable.

use crate::catalog::CatalogClient;
use crate::types::{DietaryTagSet, InstructionStep, RecipeRecord};

/// Outcome of reconciling one candidate recipe name against the catalog.
///
/// "Not found" is an expected outcome, not an error: the generative model's
/// names rarely match catalog entries exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedCandidate {
    /// The first catalog hit for the candidate's tokens.
    Found(RecipeRecord),
    /// No catalog hit; the original name is kept for display.
    NotFound { name: String },
}

/// Search recipes by ingredient names. Failures degrade to an empty list.
pub async fn recipes_by_ingredients(
    catalog: &dyn CatalogClient,
    ingredients: &[String],
    count: u32,
) -> Vec<RecipeRecord> {
    match catalog.by_ingredients(ingredients, count).await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "ingredient search failed");
            Vec::new()
        }
    }
}

/// Diet-filtered search. Failures degrade to an empty list.
pub async fn recipes_for_diet(
    catalog: &dyn CatalogClient,
    tags: &DietaryTagSet,
    intolerances: &[String],
    count: u32,
) -> Vec<RecipeRecord> {
    match catalog.by_diet(tags, intolerances, count).await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "diet search failed");
            Vec::new()
        }
    }
}

/// Direct lookup for detail enrichment. Failures degrade to `None`.
pub async fn recipe_details(catalog: &dyn CatalogClient, id: u64) -> Option<RecipeRecord> {
    match catalog.by_id(id).await {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(error = %e, id, "recipe lookup failed");
            None
        }
    }
}

/// Cooking instructions for a recipe. Failures degrade to an empty list.
pub async fn recipe_instructions(catalog: &dyn CatalogClient, id: u64) -> Vec<InstructionStep> {
    match catalog.instructions(id).await {
        Ok(steps) => steps,
        Err(e) => {
            tracing::warn!(error = %e, id, "instructions lookup failed");
            Vec::new()
        }
    }
}

/// Recipes similar to the given one. Failures degrade to an empty list.
pub async fn similar_recipes(
    catalog: &dyn CatalogClient,
    id: u64,
    count: u32,
) -> Vec<RecipeRecord> {
    match catalog.similar(id, count).await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, id, "similar-recipe lookup failed");
            Vec::new()
        }
    }
}

/// Reconcile generated candidate names against the catalog.
///
/// Best-effort and positional: each name is independently tokenized on
/// whitespace, the tokens are treated as ingredient-search terms, and the
/// first hit (if any) is taken as the match. No ranking or scoring across
/// candidates. Every candidate produces exactly one output entry, in input
/// order; zero-hit candidates are reported, never dropped. Lookups run
/// sequentially, one per candidate.
pub async fn resolve_candidates(
    catalog: &dyn CatalogClient,
    names: &[String],
) -> Vec<ResolvedCandidate> {
    let mut resolved = Vec::with_capacity(names.len());

    for name in names {
        let tokens: Vec<String> = name
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();

        let hit = recipes_by_ingredients(catalog, &tokens, 1)
            .await
            .into_iter()
            .next();

        resolved.push(match hit {
            Some(record) => ResolvedCandidate::Found(record),
            None => ResolvedCandidate::NotFound { name: name.clone() },
        });
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalog;

    fn record(id: u64, title: &str) -> RecipeRecord {
        RecipeRecord {
            id,
            title: title.to_string(),
            image: Some(format!("https://img/{}.jpg", id)),
            source_url: Some(format!("https://recipes.example/{}", id)),
        }
    }

    #[tokio::test]
    async fn test_zero_matches_degrades_to_empty() {
        let catalog = MockCatalog::new();
        let ingredients = vec!["egg".to_string(), "spinach".to_string()];
        let results = recipes_by_ingredients(&catalog, &ingredients, 5).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_degrades_to_empty() {
        let catalog = MockCatalog::failing();
        let ingredients = vec!["egg".to_string()];
        assert!(recipes_by_ingredients(&catalog, &ingredients, 5)
            .await
            .is_empty());
        assert!(
            recipes_for_diet(&catalog, &DietaryTagSet::new(), &[], 5)
                .await
                .is_empty()
        );
        assert!(recipe_details(&catalog, 1).await.is_none());
        assert!(recipe_instructions(&catalog, 1).await.is_empty());
        assert!(similar_recipes(&catalog, 1, 3).await.is_empty());
    }

    #[tokio::test]
    async fn test_detail_enrichment_with_instructions_and_similar() {
        let steps = vec![
            InstructionStep {
                number: 1,
                step: "Crack the eggs into the sauce.".to_string(),
            },
            InstructionStep {
                number: 2,
                step: "Simmer until just set.".to_string(),
            },
        ];
        let catalog = MockCatalog::new()
            .with_recipe(record(9, "Shakshuka"))
            .with_instructions(9, steps.clone())
            .with_similar(9, vec![record(10, "Menemen"), record(11, "Huevos Rancheros")]);

        assert_eq!(recipe_instructions(&catalog, 9).await, steps);

        let similar = similar_recipes(&catalog, 9, 1).await;
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].title, "Menemen");
    }

    #[tokio::test]
    async fn test_instructions_empty_when_unknown_recipe() {
        let catalog = MockCatalog::new();
        assert!(recipe_instructions(&catalog, 404).await.is_empty());
    }

    #[tokio::test]
    async fn test_reconciliation_one_entry_per_candidate_in_order() {
        let catalog = MockCatalog::new()
            .with_ingredient_results(&["lentil", "soup"], vec![record(1, "Red Lentil Soup")])
            .with_ingredient_results(&["dal"], vec![record(2, "Tarka Dal")]);

        let names = vec![
            "Lentil Soup".to_string(),
            "Unicorn Casserole".to_string(),
            "Dal".to_string(),
        ];
        let resolved = resolve_candidates(&catalog, &names).await;

        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0], ResolvedCandidate::Found(record(1, "Red Lentil Soup")));
        assert_eq!(
            resolved[1],
            ResolvedCandidate::NotFound {
                name: "Unicorn Casserole".to_string()
            }
        );
        assert_eq!(resolved[2], ResolvedCandidate::Found(record(2, "Tarka Dal")));
    }

    #[tokio::test]
    async fn test_reconciliation_takes_first_hit_only() {
        let catalog = MockCatalog::new().with_ingredient_results(
            &["dal"],
            vec![record(2, "Tarka Dal"), record(3, "Dal Makhani")],
        );

        let resolved = resolve_candidates(&catalog, &["Dal".to_string()]).await;
        assert_eq!(resolved, vec![ResolvedCandidate::Found(record(2, "Tarka Dal"))]);
    }

    #[tokio::test]
    async fn test_reconciliation_reports_not_found_on_failure() {
        let catalog = MockCatalog::failing();
        let resolved = resolve_candidates(&catalog, &["Dal".to_string()]).await;
        assert_eq!(
            resolved,
            vec![ResolvedCandidate::NotFound {
                name: "Dal".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_by_id_idempotent_shape() {
        let catalog = MockCatalog::new().with_recipe(RecipeRecord {
            id: 9,
            title: "Shakshuka".to_string(),
            image: None,
            source_url: Some("https://recipes.example/9".to_string()),
        });

        let first = recipe_details(&catalog, 9).await.unwrap();
        let second = recipe_details(&catalog, 9).await.unwrap();
        assert_eq!(first, second);
        assert!(first.image.is_none());
        assert!(first.source_url.is_some());
    }
}
