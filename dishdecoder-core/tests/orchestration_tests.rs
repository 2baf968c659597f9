//! End-to-end orchestration tests over the fake provider and mock catalog.

use dishdecoder_core::{
    suggest_meals, take_turn, DietaryTag, FakeProvider, MockCatalog, RecipeRecord,
    ResolvedCandidate, Transcript, PROCESSING_FAILURE, URL_PLACEHOLDER,
};
use std::collections::BTreeSet;

fn record(id: u64, title: &str, source_url: Option<&str>) -> RecipeRecord {
    RecipeRecord {
        id,
        title: title.to_string(),
        image: Some(format!("https://img/{}.jpg", id)),
        source_url: source_url.map(|s| s.to_string()),
    }
}

#[tokio::test]
async fn suggestion_flow_produces_analysis_and_one_line_per_candidate() {
    let mut provider = FakeProvider::new();
    provider.add_response(
        "Analyze this input",
        "You want vegetarian meals that are quick to cook.",
    );
    provider.add_response("recipe names", "Lentil Soup\nUnicorn Casserole\nShakshuka");

    let catalog = MockCatalog::new()
        .with_ingredient_results(
            &["lentil", "soup"],
            vec![record(1, "Red Lentil Soup", Some("https://recipes.example/1"))],
        )
        .with_ingredient_results(&["shakshuka"], vec![record(2, "Shakshuka", None)]);

    let tags: BTreeSet<DietaryTag> = [DietaryTag::Vegetarian].into_iter().collect();
    let plan = suggest_meals(&provider, &catalog, "quick dinners", &tags).await;

    assert_eq!(plan.analysis, "You want vegetarian meals that are quick to cook.");
    assert_eq!(plan.candidates.len(), 3);

    match &plan.candidates[0] {
        ResolvedCandidate::Found(r) => assert_eq!(r.title, "Red Lentil Soup"),
        other => panic!("expected a match, got {:?}", other),
    }
    assert_eq!(
        plan.candidates[1],
        ResolvedCandidate::NotFound {
            name: "Unicorn Casserole".to_string()
        }
    );
    // The matched record with no source URL still renders via placeholder.
    match &plan.candidates[2] {
        ResolvedCandidate::Found(r) => {
            assert_eq!(r.title, "Shakshuka");
            assert_eq!(r.source_url_or_placeholder(), URL_PLACEHOLDER);
        }
        other => panic!("expected a match, got {:?}", other),
    }
}

#[tokio::test]
async fn suggestion_flow_degrades_when_everything_fails() {
    let provider = FakeProvider::new(); // errors on every call
    let catalog = MockCatalog::failing();

    let tags = BTreeSet::new();
    let plan = suggest_meals(&provider, &catalog, "anything", &tags).await;

    assert_eq!(plan.analysis, PROCESSING_FAILURE);
    assert!(plan.candidates.is_empty());
}

#[tokio::test]
async fn chat_session_accumulates_and_resets() {
    let mut provider = FakeProvider::new();
    provider.add_response("breakfast", "How about shakshuka?");
    provider.add_response("something else", "Overnight oats, then.");

    let mut transcript = Transcript::default();

    let first = take_turn(&provider, &mut transcript, "high protein breakfast").await;
    assert_eq!(first, "How about shakshuka?");
    assert_eq!(transcript.len(), 3);

    let second = take_turn(&provider, &mut transcript, "something else please").await;
    assert_eq!(second, "Overnight oats, then.");
    assert_eq!(transcript.len(), 5);

    transcript.reset();
    assert_eq!(transcript.len(), 1);

    // A fresh exchange after reset starts the alternation over.
    let third = take_turn(&provider, &mut transcript, "breakfast again").await;
    assert_eq!(third, "How about shakshuka?");
    assert_eq!(transcript.len(), 3);
}
