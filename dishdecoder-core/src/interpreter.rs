//! Preference interpreter: turns free text plus dietary tags into an
//! analysis, a candidate-name list, a full generated recipe, or the next
//! chat reply.
//!
//! Every mode recovers locally from provider failures. A failed generation
//! call degrades to a fixed failure string (or an empty list for the
//! name-list mode) and is logged once; it never propagates to the caller.

use crate::chat::Transcript;
use crate::llm::LlmProvider;
use crate::prompts::{render_analysis_prompt, render_full_recipe_prompt, render_name_list_prompt};
use crate::types::DietaryTagSet;

/// Reply surfaced when the generative service fails.
pub const PROCESSING_FAILURE: &str = "Could not process input.";

/// Analyze free-text input for meal preferences.
pub async fn analyze(provider: &dyn LlmProvider, free_text: &str) -> String {
    let prompt = render_analysis_prompt(free_text);
    match provider.complete(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "analysis generation failed");
            PROCESSING_FAILURE.to_string()
        }
    }
}

/// Suggest candidate recipe names for the given preferences.
///
/// The names are free text from the generative service with no guaranteed
/// existence in the catalog; resolution against the catalog is the
/// resolver's job. A failed call degrades to an empty list.
pub async fn suggest_candidate_names(
    provider: &dyn LlmProvider,
    free_text: &str,
    tags: &DietaryTagSet,
) -> Vec<String> {
    let prompt = render_name_list_prompt(free_text, tags);
    match provider.complete(&prompt).await {
        Ok(text) => parse_candidate_names(&text),
        Err(e) => {
            tracing::warn!(error = %e, "name-list generation failed");
            Vec::new()
        }
    }
}

/// Generate a complete recipe (ingredients plus instructions) in one block.
pub async fn generate_full_recipe(
    provider: &dyn LlmProvider,
    free_text: &str,
    tags: &DietaryTagSet,
) -> String {
    let prompt = render_full_recipe_prompt(free_text, tags);
    match provider.complete(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "recipe generation failed");
            PROCESSING_FAILURE.to_string()
        }
    }
}

/// Produce the next assistant reply for a running conversation.
///
/// The whole transcript is replayed as context; this function does not
/// mutate the transcript (see [`crate::chat::take_turn`] for the appending
/// composition).
pub async fn chat_reply(provider: &dyn LlmProvider, transcript: &Transcript) -> String {
    match provider.chat(transcript.messages()).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "chat generation failed");
            PROCESSING_FAILURE.to_string()
        }
    }
}

/// Parse candidate recipe names out of generated text.
///
/// The generated list format is not reliable: some models emit one name per
/// line, some a comma-separated line, some add numbering or bullets. The
/// parser splits on newlines first; if that yields a single entry it
/// re-splits on commas. List markers and whitespace are stripped and blank
/// entries discarded. Text with neither delimiter becomes one candidate;
/// blank text becomes an empty list.
pub fn parse_candidate_names(text: &str) -> Vec<String> {
    let lines: Vec<String> = text
        .lines()
        .filter_map(clean_candidate)
        .collect();

    if lines.len() > 1 {
        return lines;
    }

    if let Some(single) = lines.first() {
        if single.contains(',') {
            return single.split(',').filter_map(clean_candidate).collect();
        }
    }

    lines
}

/// Strip list markers and whitespace; None for blank entries.
fn clean_candidate(raw: &str) -> Option<String> {
    let mut s = raw.trim();

    // Drop leading bullets ("- ", "* ") and numbering ("1.", "12)").
    // Digits count as a list marker only when followed by "." or ")";
    // names like "7 Layer Dip" keep their leading number.
    s = s.trim_start_matches(['-', '*', '•']).trim_start();
    let without_number = s.trim_start_matches(|c: char| c.is_ascii_digit());
    if without_number.len() < s.len() && without_number.starts_with(['.', ')']) {
        s = without_number[1..].trim_start();
    }

    let cleaned = s.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;
    use crate::types::DietaryTag;

    #[test]
    fn test_parse_newline_list() {
        let names = parse_candidate_names("Lentil Soup\nShakshuka\nChana Masala");
        assert_eq!(names, vec!["Lentil Soup", "Shakshuka", "Chana Masala"]);
    }

    #[test]
    fn test_parse_comma_list() {
        let names = parse_candidate_names("Lentil Soup, Shakshuka, Chana Masala");
        assert_eq!(names, vec!["Lentil Soup", "Shakshuka", "Chana Masala"]);
    }

    #[test]
    fn test_parse_numbered_and_bulleted_list() {
        let names = parse_candidate_names("1. Lentil Soup\n2) Shakshuka\n- Chana Masala\n* Dal");
        assert_eq!(names, vec!["Lentil Soup", "Shakshuka", "Chana Masala", "Dal"]);
    }

    #[test]
    fn test_parse_keeps_names_starting_with_a_number() {
        let names = parse_candidate_names("7 Layer Dip\n5 Spice Chicken\nShakshuka");
        assert_eq!(names, vec!["7 Layer Dip", "5 Spice Chicken", "Shakshuka"]);
    }

    #[test]
    fn test_parse_numbered_marker_before_numeric_name() {
        let names = parse_candidate_names("1. 7 Layer Dip\n2) 5-Minute Oats");
        assert_eq!(names, vec!["7 Layer Dip", "5-Minute Oats"]);
    }

    #[test]
    fn test_parse_discards_blank_entries() {
        let names = parse_candidate_names("Lentil Soup\n\n   \nShakshuka\n");
        assert_eq!(names, vec!["Lentil Soup", "Shakshuka"]);
    }

    #[test]
    fn test_parse_delimiter_free_text_is_one_candidate() {
        let names = parse_candidate_names("Lentil Soup");
        assert_eq!(names, vec!["Lentil Soup"]);
    }

    #[test]
    fn test_parse_blank_text_is_empty() {
        assert!(parse_candidate_names("").is_empty());
        assert!(parse_candidate_names("   \n  ").is_empty());
    }

    #[test]
    fn test_parse_newlines_win_over_commas() {
        // Multi-line input keeps commas inside a line intact.
        let names = parse_candidate_names("Macaroni, Cheese Bake\nLentil Soup");
        assert_eq!(names, vec!["Macaroni, Cheese Bake", "Lentil Soup"]);
    }

    #[tokio::test]
    async fn test_analyze_degrades_to_failure_string() {
        let provider = FakeProvider::new(); // no responses, no default -> errors
        let result = analyze(&provider, "anything").await;
        assert_eq!(result, PROCESSING_FAILURE);
    }

    #[tokio::test]
    async fn test_suggest_names_degrades_to_empty() {
        let provider = FakeProvider::new();
        let tags = DietaryTagSet::new();
        let names = suggest_candidate_names(&provider, "anything", &tags).await;
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_suggest_names_parses_response() {
        let provider = FakeProvider::with_response("recipe names", "Dal\nShakshuka");
        let tags: DietaryTagSet = [DietaryTag::Vegetarian].into_iter().collect();
        let names = suggest_candidate_names(&provider, "dinner", &tags).await;
        assert_eq!(names, vec!["Dal", "Shakshuka"]);
    }

    #[tokio::test]
    async fn test_generate_full_recipe_passes_through_text() {
        let provider = FakeProvider::with_response("Create a recipe", "Ingredients:\n1 cup rice");
        let result = generate_full_recipe(&provider, "rice bowl", &DietaryTagSet::new()).await;
        assert!(result.contains("1 cup rice"));
    }
}
