//! Full-recipe prompt: generate a complete recipe in one block.

use super::joined_tags;
use crate::types::DietaryTagSet;

/// Render the full-recipe prompt with the dietary tags and free text.
pub fn render_full_recipe_prompt(free_text: &str, tags: &DietaryTagSet) -> String {
    format!(
        "Create a recipe for someone with {tags}.\n\
         Their request: {free_text}\n\
         Include an ingredient list and numbered step-by-step instructions.",
        tags = joined_tags(tags),
        free_text = free_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DietaryTag;

    #[test]
    fn test_render_prompt_substitutes_both_inputs() {
        let tags: DietaryTagSet = [DietaryTag::Keto, DietaryTag::DairyFree]
            .into_iter()
            .collect();
        let prompt = render_full_recipe_prompt("a hearty stew", &tags);
        assert!(prompt.contains("Keto"));
        assert!(prompt.contains("Dairy-Free"));
        assert!(prompt.contains("a hearty stew"));
    }

    #[test]
    fn test_render_prompt_empty_tag_set() {
        let prompt = render_full_recipe_prompt("high protein breakfast", &DietaryTagSet::new());
        assert!(prompt.contains("no specific dietary preferences"));
        assert!(prompt.contains("high protein breakfast"));
    }
}
