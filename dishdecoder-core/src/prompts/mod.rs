//! Prompt templates for the preference interpreter.

pub mod analysis;
pub mod full_recipe;
pub mod name_list;

pub use analysis::render_analysis_prompt;
pub use full_recipe::render_full_recipe_prompt;
pub use name_list::render_name_list_prompt;

use crate::types::DietaryTagSet;

/// Phrase substituted when the user selected no dietary tags.
pub const NO_PREFERENCES_PHRASE: &str = "no specific dietary preferences";

/// Comma-joined tag labels, or the fallback phrase for the empty set.
pub fn joined_tags(tags: &DietaryTagSet) -> String {
    if tags.is_empty() {
        NO_PREFERENCES_PHRASE.to_string()
    } else {
        tags.iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
