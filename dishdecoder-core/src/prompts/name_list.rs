//! Name-list prompt: ask for candidate recipe names, one per line.

use super::joined_tags;
use crate::types::DietaryTagSet;

/// Render the name-list prompt with the dietary tags and free text.
pub fn render_name_list_prompt(free_text: &str, tags: &DietaryTagSet) -> String {
    format!(
        "Suggest 5 recipe names for someone with these dietary preferences: {tags}.\n\
         Their request: {free_text}\n\
         Respond with only the recipe names, one per line, no numbering and no other text.",
        tags = joined_tags(tags),
        free_text = free_text
    )
}
