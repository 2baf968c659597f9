//! Analysis prompt: infer meal preferences from free text.

/// Render the analysis prompt for the given free-text input.
pub fn render_analysis_prompt(free_text: &str) -> String {
    format!("Analyze this input for meal preferences: {}", free_text)
}
