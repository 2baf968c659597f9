pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod llm;
pub mod planner;
pub mod prompts;
pub mod resolver;
pub mod types;

pub use catalog::{CatalogClient, MockCatalog, SpoonacularClient};
pub use chat::{take_turn, Transcript};
pub use config::{CatalogConfig, LlmConfig};
pub use error::{CatalogError, ConfigError};
pub use interpreter::{
    analyze, chat_reply, generate_full_recipe, parse_candidate_names, suggest_candidate_names,
    PROCESSING_FAILURE,
};
pub use llm::{create_provider_from_env, FakeProvider, GeminiProvider, LlmError, LlmProvider};
pub use planner::{recipes_for_preferences, suggest_meals, MealPlan};
pub use resolver::{
    recipe_details, recipe_instructions, recipes_by_ingredients, recipes_for_diet,
    resolve_candidates, similar_recipes, ResolvedCandidate,
};
pub use types::{
    ChatMessage, DietaryTag, DietaryTagSet, InstructionStep, RecipeRecord, Role,
    IMAGE_PLACEHOLDER, NO_DIET_MATCHES_MESSAGE, NO_INGREDIENT_MATCHES_MESSAGE, URL_PLACEHOLDER,
};
