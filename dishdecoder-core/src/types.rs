//! Core data types shared across the orchestration flow.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Placeholder shown when a recipe record has no source URL.
pub const URL_PLACEHOLDER: &str = "URL not available";

/// Placeholder shown when a recipe record has no image.
pub const IMAGE_PLACEHOLDER: &str = "Image not available";

/// Message shown when an ingredient search returns nothing.
pub const NO_INGREDIENT_MATCHES_MESSAGE: &str = "No recipes found. Try different ingredients.";

/// Message shown when a diet-filtered search returns nothing.
pub const NO_DIET_MATCHES_MESSAGE: &str = "No recipes found for the given preferences.";

/// A user-selected dietary constraint.
///
/// The variants cover the diets the recipe catalog understands. Each tag has
/// a display label (shown to the user and embedded in prompts) and a query
/// value (the catalog's spelling of the same diet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DietaryTag {
    Vegan,
    Vegetarian,
    GlutenFree,
    Keto,
    LowCarb,
    Paleo,
    Pescetarian,
    DairyFree,
}

impl DietaryTag {
    /// Label shown to the user, e.g. "Gluten-Free".
    pub fn label(&self) -> &'static str {
        match self {
            DietaryTag::Vegan => "Vegan",
            DietaryTag::Vegetarian => "Vegetarian",
            DietaryTag::GlutenFree => "Gluten-Free",
            DietaryTag::Keto => "Keto",
            DietaryTag::LowCarb => "Low-Carb",
            DietaryTag::Paleo => "Paleo",
            DietaryTag::Pescetarian => "Pescetarian",
            DietaryTag::DairyFree => "Dairy-Free",
        }
    }

    /// The catalog's spelling of this diet for query parameters.
    ///
    /// Low-carb has no catalog diet of its own; ketogenic is the closest
    /// filter the catalog offers. Dairy-free is likewise expressed as an
    /// intolerance upstream, but the catalog accepts it as a diet value.
    pub fn query_value(&self) -> &'static str {
        match self {
            DietaryTag::Vegan => "vegan",
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::GlutenFree => "gluten free",
            DietaryTag::Keto => "ketogenic",
            DietaryTag::LowCarb => "ketogenic",
            DietaryTag::Paleo => "paleo",
            DietaryTag::Pescetarian => "pescetarian",
            DietaryTag::DairyFree => "dairy free",
        }
    }

    /// All known tags, in display order.
    pub fn all() -> &'static [DietaryTag] {
        &[
            DietaryTag::Vegan,
            DietaryTag::Vegetarian,
            DietaryTag::GlutenFree,
            DietaryTag::Keto,
            DietaryTag::LowCarb,
            DietaryTag::Paleo,
            DietaryTag::Pescetarian,
            DietaryTag::DairyFree,
        ]
    }
}

impl fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DietaryTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "vegan" => Ok(DietaryTag::Vegan),
            "vegetarian" => Ok(DietaryTag::Vegetarian),
            "gluten free" => Ok(DietaryTag::GlutenFree),
            "keto" | "ketogenic" => Ok(DietaryTag::Keto),
            "low carb" => Ok(DietaryTag::LowCarb),
            "paleo" => Ok(DietaryTag::Paleo),
            "pescetarian" | "pescatarian" => Ok(DietaryTag::Pescetarian),
            "dairy free" => Ok(DietaryTag::DairyFree),
            other => Err(format!("Unknown dietary tag: {}", other)),
        }
    }
}

/// A set of selected dietary tags. `BTreeSet` gives set semantics and a
/// stable iteration order for prompt construction.
pub type DietaryTagSet = BTreeSet<DietaryTag>;

/// A single recipe result from the catalog.
///
/// The catalog omits fields freely depending on the endpoint, so everything
/// past the identifier and title is optional and deserialization is lenient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "sourceUrl")]
    pub source_url: Option<String>,
}

impl RecipeRecord {
    /// The source URL, or the placeholder when the catalog omitted it.
    pub fn source_url_or_placeholder(&self) -> &str {
        self.source_url.as_deref().unwrap_or(URL_PLACEHOLDER)
    }

    /// The image URL, or the placeholder when the catalog omitted it.
    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or(IMAGE_PLACEHOLDER)
    }
}

/// One step of a recipe's cooking instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionStep {
    pub number: u32,
    pub step: String,
}

/// Role in a chat conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
