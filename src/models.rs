//! Frontend Models
//!
//! Data structures matching the backend's JSON payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Category assigned when none is given, and where recipes of a deleted
/// category end up. Must match the backend's value.
pub const DEFAULT_CATEGORY: &str = "Други";

/// Select option value meaning "type a new category"
pub const NEW_CATEGORY_OPTION: &str = "__new__";

/// Recipe record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    #[serde(default = "default_category", deserialize_with = "category_or_default")]
    pub category: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Category with its recipe count, as listed by `/api/categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub count: u32,
}

impl CategorySummary {
    pub fn is_default(&self) -> bool {
        self.category == DEFAULT_CATEGORY
    }
}

/// Body for recipe create/update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeInput {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Body for category rename
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenameCategoryBody<'a> {
    pub new_name: &'a str,
}

/// Error payload returned with non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn category_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(default_category))
}

#[cfg(test)]
pub(crate) fn make_recipe(id: u32, name: &str, category: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        ingredients: format!("ingredients of {}", name),
        instructions: format!("cook {}", name),
        category: category.to_string(),
        created_at: None,
    }
}
