//! Admin Catalog Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{CategorySummary, Recipe, DEFAULT_CATEGORY};

/// What the admin pages list, re-fetched after every change
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Recipes in the admin list (all, or the current filter's matches)
    pub recipes: Vec<Recipe>,
    /// Categories with counts, default category last
    pub categories: Vec<CategorySummary>,
}

impl CatalogState {
    /// Values offered by the category select. The default category is
    /// always present, even before any recipe uses it.
    pub fn category_options(&self) -> Vec<String> {
        let mut options: Vec<String> = self
            .categories
            .iter()
            .filter(|c| !c.is_default())
            .map(|c| c.category.clone())
            .collect();
        options.push(DEFAULT_CATEGORY.to_string());
        options
    }
}

pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_end_with_default() {
        let state = CatalogState {
            recipes: vec![],
            categories: vec![
                CategorySummary { category: "Супи".into(), count: 2 },
                CategorySummary { category: DEFAULT_CATEGORY.into(), count: 1 },
                CategorySummary { category: "Десерти".into(), count: 4 },
            ],
        };
        assert_eq!(
            state.category_options(),
            vec!["Супи".to_string(), "Десерти".to_string(), DEFAULT_CATEGORY.to_string()]
        );
        assert_eq!(CatalogState::default().category_options(), vec![DEFAULT_CATEGORY.to_string()]);
    }
}
